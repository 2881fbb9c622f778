//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens for parsing. It handles:
//!
//! - Single- and double-character operators with one character of lookahead
//! - Number and string literals, including multi-line strings
//! - Line tracking for error reporting
//! - Comments and whitespace handling
//! - Error recovery: bad input is reported and skipped, never fatal

pub mod lexer;
pub mod tokens;
