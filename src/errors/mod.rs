//! Error types and error reporting for the scanner.
//!
//! This module defines the lexical errors the scanner can find. It includes:
//!
//! - Error structures carrying the offending line number
//! - Specific error variants for each lexical failure
//! - The reporter trait the scanner hands errors to
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
