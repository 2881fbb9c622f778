use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::LeftParen);
        map.insert(')', TokenKind::RightParen);
        map.insert('{', TokenKind::LeftBrace);
        map.insert('}', TokenKind::RightBrace);
        map.insert(',', TokenKind::Comma);
        map.insert('.', TokenKind::Dot);
        map.insert('-', TokenKind::Minus);
        map.insert('+', TokenKind::Plus);
        map.insert(';', TokenKind::Semicolon);
        map.insert('*', TokenKind::Star);
        map
    };

    /// Operators that become a different kind when followed by `=`.
    /// Maps the leading character to `(alone, with_equal)`.
    pub static ref EQUAL_SUFFIX_LOOKUP: HashMap<char, (TokenKind, TokenKind)> = {
        let mut map = HashMap::new();
        map.insert('!', (TokenKind::Bang, TokenKind::BangEqual));
        map.insert('=', (TokenKind::Equal, TokenKind::EqualEqual));
        map.insert('<', (TokenKind::Less, TokenKind::LessEqual));
        map.insert('>', (TokenKind::Greater, TokenKind::GreaterEqual));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    String,
    Number,

    EOF,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::EOF => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Decoded value carried by literal tokens.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    None,
    Number(f64),
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::None => write!(f, "null"),
            // `{:?}` keeps the trailing `.0` on whole numbers
            Literal::Number(value) => write!(f, "{:?}", value),
            Literal::String(value) => write!(f, "{}", value),
        }
    }
}

/// A classified slice of source text.
///
/// Fields are crate-private so that the literal always agrees with the kind:
/// only `NUMBER` and `STRING` tokens carry a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) literal: Literal,
    pub(crate) line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
