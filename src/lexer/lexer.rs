use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorReporter},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, EQUAL_SUFFIX_LOOKUP, SINGLE_CHAR_LOOKUP};

/// Single-pass scanner over one source text.
///
/// `start` and `current` are byte offsets into `source` and always sit on
/// `char` boundaries.
pub struct Scanner<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: u32,
    start_line: u32,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            source,
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Drains the whole source into tokens, handing every lexical error to
    /// `reporter` and carrying on with the next character.
    pub fn scan_tokens<R: ErrorReporter + ?Sized>(mut self, reporter: &mut R) -> Vec<Token> {
        let mut errors = 0;

        while !self.at_eof() {
            self.start = self.current;
            self.start_line = self.line;

            if let Err(error) = self.scan_token() {
                debug!(line = error.get_line(), "{}", error.get_error_name());
                errors += 1;
                reporter.report(error);
            }
        }

        self.tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), self.line));
        debug!(tokens = self.tokens.len(), errors, lines = self.line, "scan finished");

        self.tokens
    }

    fn scan_token(&mut self) -> Result<(), Error> {
        let Some(c) = self.advance() else {
            return Ok(());
        };

        if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&c) {
            self.push(*kind);
            return Ok(());
        }

        if let Some((alone, with_equal)) = EQUAL_SUFFIX_LOOKUP.get(&c) {
            let kind = if self.matches('=') { *with_equal } else { *alone };
            self.push(kind);
            return Ok(());
        }

        match c {
            '/' => {
                if self.matches('/') {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.push(TokenKind::Slash);
                }
                Ok(())
            }
            ' ' | '\r' | '\t' => Ok(()),
            '\n' => {
                self.line += 1;
                Ok(())
            }
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c => Err(Error::new(ErrorImpl::UnexpectedCharacter { character: c }, self.line)),
        }
    }

    fn string(&mut self) -> Result<(), Error> {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            return Err(Error::new(ErrorImpl::UnterminatedString, self.line));
        }

        // closing quote
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.push_literal(TokenKind::String, Literal::String(value.to_string()));
        Ok(())
    }

    fn number(&mut self) -> Result<(), Error> {
        self.skip_digits();

        // A `.` only belongs to the number when a digit follows it
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.skip_digits();
        }

        let text = self.lexeme();
        let value = text.parse::<f64>().map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError { token: text.to_string() },
                self.start_line,
            )
        })?;

        self.push_literal(TokenKind::Number, Literal::Number(value));
        Ok(())
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn push(&mut self, kind: TokenKind) {
        self.push_literal(kind, Literal::None);
    }

    fn push_literal(&mut self, kind: TokenKind, literal: Literal) {
        let token = MK_TOKEN!(kind, self.lexeme().to_string(), self.start_line, literal);
        trace!(line = token.line, "{}", token);
        self.tokens.push(token);
    }
}

/// Scans `source` and collects every reported error alongside the tokens.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut errors = Vec::new();
    let tokens = Scanner::new(source).scan_tokens(&mut errors);

    (tokens, errors)
}
