//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance, pairing the kind with its literal
//!
//! Literal-less kinds get `Literal::None`, so only the number and string
//! paths of the scanner ever spell out a value.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$line` - The line the token starts on
/// * `$literal` - The decoded value (optional, defaults to `Literal::None`)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1, Literal::Number(42.0));
/// let token = MK_TOKEN!(TokenKind::Plus, "+".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr) => {
        $crate::MK_TOKEN!($kind, $lexeme, $line, $crate::lexer::tokens::Literal::None)
    };
    ($kind:expr, $lexeme:expr, $line:expr, $literal:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
        }
    };
}
