//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorReporter, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 10);

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_line(), 10);
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, 3);

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_message(), "Unterminated string.");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1x".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_message(), "error parsing number: \"1x\"");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '#' }, 7);

    assert_eq!(error.to_string(), "[line 7] Error: Unexpected character.");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '\t' }, 1);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`\\t` does not start any token"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_vec_reporter_keeps_order() {
    let mut errors: Vec<Error> = vec![];

    errors.report(Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 1));
    errors.report(Error::new(ErrorImpl::UnterminatedString, 2));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_line(), 1);
    assert_eq!(errors[1].get_kind(), &ErrorImpl::UnterminatedString);
}
