#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders `error` with the offending source line for display to a user.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnexpectedCharacter (`@` does not start any token)
        -> script.lox
           |
        20 | var a = @;
    */

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", file));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_source_line(source, error.get_line()).unwrap_or("");
    output.push_str(&format!("{} | {}", line_string, line_text.trim_end()));

    output
}
