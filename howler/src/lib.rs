//! Shared pieces of the Howler command-line driver.

use howler_interp::Object;
use howler_parser::{lexer::Lexer, parser::Parser};
use std::ffi::OsStr;
use std::path::Path;

/// Script extensions the driver accepts.
pub const EXTENSIONS: [&str; 4] = ["grr", "brr", "hoot", "coo"];

/// Returns `true` if `path` ends in one of [`EXTENSIONS`].
pub fn has_allowed_extension(path: &str) -> bool {
    match Path::new(path).extension().and_then(OsStr::to_str) {
        Some(extension) => EXTENSIONS.contains(&extension),
        None => false,
    }
}

/// For testing purposes only.
///
/// Parses and evaluates `source`, panicking on parse errors.
pub fn interpret(source: &str) -> Object {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parse errors:\n{}",
        parser.errors()
    );
    howler_interp::eval_program(&program)
}
