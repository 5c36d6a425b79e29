//! Syntax error values and the ordered error sink used by the parser.

use std::{fmt, ops::Range, slice};

/// Represents a syntax error (compile time error).
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    message: String,
    span: Range<usize>,
}

impl SyntaxError {
    /// Create a new syntax error with the specified `message` and `span`.
    pub fn new(message: impl ToString, span: Range<usize>) -> Self {
        Self {
            message: message.to_string(),
            span,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte range in the source text that the error points at.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR: {message} at position {position}",
            message = self.message,
            position = self.span.start
        )
    }
}

/// Manages all the errors accumulated during a single parse.
///
/// Errors are kept in the order they were reported. The reporter is owned by
/// the `Parser` instance that produced it, never shared globally.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    errors: Vec<SyntaxError>,
}

impl ErrorReporter {
    /// Create an empty `ErrorReporter`.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the `ErrorReporter`.
    pub fn add_error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    /// Returns `true` if no errors have been reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, SyntaxError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[SyntaxError] {
        &self.errors
    }
}

impl<'a> IntoIterator for &'a ErrorReporter {
    type Item = &'a SyntaxError;
    type IntoIter = slice::Iter<'a, SyntaxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_keep_insertion_order() {
        let mut reporter = ErrorReporter::new();
        assert!(reporter.is_empty());

        reporter.add_error(SyntaxError::new("first", 0..1));
        reporter.add_error(SyntaxError::new("second", 4..5));

        assert_eq!(reporter.len(), 2);
        let messages: Vec<_> = reporter.iter().map(|err| err.message()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn display_is_one_error_per_line() {
        let mut reporter = ErrorReporter::new();
        reporter.add_error(SyntaxError::new("unexpected token", 3..4));

        assert_eq!(
            reporter.to_string(),
            "ERROR: unexpected token at position 3\n"
        );
    }
}
