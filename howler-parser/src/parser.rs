//! Pratt parser with a two-token lookahead window.
//!
//! The parser pulls tokens from the lexer on demand and builds the AST
//! bottom-up. Errors never abort the pass: the malformed construct is
//! dropped, a message lands in the sink and the statement loop resumes at
//! the next token.

use crate::ast::Program;
use crate::lexer::{Lexer, Token};
use howler_diagnostics::{ErrorReporter, SyntaxError};
use std::mem;
use std::ops::Range;

mod expr;
mod stmt;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    curr_token: Token,
    curr_span: Range<usize>,
    /// Lookahead: inspected but not yet committed.
    peek_token: Token,
    peek_span: Range<usize>,
    errors: ErrorReporter,
}

impl<'a> Parser<'a> {
    /// Primes both the current and the lookahead token before any parsing
    /// begins.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            curr_token: Token::Eof,
            curr_span: 0..0,
            peek_token: Token::Eof,
            peek_span: 0..0,
            errors: ErrorReporter::new(),
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parses statements until end of input. Failed statements are skipped,
    /// not inserted; their messages are available from [`Self::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.curr_is(&Token::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Program { statements }
    }

    /// The ordered error sink, populated during [`Self::parse_program`].
    pub fn errors(&self) -> &ErrorReporter {
        &self.errors
    }
}

/// Parse utilities.
impl<'a> Parser<'a> {
    fn next_token(&mut self) {
        self.curr_token = mem::replace(&mut self.peek_token, self.lexer.next_token());
        self.curr_span = mem::replace(&mut self.peek_span, self.lexer.span());
    }

    fn curr_is(&self, token: &Token) -> bool {
        mem::discriminant(&self.curr_token) == mem::discriminant(token)
    }

    fn peek_is(&self, token: &Token) -> bool {
        mem::discriminant(&self.peek_token) == mem::discriminant(token)
    }

    /// Consumes the lookahead token if it has the required kind. Otherwise
    /// records an error and leaves the window untouched; the construct under
    /// parse is expected to bail out.
    fn expect_peek(&mut self, token: &Token) -> bool {
        if self.peek_is(token) {
            self.next_token();
            true
        } else {
            self.peek_error(&token.to_string());
            false
        }
    }

    fn peek_error(&mut self, expected: &str) {
        let message = format!(
            "expected next token to be {}, got {} instead",
            expected, self.peek_token
        );
        let span = self.peek_span.clone();
        self.errors.add_error(SyntaxError::new(message, span));
    }

    fn error_at_curr(&mut self, message: impl ToString) {
        let span = self.curr_span.clone();
        self.errors.add_error(SyntaxError::new(message, span));
    }
}
