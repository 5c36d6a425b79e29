use super::*;
use crate::ast::{Block, Stmt};
use crate::lexer::Precedence;

impl<'a> Parser<'a> {
    /// Dispatches on the current token kind. Anything that is not a `let` or
    /// `return` is a bare expression used as a statement.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.curr_token {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let name = match &self.peek_token {
            Token::Ident(name) => {
                let name = name.clone();
                self.next_token();
                name
            }
            _ => {
                self.peek_error("IDENT");
                return None;
            }
        };

        if !self.expect_peek(&Token::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Stmt::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Stmt::Return(value))
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest);

        // the statement-terminating semicolon is optional, and consumed even
        // when the expression failed so the loop resyncs past it
        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Stmt::Expr(expr?))
    }

    /// Consumes statements until `}` or end of input. Expects the current
    /// token to be the opening `{`; leaves the closing `}` current.
    pub(crate) fn parse_block_statement(&mut self) -> Block {
        let mut block = Vec::new();

        self.next_token();
        while !self.curr_is(&Token::RBrace) && !self.curr_is(&Token::Eof) {
            if let Some(stmt) = self.parse_statement() {
                block.push(stmt);
            }
            self.next_token();
        }

        block
    }
}
