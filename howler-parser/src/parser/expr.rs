use super::*;
use crate::ast::Expr;
use crate::lexer::Precedence;

impl<'a> Parser<'a> {
    /// Precedence-climbing core.
    ///
    /// Parses a prefix to get `left`, then while the lookahead binds tighter
    /// than `min_precedence`, folds it into `left` through its infix rule.
    /// The strict `<` is what makes equal-precedence operators bind to the
    /// left.
    pub(crate) fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&Token::Semicolon) && min_precedence < self.peek_token.precedence() {
            left = match self.peek_token {
                Token::Plus
                | Token::Minus
                | Token::Slash
                | Token::Asterisk
                | Token::Eq
                | Token::NotEq
                | Token::Lt
                | Token::Gt => {
                    self.next_token();
                    self.parse_infix_expression(left)?
                }
                Token::LParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                Token::LBracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }
                // no infix rule: the expression ends here, not an error
                _ => break,
            };
        }

        Some(left)
    }

    /// Prefix rule lookup for the current token. Not having one is a parse
    /// error: the token cannot begin an expression.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.curr_token.clone() {
            Token::Ident(name) => Some(Expr::Identifier(name)),
            Token::Int(literal) => self.parse_integer_literal(&literal),
            Token::Str(value) => Some(Expr::StringLit(value)),
            Token::True => Some(Expr::BoolLit(true)),
            Token::False => Some(Expr::BoolLit(false)),
            Token::Bang | Token::Minus => self.parse_prefix_expression(),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            token => {
                self.error_at_curr(format!("no prefix parse function for {} found", token));
                None
            }
        }
    }

    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expr> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLit(value)),
            Err(_) => {
                self.error_at_curr(format!("could not parse {:?} as integer", literal));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let op = self.curr_token.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Prefix {
            op,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let op = self.curr_token.clone();
        let precedence = op.precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix {
            op,
            lhs: Box::new(left),
            rhs: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(&Token::Else) {
            self.next_token();

            if !self.expect_peek(&Token::LBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        let params = self.parse_function_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expr::Function { params, body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut identifiers = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(self.curr_identifier()?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(self.curr_identifier()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(identifiers)
    }

    fn curr_identifier(&mut self) -> Option<String> {
        match &self.curr_token {
            Token::Ident(name) => Some(name.clone()),
            _ => {
                let message = format!(
                    "expected next token to be IDENT, got {} instead",
                    self.curr_token
                );
                self.error_at_curr(message);
                None
            }
        }
    }

    /// Triggered as an infix rule on `(`: the already-parsed `left` becomes
    /// the callee.
    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(&Token::RParen)?;

        Some(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }

    /// Triggered as an infix rule on `[`.
    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RBracket) {
            return None;
        }

        Some(Expr::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Some(Expr::Array(elements))
    }

    /// Comma-separated expressions up to the `end` delimiter; used
    /// identically for call arguments and array elements.
    fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(&Token::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            // a trailing comma before the `}` is tolerated
            if !self.peek_is(&Token::RBrace) && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }

        Some(Expr::Hash(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Stmt;
    use insta::assert_snapshot;

    /// Parses a single expression statement and returns its canonical form.
    fn expr_string(source: &str) -> String {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "unexpected parser errors:\n{}",
            parser.errors()
        );
        assert_eq!(program.statements.len(), 1, "source: {}", source);
        match &program.statements[0] {
            Stmt::Expr(expr) => expr.to_string(),
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    fn expr(source: &str) -> Expr {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        assert!(parser.errors().is_empty());
        match program.statements.into_iter().next() {
            Some(Stmt::Expr(expr)) => expr,
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn literals() {
        assert_eq!(expr("5;"), Expr::IntegerLit(5));
        assert_eq!(expr("true;"), Expr::BoolLit(true));
        assert_eq!(expr("false;"), Expr::BoolLit(false));
        assert_eq!(expr("\"hello world\";"), Expr::StringLit("hello world".to_string()));
        assert_eq!(expr("foobar;"), Expr::Identifier("foobar".to_string()));
    }

    #[test]
    fn prefix_expressions() {
        assert_eq!(
            expr("!5;"),
            Expr::Prefix {
                op: Token::Bang,
                right: Box::new(Expr::IntegerLit(5)),
            }
        );
        assert_eq!(
            expr("-x;"),
            Expr::Prefix {
                op: Token::Minus,
                right: Box::new(Expr::Identifier("x".to_string())),
            }
        );
    }

    #[test]
    fn precedence_and_associativity() {
        assert_snapshot!(expr_string("1 + 2 * 3"), @"(1 + (2 * 3))");
        assert_snapshot!(expr_string("-a * b"), @"((-a) * b)");
        assert_snapshot!(expr_string("a + b + c"), @"((a + b) + c)");
        assert_snapshot!(expr_string("!-a"), @"(!(-a))");
        assert_snapshot!(expr_string("a + b - c"), @"((a + b) - c)");
        assert_snapshot!(expr_string("a * b / c"), @"((a * b) / c)");
        assert_snapshot!(expr_string("a + b * c + d / e - f"), @"(((a + (b * c)) + (d / e)) - f)");
        assert_snapshot!(expr_string("5 < 4 != 3 > 4"), @"((5 < 4) != (3 > 4))");
        assert_snapshot!(
            expr_string("3 + 4 * 5 == 3 * 1 + 4 * 5"),
            @"((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"
        );
        assert_snapshot!(expr_string("true != false"), @"(true != false)");
    }

    #[test]
    fn grouping_overrides_precedence() {
        assert_snapshot!(expr_string("(1 + 2) * 3"), @"((1 + 2) * 3)");
        assert_snapshot!(expr_string("2 / (5 + 5)"), @"(2 / (5 + 5))");
        assert_snapshot!(expr_string("-(5 + 5)"), @"(-(5 + 5))");
        assert_snapshot!(expr_string("!(true == true)"), @"(!(true == true))");
    }

    #[test]
    fn call_and_index_bind_tightest() {
        assert_snapshot!(
            expr_string("a + add(b * c) + d"),
            @"((a + add((b * c))) + d)"
        );
        assert_snapshot!(
            expr_string("a * [1, 2, 3, 4][b * c] * d"),
            @"((a * ([1, 2, 3, 4][(b * c)])) * d)"
        );
        assert_snapshot!(
            expr_string("add(a * b[2], b[1], 2 * [1, 2][1])"),
            @"add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"
        );
        assert_snapshot!(expr_string("f(x)[0]"), @"(f(x)[0])");
    }

    #[test]
    fn call_expression_arguments() {
        let call = expr("add(1, 2 * 3, 4 + 5);");
        match call {
            Expr::Call { callee, args } => {
                assert_eq!(*callee, Expr::Identifier("add".to_string()));
                assert_eq!(args.len(), 3);
                assert_eq!(args[1].to_string(), "(2 * 3)");
            }
            other => panic!("expected call expression, got {:?}", other),
        }

        assert_eq!(expr("empty();"), Expr::Call {
            callee: Box::new(Expr::Identifier("empty".to_string())),
            args: vec![],
        });
    }

    #[test]
    fn callee_may_be_a_function_literal() {
        assert_snapshot!(
            expr_string("fn(x, y) { x + y; }(2, 3)"),
            @"fn(x, y) { (x + y); }(2, 3)"
        );
    }

    #[test]
    fn if_expressions() {
        let parsed = expr("if (x < y) { x } else { y }");
        match &parsed {
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                assert_eq!(condition.to_string(), "(x < y)");
                assert_eq!(consequence.len(), 1);
                assert_eq!(alternative.as_ref().map(Vec::len), Some(1));
            }
            other => panic!("expected if expression, got {:?}", other),
        }

        match expr("if (x) { x }") {
            Expr::If { alternative, .. } => assert_eq!(alternative, None),
            other => panic!("expected if expression, got {:?}", other),
        }
    }

    #[test]
    fn function_literals() {
        match expr("fn(x, y) { x + y; }") {
            Expr::Function { params, body } => {
                assert_eq!(params, vec!["x".to_string(), "y".to_string()]);
                assert_eq!(body.len(), 1);
            }
            other => panic!("expected function literal, got {:?}", other),
        }

        match expr("fn() {};") {
            Expr::Function { params, body } => {
                assert!(params.is_empty());
                assert!(body.is_empty());
            }
            other => panic!("expected function literal, got {:?}", other),
        }
    }

    #[test]
    fn array_literals() {
        match expr("[1, 2 * 2, 3 + 3];") {
            Expr::Array(elements) => {
                assert_eq!(elements.len(), 3);
                assert_eq!(elements[0], Expr::IntegerLit(1));
                assert_eq!(elements[1].to_string(), "(2 * 2)");
                assert_eq!(elements[2].to_string(), "(3 + 3)");
            }
            other => panic!("expected array literal, got {:?}", other),
        }

        assert_eq!(expr("[];"), Expr::Array(vec![]));
    }

    #[test]
    fn hash_literals_preserve_source_order() {
        match expr("{\"a\": 1, \"b\": 2};") {
            Expr::Hash(pairs) => {
                assert_eq!(pairs.len(), 2);
                assert_eq!(
                    pairs[0],
                    (Expr::StringLit("a".to_string()), Expr::IntegerLit(1))
                );
                assert_eq!(
                    pairs[1],
                    (Expr::StringLit("b".to_string()), Expr::IntegerLit(2))
                );
            }
            other => panic!("expected hash literal, got {:?}", other),
        }

        assert_eq!(expr("{};"), Expr::Hash(vec![]));
        // keys may be arbitrary expressions, trailing comma tolerated
        assert_snapshot!(
            expr_string("{1 + 1: \"two\", true: 1,}"),
            @r#"{(1 + 1): "two", true: 1}"#
        );
    }

    #[test]
    fn unbalanced_delimiters_are_reported() {
        for (source, expected) in &[
            ("(1 + 2;", "expected next token to be ), got ; instead"),
            ("[1, 2;", "expected next token to be ], got ; instead"),
            ("{\"a\" 1};", "expected next token to be :, got INT instead"),
            ("fn(x, 1) { x }", "expected next token to be IDENT, got INT instead"),
            ("if x { 1 }", "expected next token to be (, got IDENT instead"),
        ] {
            let mut parser = Parser::new(Lexer::new(source));
            parser.parse_program();
            let messages: Vec<_> = parser.errors().iter().map(|e| e.message()).collect();
            assert!(
                messages.contains(expected),
                "source {:?}: expected {:?} in {:?}",
                source,
                expected,
                messages
            );
        }
    }
}
