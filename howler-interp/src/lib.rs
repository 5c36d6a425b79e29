//! Tree-walking evaluator for Howler programs.
//!
//! Deliberately minimal: it evaluates statement sequencing, integer and
//! boolean literals, unary `-`/`!` and binary arithmetic/comparison. There
//! is no variable environment yet, so `let`, `return`, `if`, function
//! literals, calls, strings and collections all evaluate to `null` instead
//! of failing. The parser still hands over well-formed nodes for all of
//! them.

pub mod object;

use howler_parser::ast::{Expr, Program, Stmt};
use howler_parser::lexer::Token;

pub use object::Object;

/// Evaluates a program, yielding the value of its last statement.
pub fn eval_program(program: &Program) -> Object {
    let mut result = Object::Null;

    for stmt in &program.statements {
        result = eval_statement(stmt);
    }

    result
}

fn eval_statement(stmt: &Stmt) -> Object {
    match stmt {
        Stmt::Expr(expr) => eval_expression(expr),
        Stmt::Let { .. } | Stmt::Return(_) => Object::Null,
    }
}

fn eval_expression(expr: &Expr) -> Object {
    match expr {
        Expr::IntegerLit(value) => Object::Integer(*value),
        Expr::BoolLit(value) => Object::Boolean(*value),
        Expr::Prefix { op, right } => {
            let right = eval_expression(right);
            eval_prefix_expression(op, right)
        }
        Expr::Infix { op, lhs, rhs } => {
            let left = eval_expression(lhs);
            let right = eval_expression(rhs);
            eval_infix_expression(op, left, right)
        }
        _ => Object::Null,
    }
}

fn eval_prefix_expression(op: &Token, right: Object) -> Object {
    match op {
        Token::Bang => eval_bang_operator(right),
        Token::Minus => match right {
            Object::Integer(value) => Object::Integer(value.wrapping_neg()),
            _ => Object::Null,
        },
        _ => Object::Null,
    }
}

fn eval_bang_operator(right: Object) -> Object {
    match right {
        Object::Boolean(value) => Object::Boolean(!value),
        Object::Null => Object::Boolean(true),
        _ => Object::Null,
    }
}

fn eval_infix_expression(op: &Token, left: Object, right: Object) -> Object {
    match (left, right) {
        (Object::Integer(left), Object::Integer(right)) => {
            eval_integer_infix_expression(op, left, right)
        }
        (left, right) => match op {
            Token::Eq => Object::Boolean(left == right),
            Token::NotEq => Object::Boolean(left != right),
            _ => Object::Null,
        },
    }
}

fn eval_integer_infix_expression(op: &Token, left: i64, right: i64) -> Object {
    match op {
        Token::Plus => Object::Integer(left.wrapping_add(right)),
        Token::Minus => Object::Integer(left.wrapping_sub(right)),
        Token::Asterisk => Object::Integer(left.wrapping_mul(right)),
        // division by zero is not a crash, just no value
        Token::Slash => match left.checked_div(right) {
            Some(value) => Object::Integer(value),
            None => Object::Null,
        },
        Token::Lt => Object::Boolean(left < right),
        Token::Gt => Object::Boolean(left > right),
        Token::Eq => Object::Boolean(left == right),
        Token::NotEq => Object::Boolean(left != right),
        _ => Object::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use howler_parser::{lexer::Lexer, parser::Parser};

    fn eval(source: &str) -> Object {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "unexpected parser errors:\n{}",
            parser.errors()
        );
        eval_program(&program)
    }

    #[test]
    fn integer_expressions() {
        for (source, expected) in &[
            ("5", 5),
            ("-5", -5),
            ("--5", 5),
            ("5 + 5 + 5 + 5 - 10", 10),
            ("2 * 2 * 2 * 2 * 2", 32),
            ("5 - 2", 3),
            ("50 / 2 * 2 + 10", 60),
            ("2 * (5 + 10)", 30),
            ("3 * 3 * 3 + 10", 37),
            ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ] {
            assert_eq!(eval(source), Object::Integer(*expected), "source: {}", source);
        }
    }

    #[test]
    fn boolean_expressions() {
        for (source, expected) in &[
            ("true", true),
            ("false", false),
            ("1 < 2", true),
            ("1 > 2", false),
            ("1 == 1", true),
            ("1 != 1", false),
            ("1 != 2", true),
            ("true == true", true),
            ("false == false", true),
            ("true != false", true),
            ("(1 < 2) == true", true),
            ("(1 > 2) == true", false),
        ] {
            assert_eq!(eval(source), Object::Boolean(*expected), "source: {}", source);
        }
    }

    #[test]
    fn bang_operator() {
        assert_eq!(eval("!true"), Object::Boolean(false));
        assert_eq!(eval("!false"), Object::Boolean(true));
        assert_eq!(eval("!!true"), Object::Boolean(true));
        // bang of a non-boolean is no value, and bang of that is true
        assert_eq!(eval("!5"), Object::Null);
        assert_eq!(eval("!!5"), Object::Boolean(true));
    }

    #[test]
    fn type_mismatches_yield_null() {
        assert_eq!(eval("-true"), Object::Null);
        assert_eq!(eval("5 + true"), Object::Null);
        assert_eq!(eval("true + false"), Object::Null);
        assert_eq!(eval("5 / 0"), Object::Null);
    }

    #[test]
    fn mixed_equality_compares_values() {
        assert_eq!(eval("5 == true"), Object::Boolean(false));
        assert_eq!(eval("5 != true"), Object::Boolean(true));
    }

    #[test]
    fn last_statement_wins() {
        assert_eq!(eval("1; 2; 3"), Object::Integer(3));
        assert_eq!(eval(""), Object::Null);
    }

    #[test]
    fn unimplemented_constructs_yield_null() {
        assert_eq!(eval("let x = 5;"), Object::Null);
        assert_eq!(eval("return 5;"), Object::Null);
        assert_eq!(eval("if (true) { 10 }"), Object::Null);
        assert_eq!(eval("fn(x) { x }"), Object::Null);
        assert_eq!(eval("\"hello\""), Object::Null);
        assert_eq!(eval("[1, 2][0]"), Object::Null);
        assert_eq!(eval("{\"a\": 1}"), Object::Null);
        assert_eq!(eval("identifier"), Object::Null);
    }
}
