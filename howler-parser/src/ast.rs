//! AST node definitions and their canonical textual form.
//!
//! Statements and expressions are two disjoint closed sums; a node is exactly
//! one of the two. Every node can report the token literal that started it
//! and re-serialize itself via `Display`. The serialized form is normalized
//! (fully parenthesized operators, braced blocks, quoted strings) so that
//! re-parsing it reproduces the same serialization again.

use crate::lexer::Token;
use std::fmt;

/// Body of an `if` arm or function literal.
pub type Block = Vec<Stmt>;

/// Tree root. Owns its statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let <name> = <value>;`. The value is `None` only when its parse
    /// failed; the error is in the sink.
    Let { name: String, value: Option<Expr> },
    /// `return <value>;`, same caveat on `None`.
    Return(Option<Expr>),
    /// A bare expression used as a statement.
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(String),
    IntegerLit(i64),
    StringLit(String),
    BoolLit(bool),
    /// Unary `-` or `!`.
    Prefix { op: Token, right: Box<Expr> },
    Infix {
        op: Token,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// Anonymous function value.
    Function { params: Vec<String>, body: Block },
    /// The callee may be an identifier or an inline function literal.
    Call { callee: Box<Expr>, args: Vec<Expr> },
    Array(Vec<Expr>),
    /// Pairs keep their source order so serialization is deterministic.
    Hash(Vec<(Expr, Expr)>),
    /// `left[index]`
    Index { left: Box<Expr>, index: Box<Expr> },
}

impl Program {
    /// Token literal of the first statement, or `""` for an empty program.
    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => String::new(),
        }
    }
}

impl Stmt {
    /// Literal text of the token that started this statement.
    pub fn token_literal(&self) -> String {
        match self {
            Stmt::Let { .. } => "let".to_string(),
            Stmt::Return(_) => "return".to_string(),
            Stmt::Expr(expr) => expr.token_literal(),
        }
    }
}

impl Expr {
    /// Literal text of the token that started this expression.
    pub fn token_literal(&self) -> String {
        match self {
            Expr::Identifier(name) => name.clone(),
            Expr::IntegerLit(value) => value.to_string(),
            Expr::StringLit(value) => value.clone(),
            Expr::BoolLit(value) => value.to_string(),
            Expr::Prefix { op, .. } | Expr::Infix { op, .. } => op.to_string(),
            Expr::If { .. } => "if".to_string(),
            Expr::Function { .. } => "fn".to_string(),
            Expr::Call { .. } => "(".to_string(),
            Expr::Array(_) => "[".to_string(),
            Expr::Hash(_) => "{".to_string(),
            Expr::Index { .. } => "[".to_string(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, value } => {
                write!(f, "let {} = ", name)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Stmt::Return(Some(value)) => write!(f, "return {};", value),
            Stmt::Return(None) => write!(f, "return;"),
            Stmt::Expr(expr) => write!(f, "{};", expr),
        }
    }
}

fn fmt_block(f: &mut fmt::Formatter<'_>, block: &Block) -> fmt::Result {
    write!(f, "{{")?;
    for stmt in block {
        write!(f, " {}", stmt)?;
    }
    write!(f, " }}")
}

fn fmt_list(f: &mut fmt::Formatter<'_>, exprs: &[Expr]) -> fmt::Result {
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", expr)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::IntegerLit(value) => write!(f, "{}", value),
            Expr::StringLit(value) => write!(f, "\"{}\"", value),
            Expr::BoolLit(value) => write!(f, "{}", value),
            Expr::Prefix { op, right } => write!(f, "({}{})", op, right),
            Expr::Infix { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({}) ", condition)?;
                fmt_block(f, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else ")?;
                    fmt_block(f, alternative)?;
                }
                Ok(())
            }
            Expr::Function { params, body } => {
                write!(f, "fn({}) ", params.join(", "))?;
                fmt_block(f, body)
            }
            Expr::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                fmt_list(f, args)?;
                write!(f, ")")
            }
            Expr::Array(elements) => {
                write!(f, "[")?;
                fmt_list(f, elements)?;
                write!(f, "]")
            }
            Expr::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Expr::Index { left, index } => write!(f, "({}[{}])", left, index),
        }
    }
}
