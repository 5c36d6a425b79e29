use logos::Logos;
use std::{fmt, ops::Range};

fn lex_string<'s>(lex: &mut logos::Lexer<'s, Token>) -> String {
    // Contents between the quotes, verbatim. A string cut off by the end of
    // the input simply has no closing quote to strip.
    let contents = &lex.slice()[1..];
    contents.strip_suffix('"').unwrap_or(contents).to_string()
}

#[derive(Debug, Logos, Clone, PartialEq)]
pub enum Token {
    // literals
    #[regex("[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    #[regex(r#""[^"]*"?"#, lex_string)]
    Str(String),

    // identifiers
    #[regex("[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Ident(String),

    // operators
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus, // NOTE: can also be unary
    #[token("!")]
    Bang, // NOTE: can also be unary
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,

    // punctuation
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // keywords
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // misc
    #[regex(r"[ \t\n\r]+", logos::skip)]
    #[error]
    Error,

    /// Only generated by [`Lexer::next_token`] for a character no rule
    /// matches, carrying the offending text.
    Illegal(String),
    /// Only generated by [`Lexer::next_token`] when the input is exhausted.
    Eof,
}

/// Operator precedence, weakest to tightest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and binary `-`
    Sum,
    /// `*` and `/`
    Product,
    /// unary `-` and `!`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[0]`
    Index,
}

impl Token {
    /// Returns the infix binding power of the token.
    ///
    /// Total over the whole vocabulary: any token that cannot continue an
    /// expression gets [`Precedence::Lowest`], which naturally terminates
    /// expression parsing at statement boundaries and closing delimiters.
    pub fn precedence(&self) -> Precedence {
        match self {
            Token::Eq | Token::NotEq => Precedence::Equals,
            Token::Lt | Token::Gt => Precedence::LessGreater,
            Token::Plus | Token::Minus => Precedence::Sum,
            Token::Slash | Token::Asterisk => Precedence::Product,
            Token::LParen => Precedence::Call,
            Token::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}

impl fmt::Display for Token {
    /// Token kind name as it appears in error messages. Literal-carrying
    /// kinds print their vocabulary name, everything else its spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::Int(_) => "INT",
            Token::Str(_) => "STRING",
            Token::Ident(_) => "IDENT",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Bang => "!",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Eq => "==",
            Token::NotEq => "!=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Colon => ":",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Function => "FUNCTION",
            Token::Let => "LET",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::If => "IF",
            Token::Else => "ELSE",
            Token::Return => "RETURN",
            Token::Error | Token::Illegal(_) => "ILLEGAL",
            Token::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Pull-based lexer over one immutable input buffer.
///
/// Total over arbitrary input: unrecognized characters become
/// [`Token::Illegal`] and the end of the input becomes [`Token::Eof`],
/// forever. The lexer itself never errors.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: Token::lexer(source),
        }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Token::Error) => Token::Illegal(self.inner.slice().to_string()),
            Some(token) => token,
            None => Token::Eof,
        }
    }

    /// Byte range of the most recently returned token.
    pub fn span(&self) -> Range<usize> {
        self.inner.span()
    }
}
