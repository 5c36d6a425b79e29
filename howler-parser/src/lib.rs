//! Front end of the Howler language: lexer, AST and Pratt parser.
//!
//! Parsing is best-effort. Malformed constructs are dropped and reported to
//! an ordered error sink instead of aborting, so a parse always runs to the
//! end of the input.

pub mod ast;
pub mod lexer;
pub mod parser;
