//! Lexical analysis module
//!
//! This module turns source text into a stream of classified tokens.

pub mod token;
pub mod scanner;

pub use token::{Token, TokenKind, Keyword};
pub use scanner::Lexer;
