//! Token definitions for the lexer
//!
//! This module defines the closed set of token kinds, the reserved keyword
//! enumeration and the two fixed lookup tables used during scanning.

use crate::error::SourceLocation;
use phf::phf_map;
use std::fmt;

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text of the token; the unquoted body for strings
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    /// True for the end-of-input token
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{}", self.kind),
            _ => write!(f, "{}({:?})", self.kind, self.literal),
        }
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    EndOfInput,
    Illegal,

    // Literals and names
    Identifier,
    Number,
    String,
    Keyword(Keyword),

    // Arithmetic
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Caret,   // ^

    // Comparison
    Equal,        // ==
    NotEqual,     // ~=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=

    // Assignment
    Assign, // =

    // Unary
    Hash, // # (length operator)

    // Delimiters
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Comma,        // ,
    Semicolon,    // ;
    Colon,        // :
    Dot,          // .
    DotDot,       // ..
    DotDotDot,    // ...

    // Raw escape marker
    Escape, // \
}

/// Fixed single character symbols.
static SYMBOLS: phf::Map<char, TokenKind> = phf_map! {
    ';' => TokenKind::Semicolon,
    '(' => TokenKind::LeftParen,
    ')' => TokenKind::RightParen,
    ',' => TokenKind::Comma,
    '+' => TokenKind::Plus,
    '-' => TokenKind::Minus,
    '/' => TokenKind::Slash,
    '*' => TokenKind::Star,
    '%' => TokenKind::Percent,
    '^' => TokenKind::Caret,
    '{' => TokenKind::LeftBrace,
    '}' => TokenKind::RightBrace,
    '[' => TokenKind::LeftBracket,
    ']' => TokenKind::RightBracket,
    '#' => TokenKind::Hash,
    ':' => TokenKind::Colon,
    '\\' => TokenKind::Escape,
    '>' => TokenKind::Greater,
    '<' => TokenKind::Less,
};

/// Multi-character operators and keywords.
///
/// `util` is an alternate spelling of `until`; both map to
/// [`Keyword::Until`].
static RESERVED: phf::Map<&'static str, TokenKind> = phf_map! {
    "=" => TokenKind::Assign,
    "==" => TokenKind::Equal,
    "~=" => TokenKind::NotEqual,
    "<=" => TokenKind::LessEqual,
    ">=" => TokenKind::GreaterEqual,
    "." => TokenKind::Dot,
    ".." => TokenKind::DotDot,
    "..." => TokenKind::DotDotDot,
    "and" => TokenKind::Keyword(Keyword::And),
    "break" => TokenKind::Keyword(Keyword::Break),
    "do" => TokenKind::Keyword(Keyword::Do),
    "else" => TokenKind::Keyword(Keyword::Else),
    "elseif" => TokenKind::Keyword(Keyword::Elseif),
    "end" => TokenKind::Keyword(Keyword::End),
    "false" => TokenKind::Keyword(Keyword::False),
    "for" => TokenKind::Keyword(Keyword::For),
    "function" => TokenKind::Keyword(Keyword::Function),
    "if" => TokenKind::Keyword(Keyword::If),
    "in" => TokenKind::Keyword(Keyword::In),
    "local" => TokenKind::Keyword(Keyword::Local),
    "nil" => TokenKind::Keyword(Keyword::Nil),
    "not" => TokenKind::Keyword(Keyword::Not),
    "or" => TokenKind::Keyword(Keyword::Or),
    "repeat" => TokenKind::Keyword(Keyword::Repeat),
    "return" => TokenKind::Keyword(Keyword::Return),
    "then" => TokenKind::Keyword(Keyword::Then),
    "true" => TokenKind::Keyword(Keyword::True),
    "until" => TokenKind::Keyword(Keyword::Until),
    "util" => TokenKind::Keyword(Keyword::Until),
    "while" => TokenKind::Keyword(Keyword::While),
};

impl TokenKind {
    /// Look up a fixed single character symbol
    pub fn symbol(c: char) -> Option<Self> {
        SYMBOLS.get(&c).copied()
    }

    /// Look up a reserved lexeme (operator or keyword). Case-sensitive.
    pub fn reserved(lexeme: &str) -> Option<Self> {
        RESERVED.get(lexeme).copied()
    }
}

/// Reserved keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    And,
    Break,
    Do,
    Else,
    Elseif,
    End,
    False,
    For,
    Function,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
}

impl Keyword {
    /// Every keyword, in alphabetical order
    pub const ALL: [Keyword; 21] = [
        Self::And,
        Self::Break,
        Self::Do,
        Self::Else,
        Self::Elseif,
        Self::End,
        Self::False,
        Self::For,
        Self::Function,
        Self::If,
        Self::In,
        Self::Local,
        Self::Nil,
        Self::Not,
        Self::Or,
        Self::Repeat,
        Self::Return,
        Self::Then,
        Self::True,
        Self::Until,
        Self::While,
    ];

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Break => "break",
            Self::Do => "do",
            Self::Else => "else",
            Self::Elseif => "elseif",
            Self::End => "end",
            Self::False => "false",
            Self::For => "for",
            Self::Function => "function",
            Self::If => "if",
            Self::In => "in",
            Self::Local => "local",
            Self::Nil => "nil",
            Self::Not => "not",
            Self::Or => "or",
            Self::Repeat => "repeat",
            Self::Return => "return",
            Self::Then => "then",
            Self::True => "true",
            Self::Until => "until",
            Self::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "EOF"),
            Self::Illegal => write!(f, "illegal"),
            Self::Identifier => write!(f, "identifier"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Keyword(kw) => write!(f, "keyword '{}'", kw),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "~="),
            Self::Less => write!(f, "<"),
            Self::LessEqual => write!(f, "<="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEqual => write!(f, ">="),
            Self::Assign => write!(f, "="),
            Self::Hash => write!(f, "#"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::Colon => write!(f, ":"),
            Self::Dot => write!(f, "."),
            Self::DotDot => write!(f, ".."),
            Self::DotDotDot => write!(f, "..."),
            Self::Escape => write!(f, "\\"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reserved_keywords() {
        for kw in Keyword::ALL {
            assert_eq!(TokenKind::reserved(kw.as_str()), Some(TokenKind::Keyword(kw)));
        }
        assert_eq!(TokenKind::reserved("function"), Some(TokenKind::Keyword(Keyword::Function)));
        assert_eq!(TokenKind::reserved("invalid"), None);
    }

    #[test]
    fn test_reserved_is_case_sensitive() {
        assert_eq!(TokenKind::reserved("End"), None);
        assert_eq!(TokenKind::reserved("WHILE"), None);
    }

    #[test]
    fn test_legacy_until_spelling() {
        assert_eq!(TokenKind::reserved("util"), Some(TokenKind::Keyword(Keyword::Until)));
    }

    #[test]
    fn test_reserved_operators() {
        assert_eq!(TokenKind::reserved("="), Some(TokenKind::Assign));
        assert_eq!(TokenKind::reserved("=="), Some(TokenKind::Equal));
        assert_eq!(TokenKind::reserved("~="), Some(TokenKind::NotEqual));
        assert_eq!(TokenKind::reserved("<="), Some(TokenKind::LessEqual));
        assert_eq!(TokenKind::reserved(">="), Some(TokenKind::GreaterEqual));
        assert_eq!(TokenKind::reserved("..."), Some(TokenKind::DotDotDot));
        assert_eq!(TokenKind::reserved("~"), None);
        assert_eq!(TokenKind::reserved("...."), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(TokenKind::symbol(';'), Some(TokenKind::Semicolon));
        assert_eq!(TokenKind::symbol('\\'), Some(TokenKind::Escape));
        assert_eq!(TokenKind::symbol('^'), Some(TokenKind::Caret));
        assert_eq!(TokenKind::symbol('='), None);
        assert_eq!(TokenKind::symbol('.'), None);
        assert_eq!(TokenKind::symbol('~'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Keyword(Keyword::Elseif).to_string(), "keyword 'elseif'");
        assert_eq!(TokenKind::LeftBrace.to_string(), "{");
        let tok = Token::new(TokenKind::Identifier, "sum", SourceLocation::at(1, 1));
        assert_eq!(tok.to_string(), "identifier(\"sum\")");
    }
}
