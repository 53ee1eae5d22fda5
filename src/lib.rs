//! # lulex
//!
//! Lexical front end for a Lua-family scripting toolchain.
//!
//! The lexer accepts a complete source text up front and produces classified
//! tokens on demand, one per call, in source order. It never fails: input it
//! cannot classify comes back as [`TokenKind::Illegal`] tokens and the parser
//! decides what to do with them.
//!
//! ## Modules
//!
//! - `lexer`: token model and scanner
//! - `error`: source locations, strict-mode errors and diagnostics

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, LexResult, SourceLocation};
pub use lexer::{Keyword, Lexer, Token, TokenKind};

/// Version of the lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize a whole source text.
///
/// The returned vector always ends with a single [`TokenKind::EndOfInput`]
/// token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source, None).tokenize()
}

/// Tokenize a source text, rejecting illegal input.
///
/// Scanning is identical to [`tokenize`]; the first `Illegal` token is
/// turned into a [`LexError`] carrying its location.
///
/// # Arguments
///
/// * `source` - The source code to scan
/// * `filename` - Optional filename for error reporting
pub fn check(source: &str, filename: Option<&str>) -> LexResult<Vec<Token>> {
    let tokens = Lexer::new(source, filename).tokenize();
    if let Some(illegal) = tokens.iter().find(|t| t.kind == TokenKind::Illegal) {
        return Err(LexError::illegal(illegal.literal.clone(), illegal.location.clone()));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_tokenize_ends_with_eof() {
        let tokens = tokenize("local x = 1");
        assert_eq!(tokens.len(), 5);
        assert!(tokens.last().is_some_and(Token::is_eof));
    }

    #[test]
    fn test_check_accepts_clean_source() {
        let tokens = check("return a ~= b", None).unwrap();
        assert_eq!(tokens[2].kind, TokenKind::NotEqual);
    }

    #[test]
    fn test_check_reports_first_illegal() {
        let err = check("x = 1\ny = $2 @", Some("bad.lua")).unwrap_err();
        match err {
            LexError::IllegalCharacter { literal, location } => {
                assert_eq!(literal, "$");
                assert_eq!(location.to_string(), "bad.lua:2:5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_reports_unterminated_string() {
        let err = check("print('hello", None).unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
        assert_eq!(err.location(), Some(&SourceLocation::at(1, 7)));
    }
}
