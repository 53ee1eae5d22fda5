//! Error handling and diagnostics
//!
//! The scanner itself never fails: malformed input comes back as
//! `Illegal` tokens. The types here serve the strict checking mode and the
//! token dump tool.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for lexer operations
pub type LexResult<T> = Result<T, LexError>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Errors reported outside the core scanning loop
#[derive(Debug, Error)]
pub enum LexError {
    /// A character (or unrecognized operator) that no token kind accepts
    #[error("Lexer Error: unexpected '{literal}' at {location}")]
    IllegalCharacter {
        literal: String,
        location: SourceLocation,
    },

    /// A quoted string with no closing quote before end-of-input
    #[error("Lexer Error: unterminated string at {location}")]
    UnterminatedString { location: SourceLocation },

    /// Reading a source file failed
    #[error("IO Error: failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LexError {
    /// Create an error for an illegal token literal
    pub fn illegal(literal: impl Into<String>, location: SourceLocation) -> Self {
        let literal = literal.into();
        if literal.starts_with('"') || literal.starts_with('\'') {
            Self::UnterminatedString { location }
        } else {
            Self::IllegalCharacter { literal, location }
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::IllegalCharacter { .. } | Self::UnterminatedString { .. } => "Lexer Error",
            Self::Io { .. } => "IO Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::IllegalCharacter { literal, .. } => format!("unexpected '{}'", literal),
            Self::UnterminatedString { .. } => "unterminated string".to_string(),
            Self::Io { path, source } => format!("failed to read '{}': {}", path.display(), source),
        }
    }

    /// Get the source location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::IllegalCharacter { location, .. } | Self::UnterminatedString { location } => {
                Some(location)
            }
            Self::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::at(10, 5);
        assert_eq!(loc.to_string(), "10:5");

        let loc_with_file = SourceLocation::new(10, 5, Some("test.lua".to_string()));
        assert_eq!(loc_with_file.to_string(), "test.lua:10:5");
    }

    #[test]
    fn test_illegal_classification() {
        let loc = SourceLocation::at(1, 1);
        let err = LexError::illegal("!", loc.clone());
        assert_eq!(err.kind(), "Lexer Error");
        assert_eq!(err.message(), "unexpected '!'");
        assert_eq!(err.location(), Some(&loc));

        let err = LexError::illegal("\"abc", loc.clone());
        assert!(matches!(err, LexError::UnterminatedString { .. }));
        assert_eq!(err.message(), "unterminated string");
    }

    #[test]
    fn test_error_display() {
        let err = LexError::illegal("~", SourceLocation::at(5, 10));
        assert_eq!(err.to_string(), "Lexer Error: unexpected '~' at 5:10");
    }

    #[test]
    fn test_io_error_has_no_location() {
        let err = LexError::Io {
            path: PathBuf::from("missing.lua"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.kind(), "IO Error");
        assert!(err.location().is_none());
        assert!(err.to_string().contains("missing.lua"));
    }
}
