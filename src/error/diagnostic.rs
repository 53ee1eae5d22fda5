//! Diagnostic formatting for better error messages
//!
//! This module provides utilities for formatting error messages with
//! source code context and helpful suggestions.

use super::{LexError, SourceLocation};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    error: LexError,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: LexError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: LexError, source: &str) -> Self {
        Self {
            error,
            source: Some(source.to_string()),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        // Error header
        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.error.message());
        output.push('\n');

        // Location and source context
        if let Some(location) = self.error.location() {
            output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

            if let Some(ref source) = self.source {
                output.push_str(&self.format_source_context(source, location));
            }
        }

        output
    }

    /// Format the offending line, its neighbours, and a caret under the column
    fn format_source_context(&self, source: &str, location: &SourceLocation) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if location.line == 0 || location.line > lines.len() {
            return output;
        }

        let first = location.line.saturating_sub(1).max(1);
        let last = (location.line + 1).min(lines.len());
        let width = last.to_string().len();

        for number in first..=last {
            let gutter = format!("{:width$}", number, width = width);
            if number == location.line {
                output.push_str(&format!("  {} {}\n", gutter.blue().bold(), lines[number - 1]));
                let padding = " ".repeat(width + 2 + location.column.saturating_sub(1));
                output.push_str(&format!("{}{}\n", padding, "^".red().bold()));
            } else {
                output.push_str(&format!("  {} {}\n", gutter.blue(), lines[number - 1]));
            }
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
