//! Lexer/Scanner implementation
//!
//! The lexer is pull based: every call to [`Lexer::next_token`] discards
//! whitespace and comments, then either matches a fixed single character
//! symbol or reads a maximal lexeme and classifies it. Malformed input is
//! returned as [`TokenKind::Illegal`] tokens; scanning never fails.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::token::{Token, TokenKind};
use crate::error::SourceLocation;

/// Value of the current character once the cursor is past the input
const SENTINEL: char = '\0';

const BLOCK_COMMENT_OPEN: &str = "--[[";
const BLOCK_COMMENT_CLOSE: &str = "]]--";

/// Lexer over an in-memory source text
pub struct Lexer {
    source: Vec<char>,
    /// Index of `ch`
    position: usize,
    /// Always `position + 1`
    read_position: usize,
    ch: char,
    line: usize,
    column: usize,
    filename: Option<String>,
    exhausted: bool,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str, filename: Option<&str>) -> Self {
        let source: Vec<char> = source.chars().collect();
        let ch = source.first().copied().unwrap_or(SENTINEL);
        Self {
            source,
            position: 0,
            read_position: 1,
            ch,
            line: 1,
            column: 1,
            filename: filename.map(|s| s.to_string()),
            exhausted: false,
        }
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted every call returns
    /// [`TokenKind::EndOfInput`].
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        let location = self.location();

        if let Some(kind) = TokenKind::symbol(self.ch) {
            let literal = self.ch.to_string();
            self.advance();
            return self.emit(kind, literal, location);
        }

        let start = self.position;
        self.read_lexeme();
        let lexeme: String = self.source[start..self.position].iter().collect();
        self.classify(lexeme, location)
    }

    /// Drain the lexer, including the final end-of-input token
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Location of the current character
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.filename.clone())
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while is_whitespace(self.ch) {
                self.advance();
            }

            if self.ch != '-' || self.peek_char() != '-' {
                return;
            }

            let start = self.position;
            if self.starts_with(BLOCK_COMMENT_OPEN) {
                // The terminator is matched against the characters already
                // consumed, so the check must run after every single advance.
                while !self.is_at_end() && !self.follows(BLOCK_COMMENT_CLOSE) {
                    self.advance();
                }
            } else {
                while !self.is_at_end() && self.ch != '\n' && self.ch != '\r' {
                    self.advance();
                }
            }

            if self.position == start {
                return;
            }
        }
    }

    /// Consume one maximal lexeme starting at the cursor.
    ///
    /// Leaves the cursor untouched for characters that start no lexeme.
    fn read_lexeme(&mut self) {
        if self.is_at_end() {
            return;
        }

        match self.ch {
            c if is_letter(c) => {
                self.advance_while(|c| is_letter(c) || c.is_alphanumeric() || c == '-')
            }
            c if c.is_ascii_digit() => self.advance_while(|c| c.is_ascii_digit() || c == '.'),
            '.' => self.advance_while(|c| c == '.'),
            '=' | '~' | '<' | '>' => {
                self.advance();
                if self.ch == '=' {
                    self.advance();
                }
            }
            '\\' => {
                self.advance();
                self.advance();
            }
            quote @ ('"' | '\'') => {
                self.advance();
                self.advance_while(|c| c != quote);
                // closing quote; no-op when unterminated
                self.advance();
            }
            _ => {}
        }
    }

    fn classify(&mut self, lexeme: String, location: SourceLocation) -> Token {
        if let Some(kind) = TokenKind::reserved(&lexeme) {
            return self.emit(kind, lexeme, location);
        }

        let first = lexeme.chars().next();
        let last = lexeme.chars().next_back();
        match first {
            Some(quote @ ('"' | '\'')) if lexeme.len() > 1 && last == Some(quote) => {
                let body = lexeme[1..lexeme.len() - 1].to_string();
                self.emit(TokenKind::String, body, location)
            }
            Some(c) if c.is_ascii_digit() => self.emit(TokenKind::Number, lexeme, location),
            Some(c) if is_letter(c) => self.emit(TokenKind::Identifier, lexeme, location),
            // consumed, but nothing accepts it (`~`, `....`, an open string)
            Some(_) => self.emit(TokenKind::Illegal, lexeme, location),
            None if self.is_at_end() => self.emit(TokenKind::EndOfInput, String::new(), location),
            None => {
                let literal = self.ch.to_string();
                self.advance();
                self.emit(TokenKind::Illegal, literal, location)
            }
        }
    }

    fn emit(&self, kind: TokenKind, literal: String, location: SourceLocation) -> Token {
        if kind == TokenKind::Illegal {
            debug!(
                literal = literal.as_str(),
                line = location.line,
                column = location.column,
                "illegal input"
            );
        } else {
            trace!(kind = %kind, literal = literal.as_str(), "token");
        }
        Token::new(kind, literal, location)
    }

    /// Move the cursor one character forward. The only place the cursor moves.
    fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        if self.ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.position = self.read_position;
        self.read_position += 1;
        self.ch = self.source.get(self.position).copied().unwrap_or(SENTINEL);
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while !self.is_at_end() && predicate(self.ch) {
            self.advance();
        }
    }

    fn peek_char(&self) -> char {
        self.source.get(self.read_position).copied().unwrap_or(SENTINEL)
    }

    /// Does the text at the cursor begin with `marker`?
    fn starts_with(&self, marker: &str) -> bool {
        let mut rest = self.source[self.position..].iter();
        marker.chars().all(|m| rest.next() == Some(&m))
    }

    /// Do the characters just before the cursor spell `marker`?
    fn follows(&self, marker: &str) -> bool {
        let len = marker.chars().count();
        self.position >= len
            && self.source[self.position - len..self.position]
                .iter()
                .copied()
                .eq(marker.chars())
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, not including, the end-of-input token
    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.exhausted = true;
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer {}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
