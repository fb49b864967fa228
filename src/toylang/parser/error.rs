//! Parse errors
//!
//! The parser has exactly one failure mode: the current token does not satisfy
//! the grammar rule being applied. [`ParseError`] records what the rule wanted,
//! what it found, and the cursor position at which it gave up.

use crate::toylang::lexer::{Keyword, Token, TokenKind};
use serde::Serialize;
use std::fmt;

/// What the active grammar rule required at the point of failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expectation {
    /// A literal terminal such as `begin`, `;` or `=`
    Lexeme(&'static str),
    /// Any token of a category, such as an identifier
    Category(TokenKind),
    /// One of the statement-leading keywords, or `end`
    Statement,
    /// Nothing: the program is over
    EndOfInput,
}

impl Expectation {
    pub fn keyword(keyword: Keyword) -> Self {
        Expectation::Lexeme(keyword.as_str())
    }

    /// Whether `token` satisfies this expectation
    pub fn is_met_by(&self, token: &Token) -> bool {
        match self {
            Expectation::Lexeme(lexeme) => token.lexeme == *lexeme,
            Expectation::Category(kind) => token.kind == *kind,
            Expectation::Statement | Expectation::EndOfInput => false,
        }
    }

    /// Single token this expectation names, if there is one
    fn named_token(&self) -> Option<String> {
        match self {
            Expectation::Lexeme(lexeme) => Some((*lexeme).to_string()),
            Expectation::Category(kind) => Some(kind.to_string()),
            Expectation::Statement | Expectation::EndOfInput => None,
        }
    }
}

/// The token actually under the cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "token", rename_all = "snake_case")]
pub enum Found {
    Token(Token),
    EndOfStream,
}

impl Found {
    pub fn from_current(current: Option<&Token>) -> Self {
        match current {
            Some(token) => Found::Token(token.clone()),
            None => Found::EndOfStream,
        }
    }

    pub fn lexeme(&self) -> &str {
        match self {
            Found::Token(token) => &token.lexeme,
            Found::EndOfStream => "EOF",
        }
    }
}

/// Structural mismatch between the token stream and the grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub expected: Expectation,
    pub found: Found,
    /// Index of the offending token; equals the stream length at end of input
    pub position: usize,
}

impl ParseError {
    pub fn new(expected: Expectation, found: Found, position: usize) -> Self {
        Self {
            expected,
            found,
            position,
        }
    }

    /// True when no single expected token applies
    pub fn is_unexpected_token(&self) -> bool {
        self.expected.named_token().is_none()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expected.named_token() {
            Some(expected) => write!(
                f,
                "Expected '{}', but got '{}'.",
                expected,
                self.found.lexeme()
            ),
            None => write!(f, "Unexpected token: {}", self.found.lexeme()),
        }
    }
}

impl std::error::Error for ParseError {}
