//! Token definitions for the toy language
//!
//! A token is the exact lexeme matched in the (lower-cased) source plus the
//! category the lexer resolved for it. Categories form a closed set; the
//! resolution order lives in [`crate::toylang::lexer::classify`].

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Reserved words of the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Read,
    Write,
    Begin,
    End,
    Declare,
    Set,
}

impl Keyword {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "read" => Some(Keyword::Read),
            "write" => Some(Keyword::Write),
            "begin" => Some(Keyword::Begin),
            "end" => Some(Keyword::End),
            "declare" => Some(Keyword::Declare),
            "set" => Some(Keyword::Set),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Read => "read",
            Keyword::Write => "write",
            Keyword::Begin => "begin",
            Keyword::End => "end",
            Keyword::Declare => "declare",
            Keyword::Set => "set",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category assigned to a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    ReservedWord(Keyword),
    Datatype,
    Identifier,
    Number,
    Semicolon,
    Operator,
    Unknown,
}

impl TokenKind {
    pub fn is_reserved_word(&self) -> bool {
        matches!(self, TokenKind::ReservedWord(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TokenKind::Unknown)
    }
}

/// Category names as printed in the token listing
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::ReservedWord(keyword) => write!(f, "{} (reserved word)", keyword),
            TokenKind::Datatype => f.write_str("DATATYPE"),
            TokenKind::Identifier => f.write_str("IDENTIFIER"),
            TokenKind::Number => f.write_str("NUMBER"),
            TokenKind::Semicolon => f.write_str("SEMI-COLON"),
            TokenKind::Operator => f.write_str("OPERATOR"),
            TokenKind::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

/// A classified lexeme and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, span: Range<usize>) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            span,
        }
    }

    /// True when this token is the given reserved word
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::ReservedWord(keyword)
    }
}

/// `<lexeme> : <category>`, one line of the token listing
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.lexeme, self.kind)
    }
}
