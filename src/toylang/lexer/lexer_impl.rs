//! Implementation of the toy language lexer
//!
//! Scanning is a single pass of the combined vocabulary regex over the source.
//! Each match becomes a candidate lexeme, which [`classify`] then resolves to a
//! category. The lexer never fails: anything it cannot place is `Unknown`.

use crate::toylang::lexer::stream::TokenStream;
use crate::toylang::lexer::tokens::{Keyword, Token, TokenKind};
use crate::toylang::lexer::vocabulary::{
    self, IDENTIFIER_REGEX, NUMBER_REGEX, SEMICOLON, TOKEN_REGEX,
};
use log::{debug, trace};

/// Resolve the category of a single lexeme.
///
/// The order is part of the contract: reserved words and datatypes also match
/// the identifier pattern, so they must be checked first.
pub fn classify(lexeme: &str) -> TokenKind {
    if vocabulary::is_reserved_word(lexeme) {
        if let Some(keyword) = Keyword::from_lexeme(lexeme) {
            return TokenKind::ReservedWord(keyword);
        }
    }
    if vocabulary::is_datatype(lexeme) {
        TokenKind::Datatype
    } else if IDENTIFIER_REGEX.is_match(lexeme) {
        TokenKind::Identifier
    } else if NUMBER_REGEX.is_match(lexeme) {
        TokenKind::Number
    } else if lexeme == SEMICOLON {
        TokenKind::Semicolon
    } else if vocabulary::is_operator(lexeme) {
        TokenKind::Operator
    } else {
        TokenKind::Unknown
    }
}

/// Tokenize normalized source text
pub fn tokenize(source: &str) -> TokenStream {
    let mut tokens = Vec::new();

    for found in TOKEN_REGEX.find_iter(source) {
        let lexeme = found.as_str();
        if lexeme.trim().is_empty() {
            continue;
        }
        let kind = classify(lexeme);
        trace!("lexeme {:?} at {:?} -> {}", lexeme, found.range(), kind);
        tokens.push(Token::new(lexeme, kind, found.range()));
    }

    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    TokenStream::new(tokens)
}

/// Lower-case raw program text before lexing.
///
/// The grammar vocabulary is all lower-case, so `BEGIN` and `begin` are the same
/// word once normalized.
pub fn normalize_source(source: &str) -> String {
    source.to_lowercase()
}
