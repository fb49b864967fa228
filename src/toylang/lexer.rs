//! Lexer module for the toy language
//!
//! This module contains the tokenization logic: the grammar vocabulary, token
//! definitions, the immutable token stream and the scanner itself.
//!
//! Case folding is not the lexer's job. Callers hand in text that is already
//! lower-cased (see [`normalize_source`]); an upper-case `BEGIN` reaching the
//! lexer is just an identifier.

pub mod detokenizer;
pub mod lexer_impl;
pub mod stream;
pub mod tokens;
pub mod vocabulary;

pub use detokenizer::{detokenize, normalize_whitespace};
pub use lexer_impl::{classify, normalize_source, tokenize};
pub use stream::TokenStream;
pub use tokens::{Keyword, Token, TokenKind};

/// Normalize raw program text and tokenize it in one step
pub fn lex(source: &str) -> TokenStream {
    tokenize(&normalize_source(source))
}
