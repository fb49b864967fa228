//! Parser module for the toy language
//!
//! Validates a [`TokenStream`](crate::toylang::lexer::TokenStream) against the
//! fixed statement grammar. Success yields the trace of recognized statements;
//! failure yields a single [`ParseError`] at the first structural mismatch.

pub mod cursor;
pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod trace;

pub use error::{Expectation, Found, ParseError};
pub use parser::{parse, Parser};
pub use trace::{TraceEvent, TraceSink};
