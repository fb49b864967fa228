//! # toylang
//!
//! A lexer and recursive-descent validator for the toy statement language.
//!
//! The pipeline is strictly two-phase: [`toylang::lexer`] turns normalized source
//! text into a [`toylang::lexer::TokenStream`], and [`toylang::parser`] walks
//! that stream against the fixed grammar, reporting recognized statements or the
//! first structural mismatch.
//!
//! ## Testing
//!
//! Canonical sample programs live under `docs/samples/` and are reachable through
//! [`toylang::processor::toy_sources`]. Prefer them over inline sources in tests.

pub mod toylang;
