//! Main module for toylang library functionality

pub mod config;
pub mod lexer;
pub mod parser;
pub mod processor;
