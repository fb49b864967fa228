//! Grammar vocabulary for the toy language
//!
//! Every word list and lexical pattern the lexer knows about lives here. The
//! combined scanning regex is assembled once from these pieces, in priority
//! order: operators, identifiers, numbers, the semicolon, then a single-character
//! catch-all so stray characters surface as unknown tokens instead of vanishing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Reserved words, in the order they are listed in the grammar docs.
pub const RESERVED_WORDS: &[&str] = &["read", "write", "begin", "end", "declare", "set"];

/// Datatype names. Recognized by the lexer, unused by the grammar.
pub const DATATYPES: &[&str] = &["integer", "float", "string", "boolean"];

/// Operators, including the assignment `=`.
pub const OPERATORS: &[&str] = &["=", "+", "-", "*", "/"];

pub const IDENTIFIER_PATTERN: &str = r"[a-zA-Z][a-zA-Z0-9]*";
pub const NUMBER_PATTERN: &str = r"[0-9]+(\.[0-9]+)?";
pub const SEMICOLON: &str = ";";

/// Catch-all for any single character the vocabulary does not cover
const UNKNOWN_PATTERN: &str = r"\S";

/// Build the alternation used to scan source text.
///
/// Alternatives are tried left to right at each position (leftmost-first), so
/// operators win over everything and the catch-all only fires when nothing else
/// matches.
pub fn combined_pattern() -> String {
    let mut alternatives: Vec<String> = OPERATORS.iter().map(|op| regex::escape(op)).collect();
    alternatives.push(IDENTIFIER_PATTERN.to_string());
    alternatives.push(NUMBER_PATTERN.to_string());
    alternatives.push(regex::escape(SEMICOLON));
    alternatives.push(UNKNOWN_PATTERN.to_string());
    alternatives.join("|")
}

/// Lazy-compiled scanner regex
pub static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&combined_pattern()).expect("combined token pattern is valid"));

/// Lazy-compiled full-match identifier regex
pub static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{})$", IDENTIFIER_PATTERN)).expect("identifier pattern is valid")
});

/// Lazy-compiled full-match number regex
pub static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{})$", NUMBER_PATTERN)).expect("number pattern is valid")
});

pub fn is_reserved_word(lexeme: &str) -> bool {
    RESERVED_WORDS.contains(&lexeme)
}

pub fn is_datatype(lexeme: &str) -> bool {
    DATATYPES.contains(&lexeme)
}

pub fn is_operator(lexeme: &str) -> bool {
    OPERATORS.contains(&lexeme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_pattern_lists_operators_first() {
        let pattern = combined_pattern();
        assert!(pattern.starts_with(r"=|\+|\-|\*|/|"));
        assert!(pattern.ends_with(r";|\S"));
    }

    #[test]
    fn test_identifier_regex_is_anchored() {
        assert!(IDENTIFIER_REGEX.is_match("x1"));
        assert!(!IDENTIFIER_REGEX.is_match("1x"));
        assert!(!IDENTIFIER_REGEX.is_match("x;"));
    }

    #[test]
    fn test_number_regex_accepts_one_decimal_point() {
        assert!(NUMBER_REGEX.is_match("42"));
        assert!(NUMBER_REGEX.is_match("3.14"));
        assert!(!NUMBER_REGEX.is_match("3."));
        assert!(!NUMBER_REGEX.is_match("1.2.3"));
    }

    #[test]
    fn test_vocabulary_membership() {
        assert!(is_reserved_word("declare"));
        assert!(!is_reserved_word("integer"));
        assert!(is_datatype("boolean"));
        assert!(is_operator("/"));
        assert!(!is_operator(";"));
    }
}
