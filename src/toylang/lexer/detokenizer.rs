//! Detokenizer for the toy language
//!
//! Converts a stream of tokens back into source text. Whitespace is not kept by
//! the lexer, so lexemes are joined with single spaces: the result equals the
//! original source after whitespace normalization.

use crate::toylang::lexer::tokens::Token;

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse every whitespace run to one space and trim the ends
pub fn normalize_whitespace(source: &str) -> String {
    source.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toylang::lexer::tokenize;

    #[test]
    fn test_detokenize_spaced_program() {
        let source = "begin read x ; write x ; end";
        let stream = tokenize(source);
        assert_eq!(detokenize(stream.as_slice()), source);
    }

    #[test]
    fn test_detokenize_normalizes_layout() {
        let source = "begin\n    declare x ;\n\tset  x = y + z ;\nend\n";
        let stream = tokenize(source);
        assert_eq!(
            detokenize(stream.as_slice()),
            normalize_whitespace(source)
        );
    }

    #[test]
    fn test_detokenize_inserts_spaces_between_adjacent_tokens() {
        let stream = tokenize("set x=y+z;");
        assert_eq!(detokenize(stream.as_slice()), "set x = y + z ;");
    }

    #[test]
    fn test_detokenize_empty() {
        assert_eq!(detokenize(&[]), "");
    }
}
