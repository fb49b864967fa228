//! Recursive-descent parser for the toy language
//!
//! Grammar:
//!
//! ```text
//! Program        := "begin" StatementBlock "end"
//! StatementBlock := { Statement }
//! Statement      := DeclareStmt | AssignStmt | ReadStmt | WriteStmt
//! DeclareStmt    := "declare" Identifier ";"
//! AssignStmt     := "set" Identifier "=" Expression ";"
//! Expression     := Identifier Operator Identifier
//! ReadStmt       := "read" Identifier ";"
//! WriteStmt      := "write" Identifier ";"
//! ```
//!
//! Each nonterminal is one method. The only primitive is [`Parser::expect`],
//! which checks the current token against one terminal and advances past it.
//! There is no recovery: the first mismatch is returned and parsing stops.

use crate::toylang::lexer::{Keyword, Token, TokenKind, TokenStream};
use crate::toylang::parser::cursor::Cursor;
use crate::toylang::parser::error::{Expectation, Found, ParseError};
use crate::toylang::parser::trace::{TraceEvent, TraceSink};
use log::{debug, trace};

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    statements: usize,
}

impl<'a> Parser<'a> {
    pub fn new(stream: &'a TokenStream) -> Self {
        Self {
            cursor: Cursor::new(stream),
            statements: 0,
        }
    }

    /// Parse the whole stream, reporting each recognized statement to `sink`.
    ///
    /// Succeeds only if the program is followed directly by the end of the
    /// stream.
    pub fn run(mut self, sink: &mut dyn TraceSink) -> Result<(), ParseError> {
        self.program(sink)?;
        if !self.cursor.at_end() {
            return Err(self.mismatch(Expectation::EndOfInput));
        }
        debug!("program accepted with {} statements", self.statements);
        sink.record(TraceEvent::Program {
            statements: self.statements,
        });
        Ok(())
    }

    fn mismatch(&self, expected: Expectation) -> ParseError {
        ParseError::new(
            expected,
            Found::from_current(self.cursor.current()),
            self.cursor.position(),
        )
    }

    /// Match the current token against `expected` and step past it
    fn expect(&mut self, expected: Expectation) -> Result<&'a Token, ParseError> {
        match self.cursor.current() {
            Some(token) if expected.is_met_by(token) => {
                trace!("matched {:?} at {}", token.lexeme, self.cursor.position());
                self.cursor.advance();
                Ok(token)
            }
            _ => Err(self.mismatch(expected)),
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<&'a Token, ParseError> {
        self.expect(Expectation::keyword(keyword))
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        self.expect(Expectation::Category(TokenKind::Identifier))
            .map(|token| token.lexeme.clone())
    }

    fn expect_semicolon(&mut self) -> Result<&'a Token, ParseError> {
        self.expect(Expectation::Lexeme(";"))
    }

    fn program(&mut self, sink: &mut dyn TraceSink) -> Result<(), ParseError> {
        self.expect_keyword(Keyword::Begin)?;
        self.statement_block(sink)?;
        self.expect_keyword(Keyword::End)?;
        Ok(())
    }

    fn statement_block(&mut self, sink: &mut dyn TraceSink) -> Result<(), ParseError> {
        loop {
            match self.cursor.current() {
                Some(token) if token.is_keyword(Keyword::End) => return Ok(()),
                _ => self.statement(sink)?,
            }
        }
    }

    fn statement(&mut self, sink: &mut dyn TraceSink) -> Result<(), ParseError> {
        let keyword = match self.cursor.current().map(|token| token.kind) {
            Some(TokenKind::ReservedWord(keyword)) => keyword,
            _ => return Err(self.mismatch(Expectation::Statement)),
        };

        let event = match keyword {
            Keyword::Declare => self.declare_statement()?,
            Keyword::Set => self.assign_statement()?,
            Keyword::Read => self.read_statement()?,
            Keyword::Write => self.write_statement()?,
            Keyword::Begin | Keyword::End => return Err(self.mismatch(Expectation::Statement)),
        };

        debug!("{}", event);
        self.statements += 1;
        sink.record(event);
        Ok(())
    }

    fn declare_statement(&mut self) -> Result<TraceEvent, ParseError> {
        self.expect_keyword(Keyword::Declare)?;
        let name = self.expect_identifier()?;
        self.expect_semicolon()?;
        Ok(TraceEvent::Declare { name })
    }

    fn assign_statement(&mut self) -> Result<TraceEvent, ParseError> {
        self.expect_keyword(Keyword::Set)?;
        let target = self.expect_identifier()?;
        self.expect(Expectation::Lexeme("="))?;
        let (left, operator, right) = self.expression()?;
        self.expect_semicolon()?;
        Ok(TraceEvent::Assign {
            target,
            left,
            operator,
            right,
        })
    }

    fn expression(&mut self) -> Result<(String, String, String), ParseError> {
        let left = self.expect_identifier()?;
        let operator = self
            .expect(Expectation::Category(TokenKind::Operator))?
            .lexeme
            .clone();
        let right = self.expect_identifier()?;
        Ok((left, operator, right))
    }

    fn read_statement(&mut self) -> Result<TraceEvent, ParseError> {
        self.expect_keyword(Keyword::Read)?;
        let name = self.expect_identifier()?;
        self.expect_semicolon()?;
        Ok(TraceEvent::Read { name })
    }

    fn write_statement(&mut self) -> Result<TraceEvent, ParseError> {
        self.expect_keyword(Keyword::Write)?;
        let name = self.expect_identifier()?;
        self.expect_semicolon()?;
        Ok(TraceEvent::Write { name })
    }
}

/// Parse a token stream, collecting the trace
pub fn parse(stream: &TokenStream) -> Result<Vec<TraceEvent>, ParseError> {
    let mut events: Vec<TraceEvent> = Vec::new();
    Parser::new(stream).run(&mut events)?;
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toylang::lexer::tokenize;

    fn parse_source(source: &str) -> Result<Vec<TraceEvent>, ParseError> {
        parse(&tokenize(source))
    }

    #[test]
    fn test_empty_program() {
        let events = parse_source("begin end").unwrap();
        assert_eq!(events, vec![TraceEvent::Program { statements: 0 }]);
    }

    #[test]
    fn test_assign_captures_expression() {
        let events = parse_source("begin set x = y + z ; end").unwrap();
        assert_eq!(
            events[0],
            TraceEvent::Assign {
                target: "x".into(),
                left: "y".into(),
                operator: "+".into(),
                right: "z".into(),
            }
        );
        assert_eq!(events[1], TraceEvent::Program { statements: 1 });
    }

    #[test]
    fn test_first_token_is_checked() {
        let error = parse_source("declare x ; end").unwrap_err();
        assert_eq!(error.to_string(), "Expected 'begin', but got 'declare'.");
        assert_eq!(error.position, 0);
    }

    #[test]
    fn test_empty_input_expects_begin() {
        let error = parse_source("").unwrap_err();
        assert_eq!(error.to_string(), "Expected 'begin', but got 'EOF'.");
    }

    #[test]
    fn test_missing_semicolon() {
        let error = parse_source("begin declare x end").unwrap_err();
        assert_eq!(error.expected, Expectation::Lexeme(";"));
        assert_eq!(error.found.lexeme(), "end");
        assert_eq!(error.position, 3);
    }

    #[test]
    fn test_nested_begin_is_unexpected() {
        let error = parse_source("begin begin end end").unwrap_err();
        assert_eq!(error.to_string(), "Unexpected token: begin");
    }

    #[test]
    fn test_unterminated_block_hits_end_of_stream() {
        let error = parse_source("begin read x ;").unwrap_err();
        assert_eq!(error.to_string(), "Unexpected token: EOF");
        assert_eq!(error.position, 4);
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let error = parse_source("begin end x").unwrap_err();
        assert_eq!(error.expected, Expectation::EndOfInput);
        assert_eq!(error.to_string(), "Unexpected token: x");
    }

    #[test]
    fn test_assignment_requires_operator_category() {
        let error = parse_source("begin set x = y z ; end").unwrap_err();
        assert_eq!(error.to_string(), "Expected 'OPERATOR', but got 'z'.");
    }

    #[test]
    fn test_number_is_not_an_identifier() {
        let error = parse_source("begin set x = y + 1 ; end").unwrap_err();
        assert_eq!(error.to_string(), "Expected 'IDENTIFIER', but got '1'.");
    }

    #[test]
    fn test_statements_before_failure_are_recorded() {
        let stream = tokenize("begin read a ; write b ; set c ; end");
        let mut events: Vec<TraceEvent> = Vec::new();
        let error = Parser::new(&stream).run(&mut events).unwrap_err();
        assert_eq!(
            events,
            vec![
                TraceEvent::Read { name: "a".into() },
                TraceEvent::Write { name: "b".into() },
            ]
        );
        assert_eq!(error.to_string(), "Expected '=', but got ';'.");
    }
}
