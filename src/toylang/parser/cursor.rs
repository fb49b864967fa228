//! Read cursor over a token stream
//!
//! The cursor is primed onto the first token when it is created and only ever
//! moves forward. `current()` is `None` once the end marker is reached.

use crate::toylang::lexer::{Token, TokenStream};

#[derive(Debug)]
pub struct Cursor<'a> {
    stream: &'a TokenStream,
    index: usize,
    current: Option<&'a Token>,
}

impl<'a> Cursor<'a> {
    pub fn new(stream: &'a TokenStream) -> Self {
        Self {
            stream,
            index: 0,
            current: stream.get(0),
        }
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.current
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Step past the current token. Stepping at the end marker is a no-op.
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.index += 1;
            self.current = self.stream.get(self.index);
        }
    }
}
