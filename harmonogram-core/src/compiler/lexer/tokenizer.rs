//! Per-file tokenizer
//!
//! Drives the shared automaton over one file's characters. Literal field
//! values bypass the automaton through the direct reads
//! ([`Tokenizer::read_identifier`], [`Tokenizer::read_number_text`]); every
//! character consumed either way advances the cursor.

use super::token_kind::TokenKind;
use crate::kit::lexer::{Automaton, CharStream, Cursor, Location, StateId};
use harmonogram_log::{trace, Logger};
use std::sync::Arc;

/// A recognized token and the raw text consumed to reach it
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Everything read since the previous token, including leading text
    pub text: String,
}

pub struct Tokenizer<'a> {
    automaton: &'a Automaton<TokenKind>,
    state: StateId,
    stream: CharStream,
    cursor: Cursor,
    logger: Arc<Logger>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(
        automaton: &'a Automaton<TokenKind>,
        file: impl Into<String>,
        source: &str,
        logger: Arc<Logger>,
    ) -> Self {
        Self {
            automaton,
            state: automaton.root(),
            stream: CharStream::new(source),
            cursor: Cursor::new(file),
            logger,
        }
    }

    /// Advance to the next recognized literal.
    ///
    /// Yields [`TokenKind::Eof`] once the input is exhausted without reaching
    /// a terminal state. The automaton state is carried over between calls.
    pub fn next_token(&mut self) -> Token {
        let text = self.automaton.read_next(&mut self.state, &mut self.stream);
        self.cursor.advance(&text);

        let kind = if text.is_empty() {
            TokenKind::Eof
        } else {
            self.automaton
                .terminal(self.state)
                .unwrap_or(TokenKind::Eof)
        };

        trace!(
            self.logger,
            "{} {:?} -> {:?} at {}",
            self.state,
            text,
            kind,
            self.cursor.location()
        );
        Token { kind, text }
    }

    /// Skip whitespace, then take a run of alphanumeric characters
    pub fn read_identifier(&mut self) -> String {
        let skipped = self.stream.skip_whitespace();
        self.cursor.advance(&skipped);

        let ident = self.stream.consume_while(char::is_alphanumeric);
        self.cursor.advance(&ident);
        ident
    }

    /// Skip whitespace, then take the longest run that can spell a number:
    /// alphanumerics, `.`, `+` and `-`
    pub fn read_number_text(&mut self) -> String {
        let skipped = self.stream.skip_whitespace();
        self.cursor.advance(&skipped);

        let text = self
            .stream
            .consume_while(|c| c.is_alphanumeric() || matches!(c, '.' | '+' | '-'));
        self.cursor.advance(&text);
        text
    }

    /// Current cursor location
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn is_eof(&self) -> bool {
        self.stream.is_eof()
    }

    /// Next unread character
    pub fn peek(&self) -> Option<char> {
        self.stream.peek()
    }

    /// Literal spelled by the current automaton state
    pub fn state_text(&self) -> String {
        self.automaton.token_text(self.state)
    }
}
