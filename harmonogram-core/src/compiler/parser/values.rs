//! Field value readers
//!
//! Values are read straight from the character stream; only the separators
//! between tuple elements go through the automaton.

use super::error::{ParseErrorKind, ParseResult};
use super::parser::FileParser;
use crate::compiler::lexer::TokenKind;
use crate::model::{Color, EntityType, Position};

/// Parse a complete number token; partial parses and non-finite values are
/// rejected
pub fn parse_number(text: &str) -> Result<f64, ParseErrorKind> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseErrorKind::InvalidNumber {
            text: text.to_string(),
        }),
    }
}

impl FileParser<'_> {
    /// Description of the next unread character, for diagnostics
    fn found(&self) -> String {
        match self.tokenizer.peek() {
            Some(c) => format!("'{c}'"),
            None => "end of input".to_string(),
        }
    }

    pub(super) fn identifier(&mut self, field: TokenKind) -> ParseResult<String> {
        let ident = self.tokenizer.read_identifier();
        if ident.is_empty() {
            let found = self.found();
            return Err(self.error(ParseErrorKind::ExpectedIdentifier { field, found }));
        }
        Ok(ident)
    }

    pub(super) fn number(&mut self) -> ParseResult<f64> {
        let text = self.tokenizer.read_number_text();
        if text.is_empty() {
            let found = self.found();
            return Err(self.error(ParseErrorKind::ExpectedNumber { found }));
        }
        parse_number(&text).map_err(|kind| self.error(kind))
    }

    fn separator(&mut self) -> ParseResult<()> {
        match self.tokenizer.next_token().kind {
            TokenKind::Comma => Ok(()),
            found => Err(self.error(ParseErrorKind::MissingSeparator { found })),
        }
    }

    /// `<x>, <y>`
    pub(super) fn position(&mut self) -> ParseResult<Position> {
        let x = self.number()?;
        self.separator()?;
        let y = self.number()?;
        Ok(Position::new(x, y))
    }

    /// `<r>, <g>, <b>, <a>`
    pub(super) fn color(&mut self) -> ParseResult<Color> {
        let r = self.number()?;
        self.separator()?;
        let g = self.number()?;
        self.separator()?;
        let b = self.number()?;
        self.separator()?;
        let a = self.number()?;
        Ok(Color::new(r, g, b, a))
    }

    pub(super) fn entity_type(&mut self) -> ParseResult<EntityType> {
        let name = self.tokenizer.read_identifier();
        match EntityType::from_name(&name) {
            Some(entity_type) => Ok(entity_type),
            None => Err(self.error(ParseErrorKind::UnknownEntityType { found: name })),
        }
    }
}
