//! Harmonogram token kinds

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // field keywords
    Amplitude,
    Center,
    Color,
    Cycles,
    Direction,
    Frequency,
    Name,
    StartPhase,
    Type,

    // type values
    Oscillation,
    Rotation,

    // punctuation
    Comma,
    CommentBegin,
    CommentEnd,
    EntityBegin,
    EntityEnd,

    /// Input ran out before any literal was recognized
    Eof,
}

/// Literal vocabulary, in insertion order
pub const VOCABULARY: [(&str, TokenKind); 16] = [
    ("amplitude:", TokenKind::Amplitude),
    ("center:", TokenKind::Center),
    ("color:", TokenKind::Color),
    (",", TokenKind::Comma),
    ("/*", TokenKind::CommentBegin),
    ("*/", TokenKind::CommentEnd),
    ("cycles:", TokenKind::Cycles),
    ("direction:", TokenKind::Direction),
    ("frequency:", TokenKind::Frequency),
    ("name:", TokenKind::Name),
    ("oscillation", TokenKind::Oscillation),
    ("{", TokenKind::EntityBegin),
    ("}", TokenKind::EntityEnd),
    ("rotation", TokenKind::Rotation),
    ("startphase:", TokenKind::StartPhase),
    ("type:", TokenKind::Type),
];

impl TokenKind {
    /// Source spelling; `None` for [`TokenKind::Eof`]
    pub fn literal(self) -> Option<&'static str> {
        VOCABULARY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(literal, _)| *literal)
    }

    /// Kind of an exact literal, case-insensitively
    pub fn from_literal(text: &str) -> Option<TokenKind> {
        VOCABULARY
            .iter()
            .find(|(literal, _)| literal.eq_ignore_ascii_case(text))
            .map(|(_, kind)| *kind)
    }

    pub fn is_field(self) -> bool {
        matches!(
            self,
            TokenKind::Amplitude
                | TokenKind::Center
                | TokenKind::Color
                | TokenKind::Cycles
                | TokenKind::Direction
                | TokenKind::Frequency
                | TokenKind::Name
                | TokenKind::StartPhase
                | TokenKind::Type
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal() {
            Some(literal) => write!(f, "'{literal}'"),
            None => f.write_str("end of input"),
        }
    }
}
