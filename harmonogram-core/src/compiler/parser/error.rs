use crate::compiler::lexer::TokenKind;
use crate::kit::lexer::Location;
use crate::model::ValidationIssue;
use serde::Serialize;
use std::fmt;

/// Parse failure with the cursor location at which it was detected
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: Location,
}

/// Broad class of a parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Malformed source
    Syntax,
    /// Well-formed entity breaking a value rule
    Validation,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Syntax => "syntax",
            ErrorCategory::Validation => "validation",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
    },

    #[error("expected ',' between values, found {found}")]
    MissingSeparator { found: TokenKind },

    #[error("unknown entity type '{found}', expected 'oscillation' or 'rotation'")]
    UnknownEntityType { found: String },

    #[error("expected an identifier after {field}, found {found}")]
    ExpectedIdentifier { field: TokenKind, found: String },

    #[error("expected a number, found {found}")]
    ExpectedNumber { found: String },

    #[error("invalid number '{text}'")]
    InvalidNumber { text: String },

    #[error("unterminated comment, expected '*/'")]
    UnterminatedComment,

    #[error("unexpected end of input, expected '}}'")]
    UnexpectedEndOfInput,

    #[error("invalid entity '{name}': {}", join_issues(.issues))]
    InvalidEntity {
        name: String,
        issues: Vec<ValidationIssue>,
    },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ParseErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParseErrorKind::InvalidEntity { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Syntax,
        }
    }

    /// Variant name, stable for machine-readable reports
    pub fn name(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => "UnexpectedToken",
            ParseErrorKind::MissingSeparator { .. } => "MissingSeparator",
            ParseErrorKind::UnknownEntityType { .. } => "UnknownEntityType",
            ParseErrorKind::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ParseErrorKind::ExpectedNumber { .. } => "ExpectedNumber",
            ParseErrorKind::InvalidNumber { .. } => "InvalidNumber",
            ParseErrorKind::UnterminatedComment => "UnterminatedComment",
            ParseErrorKind::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ParseErrorKind::InvalidEntity { .. } => "InvalidEntity",
        }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, location: Location) -> Self {
        Self { kind, location }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn file(&self) -> &str {
        &self.location.file
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.location, self.kind)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;
