//! API error type
//!
//! Unified error type and a structured, serializable error report.

use harmonogram_core::{ErrorCategory, ParseError};
use harmonogram_vfs::VfsError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarmonogramError {
    /// Syntax or validation failure in a source file
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// A file needed outside the parse itself could not be read
    #[error("File error: {0}")]
    FileSystem(#[from] VfsError),
}

impl HarmonogramError {
    /// Stage of the run that failed
    pub fn phase(&self) -> &'static str {
        match self {
            HarmonogramError::Parse(_) => "parser",
            HarmonogramError::FileSystem(_) => "vfs",
        }
    }

    pub fn file(&self) -> Option<&str> {
        match self {
            HarmonogramError::Parse(e) => Some(e.file()),
            HarmonogramError::FileSystem(e) => Some(e.path()),
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            HarmonogramError::Parse(e) => Some(e.line()),
            HarmonogramError::FileSystem(_) => None,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            HarmonogramError::Parse(e) => Some(e.column()),
            HarmonogramError::FileSystem(_) => None,
        }
    }

    /// Convert into a structured report.
    ///
    /// Suited to editors and tools that want data instead of text; the CLI
    /// serializes it to JSON under `--json`.
    pub fn to_report(&self) -> ErrorReport {
        match self {
            HarmonogramError::Parse(e) => ErrorReport {
                phase: self.phase(),
                category: Some(e.category()),
                file: Some(e.file().to_string()),
                line: Some(e.line()),
                column: Some(e.column()),
                error_kind: e.kind.name().to_string(),
                message: e.kind.to_string(),
            },
            HarmonogramError::FileSystem(e) => ErrorReport {
                phase: self.phase(),
                category: None,
                file: Some(e.path().to_string()),
                line: None,
                column: None,
                error_kind: vfs_kind_name(e).to_string(),
                message: e.to_string(),
            },
        }
    }
}

fn vfs_kind_name(err: &VfsError) -> &'static str {
    match err {
        VfsError::NotFound { .. } => "NotFound",
        VfsError::PermissionDenied { .. } => "PermissionDenied",
        VfsError::InvalidUtf8 { .. } => "InvalidUtf8",
        VfsError::Io { .. } => "Io",
    }
}

/// Structured error report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// Failing stage: parser, vfs
    pub phase: &'static str,
    /// Syntax or validation, for parse errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ErrorCategory>,
    pub file: Option<String>,
    /// 1-based line
    pub line: Option<usize>,
    /// Column as tracked by the cursor
    pub column: Option<usize>,
    /// Stable error variant name
    pub error_kind: String,
    /// Human readable message, without location
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.category {
            Some(category) => category.as_str(),
            None => self.phase,
        };
        match (&self.file, self.line, self.column) {
            (Some(file), Some(line), Some(col)) => {
                write!(f, "[{}:{}:{}] {} error: {}", file, line, col, kind, self.message)
            }
            _ => write!(f, "[{}] {} error: {}", self.phase, kind, self.message),
        }
    }
}

impl ErrorReport {
    /// One-line form for terminals
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonogram_core::{Location, ParseErrorKind, TokenKind};

    fn parse_error() -> HarmonogramError {
        HarmonogramError::Parse(ParseError::new(
            ParseErrorKind::MissingSeparator {
                found: TokenKind::EntityEnd,
            },
            Location::new("a.hg", 7, 12),
        ))
    }

    #[test]
    fn test_parse_error_location() {
        let err = parse_error();
        assert_eq!(err.phase(), "parser");
        assert_eq!(err.file(), Some("a.hg"));
        assert_eq!(err.line(), Some(7));
        assert_eq!(err.column(), Some(12));
        assert_eq!(
            err.to_string(),
            "[a.hg:7:12] expected ',' between values, found '}'"
        );
    }

    #[test]
    fn test_vfs_error_has_no_position() {
        let err: HarmonogramError = VfsError::NotFound {
            path: "gone.hg".to_string(),
        }
        .into();
        assert_eq!(err.phase(), "vfs");
        assert_eq!(err.file(), Some("gone.hg"));
        assert_eq!(err.line(), None);
        assert_eq!(err.to_report().error_kind, "NotFound");
    }

    #[test]
    fn test_report_from_parse_error() {
        let report = parse_error().to_report();
        assert_eq!(report.category, Some(ErrorCategory::Syntax));
        assert_eq!(report.error_kind, "MissingSeparator");
        assert_eq!(
            report.to_string(),
            "[a.hg:7:12] syntax error: expected ',' between values, found '}'"
        );
        assert_eq!(
            report.to_short(),
            "parser: expected ',' between values, found '}'"
        );
    }

    #[test]
    fn test_report_display_without_location() {
        let report = HarmonogramError::from(VfsError::PermissionDenied {
            path: "x.hg".to_string(),
        })
        .to_report();
        assert_eq!(report.to_string(), "[vfs] vfs error: permission denied: x.hg");
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(parse_error().to_report()).unwrap();
        assert_eq!(json["phase"], "parser");
        assert_eq!(json["category"], "syntax");
        assert_eq!(json["line"], 7);
        assert_eq!(json["error_kind"], "MissingSeparator");

        let json = serde_json::to_value(
            HarmonogramError::from(VfsError::InvalidUtf8 {
                path: "b.hg".to_string(),
            })
            .to_report(),
        )
        .unwrap();
        assert!(json.get("category").is_none());
        assert!(json["line"].is_null());
    }
}
