//! API input/output types

use harmonogram_core::{Entity, ParseOutput};
use serde::Serialize;

/// Entity counts of a parse run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub simple: usize,
    pub composite: usize,
    /// Names in the location map
    pub locations: usize,
}

impl ParseSummary {
    pub fn of(output: &ParseOutput) -> Self {
        let composite = output
            .entities
            .iter()
            .filter(|e| matches!(e, Entity::Composite(_)))
            .count();
        Self {
            simple: output.entities.len() - composite,
            composite,
            locations: output.locations.len(),
        }
    }
}

impl std::fmt::Display for ParseSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} simple, {} composite, {} located",
            self.simple, self.composite, self.locations
        )
    }
}

/// One line of a source file, for error display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceExcerpt {
    pub file: String,
    /// 1-based
    pub line: usize,
    pub text: String,
}
