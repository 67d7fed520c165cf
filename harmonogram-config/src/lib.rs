//! Harmonogram Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It is the shared configuration vocabulary of the Harmonogram crates.

use serde::{Deserialize, Serialize};

/// Default simulation step, in seconds.
pub const DEFAULT_TIME_DELTA: f64 = 0.01;

/// Configuration for parser behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Per-step time increment used to derive history buffer hints
    pub time_delta: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            time_delta: DEFAULT_TIME_DELTA,
        }
    }
}

impl ParserConfig {
    /// Config with an explicit time step
    pub fn with_time_delta(time_delta: f64) -> Self {
        Self { time_delta }
    }

    /// Config with an explicit time step, `None` unless it is finite and
    /// positive
    pub fn checked(time_delta: f64) -> Option<Self> {
        (time_delta.is_finite() && time_delta > 0.0).then(|| Self::with_time_delta(time_delta))
    }

    pub fn is_valid(&self) -> bool {
        Self::checked(self.time_delta).is_some()
    }
}

/// Processing phase, used for phase-specific log filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Tokenizer,
    Parser,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Tokenizer => "tokenizer",
            Phase::Parser => "parser",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("harmonogram::{}", self.as_str())
    }
}

/// Log verbosity as written in project files and on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitively. `silent` maps to `Error`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
