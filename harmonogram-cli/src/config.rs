//! CLI configuration
//!
//! Project file, per-phase log levels and the merge of both with the
//! command line.

use harmonogram_config::{LogLevel, ParserConfig, Phase};
use std::path::{Path, PathBuf};
use tracing::Level;

/// Project file, JSON
#[derive(Debug, Default, serde::Deserialize)]
pub struct ProjectFile {
    /// Input files, relative to the project file's directory
    pub files: Vec<String>,
    /// Simulation step in seconds
    pub time_delta: Option<f64>,
    /// "silent", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
}

impl ProjectFile {
    pub fn read(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        Self::from_json(&content).map_err(|e| format!("invalid '{}': {}", path.display(), e))
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        let project: ProjectFile = serde_json::from_str(content).map_err(|e| e.to_string())?;
        if let Some(level) = &project.log_level {
            if LogLevel::parse(level).is_none() {
                return Err(format!("unknown log_level '{level}'"));
            }
        }
        if let Some(time_delta) = project.time_delta {
            check_time_delta(time_delta)?;
        }
        Ok(project)
    }

    /// Input paths resolved against the project file's directory
    pub fn resolve_files(&self, project_path: &Path) -> Vec<PathBuf> {
        let base_dir = project_path.parent().unwrap_or(Path::new("."));
        self.files.iter().map(|f| base_dir.join(f)).collect()
    }
}

/// Per-phase log levels
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub tokenizer: Option<Level>,
    pub parser: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            tokenizer: None,
            parser: None,
        }
    }
}

impl LogConfig {
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Tokenizer => self.tokenizer.unwrap_or(self.global),
            Phase::Parser => self.parser.unwrap_or(self.global),
        }
    }

    /// Most verbose level any target accepts
    pub fn most_verbose(&self) -> Level {
        [self.global, self.level_for(Phase::Tokenizer), self.level_for(Phase::Parser)]
            .into_iter()
            .max()
            .unwrap_or(self.global)
    }
}

/// Everything a run needs, after merging the project file and flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub files: Vec<PathBuf>,
    pub parser: ParserConfig,
    pub log: LogConfig,
}

impl Settings {
    /// Command line values take precedence over the project file
    pub fn merge(
        project: Option<(&Path, ProjectFile)>,
        files: Vec<PathBuf>,
        time_delta: Option<f64>,
        log_level: Option<LogLevel>,
    ) -> Self {
        let mut all_files = Vec::new();
        let mut project_delta = None;
        let mut project_level = None;
        if let Some((path, project)) = project {
            all_files = project.resolve_files(path);
            project_delta = project.time_delta;
            project_level = project.log_level.as_deref().and_then(LogLevel::parse);
        }
        all_files.extend(files);

        let parser = time_delta
            .or(project_delta)
            .map(ParserConfig::with_time_delta)
            .unwrap_or_default();
        let level = log_level.or(project_level).unwrap_or_default();

        Self {
            files: all_files,
            parser,
            log: LogConfig {
                global: tracing_level(level),
                ..LogConfig::default()
            },
        }
    }
}

/// A simulation step must be finite and positive
pub fn check_time_delta(time_delta: f64) -> Result<f64, String> {
    ParserConfig::checked(time_delta)
        .map(|config| config.time_delta)
        .ok_or_else(|| format!("time_delta must be a positive number, got {time_delta}"))
}

pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Level for the harmonogram logger feeding the tracing bridge
pub fn logger_level(level: Level) -> harmonogram_log::Level {
    match level {
        Level::TRACE => harmonogram_log::Level::Trace,
        Level::DEBUG => harmonogram_log::Level::Debug,
        Level::INFO => harmonogram_log::Level::Info,
        Level::WARN => harmonogram_log::Level::Warn,
        _ => harmonogram_log::Level::Error,
    }
}
