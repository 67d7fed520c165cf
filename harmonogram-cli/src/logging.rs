//! CLI logging setup
//!
//! Records from the harmonogram logger are re-emitted as `tracing` events
//! under per-phase targets, filtered and formatted by `tracing-subscriber`.

use crate::config::{logger_level, LogConfig};
use harmonogram_config::Phase;
use harmonogram_log::{Level, LogSink, Logger, Record};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub const CLI_TARGET: &str = "harmonogram::cli";

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Colored, multi-line (development)
    Pretty,
    Compact,
    /// Tool integration
    Json,
}

/// Install the global subscriber with per-phase filters
pub fn init(log_config: &LogConfig, format: LogFormat) {
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target(
            Phase::Tokenizer.target(),
            log_config.level_for(Phase::Tokenizer),
        )
        .with_target(Phase::Parser.target(), log_config.level_for(Phase::Parser))
        .with_target(CLI_TARGET, log_config.global);

    let stderr_layer = create_format_layer(format, io::stderr).with_filter(targets);
    tracing_subscriber::registry().with(stderr_layer).init();
}

fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

/// Logger for the parse run, bridged into `tracing`
pub fn bridged_logger(log_config: &LogConfig) -> Arc<Logger> {
    Logger::new(logger_level(log_config.most_verbose())).with_sink(TracingSink)
}

/// Phase a record belongs to, from its module path
pub fn phase_of(target: &str) -> Option<Phase> {
    if target.contains("::lexer") {
        Some(Phase::Tokenizer)
    } else if target.contains("::parser") {
        Some(Phase::Parser)
    } else {
        None
    }
}

/// Forwards harmonogram log records to `tracing`
pub struct TracingSink;

// Event targets and levels must be constants, hence one arm per pair.
macro_rules! forward {
    ($target:expr, $record:expr) => {{
        let span_name = $record.span_name.unwrap_or("-");
        match $record.level {
            Level::Trace => tracing::trace!(target: $target, span_name, "{}", $record.message),
            Level::Debug => tracing::debug!(target: $target, span_name, "{}", $record.message),
            Level::Info => tracing::info!(target: $target, span_name, "{}", $record.message),
            Level::Warn => tracing::warn!(target: $target, span_name, "{}", $record.message),
            Level::Error => tracing::error!(target: $target, span_name, "{}", $record.message),
        }
    }};
}

impl LogSink for TracingSink {
    fn write(&self, record: &Record) {
        match phase_of(record.target) {
            Some(Phase::Tokenizer) => forward!("harmonogram::tokenizer", record),
            Some(Phase::Parser) => forward!("harmonogram::parser", record),
            None => forward!("harmonogram::cli", record),
        }
    }
}
