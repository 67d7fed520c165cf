//! harmonogram-log - structured logging
//!
//! Logging used by the Harmonogram tokenizer, parser and tools:
//! - **Explicit**: no global logger, components receive an `Arc<Logger>`
//! - **Pluggable**: records fan out to any number of [`LogSink`]s
//! - **Capturable**: [`LogRingBuffer`] keeps the last N records, for tests and
//!   crash dumps
//!
//! # Quick start
//!
//! ```
//! use harmonogram_log::{debug, Level, LogRingBuffer, Logger};
//!
//! let ring = LogRingBuffer::new(100);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//! debug!(logger, "parsed {} entities", 3);
//! assert_eq!(ring.len(), 1);
//! ```

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use record::{Level, Record};

// trace!, debug!, info!, warn!, error!, log! are exported at the crate root
// through #[macro_export].

pub use config::{LogConfig, OutputConfig};
pub use logger::{FileSink, LogSink, Logger, SpanGuard, StderrSink, StdoutSink};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

/// Result type of fallible logging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Logging system errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file sink could not be opened
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
