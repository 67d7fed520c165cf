//! One-call logger setup

use crate::logger::{FileSink, StderrSink, StdoutSink};
use crate::{Level, LogRingBuffer, Logger};
use std::sync::Arc;

/// Output target
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    Stdout,
    Stderr,
    /// Append to the file at this path
    File(String),
    /// In-memory ring buffer with this capacity
    RingBuffer(usize),
}

/// Logger configuration
///
/// ```
/// use harmonogram_log::{Level, LogConfig};
///
/// let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(1000).init();
/// assert!(ring.is_some());
/// assert!(logger.is_enabled(Level::Debug));
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// Level only, no outputs
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// Debug level to stdout, plus a 10000-record ring buffer
    pub fn dev() -> Self {
        LogConfig {
            level: Level::Debug,
            outputs: vec![OutputConfig::Stdout, OutputConfig::RingBuffer(10000)],
        }
    }

    /// Warn level to stderr, plus a 1000-record ring buffer
    pub fn production() -> Self {
        LogConfig {
            level: Level::Warn,
            outputs: vec![OutputConfig::Stderr, OutputConfig::RingBuffer(1000)],
        }
    }

    /// Silent
    pub fn test() -> Self {
        LogConfig::new(Level::Error)
    }

    pub fn with_stdout(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stdout) {
            self.outputs.push(OutputConfig::Stdout);
        }
        self
    }

    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// Build the logger. Unopenable files are skipped; use [`Self::try_init`]
    /// to surface them.
    ///
    /// Returns the logger and the last configured ring buffer, if any.
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        self.build(false)
            .unwrap_or_else(|_| (Logger::noop(), None))
    }

    /// Like [`Self::init`] but fails when a file output cannot be opened
    pub fn try_init(self) -> crate::Result<(Arc<Logger>, Option<Arc<LogRingBuffer>>)> {
        self.build(true)
    }

    fn build(self, strict: bool) -> crate::Result<(Arc<Logger>, Option<Arc<LogRingBuffer>>)> {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;

        for output in self.outputs {
            match output {
                OutputConfig::Stdout => logger.add_sink(StdoutSink),
                OutputConfig::Stderr => logger.add_sink(StderrSink),
                OutputConfig::File(path) => match FileSink::new(&path) {
                    Ok(sink) => logger.add_sink(sink),
                    Err(e) if strict => return Err(e.into()),
                    Err(_) => {}
                },
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        Ok((logger, ring_buffer))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig::new(Level::Info)
    }
}
