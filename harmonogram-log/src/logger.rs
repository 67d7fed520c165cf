//! Logger and built-in sinks

use crate::record::{Level, Record};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Destination of log records
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record);
}

/// Logger state: level, sinks and the stack of open spans as (id, name)
pub struct Logger {
    level: AtomicU8,
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
    span_stack: Mutex<Vec<(u64, &'static str)>>,
    next_span_id: AtomicU64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // a panicking sink must not silence every later record
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Logger {
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
            span_stack: Mutex::new(Vec::new()),
            next_span_id: AtomicU64::new(1),
        })
    }

    /// Builder-style sink registration
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        lock(&self.sinks).push(Box::new(sink));
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Emit a record to every sink. Prefer the level macros, which skip
    /// formatting for disabled levels.
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let mut record = Record::new(level, target, message);
        if let Some(&(id, name)) = lock(&self.span_stack).last() {
            record = record.with_span(id, name);
        }

        for sink in lock(&self.sinks).iter() {
            sink.write(&record);
        }
    }

    /// Open a span; it is closed when the guard drops
    pub fn enter_span(self: &Arc<Self>, name: &'static str) -> SpanGuard {
        let id = self.next_span_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.span_stack).push((id, name));

        SpanGuard {
            logger: Arc::clone(self),
        }
    }

    pub fn span_depth(&self) -> usize {
        lock(&self.span_stack).len()
    }

    /// Logger without sinks, for tests and library defaults
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }
}

/// Pops its span when dropped
pub struct SpanGuard {
    logger: Arc<Logger>,
}

impl Drop for SpanGuard {
    fn drop(&mut self) {
        lock(&self.logger.span_stack).pop();
    }
}

// chaining: one logger can feed another
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

/// Writes formatted records to stdout
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write(&self, record: &Record) {
        println!("{}", record.format());
    }
}

/// Writes formatted records to stderr
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}

/// Appends formatted records to a file
pub struct FileSink {
    file: Mutex<std::fs::File>,
}

impl FileSink {
    pub fn new(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(FileSink {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileSink {
    #[inline(never)]
    fn write(&self, record: &Record) {
        use std::io::Write;
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", record.format());
        }
    }
}
