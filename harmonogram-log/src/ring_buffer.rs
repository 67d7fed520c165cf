//! Ring buffer sink

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Ring buffer statistics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingBufferStats {
    pub record_count: usize,
    /// Records evicted because the buffer was full
    pub dropped_count: usize,
    pub capacity: usize,
}

/// Keeps the most recent `capacity` records; the oldest record is evicted
/// when a new one arrives at capacity.
pub struct LogRingBuffer {
    inner: Mutex<VecDeque<Record>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            dropped: AtomicUsize::new(0),
        })
    }

    fn records(&self) -> MutexGuard<'_, VecDeque<Record>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, record: Record) {
        if self.capacity == 0 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        let mut inner = self.records();
        if inner.len() >= self.capacity {
            inner.pop_front();
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        inner.push_back(record);
    }

    /// Snapshot of the buffered records, oldest first
    pub fn dump_records(&self) -> Vec<Record> {
        self.records().iter().cloned().collect()
    }

    /// Buffered records formatted one per line
    pub fn dump(&self) -> String {
        self.records()
            .iter()
            .map(Record::format)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True if any buffered record's message contains `needle`
    pub fn contains_message(&self, needle: &str) -> bool {
        self.records().iter().any(|r| r.message.contains(needle))
    }

    pub fn clear(&self) {
        self.records().clear();
        self.dropped.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> RingBufferStats {
        RingBufferStats {
            record_count: self.len(),
            dropped_count: self.dropped_count(),
            capacity: self.capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl LogSink for LogRingBuffer {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}
