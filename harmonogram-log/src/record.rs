//! Log record definition

use std::fmt;

/// Log level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Decode a level stored as `u8`
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log record
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,
    pub level: Level,
    /// Module path of the call site
    pub target: &'static str,
    pub message: String,
    /// Innermost open span, if any
    pub span_id: Option<u64>,
    /// Name of the innermost open span, if any
    pub span_name: Option<&'static str>,
}

impl Record {
    pub fn new(level: Level, target: &'static str, message: impl Into<String>) -> Self {
        Self {
            timestamp_ms: current_timestamp_ms(),
            level,
            target,
            message: message.into(),
            span_id: None,
            span_name: None,
        }
    }

    /// Attach the span the record was emitted in
    pub fn with_span(mut self, span_id: u64, span_name: &'static str) -> Self {
        self.span_id = Some(span_id);
        self.span_name = Some(span_name);
        self
    }

    /// Render as a single line: `[hh:mm:ss.mmm] LEVEL target [span]: message`
    pub fn format(&self) -> String {
        let span_info = match (self.span_id, self.span_name) {
            (Some(id), Some(name)) => format!(" [{name}#{id}]"),
            (Some(id), None) => format!(" [span={id}]"),
            _ => String::new(),
        };

        format!(
            "[{}] {} {}{}: {}",
            format_timestamp(self.timestamp_ms),
            self.level,
            self.target,
            span_info,
            self.message
        )
    }
}

fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn format_timestamp(timestamp_ms: u64) -> String {
    let secs = timestamp_ms / 1000;
    let millis = timestamp_ms % 1000;

    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_roundtrip_u8() {
        for level in [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error] {
            assert_eq!(Level::from_u8(level as u8), Some(level));
        }
        assert_eq!(Level::from_u8(9), None);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "00:00:00.000");
        assert_eq!(format_timestamp(3_723_004), "01:02:03.004");
    }

    #[test]
    fn test_record_format_with_span() {
        let record = Record::new(Level::Warn, "harmonogram::parser", "duplicate").with_span(7, "parse_file");
        let line = record.format();
        assert!(line.contains("WARN harmonogram::parser [parse_file#7]: duplicate"));
    }

    #[test]
    fn test_record_format_without_span() {
        let record = Record::new(Level::Info, "t", "hello");
        assert!(record.format().ends_with("INFO t: hello"));
    }
}
