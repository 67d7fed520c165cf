//! Shared helpers for end-to-end parser tests

#![allow(dead_code)]

use harmonogram_core::{ParseOutput, ParseResult, Parser, ParserConfig};
use harmonogram_log::{Level, LogRingBuffer, Logger};
use harmonogram_vfs::MemoryFileSystem;
use std::sync::Arc;

/// Parser whose warnings land in the returned ring buffer
pub fn capturing_parser() -> (Parser, Arc<LogRingBuffer>) {
    let ring = LogRingBuffer::new(256);
    let logger = Logger::new(Level::Warn).with_sink(ring.clone());
    (Parser::new(ParserConfig::default(), logger), ring)
}

/// In-memory file system holding `files`
pub fn fs_with(files: &[(&str, &str)]) -> MemoryFileSystem {
    MemoryFileSystem::with_files(files.iter().copied())
}

/// Parse `names` from an in-memory file system holding `files`
pub fn parse_files(files: &[(&str, &str)], names: &[&str]) -> ParseResult<ParseOutput> {
    let parser = Parser::new(ParserConfig::default(), Logger::noop());
    parser.parse(&fs_with(files), names)
}

/// A valid rotation block named `name`
pub fn rotation(name: &str) -> String {
    format!("{{\n  name: {name}\n  type: rotation\n  frequency: 1\n}}\n")
}
