//! Harmonogram API - parse orchestration layer
//!
//! Provides the unified entry points over `harmonogram-core`:
//! - Parse orchestration over the native or any virtual file system
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (HarmonogramError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `parse_files(paths, &config)` API.

use harmonogram_core::Parser;
use harmonogram_log::{debug, info};
use harmonogram_vfs::{NativeFileSystem, VirtualFileSystem};
use std::path::Path;

pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

pub mod error;
pub mod types;
pub use error::{ErrorReport, HarmonogramError};
pub use types::{ParseSummary, SourceExcerpt};

pub use harmonogram_config::{LogLevel, ParserConfig, Phase};
pub use harmonogram_core::{Entity, Location, LocationMap, ParseError, ParseOutput, Range};

/// Parse files from the native file system
pub fn parse_files<P: AsRef<Path>>(
    paths: &[P],
    config: &RunConfig,
) -> Result<ParseOutput, HarmonogramError> {
    parse_with_fs(&NativeFileSystem::new(), paths, config)
}

/// Parse files through an explicit file system
pub fn parse_with_fs<P: AsRef<Path>>(
    fs: &dyn VirtualFileSystem,
    paths: &[P],
    config: &RunConfig,
) -> Result<ParseOutput, HarmonogramError> {
    info!(config.logger, "Starting parse of {} file(s)", paths.len());

    let parser = Parser::new(config.parser, config.logger.clone());
    let output = parser.parse(fs, paths)?;

    debug!(config.logger, "parse completed: {}", ParseSummary::of(&output));
    Ok(output)
}

/// Parse a single in-memory source
pub fn parse_source(
    file: &str,
    source: &str,
    config: &RunConfig,
) -> Result<ParseOutput, HarmonogramError> {
    let parser = Parser::new(config.parser, config.logger.clone());
    Ok(parser.parse_str(file, source)?)
}

/// Name of the most specific entity defined around `location`
pub fn locate<'a>(output: &'a ParseOutput, location: &Location) -> Option<&'a str> {
    output.locations.resolve(location)
}

/// Read one line of a file, `None` when the file is shorter
pub fn source_line(
    fs: &dyn VirtualFileSystem,
    file: &str,
    line: usize,
) -> Result<Option<SourceExcerpt>, HarmonogramError> {
    let source = fs.read_to_string(Path::new(file))?;
    Ok(line
        .checked_sub(1)
        .and_then(|index| source.lines().nth(index))
        .map(|text| SourceExcerpt {
            file: file.to_string(),
            line,
            text: text.to_string(),
        }))
}

// ==================== Global config API ====================

/// Parse native files using the global config
///
/// # Panics
/// If global config is not initialized
pub fn parse<P: AsRef<Path>>(paths: &[P]) -> Result<ParseOutput, HarmonogramError> {
    parse_files(paths, get_config())
}

/// Parse with default config (auto-initializes if needed)
pub fn quick_parse<P: AsRef<Path>>(paths: &[P]) -> Result<ParseOutput, HarmonogramError> {
    if !is_initialized() {
        init_config(RunConfig::default());
    }
    parse(paths)
}
