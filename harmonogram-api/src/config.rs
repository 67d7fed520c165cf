//! API layer configuration
//!
//! Holds the run configuration and the optional process-wide singleton used
//! by the CLI.

use harmonogram_config::ParserConfig;
use harmonogram_log::Logger;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Configuration of one parse run
#[derive(Clone)]
pub struct RunConfig {
    /// Parser configuration
    pub parser: ParserConfig,
    /// Logger handed to the parser
    pub logger: Arc<Logger>,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("parser", &self.parser)
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            logger: Logger::noop(),
        }
    }
}

impl RunConfig {
    pub fn new(parser: ParserConfig, logger: Arc<Logger>) -> Self {
        Self { parser, logger }
    }
}

static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize the global configuration (call once, before [`config`])
///
/// # Panics
/// If the configuration is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Global configuration reference
///
/// # Panics
/// If the configuration is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
