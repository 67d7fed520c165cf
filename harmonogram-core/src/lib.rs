//! Harmonogram Core - description language front end (pure logic)
//!
//! Contains the token automaton, tokenizer, parser and entity model. Files
//! are read only through [`harmonogram_vfs::VirtualFileSystem`]; nothing
//! here writes to the terminal.
//!
//! Configuration is passed explicitly via parameters, not via global state.
//!
//! ```
//! use harmonogram_core::{Parser, ParserConfig};
//! use harmonogram_log::Logger;
//!
//! let parser = Parser::new(ParserConfig::default(), Logger::noop());
//! let output = parser
//!     .parse_str("demo.hg", "name: G { name: A type: rotation frequency: 1 }")
//!     .unwrap();
//! assert_eq!(output.entities.len(), 2);
//! assert!(output.locations.get("A").is_some());
//! ```

pub mod compiler;
pub mod kit;
pub mod model;

pub use compiler::lexer::{TokenKind, Tokenizer};
pub use compiler::parser::{ErrorCategory, ParseError, ParseErrorKind, ParseResult, Parser};
pub use kit::lexer::{Cursor, Location, Range};
pub use model::{
    Color, CompositeEntity, Entity, EntityId, EntityType, Frequency, LocationMap, ParseOutput,
    Position, SimpleEntity, ValidationIssue,
};

pub use harmonogram_config::{ParserConfig, Phase};
