pub mod error;
pub mod parser;
pub mod values;

pub use error::{ErrorCategory, ParseError, ParseErrorKind, ParseResult};
pub use parser::Parser;
pub use values::parse_number;
