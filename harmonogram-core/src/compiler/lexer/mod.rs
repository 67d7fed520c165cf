pub mod builder;
pub mod token_kind;
pub mod tokenizer;

pub use builder::build_automaton;
pub use token_kind::{TokenKind, VOCABULARY};
pub use tokenizer::{Token, Tokenizer};
