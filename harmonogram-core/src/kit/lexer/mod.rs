//! Generic lexing toolkit: literal automaton, character stream and source
//! locations. Nothing here knows the Harmonogram vocabulary.

pub mod automaton;
pub mod location;
pub mod stream;

pub use automaton::{Automaton, StateId};
pub use location::{Cursor, Location, Range};
pub use stream::CharStream;
