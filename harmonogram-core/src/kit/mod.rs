//! Language-independent building blocks

pub mod lexer;
