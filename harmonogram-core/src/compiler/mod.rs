//! Harmonogram language front end: vocabulary, tokenizer and parser

pub mod lexer;
pub mod parser;
