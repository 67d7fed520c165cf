//! In-memory character stream
//!
//! Decoded once from a `&str`; supports single-character lookahead and
//! conditional consumption. The stream knows nothing about lines or columns,
//! callers feed what they consume into a [`Cursor`](super::Cursor).

#[derive(Debug, Clone)]
pub struct CharStream {
    chars: Vec<char>,
    pos: usize,
}

impl CharStream {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// Next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume and return the next character
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume the longest prefix whose characters satisfy `pred`
    pub fn consume_while(&mut self, mut pred: impl FnMut(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            taken.push(c);
            self.pos += 1;
        }
        taken
    }

    /// Consume leading whitespace, returning it
    pub fn skip_whitespace(&mut self) -> String {
        self.consume_while(char::is_whitespace)
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Characters consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.chars.len() - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut stream = CharStream::new("ab");
        assert_eq!(stream.peek(), Some('a'));
        assert_eq!(stream.peek(), Some('a'));
        assert_eq!(stream.next_char(), Some('a'));
        assert_eq!(stream.next_char(), Some('b'));
        assert_eq!(stream.next_char(), None);
        assert!(stream.is_eof());
    }

    #[test]
    fn test_consume_while_stops_at_mismatch() {
        let mut stream = CharStream::new("12.5, 3");
        let number = stream.consume_while(|c| c.is_ascii_digit() || c == '.');
        assert_eq!(number, "12.5");
        assert_eq!(stream.peek(), Some(','));
        assert_eq!(stream.position(), 4);
    }

    #[test]
    fn test_skip_whitespace_returns_skipped_text() {
        let mut stream = CharStream::new(" \n\tname");
        assert_eq!(stream.skip_whitespace(), " \n\t");
        assert_eq!(stream.remaining(), 4);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let mut stream = CharStream::new("äb");
        assert_eq!(stream.next_char(), Some('ä'));
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = CharStream::new("");
        assert!(stream.is_eof());
        assert_eq!(stream.peek(), None);
        assert_eq!(stream.consume_while(|_| true), "");
    }
}
