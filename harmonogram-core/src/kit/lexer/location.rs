//! Source locations
//!
//! - [`Location`]: a (file, line, column) point, 1-based
//! - [`Range`]: a begin/end pair inside one file
//! - [`Cursor`]: running location, advanced by every chunk of text consumed

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

/// A point in a source file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// First character of `file`
    pub fn start_of(file: impl Into<String>) -> Self {
        Self::new(file, 1, 1)
    }

    pub fn same_file(&self, other: &Location) -> bool {
        self.file == other.file
    }
}

/// Locations are ordered by (line, column); locations in different files
/// are incomparable.
impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_file(other) {
            return None;
        }
        Some((self.line, self.column).cmp(&(other.line, other.column)))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Begin/end pair of locations
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub begin: Location,
    pub end: Location,
}

impl Range {
    pub fn new(begin: Location, end: Location) -> Self {
        Self { begin, end }
    }

    /// Both ends lie in the same file
    pub fn is_valid(&self) -> bool {
        self.begin.same_file(&self.end)
    }

    pub fn file(&self) -> &str {
        &self.begin.file
    }

    /// `begin <= point <= end`
    pub fn contains(&self, point: &Location) -> bool {
        self.is_valid() && self.begin <= *point && *point <= self.end
    }

    /// `other` lies entirely within `self`
    pub fn is_subrange(&self, other: &Range) -> bool {
        self.is_valid()
            && other.is_valid()
            && other.begin >= self.begin
            && other.end <= self.end
    }

    /// Inclusive line numbers spanned; empty for an invalid range
    pub fn lines(&self) -> RangeInclusive<usize> {
        if self.is_valid() {
            self.begin.line..=self.end.line
        } else {
            RangeInclusive::new(1, 0)
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{begin: {}, end: {}}}", self.begin, self.end)
    }
}

/// Running position within the file being read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    file: String,
    line: usize,
    column: usize,
}

impl Cursor {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: 1,
            column: 1,
        }
    }

    /// Move to line 1, column 1 of `file`
    pub fn reset(&mut self, file: impl Into<String>) {
        self.file = file.into();
        self.line = 1;
        self.column = 1;
    }

    /// Account for a consumed chunk of text.
    ///
    /// A chunk containing newlines moves the cursor down one line per
    /// newline and leaves the column at the number of characters after the
    /// last one.
    pub fn advance(&mut self, text: &str) {
        match text.rfind('\n') {
            Some(last) => {
                self.line += text.matches('\n').count();
                self.column = text[last + 1..].chars().count();
            }
            None => self.column += text.chars().count(),
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.file.clone(), self.line, self.column)
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(line: usize, column: usize) -> Location {
        Location::new("a.hg", line, column)
    }

    #[test]
    fn test_location_ordering() {
        assert!(loc(1, 5) < loc(2, 1));
        assert!(loc(3, 2) > loc(3, 1));
        assert!(loc(3, 2) <= loc(3, 2));
    }

    #[test]
    fn test_locations_in_different_files_are_incomparable() {
        let other = Location::new("b.hg", 1, 1);
        assert_eq!(loc(1, 1).partial_cmp(&other), None);
        assert!(!(loc(1, 1) <= other));
        assert!(!(loc(1, 1) >= other));
    }

    #[test]
    fn test_location_display() {
        assert_eq!(loc(4, 7).to_string(), "a.hg:4:7");
    }

    #[test]
    fn test_cursor_advance_multiline() {
        let mut cursor = Cursor::new("a.hg");
        cursor.advance("abc\ndef");
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_cursor_advance_single_line() {
        let mut cursor = Cursor::new("a.hg");
        cursor.advance("name:");
        assert_eq!((cursor.line(), cursor.column()), (1, 6));
        cursor.advance("");
        assert_eq!((cursor.line(), cursor.column()), (1, 6));
    }

    #[test]
    fn test_cursor_advance_trailing_newline() {
        let mut cursor = Cursor::new("a.hg");
        cursor.advance("{\n\n");
        assert_eq!((cursor.line(), cursor.column()), (3, 0));
    }

    #[test]
    fn test_cursor_reset() {
        let mut cursor = Cursor::new("a.hg");
        cursor.advance("x\ny\nz");
        cursor.reset("b.hg");
        assert_eq!(cursor.location(), Location::start_of("b.hg"));
    }

    #[test]
    fn test_subrange_same_file() {
        let outer = Range::new(loc(1, 1), loc(10, 1));
        let inner = Range::new(loc(1, 1), loc(4, 1));
        assert!(outer.is_subrange(&inner));
        assert!(!inner.is_subrange(&outer));
        assert!(outer.is_subrange(&outer));
    }

    #[test]
    fn test_subrange_across_files() {
        let outer = Range::new(loc(1, 1), loc(10, 1));
        let elsewhere = Range::new(Location::new("b.hg", 1, 1), Location::new("b.hg", 4, 1));
        assert!(!outer.is_subrange(&elsewhere));
    }

    #[test]
    fn test_range_contains() {
        let range = Range::new(loc(2, 3), loc(5, 1));
        assert!(range.contains(&loc(2, 3)));
        assert!(range.contains(&loc(4, 80)));
        assert!(range.contains(&loc(5, 1)));
        assert!(!range.contains(&loc(2, 2)));
        assert!(!range.contains(&Location::new("b.hg", 3, 1)));
    }

    #[test]
    fn test_range_lines() {
        let range = Range::new(loc(2, 3), loc(5, 1));
        assert_eq!(range.lines().collect::<Vec<_>>(), vec![2, 3, 4, 5]);

        let invalid = Range::new(loc(2, 3), Location::new("b.hg", 5, 1));
        assert!(!invalid.is_valid());
        assert_eq!(invalid.lines().count(), 0);
    }

    #[test]
    fn test_range_display() {
        let range = Range::new(loc(1, 2), loc(3, 4));
        assert_eq!(range.to_string(), "{begin: a.hg:1:2, end: a.hg:3:4}");
    }
}
