//! Entity name to source range index
//!
//! Consumed by editor integrations: given a cursor position, find the
//! entity being edited.

use crate::kit::lexer::{Location, Range};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocationMap {
    ranges: BTreeMap<String, Range>,
}

impl LocationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where `name` is defined, returning the range it replaces
    pub fn insert(&mut self, name: impl Into<String>, range: Range) -> Option<Range> {
        self.ranges.insert(name.into(), range)
    }

    pub fn get(&self, name: &str) -> Option<&Range> {
        self.ranges.get(name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.ranges.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Range)> {
        self.ranges.iter().map(|(name, range)| (name.as_str(), range))
    }

    /// Every entry whose range contains `location`
    pub fn containing<'a, 'l>(
        &'a self,
        location: &'l Location,
    ) -> impl Iterator<Item = (&'a str, &'a Range)> + 'l
    where
        'a: 'l,
    {
        self.iter().filter(move |(_, range)| range.contains(location))
    }

    /// Most specific entity at `location`.
    ///
    /// Candidates are visited in name order; a candidate replaces the
    /// current best when its range is a sub-range of the best's.
    pub fn resolve(&self, location: &Location) -> Option<&str> {
        let mut best: Option<(&str, &Range)> = None;
        for (name, range) in self.containing(location) {
            match best {
                Some((_, best_range)) if !best_range.is_subrange(range) => {}
                _ => best = Some((name, range)),
            }
        }
        best.map(|(name, _)| name)
    }
}

impl<'a> IntoIterator for &'a LocationMap {
    type Item = (&'a String, &'a Range);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(file: &str, begin: (usize, usize), end: (usize, usize)) -> Range {
        Range::new(
            Location::new(file, begin.0, begin.1),
            Location::new(file, end.0, end.1),
        )
    }

    fn sample() -> LocationMap {
        let mut map = LocationMap::new();
        map.insert("G", range("a.hg", (1, 1), (20, 1)));
        map.insert("A", range("a.hg", (2, 2), (6, 2)));
        map.insert("B", range("a.hg", (8, 2), (12, 2)));
        map.insert("H", range("b.hg", (1, 1), (9, 1)));
        map
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut map = LocationMap::new();
        assert!(map.insert("X", range("a.hg", (1, 1), (2, 1))).is_none());
        let previous = map.insert("X", range("b.hg", (1, 1), (2, 1)));
        assert_eq!(previous.map(|r| r.file().to_string()), Some("a.hg".to_string()));
        assert_eq!(map.get("X").map(Range::file), Some("b.hg"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_containing_lists_all_enclosing() {
        let map = sample();
        let here = Location::new("a.hg", 3, 4);
        let names: Vec<_> = map.containing(&here).map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "G"]);
    }

    #[test]
    fn test_resolve_prefers_innermost() {
        let map = sample();
        assert_eq!(map.resolve(&Location::new("a.hg", 3, 4)), Some("A"));
        assert_eq!(map.resolve(&Location::new("a.hg", 10, 1)), Some("B"));
    }

    #[test]
    fn test_resolve_falls_back_to_composite() {
        let map = sample();
        assert_eq!(map.resolve(&Location::new("a.hg", 7, 1)), Some("G"));
        assert_eq!(map.resolve(&Location::new("b.hg", 2, 1)), Some("H"));
    }

    #[test]
    fn test_resolved_name_outlives_location() {
        let map = sample();
        let name = {
            let here = Location::new("a.hg", 9, 1);
            map.resolve(&here)
        };
        assert_eq!(name, Some("B"));
    }

    #[test]
    fn test_resolve_outside_everything() {
        let map = sample();
        assert_eq!(map.resolve(&Location::new("a.hg", 30, 1)), None);
        assert_eq!(map.resolve(&Location::new("c.hg", 1, 1)), None);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut map = LocationMap::new();
        map.insert("A", range("a.hg", (1, 2), (3, 4)));
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["A"]["begin"]["line"], 1);
        assert_eq!(json["A"]["end"]["file"], "a.hg");
    }
}
