//! Literal-matching trie with fallback transitions
//!
//! Nodes live in one arena and refer to each other by [`StateId`]. Every
//! node carries a fallback, so [`Automaton::step`] is total: a character
//! with no matching child retries from the fallback, and the root loops to
//! itself.
//!
//! Fallbacks are fixed when a node is created, against the trie as it is at
//! that moment. Literals inserted later do not update earlier fallbacks.

use super::stream::CharStream;
use std::collections::VecDeque;
use std::fmt::{self, Write as _};

/// Index of a node in the automaton arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    pub const ROOT: StateId = StateId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Node<K> {
    /// Lower-cased; unused on the root
    ch: char,
    /// Sorted by child character
    children: Vec<StateId>,
    parent: Option<StateId>,
    fallback: StateId,
    terminal: Option<K>,
}

/// Trie over literal tokens, each terminal node tagged with a kind `K`
#[derive(Debug, Clone)]
pub struct Automaton<K> {
    nodes: Vec<Node<K>>,
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl<K: Copy + fmt::Debug> Automaton<K> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                ch: '\0',
                children: Vec::new(),
                parent: None,
                fallback: StateId::ROOT,
                terminal: None,
            }],
        }
    }

    pub fn root(&self) -> StateId {
        StateId::ROOT
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Add `literal`, tagging its final node with `kind`.
    ///
    /// Returns the terminal node, or `None` for an empty literal. Inserting
    /// the same literal twice retags its node.
    pub fn insert(&mut self, literal: &str, kind: K) -> Option<StateId> {
        if literal.is_empty() {
            return None;
        }

        let mut state = StateId::ROOT;
        for c in literal.chars().map(fold) {
            state = match self.child(state, c) {
                Some(next) => next,
                None => self.add_child(state, c),
            };
        }
        self.nodes[state.0].terminal = Some(kind);
        Some(state)
    }

    fn add_child(&mut self, parent: StateId, c: char) -> StateId {
        // computed before the node is linked in, so it can never point at itself
        let fallback = self.step(self.nodes[parent.0].fallback, c);
        let id = StateId(self.nodes.len());
        self.nodes.push(Node {
            ch: c,
            children: Vec::new(),
            parent: Some(parent),
            fallback,
            terminal: None,
        });

        let nodes = &self.nodes;
        let children = &nodes[parent.0].children;
        let at = children.partition_point(|&child| nodes[child.0].ch < c);
        self.nodes[parent.0].children.insert(at, id);
        id
    }

    fn child(&self, state: StateId, c: char) -> Option<StateId> {
        let children = &self.nodes[state.0].children;
        children
            .binary_search_by(|&child| self.nodes[child.0].ch.cmp(&c))
            .ok()
            .map(|at| children[at])
    }

    /// Transition on `c`, case-insensitively
    pub fn step(&self, mut state: StateId, c: char) -> StateId {
        let c = fold(c);
        loop {
            if let Some(next) = self.child(state, c) {
                return next;
            }
            if state == StateId::ROOT {
                return StateId::ROOT;
            }
            state = self.nodes[state.0].fallback;
        }
    }

    /// Kind recognized at `state`, if it ends a literal
    pub fn terminal(&self, state: StateId) -> Option<K> {
        self.nodes.get(state.0).and_then(|node| node.terminal)
    }

    pub fn is_terminal(&self, state: StateId) -> bool {
        self.terminal(state).is_some()
    }

    pub fn fallback(&self, state: StateId) -> StateId {
        self.nodes[state.0].fallback
    }

    pub fn parent(&self, state: StateId) -> Option<StateId> {
        self.nodes[state.0].parent
    }

    /// Feed characters from `stream` into `state` until a terminal node is
    /// reached or the stream runs dry.
    ///
    /// The first terminal wins; there is no longest-match lookahead. The
    /// returned text is everything consumed, including characters read
    /// before the recognized literal began.
    pub fn read_next(&self, state: &mut StateId, stream: &mut CharStream) -> String {
        let mut consumed = String::new();
        while let Some(c) = stream.next_char() {
            consumed.push(c);
            *state = self.step(*state, c);
            if self.is_terminal(*state) {
                break;
            }
        }
        consumed
    }

    /// Literal spelled by the path from the root to `state`
    pub fn token_text(&self, state: StateId) -> String {
        let mut chars = Vec::new();
        let mut current = state;
        while let Some(parent) = self.nodes[current.0].parent {
            chars.push(self.nodes[current.0].ch);
            current = parent;
        }
        chars.iter().rev().collect()
    }

    /// Breadth-first listing of every node, one per line
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut queue = VecDeque::from([StateId::ROOT]);

        while let Some(state) = queue.pop_front() {
            let node = &self.nodes[state.0];
            let ch = if state == StateId::ROOT { ' ' } else { node.ch };
            let _ = write!(
                out,
                "{state} '{ch}' fallback={} prefix={:?}",
                node.fallback,
                self.token_text(state)
            );
            if let Some(kind) = node.terminal {
                let _ = write!(out, " => {kind:?}");
            }
            out.push('\n');
            queue.extend(node.children.iter().copied());
        }
        out
    }
}

impl<K: Copy + fmt::Debug> Default for Automaton<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Kind {
        A,
        B,
        C,
    }

    fn feed(automaton: &Automaton<Kind>, input: &str) -> (String, StateId) {
        let mut state = automaton.root();
        let mut stream = CharStream::new(input);
        let text = automaton.read_next(&mut state, &mut stream);
        (text, state)
    }

    #[test]
    fn test_exact_literal_is_recognized() {
        let mut automaton = Automaton::new();
        automaton.insert("name:", Kind::A);
        automaton.insert("center:", Kind::B);

        for (literal, kind) in [("name:", Kind::A), ("center:", Kind::B)] {
            let (text, state) = feed(&automaton, literal);
            assert_eq!(text, literal);
            assert_eq!(automaton.terminal(state), Some(kind));
        }
    }

    #[test]
    fn test_first_terminal_wins() {
        let mut automaton = Automaton::new();
        automaton.insert("c", Kind::A);
        automaton.insert("ce", Kind::B);
        automaton.insert("cent", Kind::C);

        let mut stream = CharStream::new("cent");
        let mut state = automaton.root();
        let text = automaton.read_next(&mut state, &mut stream);
        assert_eq!(text, "c");
        assert_eq!(automaton.terminal(state), Some(Kind::A));
        assert_eq!(stream.remaining(), 3);
    }

    #[test]
    fn test_leading_noise_is_returned() {
        let mut automaton = Automaton::new();
        automaton.insert("{", Kind::A);

        let (text, state) = feed(&automaton, "  \n xyz{ rest");
        assert_eq!(text, "  \n xyz{");
        assert!(automaton.is_terminal(state));
    }

    #[test]
    fn test_exhausted_stream_is_not_terminal() {
        let mut automaton = Automaton::new();
        automaton.insert("name:", Kind::A);

        let (text, state) = feed(&automaton, "nam");
        assert_eq!(text, "nam");
        assert!(!automaton.is_terminal(state));
        assert_eq!(automaton.token_text(state), "nam");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let mut automaton = Automaton::new();
        automaton.insert("Name:", Kind::A);

        let (_, state) = feed(&automaton, "NAME:");
        assert_eq!(automaton.terminal(state), Some(Kind::A));
        assert_eq!(automaton.token_text(state), "name:");
    }

    #[test]
    fn test_fallback_recovers_partial_match() {
        let mut automaton = Automaton::new();
        automaton.insert("ab", Kind::A);
        automaton.insert("bc", Kind::B);

        let (text, state) = feed(&automaton, "abx");
        assert_eq!(text, "ab");
        assert_eq!(automaton.terminal(state), Some(Kind::A));

        // the second 'a' has no child under "a" and restarts from the root
        let (text, state) = feed(&automaton, "aabc");
        assert_eq!(text, "aab");
        assert_eq!(automaton.terminal(state), Some(Kind::A));
    }

    #[test]
    fn test_fallbacks_fixed_at_insertion_time() {
        let mut automaton = Automaton::new();
        let ab = automaton.insert("ab", Kind::A).unwrap();
        automaton.insert("b", Kind::B);

        // "b" did not exist when "ab" was inserted
        assert_eq!(automaton.fallback(ab), automaton.root());

        let mut later = Automaton::new();
        later.insert("b", Kind::B);
        let ab = later.insert("ab", Kind::A).unwrap();
        assert_eq!(later.token_text(later.fallback(ab)), "b");
    }

    #[test]
    fn test_step_is_total() {
        let mut automaton = Automaton::new();
        automaton.insert("xy", Kind::A);

        let root = automaton.root();
        assert_eq!(automaton.step(root, 'q'), root);

        let x = automaton.step(root, 'x');
        assert_eq!(automaton.step(x, 'q'), root);
        assert_eq!(automaton.step(x, 'x'), x);
    }

    #[test]
    fn test_children_sorted_and_shared() {
        let mut automaton = Automaton::new();
        automaton.insert("cycles:", Kind::A);
        automaton.insert("center:", Kind::B);
        automaton.insert("color:", Kind::C);

        // all three literals share the "c" node
        let c = automaton.step(automaton.root(), 'c');
        assert_eq!(automaton.parent(c), Some(automaton.root()));
        let dump = automaton.dump();
        let lines: Vec<_> = dump.lines().collect();
        assert!(lines[0].starts_with("#0"));
        assert!(lines[1].contains("prefix=\"c\""));
        let e = lines.iter().position(|l| l.contains("prefix=\"ce\"")).unwrap();
        let o = lines.iter().position(|l| l.contains("prefix=\"co\"")).unwrap();
        let y = lines.iter().position(|l| l.contains("prefix=\"cy\"")).unwrap();
        assert!(e < o && o < y);
        assert!(dump.contains("prefix=\"color:\" => C"));
    }

    #[test]
    fn test_empty_literal_is_ignored() {
        let mut automaton: Automaton<Kind> = Automaton::new();
        assert_eq!(automaton.insert("", Kind::A), None);
        assert!(automaton.is_empty());
        assert!(!automaton.is_terminal(automaton.root()));
    }

    #[test]
    fn test_state_carries_over_between_reads() {
        let mut automaton = Automaton::new();
        automaton.insert("{", Kind::A);
        automaton.insert("}", Kind::B);

        let mut stream = CharStream::new("{ }");
        let mut state = automaton.root();
        assert_eq!(automaton.read_next(&mut state, &mut stream), "{");
        assert_eq!(automaton.read_next(&mut state, &mut stream), " }");
        assert_eq!(automaton.terminal(state), Some(Kind::B));
        assert_eq!(automaton.read_next(&mut state, &mut stream), "");
    }
}
