//! Automaton construction for the Harmonogram vocabulary

use super::token_kind::{TokenKind, VOCABULARY};
use crate::kit::lexer::Automaton;

/// Build the token automaton, inserting the vocabulary in order
pub fn build_automaton() -> Automaton<TokenKind> {
    let mut automaton = Automaton::new();
    for (literal, kind) in VOCABULARY {
        automaton.insert(literal, kind);
    }
    automaton
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::CharStream;

    #[test]
    fn test_every_literal_is_recognized_alone() {
        let automaton = build_automaton();
        for (literal, kind) in VOCABULARY {
            let mut state = automaton.root();
            let mut stream = CharStream::new(literal);
            let text = automaton.read_next(&mut state, &mut stream);
            assert_eq!(text, literal, "literal {literal}");
            assert_eq!(automaton.terminal(state), Some(kind), "literal {literal}");
            assert_eq!(automaton.token_text(state), literal);
        }
    }

    #[test]
    fn test_literals_recognized_in_sequence() {
        let automaton = build_automaton();
        let mut state = automaton.root();
        let mut stream = CharStream::new("{\n  Name: A\n  type: rotation\n}");

        let mut kinds = Vec::new();
        while !stream.is_eof() {
            automaton.read_next(&mut state, &mut stream);
            if let Some(kind) = automaton.terminal(state) {
                kinds.push(kind);
            }
        }
        assert_eq!(
            kinds,
            vec![
                TokenKind::EntityBegin,
                TokenKind::Name,
                TokenKind::Type,
                TokenKind::Rotation,
                TokenKind::EntityEnd
            ]
        );
    }

    #[test]
    fn test_dump_lists_every_node() {
        let automaton = build_automaton();
        assert_eq!(automaton.dump().lines().count(), automaton.len());
        assert!(automaton.dump().contains("=> StartPhase"));
    }
}
