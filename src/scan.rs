use std::{iter::FusedIterator, slice};

use crate::{
    state::{PatternId, StateId, ROOT},
    Automaton,
};

/// One occurrence of a pattern: `text[start..end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    pub pattern: PatternId,
    pub start: usize,
    pub end: usize,
}

/// Iterator over the matches in a text, ordered by end offset.
///
/// Created by [`Automaton::find_iter`].
pub struct Matches<'a> {
    automaton: &'a Automaton,
    codes: Vec<usize>,
    current: StateId,
    /// Offset of the next symbol to consume.
    position: usize,
    pending: slice::Iter<'a, PatternId>,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(automaton: &'a Automaton, codes: Vec<usize>) -> Self {
        // Patterns at the root (only the empty pattern) also match before
        // the first symbol.
        Self {
            automaton,
            codes,
            current: ROOT,
            position: 0,
            pending: automaton.outputs(ROOT).iter(),
        }
    }

    fn step(&mut self, code: usize) -> &'a [PatternId] {
        let automaton = self.automaton;
        let mut node = automaton.state(self.current);

        // Terminates because the root is total.
        self.current = loop {
            if let Some(next) = node.enter_child(code) {
                break next;
            }
            node = automaton.state(node.failure);
        };
        automaton.outputs(self.current)
    }
}

impl Iterator for Matches<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(&pattern) = self.pending.next() {
                let end = self.position;
                return Some(Match {
                    pattern,
                    start: end - self.automaton.patterns()[pattern].len(),
                    end,
                });
            }

            let &code = self.codes.get(self.position)?;
            self.pending = self.step(code).iter();
            self.position += 1;
        }
    }
}

impl FusedIterator for Matches<'_> {}

#[cfg(test)]
mod tests {
    use crate::{Automaton, Match};

    #[test]
    fn matches_in_text_order() {
        let automaton = Automaton::build(["he", "she", "his", "hers"]).unwrap();
        let matches: Vec<Match> = automaton.find_iter("ushers").unwrap().collect();
        assert_eq!(
            matches,
            vec![
                Match { pattern: 1, start: 1, end: 4 },
                Match { pattern: 0, start: 2, end: 4 },
                Match { pattern: 3, start: 2, end: 6 },
            ]
        );
    }

    #[test]
    fn suffix_pattern_inside_longer_text() {
        let automaton = Automaton::build(["he", "she", "his", "hers"]).unwrap();
        let matches: Vec<Match> = automaton.find_iter("ahishers").unwrap().collect();
        assert_eq!(
            matches,
            vec![
                Match { pattern: 2, start: 1, end: 4 },
                Match { pattern: 1, start: 3, end: 6 },
                Match { pattern: 0, start: 4, end: 6 },
                Match { pattern: 3, start: 4, end: 8 },
            ]
        );
    }

    #[test]
    fn empty_pattern_starts_at_zero() {
        let automaton = Automaton::build([""]).unwrap();
        let ends: Vec<usize> = automaton.find_iter("ab").unwrap().map(|m| m.end).collect();
        assert_eq!(ends, vec![0, 1, 2]);
    }

    #[test]
    fn scanning_does_not_mutate() {
        let automaton = Automaton::build(["ab", "ba", "aba"]).unwrap();
        let first = automaton.count_occurrences("abababba").unwrap();
        let second = automaton.count_occurrences("abababba").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fused_after_end() {
        let automaton = Automaton::build(["a"]).unwrap();
        let mut matches = automaton.find_iter("a").unwrap();
        assert!(matches.next().is_some());
        assert!(matches.next().is_none());
        assert!(matches.next().is_none());
    }

    #[test]
    fn concurrent_scans() {
        let automaton = Automaton::build(["ab", "b"]).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| automaton.count_occurrences("abbab").unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), vec![2, 3]);
            }
        });
    }
}
