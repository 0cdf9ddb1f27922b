use std::collections::VecDeque;

use tracing::trace;

use crate::state::{State, StateId, ROOT};

/// Sets `failure[s]` to the longest proper suffix of `s` that is in the trie,
/// and merges the outputs of that suffix into `s`.
///
/// The root must already be total over the alphabet: the suffix walk stops
/// only at a state with a defined transition.
pub(crate) fn build_failure(states: &mut [State]) {
    debug_assert!(states[ROOT].is_total());

    // BFS visits states in order of increasing depth, so a failure target is
    // always complete before anything links to it.
    let mut queue = VecDeque::new();

    let depth_one: Vec<StateId> = states[ROOT]
        .children()
        .map(|(_, next)| next)
        .filter(|&next| next != ROOT)
        .collect();
    for state in depth_one {
        states[state].failure = ROOT;
        inherit_outputs(states, state, ROOT);
        queue.push_back(state);
    }

    while let Some(r) = queue.pop_front() {
        let edges: Vec<(usize, StateId)> = states[r].children().collect();

        for (code, s) in edges {
            let mut lps = states[r].failure;
            let target = loop {
                if let Some(next) = states[lps].enter_child(code) {
                    break next;
                }
                lps = states[lps].failure;
            };

            debug_assert_ne!(s, target);
            states[s].failure = target;
            inherit_outputs(states, s, target);
            trace!(state = s, failure = target, "failure link");

            queue.push_back(s);
        }
    }
}

/// Appends the outputs of `from` to `state`.
///
/// The two sets are disjoint: every pattern at `state` is longer than any
/// pattern at the shallower `from`.
fn inherit_outputs(states: &mut [State], state: StateId, from: StateId) {
    debug_assert_ne!(state, from);
    let inherited = std::mem::take(&mut states[from].outputs);
    states[state].outputs.extend_from_slice(&inherited);
    states[from].outputs = inherited;
}

#[cfg(test)]
mod tests {
    use crate::Automaton;

    #[test]
    fn nested_patterns_inherit_each_output_once() {
        let patterns: Vec<String> = (1..=300).map(|n| "a".repeat(n)).collect();
        let automaton = Automaton::build(&patterns).unwrap();

        // State `n` spells `a^n` and recognizes every pattern up to it.
        for depth in 1..=300 {
            let mut outputs = automaton.outputs(depth).to_vec();
            outputs.sort_unstable();
            assert_eq!(outputs, (0..depth).collect::<Vec<_>>());
        }

        let counts = automaton.count_occurrences("a".repeat(400).as_str()).unwrap();
        for (index, count) in counts.into_iter().enumerate() {
            assert_eq!(count, 400 - index);
        }
    }

    #[test]
    fn failure_target_with_larger_id() {
        // "b" is inserted after "aab", so the failure target of "aab" has a
        // higher state id than the state itself.
        let automaton = Automaton::build(["aab", "b"]).unwrap();
        assert_eq!(automaton.failure(3), 4);
        assert_eq!(automaton.outputs(3), &[0, 1]);
        assert_eq!(automaton.outputs(4), &[1]);
        assert_eq!(automaton.count_occurrences("aabab").unwrap(), vec![1, 2]);
    }
}
