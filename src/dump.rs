use crate::{state::ROOT, Automaton};

#[derive(Clone, Debug)]
struct DumpState {
    /// Symbol on the trie edge leading here; empty for the root.
    label: String,
    failure: usize,
    outputs: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdTarget {
    Goto(usize),
    Failure(usize),
}

type EdgeDesc = (usize, EdTarget);

/// Snapshot of an automaton's graph, for inspection and rendering.
pub struct AutomatonDump {
    states: Vec<DumpState>,
    edges: Vec<EdgeDesc>,
    patterns: Vec<String>,
}

impl AutomatonDump {
    pub(crate) fn create(automaton: &Automaton) -> Self {
        let patterns = automaton
            .patterns()
            .iter()
            .map(|p| String::from_utf8_lossy(p).into_owned())
            .collect();
        let mut states: Vec<DumpState> = (0..automaton.state_count())
            .map(|s| DumpState {
                label: String::new(),
                failure: automaton.failure(s),
                outputs: automaton.outputs(s).to_vec(),
            })
            .collect();
        let mut edges = Vec::new();

        for s in 0..automaton.state_count() {
            for (code, next) in automaton.state(s).children() {
                // Root self-loops are not trie edges.
                if next == ROOT {
                    continue;
                }
                let symbol = automaton.alphabet().symbol(code);
                states[next].label = char::from(symbol).to_string();
                edges.push((s, EdTarget::Goto(next)));
            }
            if s != ROOT {
                edges.push((s, EdTarget::Failure(states[s].failure)));
            }
        }

        Self {
            states,
            edges,
            patterns,
        }
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Trie edges as `(from, to)` pairs.
    pub fn goto_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().filter_map(|&(from, to)| match to {
            EdTarget::Goto(to) => Some((from, to)),
            EdTarget::Failure(_) => None,
        })
    }

    /// Failure links of every non-root state as `(from, to)` pairs.
    pub fn failure_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().filter_map(|&(from, to)| match to {
            EdTarget::Failure(to) => Some((from, to)),
            EdTarget::Goto(_) => None,
        })
    }

    pub fn label(&self, state: usize) -> &str {
        &self.states[state].label
    }

    /// Pattern texts recognized at `state`.
    pub fn outputs(&self, state: usize) -> impl Iterator<Item = &str> + '_ {
        self.states[state]
            .outputs
            .iter()
            .map(|&p| self.patterns[p].as_str())
    }
}

#[cfg(feature = "dot")]
mod dotdump {
    use std::io;

    use super::{AutomatonDump, EdTarget};

    type Nd = usize;
    type Ed = super::EdgeDesc;

    impl AutomatonDump {
        /// Renders the automaton as Graphviz source. Failure links are dashed.
        pub fn to_dot(&self) -> io::Result<String> {
            let mut out = Vec::new();
            dot::render(self, &mut out)?;
            String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        }
    }

    impl<'a> dot::Labeller<'a, Nd, Ed> for AutomatonDump {
        fn graph_id(&'a self) -> dot::Id<'a> {
            dot::Id::new("automaton").unwrap()
        }

        fn node_id(&'a self, n: &Nd) -> dot::Id<'a> {
            dot::Id::new(format!("S{}", n)).unwrap()
        }

        /// State id on the first line, recognized patterns below it.
        fn node_label(&'a self, n: &Nd) -> dot::LabelText<'a> {
            let outputs: Vec<&str> = self.outputs(*n).collect();
            if outputs.is_empty() {
                return dot::LabelText::label(n.to_string());
            }
            dot::LabelText::html(format!(
                r#"{n}<br/><font point-size="10">{}</font>"#,
                outputs.join(", ")
            ))
        }

        /// Trie edges carry their symbol; failure links stay unlabeled.
        fn edge_label(&'a self, e: &Ed) -> dot::LabelText<'a> {
            match e.1 {
                EdTarget::Goto(to) => dot::LabelText::label(self.label(to).to_string()),
                EdTarget::Failure(_) => dot::LabelText::label(""),
            }
        }

        fn edge_style(&'a self, e: &Ed) -> dot::Style {
            match &e.1 {
                EdTarget::Goto(_) => dot::Style::Solid,
                EdTarget::Failure(_) => dot::Style::Dashed,
            }
        }
    }

    impl<'a> dot::GraphWalk<'a, Nd, Ed> for AutomatonDump {
        fn nodes(&'a self) -> dot::Nodes<'a, Nd> {
            dot::Nodes::Owned((0..self.states.len()).collect())
        }

        fn edges(&'a self) -> dot::Edges<'a, Ed> {
            dot::Edges::Borrowed(&self.edges)
        }

        fn source(&'a self, edge: &Ed) -> Nd {
            edge.0
        }

        fn target(&'a self, edge: &Ed) -> Nd {
            match &edge.1 {
                EdTarget::Goto(idx) => *idx,
                EdTarget::Failure(idx) => *idx,
            }
        }
    }
}
