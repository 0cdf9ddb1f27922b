pub type StateId = usize;
pub type PatternId = usize;

pub const ROOT: StateId = 0;

/// One automaton state: goto row, failure link and output set.
#[derive(Clone, Debug)]
pub(crate) struct State {
    goto: Box<[Option<StateId>]>,
    pub(crate) failure: StateId,
    pub(crate) outputs: Vec<PatternId>,
}

impl State {
    pub fn new(alphabet_len: usize) -> Self {
        Self {
            goto: vec![None; alphabet_len].into_boxed_slice(),
            failure: ROOT,
            outputs: Vec::new(),
        }
    }

    pub fn enter_child(&self, code: usize) -> Option<StateId> {
        self.goto[code]
    }

    pub fn add_child(&mut self, code: usize, state: StateId) {
        self.goto[code] = Some(state);
    }

    /// Defined transitions as `(code, target)` pairs, in code order.
    pub fn children(&self) -> impl Iterator<Item = (usize, StateId)> + '_ {
        self.goto
            .iter()
            .enumerate()
            .filter_map(|(code, next)| next.map(|next| (code, next)))
    }

    pub fn add_output(&mut self, output: PatternId) {
        if !self.outputs.contains(&output) {
            self.outputs.push(output);
        }
    }

    pub fn is_total(&self) -> bool {
        self.goto.iter().all(Option::is_some)
    }
}
