use tracing::{debug, trace};

use crate::{
    config::Config,
    error::{Error, Result},
    failure,
    state::{PatternId, State, StateId, ROOT},
    Automaton,
};

/// A sequence of symbols that can be registered with the automaton.
pub trait Pattern {
    fn symbols(&self) -> &[u8];
}

impl Pattern for str {
    fn symbols(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Pattern for String {
    fn symbols(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Pattern for [u8] {
    fn symbols(&self) -> &[u8] {
        self
    }
}

impl Pattern for Vec<u8> {
    fn symbols(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Pattern for [u8; N] {
    fn symbols(&self) -> &[u8] {
        self
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn symbols(&self) -> &[u8] {
        (**self).symbols()
    }
}

/// Incrementally builds the trie, then freezes it into an [`Automaton`].
pub struct AutomatonBuilder {
    config: Config,
    states: Vec<State>,
    patterns: Vec<Vec<u8>>,
}

impl AutomatonBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            states: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Adds `pattern` to the trie and returns its index.
    ///
    /// The pattern is validated and the state budget checked before anything
    /// is written, so on error the builder is unchanged.
    pub fn insert<P: Pattern + ?Sized>(&mut self, pattern: &P) -> Result<PatternId> {
        let index = self.patterns.len();
        let symbols = pattern.symbols();
        let codes = self
            .config
            .alphabet()
            .encode(symbols)
            .map_err(|source| Error::InvalidPattern {
                index,
                source: Box::new(source),
            })?;

        self.ensure_root()?;

        // Follow the longest prefix already in the trie.
        let mut state = ROOT;
        let mut depth = 0;
        while let Some(next) = codes.get(depth).and_then(|&c| self.states[state].enter_child(c)) {
            state = next;
            depth += 1;
        }

        let required = self.states.len() + (codes.len() - depth);
        if required > self.config.max_states() {
            return Err(Error::Capacity {
                required,
                max: self.config.max_states(),
            });
        }

        // Symbols `depth..` need new states.
        let alphabet_len = self.config.alphabet().len();
        for &code in &codes[depth..] {
            let new_state = self.states.len();
            self.states.push(State::new(alphabet_len));
            self.states[state].add_child(code, new_state);
            state = new_state;
        }

        self.states[state].add_output(index);
        self.patterns.push(symbols.to_vec());
        trace!(index, state, states = self.states.len(), "inserted pattern");

        Ok(index)
    }

    /// Inserts every pattern in order.
    pub fn extend<I>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Pattern,
    {
        for pattern in patterns {
            self.insert(&pattern)?;
        }
        Ok(())
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Closes the root over the alphabet and computes failure links.
    pub fn build(mut self) -> Result<Automaton> {
        self.ensure_root()?;

        // Missing root transitions loop back to the root.
        let root = &mut self.states[ROOT];
        for code in 0..self.config.alphabet().len() {
            if root.enter_child(code).is_none() {
                root.add_child(code, ROOT);
            }
        }

        failure::build_failure(&mut self.states);

        debug!(
            patterns = self.patterns.len(),
            states = self.states.len(),
            "built automaton"
        );

        Ok(Automaton {
            alphabet: self.config.alphabet().clone(),
            states: self.states,
            patterns: self.patterns,
        })
    }

    fn ensure_root(&mut self) -> Result<StateId> {
        if self.states.is_empty() {
            if self.config.max_states() == 0 {
                return Err(Error::Capacity { required: 1, max: 0 });
            }
            self.states.push(State::new(self.config.alphabet().len()));
        }
        Ok(ROOT)
    }
}
