//! Multi-pattern substring counting with an Aho-Corasick automaton.
//!
//! ```rust
//! use aho_counter::Automaton;
//!
//! let automaton = Automaton::build(["he", "she", "his", "hers"]).unwrap();
//! assert_eq!(automaton.count_occurrences("ahishers").unwrap(), vec![1, 1, 1, 1]);
//! ```

mod alphabet;
mod builder;
mod config;
mod dump;
mod error;
mod failure;
mod scan;
mod state;
pub mod verify;

pub use alphabet::Alphabet;
pub use builder::{AutomatonBuilder, Pattern};
pub use config::{Config, DEFAULT_MAX_STATES};
pub use dump::AutomatonDump;
pub use error::{Error, Result};
pub use scan::{Match, Matches};
pub use state::{PatternId, StateId, ROOT};

use state::State;

/// An immutable goto/failure/output table over a fixed alphabet.
#[derive(Clone, Debug)]
pub struct Automaton {
    alphabet: Alphabet,
    states: Vec<State>,
    patterns: Vec<Vec<u8>>,
}

impl Automaton {
    /// Builds an automaton over `a..=z` with the default state budget.
    pub fn build<I>(patterns: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Pattern,
    {
        Self::with_config(Config::default(), patterns)
    }

    pub fn with_config<I>(config: Config, patterns: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Pattern,
    {
        let mut builder = AutomatonBuilder::new(config);
        builder.extend(patterns)?;
        builder.build()
    }

    /// Lazily reports every occurrence of every pattern in `text`.
    ///
    /// The whole text is checked against the alphabet first.
    pub fn find_iter<'a, T: Pattern + ?Sized>(&'a self, text: &T) -> Result<Matches<'a>> {
        let codes = self.alphabet.encode(text.symbols())?;
        Ok(Matches::new(self, codes))
    }

    /// Number of (possibly overlapping) occurrences of each pattern, by index.
    pub fn count_occurrences<T: Pattern + ?Sized>(&self, text: &T) -> Result<Vec<usize>> {
        let mut counts = vec![0; self.patterns.len()];
        for m in self.find_iter(text)? {
            counts[m.pattern] += 1;
        }
        Ok(counts)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Registered patterns, in insertion order.
    pub fn patterns(&self) -> &[Vec<u8>] {
        &self.patterns
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn root(&self) -> StateId {
        ROOT
    }

    /// Goto transition of `state` on alphabet code `code`, if defined.
    pub fn transition(&self, state: StateId, code: usize) -> Option<StateId> {
        self.states[state].enter_child(code)
    }

    pub fn failure(&self, state: StateId) -> StateId {
        self.states[state].failure
    }

    /// Patterns ending at `state`, including those inherited via failure links.
    pub fn outputs(&self, state: StateId) -> &[PatternId] {
        &self.states[state].outputs
    }

    pub fn dump(&self) -> AutomatonDump {
        AutomatonDump::create(self)
    }

    pub(crate) fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }
}
