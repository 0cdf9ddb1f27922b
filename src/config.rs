use crate::alphabet::Alphabet;

/// Default upper bound on the number of states, root included.
pub const DEFAULT_MAX_STATES: usize = 505 * 505;

/// Construction settings for an [`Automaton`](crate::Automaton).
///
/// ```rust
/// use aho_counter::{Alphabet, Config};
///
/// let config = Config::default()
///     .with_alphabet(Alphabet::new("ACGT").unwrap())
///     .with_max_states(1024);
/// assert_eq!(config.max_states(), 1024);
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    alphabet: Alphabet,
    max_states: usize,
}

impl Config {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            max_states: DEFAULT_MAX_STATES,
        }
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Caps the state count. The root counts as one state.
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn max_states(&self) -> usize {
        self.max_states
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Alphabet::lowercase())
    }
}
