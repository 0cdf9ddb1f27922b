use thiserror::Error;

/// Errors raised while building or scanning with an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte outside the alphabet was found at `offset`.
    #[error("symbol {symbol:#04x} at offset {offset} is not in the alphabet")]
    InvalidSymbol { symbol: u8, offset: usize },

    /// Pattern number `index` contains a symbol outside the alphabet.
    #[error("invalid pattern {index}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// The trie would need more states than the configured maximum.
    #[error("automaton needs {required} states, but at most {max} are allowed")]
    Capacity { required: usize, max: usize },

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("symbol {0:#04x} is listed twice in the alphabet")]
    DuplicateSymbol(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
