use crate::error::{Error, Result};

/// Dense mapping from input bytes to transition table columns.
///
/// Every supported byte gets a code in `0..len()`, in the order the symbols
/// were supplied. Bytes outside the set have no code.
#[derive(Clone, Debug)]
pub struct Alphabet {
    codes: [Option<u8>; 256],
    symbols: Vec<u8>,
}

impl Alphabet {
    pub fn new(symbols: impl AsRef<[u8]>) -> Result<Self> {
        let symbols = symbols.as_ref();
        if symbols.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let (alphabet, duplicate) = Self::from_symbols(symbols.to_vec());
        match duplicate {
            Some(symbol) => Err(Error::DuplicateSymbol(symbol)),
            None => Ok(alphabet),
        }
    }

    /// The lowercase English letters `a..=z`.
    pub fn lowercase() -> Self {
        let (alphabet, duplicate) = Self::from_symbols((b'a'..=b'z').collect());
        debug_assert_eq!(duplicate, None);
        alphabet
    }

    /// Assigns codes in order. Returns the first repeated symbol, if any;
    /// a repeat keeps its first code.
    fn from_symbols(symbols: Vec<u8>) -> (Self, Option<u8>) {
        let mut codes = [None; 256];
        let mut duplicate = None;
        for (code, &s) in symbols.iter().enumerate() {
            let slot = &mut codes[s as usize];
            if slot.is_some() {
                duplicate = duplicate.or(Some(s));
            } else {
                *slot = Some(code as u8);
            }
        }
        (Self { codes, symbols }, duplicate)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn code(&self, symbol: u8) -> Option<usize> {
        self.codes[symbol as usize].map(usize::from)
    }

    /// Byte for `code`. Panics if `code >= self.len()`.
    pub fn symbol(&self, code: usize) -> u8 {
        self.symbols[code]
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Translates `bytes` into codes, failing on the first unknown byte.
    pub fn encode(&self, bytes: &[u8]) -> Result<Vec<usize>> {
        bytes
            .iter()
            .enumerate()
            .map(|(offset, &symbol)| {
                self.code(symbol)
                    .ok_or(Error::InvalidSymbol { symbol, offset })
            })
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}
