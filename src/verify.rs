//! Checks computed counts against expected values.
//!
//! A case is a whitespace-separated token stream: the pattern count `n`, the
//! text, `n` patterns and then `n` expected counts.
//!
//! ```text
//! 4 ahishers
//! he she his hers
//! 1 1 1 1
//! ```

use std::io::{self, Write};

use thiserror::Error;

use crate::{Automaton, Config};

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEof(&'static str),

    #[error("invalid {what} {token:?}")]
    InvalidNumber { what: &'static str, token: String },

    #[error(transparent)]
    Automaton(#[from] crate::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    pub text: String,
    pub patterns: Vec<String>,
    pub expected: Vec<usize>,
}

impl Case {
    pub fn parse(input: &str) -> Result<Self, VerifyError> {
        let mut tokens = input.split_whitespace();
        let n = number(tokens.next(), "pattern count")?;
        let text = tokens
            .next()
            .ok_or(VerifyError::UnexpectedEof("text"))?
            .to_string();

        let patterns = (0..n)
            .map(|_| {
                tokens
                    .next()
                    .map(str::to_string)
                    .ok_or(VerifyError::UnexpectedEof("pattern"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expected = (0..n)
            .map(|_| number(tokens.next(), "expected count"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            text,
            patterns,
            expected,
        })
    }
}

fn number(token: Option<&str>, what: &'static str) -> Result<usize, VerifyError> {
    let token = token.ok_or(VerifyError::UnexpectedEof(what))?;
    token.parse().map_err(|_| VerifyError::InvalidNumber {
        what,
        token: token.to_string(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    /// The pattern at this index was the first one with a wrong count.
    Failed(usize),
}

/// Builds the automaton for `case`, counts, and writes one line per pattern
/// up to and including the first mismatch.
pub fn run<W: Write>(config: Config, case: &Case, out: &mut W) -> Result<Verdict, VerifyError> {
    let automaton = Automaton::with_config(config, &case.patterns)?;
    let counts = automaton.count_occurrences(case.text.as_str())?;

    for (index, (&count, &expected)) in counts.iter().zip(&case.expected).enumerate() {
        if count == expected {
            writeln!(out, "{count}: Passed")?;
        } else {
            writeln!(out, "{count}: Failed")?;
            tracing::debug!(index, count, expected, "count mismatch");
            return Ok(Verdict::Failed(index));
        }
    }

    Ok(Verdict::Passed)
}
