//! aho-verify - count pattern occurrences and check them against expected values.

use std::{fs, io, path::PathBuf, process};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use aho_counter::{
    verify::{self, Case, Verdict},
    Alphabet, Config, DEFAULT_MAX_STATES,
};

#[derive(Debug, Parser)]
#[command(name = "aho-verify", version, about)]
struct Cli {
    /// Case file to read; stdin when omitted.
    input: Option<PathBuf>,

    /// Symbols accepted in patterns and text.
    #[arg(long, default_value = "abcdefghijklmnopqrstuvwxyz")]
    alphabet: String,

    /// Maximum number of automaton states, root included.
    #[arg(long, default_value_t = DEFAULT_MAX_STATES)]
    max_states: usize,
}

fn main() {
    let _ = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    match run(Cli::parse()) {
        Ok(Verdict::Passed) => {}
        Ok(Verdict::Failed(_)) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Verdict> {
    let input = match &cli.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => io::read_to_string(io::stdin()).context("reading stdin")?,
    };

    let config = Config::new(Alphabet::new(&cli.alphabet)?).with_max_states(cli.max_states);
    let case = Case::parse(&input)?;

    let stdout = io::stdout();
    let verdict = verify::run(config, &case, &mut stdout.lock())?;
    Ok(verdict)
}
