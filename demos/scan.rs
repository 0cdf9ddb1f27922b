use aho_counter::{Alphabet, Automaton, Config};

fn main() -> aho_counter::Result<()> {
    let config = Config::default().with_alphabet(Alphabet::new("abcdehnrs ")?);
    let automaton = Automaton::with_config(config, ["can", "an", "a", "she", "he", "hers"])?;

    #[cfg(feature = "dot")]
    println!("{}", automaton.dump().to_dot().unwrap());

    let text = "he and she can car an herb";
    let patterns = automaton.patterns();

    for m in automaton.find_iter(text)? {
        println!(
            "{}..{}: {}",
            m.start,
            m.end,
            String::from_utf8_lossy(&patterns[m.pattern])
        );
    }

    Ok(())
}
