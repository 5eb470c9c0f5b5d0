use motif_index::AlphabetRegistry;

pub fn handle(registry: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    println!("Available alphabets:\n");

    let mut alphabets: Vec<_> = registry.alphabets.iter().collect();
    alphabets.sort_by_key(|(name, _)| *name);

    for (name, config) in alphabets {
        println!(
            "  {:<20} base-{:<3} {}",
            name,
            config.symbols.chars().count(),
            config.symbols
        );
    }

    Ok(())
}
