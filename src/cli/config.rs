use motif_index::{Alphabet, AlphabetRegistry, CodecScheme};

/// Resolves a named alphabet from the registry and validates it against the
/// selected codec scheme.
pub fn create_alphabet(
    registry: &AlphabetRegistry,
    name: &str,
    scheme: CodecScheme,
) -> Result<Alphabet, Box<dyn std::error::Error>> {
    let config = registry.get_alphabet(name).ok_or_else(|| {
        format!(
            "Alphabet '{}' not found. Run `motif-index alphabets` to see available alphabets.",
            name
        )
    })?;

    let alphabet = config
        .build()
        .map_err(|e| format!("Invalid alphabet '{}': {}", name, e))?;

    scheme.check_alphabet(&alphabet)?;

    Ok(alphabet)
}
