use crate::cli::{args::ReverseArgs, config::create_alphabet};
use motif_index::{AlphabetRegistry, ReverseIndex};
use std::io::{self, BufRead, BufReader, Write};

pub fn handle(
    args: ReverseArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let scheme = args.scheme.into();
    let alphabet = create_alphabet(registry, &args.alphabet, scheme)?;

    match &args.file {
        Some(file_path) => stream(ReverseIndex::open(
            file_path,
            args.length,
            alphabet,
            scheme,
        )?),
        None => stream(ReverseIndex::new(
            BufReader::new(io::stdin()),
            args.length,
            alphabet,
            scheme,
        )),
    }
}

/// Writes each decoded motif to stdout. The iterator stops after its first
/// error, which becomes the process result (fail-fast).
fn stream<R: BufRead>(reverse: ReverseIndex<R>) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for motif in reverse {
        writeln!(handle, "{}", motif?)?;
    }
    handle.flush()?;

    Ok(())
}
