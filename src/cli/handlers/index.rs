use crate::cli::{args::IndexArgs, config::create_alphabet};
use motif_index::{AlphabetRegistry, MotifCollection, build_index, write_index, write_index_file};
use std::io::{self, Read, Write};

pub fn handle(
    args: IndexArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let scheme = args.scheme.into();
    let alphabet = create_alphabet(registry, &args.alphabet, scheme)?;

    // Read the collection (JSON: motif -> mapping -> mapping -> sequence)
    let collection = if let Some(file_path) = &args.file {
        MotifCollection::load(file_path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        MotifCollection::from_json_str(&buffer)?
    };

    let entries = build_index(&collection, &alphabet, scheme, args.occ)?;

    match &args.out {
        Some(path) => {
            write_index_file(&entries, path)?;
            eprintln!(
                "Successfully indexed {} motifs into {}",
                entries.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_index(&entries, &mut handle)?;
            handle.flush()?;
            eprintln!("Successfully indexed {} motifs", entries.len());
        }
    }

    Ok(())
}
