//! The indexing pipeline: encode, sort, persist.

use crate::alphabet::Alphabet;
use crate::codec::CodecScheme;
use crate::collection::{MotifCollection, occurrence_weight};
use crate::encode;
use crate::errors::EncodeError;
use num_bigint::BigUint;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One line of an index: a code, optionally carrying an occurrence weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub code: BigUint,
    pub weight: Option<u64>,
}

/// Encodes every motif in the collection and returns the entries sorted
/// ascending by code.
///
/// The expected word length is taken from the first motif enumerated and
/// enforced against every other motif, so a mixed-length collection fails
/// with `LengthMismatch` instead of silently producing codes in differing
/// ranges. When `with_occurrence` is set, each entry carries the motif's
/// two-level leaf count.
///
/// # Errors
///
/// Any `UnknownSymbol` or `LengthMismatch` aborts the whole build; there is
/// no partial index.
pub fn build_index(
    collection: &MotifCollection,
    alphabet: &Alphabet,
    scheme: CodecScheme,
    with_occurrence: bool,
) -> Result<Vec<IndexEntry>, EncodeError> {
    let expected_len = collection
        .iter()
        .next()
        .map(|(motif, _)| motif.chars().count());

    let mut entries = Vec::with_capacity(collection.len());
    for (motif, data) in collection.iter() {
        let code = encode(motif, alphabet, expected_len, scheme)?;
        let weight = with_occurrence.then(|| occurrence_weight(data));
        entries.push(IndexEntry { code, weight });
    }

    entries.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(entries)
}

/// Writes an index in its line-oriented text form.
///
/// First line is the entry count, then one space-joined line per entry, all
/// newline-terminated, in the order given (callers pass sorted entries).
pub fn write_index<W: Write>(entries: &[IndexEntry], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", entries.len())?;
    for entry in entries {
        match entry.weight {
            Some(weight) => writeln!(writer, "{} {}", entry.code, weight)?,
            None => writeln!(writer, "{}", entry.code)?,
        }
    }
    Ok(())
}

/// Persists an index to a file, publishing atomically.
///
/// The content goes to a sibling temporary file first and is renamed into
/// place, so a failure mid-write never leaves a truncated index at the
/// destination.
pub fn write_index_file(entries: &[IndexEntry], path: &Path) -> io::Result<()> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    {
        let file = fs::File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        write_index(entries, &mut writer)?;
        writer.flush()?;
    }

    fs::rename(&tmp_path, path)
}
