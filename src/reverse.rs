//! The reverse pipeline: stream an index file back into motif strings.

use crate::alphabet::Alphabet;
use crate::codec::CodecScheme;
use crate::decode;
use crate::errors::DecodeError;
use num_bigint::BigUint;
use std::fmt;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Errors surfaced while streaming an index file.
#[derive(Debug)]
pub enum ReverseError {
    Io(io::Error),
    /// A line's first field was not a decimal integer
    Parse { line: usize, field: String },
    /// A code could not be decoded at the declared length. The likely cause
    /// is a declared length smaller than the one used at encode time, which
    /// taints every remaining line the same way.
    Decode {
        line: usize,
        code: BigUint,
        length: usize,
        source: DecodeError,
    },
}

impl fmt::Display for ReverseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReverseError::Io(e) => write!(f, "I/O error reading index: {}", e),
            ReverseError::Parse { line, field } => {
                write!(f, "Line {}: expected a decimal code, got \"{}\"", line, field)
            }
            ReverseError::Decode { line, code, length, .. } => {
                write!(
                    f,
                    "Can't decode {} at line {}. Specified motif length {} is probably too short",
                    code, line, length
                )
            }
        }
    }
}

impl std::error::Error for ReverseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReverseError::Io(e) => Some(e),
            ReverseError::Decode { source, .. } => Some(source),
            ReverseError::Parse { .. } => None,
        }
    }
}

/// A lazy, forward-only stream of decoded motifs from an index file.
///
/// Yields motifs in file order (ascending code order, by the index
/// invariant). The first (count) line is skipped; trailing fields such as
/// occurrence weights are ignored. After the first error the iterator is
/// done for good: continuing past a range failure would misdecode every
/// remaining line identically.
pub struct ReverseIndex<R: BufRead> {
    reader: R,
    alphabet: Alphabet,
    scheme: CodecScheme,
    length: usize,
    line_no: usize,
    skipped_header: bool,
    failed: bool,
}

impl ReverseIndex<BufReader<fs::File>> {
    /// Opens an index file for reverse decoding at the declared word length.
    ///
    /// The file format does not carry the length; it must be supplied here,
    /// matching the length used when the index was built.
    pub fn open(
        path: &Path,
        length: usize,
        alphabet: Alphabet,
        scheme: CodecScheme,
    ) -> io::Result<Self> {
        let file = fs::File::open(path)?;
        Ok(Self::new(BufReader::new(file), length, alphabet, scheme))
    }
}

impl<R: BufRead> ReverseIndex<R> {
    /// Wraps any buffered reader producing index-file lines.
    pub fn new(reader: R, length: usize, alphabet: Alphabet, scheme: CodecScheme) -> Self {
        ReverseIndex {
            reader,
            alphabet,
            scheme,
            length,
            line_no: 0,
            skipped_header: false,
            failed: false,
        }
    }

    fn next_line(&mut self) -> Option<Result<String, io::Error>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl<R: BufRead> Iterator for ReverseIndex<R> {
    type Item = Result<String, ReverseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if !self.skipped_header {
            self.skipped_header = true;
            match self.next_line() {
                None => return None,
                Some(Err(e)) => {
                    self.failed = true;
                    return Some(Err(ReverseError::Io(e)));
                }
                Some(Ok(_)) => {}
            }
        }

        loop {
            let line = match self.next_line() {
                None => return None,
                Some(Err(e)) => {
                    self.failed = true;
                    return Some(Err(ReverseError::Io(e)));
                }
                Some(Ok(line)) => line,
            };

            // Tolerate blank lines (a trailing newline produces one)
            let Some(field) = line.split_whitespace().next() else {
                continue;
            };

            let code: BigUint = match field.parse() {
                Ok(code) => code,
                Err(_) => {
                    self.failed = true;
                    return Some(Err(ReverseError::Parse {
                        line: self.line_no,
                        field: field.to_string(),
                    }));
                }
            };

            return match decode(&code, &self.alphabet, self.length, self.scheme) {
                Ok(word) => Some(Ok(word)),
                Err(source) => {
                    self.failed = true;
                    Some(Err(ReverseError::Decode {
                        line: self.line_no,
                        code,
                        length: self.length,
                        source,
                    }))
                }
            };
        }
    }
}
