use std::collections::HashMap;

/// An ordered set of distinct symbols defining a numeral base.
///
/// A symbol's position in the sequence is its numeric rank; the alphabet's
/// size is the base of every code produced with it. Reordering the symbols
/// changes every code, so an alphabet must be held constant across an
/// index's whole lifetime.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    ranks: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates a new alphabet from an ordered list of symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet has fewer than two symbols or
    /// contains duplicates.
    pub fn new(symbols: Vec<char>) -> Result<Self, String> {
        if symbols.len() < 2 {
            return Err(format!(
                "Alphabet needs at least 2 symbols, got {}",
                symbols.len()
            ));
        }

        let mut ranks = HashMap::new();
        for (i, &c) in symbols.iter().enumerate() {
            if ranks.insert(c, i).is_some() {
                return Err(format!("Duplicate symbol in alphabet: {}", c));
            }
        }

        Ok(Alphabet { symbols, ranks })
    }

    /// Creates an alphabet from a string of symbols.
    pub fn from_str(s: &str) -> Result<Self, String> {
        Self::new(s.chars().collect())
    }

    /// The default DNA motif alphabet, "ATCG".
    pub fn dna() -> Self {
        // Four distinct symbols, cannot fail
        Self::from_str("ATCG").unwrap()
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol for a rank, or `None` if the rank is out of range.
    pub fn symbol(&self, rank: usize) -> Option<char> {
        self.symbols.get(rank).copied()
    }

    /// Returns the rank of a symbol, or `None` if it is not in the alphabet.
    pub fn rank(&self, symbol: char) -> Option<usize> {
        self.ranks.get(&symbol).copied()
    }

    /// Returns the symbols in rank order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}
