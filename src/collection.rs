//! Motif collections and occurrence weighting.
//!
//! A collection is an enumerable mapping from motif to a two-level nested
//! mapping whose leaves are sequences (typically motif → organism → sequence
//! id → hit list). The only property the indexer uses is the total leaf
//! element count, the motif's occurrence weight.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The per-motif nested data: two mapping levels down to opaque leaf lists.
pub type OccurrenceMap = HashMap<String, HashMap<String, Vec<serde_json::Value>>>;

/// A collection of motifs with their associated occurrence data.
///
/// Motifs are map keys and therefore unique. All motifs in one collection
/// are expected to share a single length; the index build enforces this
/// against the first motif it enumerates.
#[derive(Debug, Clone)]
pub struct MotifCollection {
    motifs: HashMap<String, OccurrenceMap>,
}

impl MotifCollection {
    /// Parses a collection from a JSON document: an object of
    /// motif → object → object → array.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let motifs: HashMap<String, OccurrenceMap> = serde_json::from_str(json)?;
        Ok(MotifCollection { motifs })
    }

    /// Loads a collection from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json_str(&content)?)
    }

    /// Iterates over motifs and their occurrence data, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OccurrenceMap)> {
        self.motifs.iter()
    }

    /// Number of distinct motifs in the collection.
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }
}

/// Counts the leaf entries reachable through exactly two mapping levels.
///
/// This is the motif's occurrence weight. Deliberately bounded to two levels
/// to match the collection shape; it is not a general deep walk. Zero is a
/// valid weight (motif present with no recorded occurrences).
pub fn occurrence_weight(data: &OccurrenceMap) -> u64 {
    data.values()
        .flat_map(|inner| inner.values())
        .map(|leaves| leaves.len() as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_weight_two_levels() {
        let collection = MotifCollection::from_json_str(
            r#"{
                "ACGT": {
                    "org1": {"seq1": [1, 2, 3], "seq2": [4, 5, 6, 7, 8]}
                }
            }"#,
        )
        .unwrap();

        let (_, data) = collection.iter().next().unwrap();
        assert_eq!(occurrence_weight(data), 8);
    }

    #[test]
    fn test_occurrence_weight_empty() {
        let collection =
            MotifCollection::from_json_str(r#"{"ACGT": {}, "TTTT": {"org": {}}}"#).unwrap();

        for (_, data) in collection.iter() {
            assert_eq!(occurrence_weight(data), 0);
        }
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        assert!(MotifCollection::from_json_str(r#"["not", "an", "object"]"#).is_err());
    }

    #[test]
    fn test_motifs_are_unique_keys() {
        let collection = MotifCollection::from_json_str(r#"{"AAAA": {}, "CCCC": {}}"#).unwrap();
        assert_eq!(collection.len(), 2);
        assert!(!collection.is_empty());
    }
}
