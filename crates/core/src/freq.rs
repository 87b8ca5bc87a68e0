//! Frequency analysis over input text.
//!
//! The table preserves first-occurrence order of symbols. That order is
//! load-bearing: tree construction breaks frequency ties by table position,
//! so encoder and decoder must see entries in the same order to agree on
//! the tree shape.

use std::collections::{HashMap, HashSet};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// One symbol and how many times it occurs.
///
/// Serializes as `{"char": "a", "freq": 3}` to match the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    #[serde(rename = "char")]
    pub symbol: char,
    #[serde(rename = "freq")]
    pub count: u64,
}

/// Ordered mapping from symbol to occurrence count.
///
/// Serializes transparently as an array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Counts symbol occurrences in `text`, in first-occurrence order.
    ///
    /// An empty text yields an empty table.
    pub fn from_text(text: &str) -> Self {
        let mut entries: Vec<FrequencyEntry> = Vec::new();
        let mut positions: HashMap<char, usize> = HashMap::new();
        for symbol in text.chars() {
            match positions.get(&symbol) {
                Some(&index) => entries[index].count += 1,
                None => {
                    positions.insert(symbol, entries.len());
                    entries.push(FrequencyEntry { symbol, count: 1 });
                }
            }
        }
        trace!("counted {} distinct symbols", entries.len());
        Self { entries }
    }

    /// Builds a table from externally supplied entries (e.g., a decode request).
    ///
    /// The entries are taken as-is; call [`validate`](Self::validate) before
    /// building a tree from an untrusted table.
    pub fn from_entries(entries: Vec<FrequencyEntry>) -> Self {
        Self { entries }
    }

    /// Checks the table invariants: non-empty, no duplicate symbols,
    /// no zero counts.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Empty`], [`TableError::DuplicateSymbol`], or
    /// [`TableError::ZeroCount`].
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(TableError::Empty.into());
        }
        let mut seen: HashSet<char> = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if entry.count == 0 {
                return Err(TableError::ZeroCount { symbol: entry.symbol }.into());
            }
            if !seen.insert(entry.symbol) {
                return Err(TableError::DuplicateSymbol { symbol: entry.symbol }.into());
            }
        }
        Ok(())
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (total symbols in the source text).
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_counts_in_first_occurrence_order() {
        let table = FrequencyTable::from_text("aaabbc");
        let entries = table.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], FrequencyEntry { symbol: 'a', count: 3 });
        assert_eq!(entries[1], FrequencyEntry { symbol: 'b', count: 2 });
        assert_eq!(entries[2], FrequencyEntry { symbol: 'c', count: 1 });
    }

    #[test]
    fn test_empty_text_yields_empty_table() {
        let table = FrequencyTable::from_text("");
        assert!(table.is_empty());
        assert_eq!(table.total_count(), 0);
    }

    #[test]
    fn test_counts_unicode_scalars() {
        let table = FrequencyTable::from_text("héhé🎈");
        assert_eq!(table.len(), 3);
        assert_eq!(table.total_count(), 5);
        assert_eq!(table.entries()[0].symbol, 'h');
        assert_eq!(table.entries()[2].symbol, '🎈');
    }

    #[test]
    fn test_validate_accepts_counted_table() {
        let table = FrequencyTable::from_text("mississippi");
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let table = FrequencyTable::from_entries(vec![]);
        assert!(matches!(
            table.validate(),
            Err(Error::Table(TableError::Empty))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_symbol() {
        let table = FrequencyTable::from_entries(vec![
            FrequencyEntry { symbol: 'a', count: 2 },
            FrequencyEntry { symbol: 'b', count: 1 },
            FrequencyEntry { symbol: 'a', count: 5 },
        ]);
        assert!(matches!(
            table.validate(),
            Err(Error::Table(TableError::DuplicateSymbol { symbol: 'a' }))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let table = FrequencyTable::from_entries(vec![
            FrequencyEntry { symbol: 'a', count: 2 },
            FrequencyEntry { symbol: 'b', count: 0 },
        ]);
        assert!(matches!(
            table.validate(),
            Err(Error::Table(TableError::ZeroCount { symbol: 'b' }))
        ));
    }

    #[test]
    fn test_serde_wire_shape() {
        let table = FrequencyTable::from_text("aab");
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"char": "a", "freq": 2},
                {"char": "b", "freq": 1},
            ])
        );
        let back: FrequencyTable = serde_json::from_value(json).unwrap();
        assert_eq!(back, table);
    }
}
