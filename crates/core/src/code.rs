//! Code assignment: tree traversal to per-symbol bit strings.
//!
//! Left edges emit '0', right edges emit '1'. Codes come out in
//! left-to-right leaf order, which is the order the tree dictates rather
//! than the order of the frequency table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tree::Node;

/// One symbol and its assigned code.
///
/// Serializes as `{"char": "a", "code": "01"}` to match the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    #[serde(rename = "char")]
    pub symbol: char,
    pub code: String,
}

/// Symbol-to-code mapping produced from one tree.
#[derive(Debug, Clone, Default)]
pub struct CodeBook {
    entries: Vec<CodeEntry>,
    index: HashMap<char, usize>,
}

impl CodeBook {
    /// The code assigned to `symbol`, if it is in the tree.
    pub fn code_for(&self, symbol: char) -> Option<&str> {
        self.index.get(&symbol).map(|&i| self.entries[i].code.as_str())
    }

    /// Entries in left-to-right leaf order.
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assigns a code to every leaf under `root`.
///
/// A lone leaf gets the one-bit code "0" so that single-symbol text still
/// produces a non-empty encoding.
pub fn assign_codes(root: &Node) -> CodeBook {
    let mut entries = Vec::with_capacity(root.leaf_count());
    match root {
        Node::Leaf { symbol, .. } => entries.push(CodeEntry {
            symbol: *symbol,
            code: "0".to_string(),
        }),
        Node::Internal { .. } => collect_codes(root, String::new(), &mut entries),
    }
    let index = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.symbol, i))
        .collect();
    CodeBook { entries, index }
}

fn collect_codes(node: &Node, prefix: String, entries: &mut Vec<CodeEntry>) {
    match node {
        Node::Leaf { symbol, .. } => entries.push(CodeEntry {
            symbol: *symbol,
            code: prefix,
        }),
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            collect_codes(left, left_prefix, entries);
            let mut right_prefix = prefix;
            right_prefix.push('1');
            collect_codes(right, right_prefix, entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use crate::tree::build_tree;

    fn codebook_for(text: &str) -> CodeBook {
        let table = FrequencyTable::from_text(text);
        assign_codes(&build_tree(&table).unwrap())
    }

    #[test]
    fn test_single_symbol_gets_zero_code() {
        let book = codebook_for("aaaa");
        assert_eq!(book.len(), 1);
        assert_eq!(book.code_for('a'), Some("0"));
    }

    #[test]
    fn test_two_symbols_get_one_bit_codes() {
        let book = codebook_for("ab");
        assert_eq!(book.code_for('a'), Some("0"));
        assert_eq!(book.code_for('b'), Some("1"));
    }

    #[test]
    fn test_common_symbol_gets_shortest_code() {
        let book = codebook_for("aaabbc");
        assert_eq!(book.code_for('a'), Some("0"));
        assert_eq!(book.code_for('c'), Some("10"));
        assert_eq!(book.code_for('b'), Some("11"));
    }

    #[test]
    fn test_entries_follow_leaf_order() {
        // The tree for "xyz" puts z alone on the left, so the codebook
        // lists z first even though the table lists x first.
        let book = codebook_for("xyz");
        let symbols: Vec<char> = book.entries().iter().map(|e| e.symbol).collect();
        assert_eq!(symbols, vec!['z', 'x', 'y']);
        assert_eq!(book.code_for('z'), Some("0"));
        assert_eq!(book.code_for('x'), Some("10"));
        assert_eq!(book.code_for('y'), Some("11"));
    }

    #[test]
    fn test_unknown_symbol_has_no_code() {
        let book = codebook_for("ab");
        assert_eq!(book.code_for('q'), None);
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let book = codebook_for("the quick brown fox jumps over the lazy dog");
        let entries = book.entries();
        for (i, a) in entries.iter().enumerate() {
            for (j, b) in entries.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.code.starts_with(&a.code),
                        "{:?} ({}) is a prefix of {:?} ({})",
                        a.symbol,
                        a.code,
                        b.symbol,
                        b.code
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_code_is_empty() {
        let book = codebook_for("abcdefgg");
        assert!(book.entries().iter().all(|e| !e.code.is_empty()));
    }
}
