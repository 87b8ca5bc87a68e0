//! Huffman tree construction.
//!
//! # Design
//!
//! Standard greedy construction: seed a min-heap with one leaf per table
//! entry, then repeatedly merge the two lightest nodes until one remains.
//!
//! # Invariants
//!
//! - Ties on frequency break by insertion sequence: leaves carry their
//!   table position, merged nodes take the next sequence number. Equal
//!   keys are impossible, so heap order is total and the resulting tree
//!   is a pure function of the table.
//! - The first node extracted from a merge pair becomes the LEFT child.
//!   Left edges read as '0', right edges as '1' during code assignment.
//! - Rebuilding from the same table always yields the same tree, which is
//!   what lets a decoder that only received the table agree with the
//!   encoder bit-for-bit.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::debug;

use crate::error::{Result, TableError};
use crate::freq::FrequencyTable;

/// A node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one symbol.
    Leaf { symbol: char, frequency: u64 },
    /// Merge of two subtrees; its frequency is the sum of both.
    Internal {
        frequency: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Total frequency carried by this subtree.
    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } => *frequency,
            Node::Internal { frequency, .. } => *frequency,
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Longest root-to-leaf edge count. A lone leaf has depth 0.
    ///
    /// Depth is bounded by the Fibonacci growth of worst-case Huffman
    /// trees (< 90 levels for u64 frequencies), so the recursive walks
    /// in this crate cannot exhaust the stack.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap key: frequency first, then insertion sequence.
struct HeapEntry {
    frequency: u64,
    seq: usize,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Builds the Huffman tree for `table`.
///
/// A single-entry table yields a lone leaf as the root.
///
/// # Errors
///
/// Returns [`TableError::Empty`] if the table has no entries.
pub fn build_tree(table: &FrequencyTable) -> Result<Node> {
    if table.is_empty() {
        return Err(TableError::Empty.into());
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::with_capacity(table.len());
    for (seq, entry) in table.iter().enumerate() {
        heap.push(Reverse(HeapEntry {
            frequency: entry.count,
            seq,
            node: Node::Leaf {
                symbol: entry.symbol,
                frequency: entry.count,
            },
        }));
    }

    let mut next_seq = table.len();
    loop {
        let Reverse(first) = match heap.pop() {
            Some(entry) => entry,
            None => return Err(TableError::Empty.into()),
        };
        let Reverse(second) = match heap.pop() {
            // Last node standing is the root.
            None => {
                debug!(
                    "built tree: {} leaves, depth {}",
                    first.node.leaf_count(),
                    first.node.depth()
                );
                return Ok(first.node);
            }
            Some(entry) => entry,
        };
        let frequency = first.frequency.saturating_add(second.frequency);
        heap.push(Reverse(HeapEntry {
            frequency,
            seq: next_seq,
            node: Node::Internal {
                frequency,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        }));
        next_seq += 1;
    }
}
