//! Tree layout for rendering.
//!
//! # Design
//!
//! Produces a serializable mirror of the Huffman tree with drawing
//! coordinates attached. Leaves are placed left to right on an even
//! grid, one slot per leaf, so sibling subtrees can never overlap no
//! matter how skewed the tree is. Internal nodes sit at the midpoint
//! of their children; depth alone fixes the y coordinate.

use serde::Serialize;

use crate::code::CodeBook;
use crate::tree::Node;

const TOP_MARGIN: f64 = 50.0;
const LEVEL_SPACING: f64 = 75.0;
const LEAF_SPAN: f64 = 60.0;
const MIN_WIDTH: f64 = 600.0;
const MAX_WIDTH: f64 = 1000.0;
const BASE_HEIGHT: f64 = 100.0;
const MIN_HEIGHT: f64 = 200.0;
const MAX_HEIGHT: f64 = 2000.0;

/// Which edge a node hangs from.
///
/// Serializes as "left"/"right", or "" for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    #[serde(rename = "")]
    Root,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
}

/// A tree node with drawing coordinates.
///
/// `symbol` and `code` are present on leaves only.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutNode {
    pub x: f64,
    pub y: f64,
    pub is_leaf: bool,
    pub frequency: u64,
    pub children: Vec<LayoutNode>,
    pub side: Side,
    #[serde(rename = "char", skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Canvas width for a tree with `leaf_count` leaves.
pub fn canvas_width(leaf_count: usize) -> f64 {
    (leaf_count as f64 * LEAF_SPAN).clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Canvas height for a tree of the given depth.
pub fn canvas_height(depth: usize) -> f64 {
    (BASE_HEIGHT + depth as f64 * LEVEL_SPACING).clamp(MIN_HEIGHT, MAX_HEIGHT)
}

/// Lays out `root` on a canvas sized by [`canvas_width`].
///
/// Codes are looked up in `codebook`, which must come from the same
/// tree for the leaf annotations to make sense.
pub fn layout_tree(root: &Node, codebook: &CodeBook) -> LayoutNode {
    let slot = canvas_width(root.leaf_count()) / root.leaf_count() as f64;
    let mut next_leaf = 0;
    place(root, 0, Side::Root, slot, &mut next_leaf, codebook)
}

fn place(
    node: &Node,
    depth: usize,
    side: Side,
    slot: f64,
    next_leaf: &mut usize,
    codebook: &CodeBook,
) -> LayoutNode {
    let y = TOP_MARGIN + depth as f64 * LEVEL_SPACING;
    match node {
        Node::Leaf { symbol, frequency } => {
            let index = *next_leaf;
            *next_leaf += 1;
            LayoutNode {
                x: (index as f64 + 0.5) * slot,
                y,
                is_leaf: true,
                frequency: *frequency,
                children: Vec::new(),
                side,
                symbol: Some(*symbol),
                code: codebook.code_for(*symbol).map(str::to_string),
            }
        }
        Node::Internal {
            frequency,
            left,
            right,
        } => {
            let left_child = place(left, depth + 1, Side::Left, slot, next_leaf, codebook);
            let right_child = place(right, depth + 1, Side::Right, slot, next_leaf, codebook);
            LayoutNode {
                x: (left_child.x + right_child.x) / 2.0,
                y,
                is_leaf: false,
                frequency: *frequency,
                children: vec![left_child, right_child],
                side,
                symbol: None,
                code: None,
            }
        }
    }
}
