//! Encode and decode text against a Huffman tree.
//!
//! # Design
//!
//! The encoded form is a display bit string: a `String` of '0'/'1'
//! characters, one per emitted bit. Compression stats are measured on
//! that string, so the reported sizes match what a viewer sees. Packing
//! into real bytes happens separately in the container module.
//!
//! Decoding never receives the tree. It receives the frequency table,
//! rebuilds the tree (deterministic, see [`crate::tree`]), and walks it
//! bit by bit: left on '0', right on '1', emit on every leaf.

use log::debug;

use crate::code::{assign_codes, CodeBook};
use crate::error::{CodecError, Error, Result};
use crate::freq::FrequencyTable;
use crate::tree::{build_tree, Node};

/// Everything produced by one encoding pass.
#[derive(Debug, Clone)]
pub struct Encoding {
    /// The '0'/'1' bit string.
    pub bits: String,
    /// Symbol frequencies in first-occurrence order.
    pub table: FrequencyTable,
    /// Per-symbol codes in leaf order.
    pub codebook: CodeBook,
    /// The tree both sides agree on.
    pub tree: Node,
}

/// Encodes `text`, deriving the frequency table, tree, and codebook.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for empty text.
pub fn encode(text: &str) -> Result<Encoding> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    let table = FrequencyTable::from_text(text);
    let tree = build_tree(&table)?;
    let codebook = assign_codes(&tree);
    let bits = encode_with(text, &codebook)?;
    debug!(
        "encoded {} chars into {} bits",
        table.total_count(),
        bits.len()
    );
    Ok(Encoding {
        bits,
        table,
        codebook,
        tree,
    })
}

/// Encodes `text` against an existing codebook.
///
/// # Errors
///
/// Returns [`CodecError::MissingCode`] if `text` contains a symbol the
/// codebook does not cover.
pub fn encode_with(text: &str, codebook: &CodeBook) -> Result<String> {
    // Two bits per symbol is a reasonable floor for the reserve.
    let mut bits = String::with_capacity(text.len() * 2);
    for symbol in text.chars() {
        match codebook.code_for(symbol) {
            Some(code) => bits.push_str(code),
            None => return Err(CodecError::MissingCode { symbol }.into()),
        }
    }
    Ok(bits)
}

/// Decodes a '0'/'1' bit string using the tree rebuilt from `table`.
///
/// An empty bit string decodes to an empty text. Boundary layers that
/// want to reject empty payloads do so before calling in.
///
/// # Errors
///
/// - Table validation errors ([`crate::error::TableError`]) if `table`
///   is empty, has duplicates, or has zero counts
/// - [`CodecError::InvalidBit`] on any character besides '0'/'1'
/// - [`CodecError::Truncated`] if the bits end mid-code
/// - [`CodecError::DeadBranch`] on a '1' against a single-leaf tree
pub fn decode(bits: &str, table: &FrequencyTable) -> Result<String> {
    table.validate()?;
    let root = build_tree(table)?;

    // A lone leaf has no branches; every '0' is one symbol.
    if let Node::Leaf { symbol, .. } = root {
        let mut text = String::with_capacity(bits.len() * symbol.len_utf8());
        for (position, ch) in bits.chars().enumerate() {
            match ch {
                '0' => text.push(symbol),
                '1' => return Err(CodecError::DeadBranch { position }.into()),
                found => return Err(CodecError::InvalidBit { position, found }.into()),
            }
        }
        return Ok(text);
    }

    let mut text = String::new();
    let mut current = &root;
    let mut code_start = 0;
    for (position, ch) in bits.chars().enumerate() {
        let bit = match ch {
            '0' => false,
            '1' => true,
            found => return Err(CodecError::InvalidBit { position, found }.into()),
        };
        current = match current {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // Leaves reset to the root below, so the walk only ever
            // steps from internal nodes.
            Node::Leaf { .. } => current,
        };
        if let Node::Leaf { symbol, .. } = current {
            text.push(*symbol);
            current = &root;
            code_start = position + 1;
        }
    }

    // All characters scanned above were bits, so byte and char
    // positions agree here.
    if code_start != bits.len() {
        return Err(CodecError::Truncated { position: code_start }.into());
    }
    debug!("decoded {} bits into {} chars", bits.len(), text.chars().count());
    Ok(text)
}
