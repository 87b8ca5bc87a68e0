//! huffviz-core: Huffman text codec with visualization-ready output
//!
//! This library provides the core components for a text compression
//! engine that:
//! - Counts symbol frequencies and builds a deterministic Huffman tree
//! - Encodes text to a '0'/'1' bit string and decodes it back from the
//!   frequency table alone
//! - Lays the tree out on a canvas for rendering
//! - Packs bit strings into a CRC-checked binary container
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `freq`: Frequency analysis in first-occurrence order
//! - `tree`: Huffman tree construction with deterministic tie-breaks
//! - `code`: Code assignment from tree traversal
//! - `codec`: Encode/decode over display bit strings
//! - `layout`: Drawing coordinates for the tree
//! - `stats`: Size and ratio metrics
//! - `bitio`: Low-level bit reading/writing
//! - `container`: Binary container serialization
//! - `api`: Request/response types for a JSON boundary
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Deterministic**: The tree is a pure function of the frequency
//!   table, so encoder and decoder always agree
//! - **Display-first**: Sizes are measured on the bit string a viewer
//!   sees; byte packing is a separate concern
//!
//! # Quick Start
//!
//! ```
//! use huffviz_core::{decode, encode};
//!
//! let encoding = encode("abracadabra")?;
//! let decoded = decode(&encoding.bits, &encoding.table)?;
//! assert_eq!(decoded, "abracadabra");
//! # Ok::<(), huffviz_core::Error>(())
//! ```

pub mod api;
pub mod bitio;
pub mod code;
pub mod codec;
pub mod container;
pub mod error;
pub mod freq;
pub mod layout;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use codec::{decode, encode, Encoding};
pub use error::{Error, Result};
pub use freq::{FrequencyEntry, FrequencyTable};
