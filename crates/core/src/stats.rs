//! Compression statistics.
//!
//! Sizes are measured in display bits: the original text is charged 8
//! bits per Unicode scalar, the encoded form one bit per '0'/'1'
//! character of the bit string. The packed byte form is deliberately
//! not what gets reported.

use serde::{Deserialize, Serialize};

/// Fixed-width cost charged to each symbol of the original text.
pub const BITS_PER_SYMBOL: u64 = 8;

/// Size comparison between original and encoded text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Original size in bits (symbol count x 8).
    pub original_size: u64,
    /// Encoded size in bits.
    pub compressed_size: u64,
    /// compressed / original; 1.0 for empty input.
    pub compression_ratio: f64,
    /// (1 - ratio) x 100, a percentage.
    pub space_saved: f64,
}

impl CompressionStats {
    /// Computes stats from raw sizes.
    pub fn from_sizes(original_symbols: u64, compressed_bits: u64) -> Self {
        let original_size = original_symbols * BITS_PER_SYMBOL;
        let (compression_ratio, space_saved) = if original_size == 0 {
            (1.0, 0.0)
        } else {
            let ratio = compressed_bits as f64 / original_size as f64;
            (ratio, (1.0 - ratio) * 100.0)
        };
        Self {
            original_size,
            compressed_size: compressed_bits,
            compression_ratio,
            space_saved,
        }
    }

    /// Computes stats for a text and its encoded bit string.
    pub fn measure(text: &str, bits: &str) -> Self {
        Self::from_sizes(text.chars().count() as u64, bits.len() as u64)
    }
}
