//! Bit-level I/O for packing '0'/'1' code streams into bytes.
//!
//! The codec itself works on display bit strings; this module is the
//! boundary where those strings become bytes for the binary container.
//! Both sides operate MSB-first (most significant bit first).
//!
//! # Padding Rules
//! - BitWriter: pads the final incomplete byte with trailing zeros
//! - BitReader: cannot tell padding from data; the caller must track
//!   the exact bit count (the container header carries it)
//!
//! # Example
//! ```
//! use huffviz_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! for bit in [true, false, true] {
//!     writer.push(bit);
//! }
//! assert_eq!(writer.bit_len(), 3);
//!
//! // 101 -> padded to 10100000
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b1010_0000]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert!(reader.read_bit().unwrap());
//! assert!(!reader.read_bit().unwrap());
//! assert!(reader.read_bit().unwrap());
//! ```

use crate::error::{BitIoError, Result};

/// Writes bits MSB-first into a byte buffer.
///
/// Accumulates bits in a one-byte buffer and flushes complete bytes to
/// the output. When finished, pads the final partial byte with zeros.
///
/// # Invariants
/// - `bit_buffer` contains up to 7 bits (never a full byte)
/// - `bit_count` is always < 8
#[derive(Debug, Clone)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    /// Create a writer with room for `bits` bits preallocated.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        if bit {
            self.bit_buffer |= 1 << (7 - self.bit_count);
        }
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append each character of a '0'/'1' display string as one bit.
    ///
    /// Any character other than '1' is written as a zero bit; callers
    /// pass encoder output, which is all '0'/'1'.
    pub fn push_bits(&mut self, bits: &str) {
        for ch in bits.chars() {
            self.push(ch == '1');
        }
    }

    /// Finish writing and return the output bytes.
    ///
    /// If any bits remain in the buffer, they are padded with trailing
    /// zeros to complete the final byte. This consumes the writer.
    pub fn finish(mut self) -> Vec<u8> {
        // Flush any remaining bits (already padded with zeros)
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        self.bytes
    }

    /// Total number of bits written (including the partial byte).
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads bits MSB-first from a byte buffer.
///
/// Caller must track how many bits are valid; padding bits at the end
/// of the buffer are not distinguishable from data.
///
/// # Invariants
/// - `bit_position` never exceeds `data.len() * 8`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Current bit position (0 = MSB of first byte)
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader for the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    /// Read a single bit.
    ///
    /// # Errors
    /// Returns `BitIoError::UnexpectedEof` if no bits remain.
    pub fn read_bit(&mut self) -> Result<bool> {
        let byte_index = self.bit_position / 8;
        if byte_index >= self.data.len() {
            return Err(BitIoError::UnexpectedEof.into());
        }
        let bit_offset = self.bit_position % 8;
        self.bit_position += 1;
        Ok((self.data[byte_index] >> (7 - bit_offset)) & 1 == 1)
    }

    /// Number of bits remaining in the buffer.
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.bit_position
    }

    /// Check if we're at the end of the buffer.
    pub fn is_empty(&self) -> bool {
        self.bit_position >= self.data.len() * 8
    }
}
