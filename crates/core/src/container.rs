//! Binary container serialization and parsing.
//!
//! A container packages an encoded text with everything a decoder
//! needs: the frequency table (from which the tree is rebuilt) and the
//! packed payload bits. This is the on-disk form; the display bit
//! string stays in memory.
//!
//! # Container Format
//!
//! ```text
//! +--------------------+
//! | Magic (4 bytes)    |  0x48 0x56 0x5A 0x31 ("HVZ1")
//! +--------------------+
//! | symbol_count (4)   |  u32 little-endian
//! +--------------------+
//! | entries (12 x k)   |  per entry: u32 LE Unicode scalar,
//! | (variable)         |  u64 LE occurrence count
//! +--------------------+
//! | bit_len (8)        |  u64 LE, exact number of payload bits
//! +--------------------+
//! | crc32 (4)          |  u32 LE checksum
//! +--------------------+
//! | payload            |  ceil(bit_len/8) bytes, MSB-first,
//! | (variable)         |  zero-padded
//! +--------------------+
//! ```
//!
//! # CRC Coverage
//!
//! The CRC32 covers symbol_count, the entries, bit_len, and the
//! payload. Everything after the magic is protected.

use log::debug;

use crate::bitio::{BitReader, BitWriter};
use crate::codec;
use crate::error::{ContainerError, Error, Result};
use crate::freq::{FrequencyEntry, FrequencyTable};

/// Magic number for containers: "HVZ1"
const MAGIC: [u8; 4] = [0x48, 0x56, 0x5A, 0x31];

/// Bytes per frequency table entry (u32 scalar + u64 count)
const ENTRY_SIZE: usize = 12;

/// Fixed bytes outside the entries and payload
/// (magic + symbol_count + bit_len + crc32)
const FIXED_SIZE: usize = 20;

/// Encodes `text` and packs the result into a container.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for empty text; otherwise encoding
/// errors propagate.
pub fn compress(text: &str) -> Result<Vec<u8>> {
    let encoding = codec::encode(text)?;

    let mut writer = BitWriter::with_capacity(encoding.bits.len());
    writer.push_bits(&encoding.bits);
    let bit_len = writer.bit_len() as u64;
    let payload = writer.finish();

    let mut entries = Vec::with_capacity(encoding.table.len() * ENTRY_SIZE);
    for entry in encoding.table.iter() {
        entries.extend_from_slice(&(entry.symbol as u32).to_le_bytes());
        entries.extend_from_slice(&entry.count.to_le_bytes());
    }

    let symbol_count = encoding.table.len() as u32;
    let crc32 = compute_crc(symbol_count, &entries, bit_len, &payload);

    let mut container = Vec::with_capacity(FIXED_SIZE + entries.len() + payload.len());
    container.extend_from_slice(&MAGIC);
    container.extend_from_slice(&symbol_count.to_le_bytes());
    container.extend_from_slice(&entries);
    container.extend_from_slice(&bit_len.to_le_bytes());
    container.extend_from_slice(&crc32.to_le_bytes());
    container.extend_from_slice(&payload);

    debug!(
        "packed {} bits into {} container bytes",
        bit_len,
        container.len()
    );
    Ok(container)
}

/// Parses a container and decodes the text inside.
///
/// # Errors
/// - `ContainerError::TooShort` / `LengthMismatch` on size problems
/// - `ContainerError::InvalidMagic` if the magic doesn't match
/// - `Error::Crc` if the checksum fails
/// - `ContainerError::InvalidSymbol` if an entry is not a Unicode scalar
/// - Decode errors propagate (e.g., a forged table or payload)
pub fn decompress(bytes: &[u8]) -> Result<String> {
    if bytes.len() < FIXED_SIZE {
        return Err(ContainerError::TooShort {
            required: FIXED_SIZE,
            actual: bytes.len(),
        }
        .into());
    }

    let magic: [u8; 4] = bytes[0..4].try_into().unwrap();
    if magic != MAGIC {
        return Err(ContainerError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let symbol_count = u32::from_le_bytes(bytes[4..8].try_into().unwrap()) as usize;
    let entries_len = symbol_count * ENTRY_SIZE;
    let payload_start = FIXED_SIZE + entries_len;
    if bytes.len() < payload_start {
        return Err(ContainerError::TooShort {
            required: payload_start,
            actual: bytes.len(),
        }
        .into());
    }

    let entries = &bytes[8..8 + entries_len];
    let bit_len_at = 8 + entries_len;
    let bit_len = u64::from_le_bytes(bytes[bit_len_at..bit_len_at + 8].try_into().unwrap());
    let stored_crc = u32::from_le_bytes(bytes[bit_len_at + 8..bit_len_at + 12].try_into().unwrap());

    let payload_len = bit_len.div_ceil(8) as usize;
    let expected_size = payload_start as u64 + payload_len as u64;
    if bytes.len() as u64 != expected_size {
        return Err(ContainerError::LengthMismatch {
            expected: expected_size as usize,
            actual: bytes.len(),
        }
        .into());
    }
    let payload = &bytes[payload_start..];

    // Integrity first, interpretation second.
    let computed_crc = compute_crc(symbol_count as u32, entries, bit_len, payload);
    if computed_crc != stored_crc {
        return Err(Error::Crc {
            expected: stored_crc,
            actual: computed_crc,
        });
    }

    let mut table_entries = Vec::with_capacity(symbol_count);
    for (index, chunk) in entries.chunks_exact(ENTRY_SIZE).enumerate() {
        let value = u32::from_le_bytes(chunk[0..4].try_into().unwrap());
        let count = u64::from_le_bytes(chunk[4..12].try_into().unwrap());
        let symbol = char::from_u32(value)
            .ok_or(ContainerError::InvalidSymbol { index, value })?;
        table_entries.push(FrequencyEntry { symbol, count });
    }
    let table = FrequencyTable::from_entries(table_entries);

    let mut reader = BitReader::new(payload);
    let mut bits = String::with_capacity(payload_len * 8);
    for _ in 0..bit_len {
        bits.push(if reader.read_bit()? { '1' } else { '0' });
    }

    codec::decode(&bits, &table)
}

/// Compute CRC32 over the protected fields.
///
/// This function defines what data is covered by the integrity check.
fn compute_crc(symbol_count: u32, entries: &[u8], bit_len: u64, payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&symbol_count.to_le_bytes());
    hasher.update(entries);
    hasher.update(&bit_len.to_le_bytes());
    hasher.update(payload);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_decompress_round_trip() {
        let text = "hello container world! repetition helps compression.";
        let bytes = compress(text).unwrap();
        assert_eq!(decompress(&bytes).unwrap(), text);
    }

    #[test]
    fn test_known_layout() {
        // "aaabbc" -> 3 entries (36 bytes) + 9 payload bits (2 bytes)
        let bytes = compress("aaabbc").unwrap();
        assert_eq!(&bytes[0..4], &MAGIC);
        assert_eq!(bytes.len(), FIXED_SIZE + 36 + 2);
        assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 3);
        // First entry is 'a' with count 3.
        assert_eq!(u32::from_le_bytes(bytes[8..12].try_into().unwrap()), 'a' as u32);
        assert_eq!(u64::from_le_bytes(bytes[12..20].try_into().unwrap()), 3);
        // bit_len = 9, payload = 00011111 0.......
        assert_eq!(u64::from_le_bytes(bytes[44..52].try_into().unwrap()), 9);
        assert_eq!(bytes[56], 0b0001_1111);
        assert_eq!(bytes[57], 0b0000_0000);
    }

    #[test]
    fn test_single_symbol_round_trip() {
        let bytes = compress("aaaa").unwrap();
        assert_eq!(decompress(&bytes).unwrap(), "aaaa");
    }

    #[test]
    fn test_unicode_round_trip() {
        let text = "héllo 🎈 wörld";
        let bytes = compress(text).unwrap();
        assert_eq!(decompress(&bytes).unwrap(), text);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(compress(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_invalid_magic() {
        let mut bytes = compress("abc").unwrap();
        bytes[0] = 0xFF;
        assert!(matches!(
            decompress(&bytes),
            Err(Error::Container(ContainerError::InvalidMagic { .. }))
        ));
    }

    #[test]
    fn test_too_short() {
        let bytes = compress("abc").unwrap();
        assert!(matches!(
            decompress(&bytes[..10]),
            Err(Error::Container(ContainerError::TooShort { .. }))
        ));
    }

    #[test]
    fn test_trailing_junk_is_rejected() {
        let mut bytes = compress("abc").unwrap();
        bytes.push(0x00);
        assert!(matches!(
            decompress(&bytes),
            Err(Error::Container(ContainerError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn test_corrupted_payload_fails_crc() {
        let mut bytes = compress("some text to protect").unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        assert!(matches!(decompress(&bytes), Err(Error::Crc { .. })));
    }

    #[test]
    fn test_corrupted_count_fails_crc_or_size() {
        let mut bytes = compress("some text to protect").unwrap();
        bytes[20] ^= 0x10;
        assert!(decompress(&bytes).is_err());
    }

    #[test]
    fn test_invalid_scalar_is_rejected() {
        // Hand-build a container whose only entry is a surrogate value.
        // The CRC must be valid so the scalar check is what trips.
        let entries: Vec<u8> = 0xD800u32
            .to_le_bytes()
            .into_iter()
            .chain(4u64.to_le_bytes())
            .collect();
        let payload = [0b0000_0000];
        let bit_len = 4u64;
        let crc = compute_crc(1, &entries, bit_len, &payload);

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&entries);
        bytes.extend_from_slice(&bit_len.to_le_bytes());
        bytes.extend_from_slice(&crc.to_le_bytes());
        bytes.extend_from_slice(&payload);

        assert!(matches!(
            decompress(&bytes),
            Err(Error::Container(ContainerError::InvalidSymbol {
                index: 0,
                value: 0xD800
            }))
        ));
    }

    #[test]
    fn test_large_repetitive_text_packs_small() {
        let text = "x".repeat(65536);
        let bytes = compress(&text).unwrap();
        // One bit per symbol plus fixed overhead.
        assert!(bytes.len() < text.len() / 4);
        assert_eq!(decompress(&bytes).unwrap(), text);
    }
}
