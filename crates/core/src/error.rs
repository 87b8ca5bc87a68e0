//! Error types for the huffviz codec.
//!
//! All operations return structured errors rather than panicking.
//! This keeps callers (CLI, tests, embedding services) in control of
//! how failures are reported.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a specific failure domain:
/// - EmptyInput: nothing to encode or decode at the request boundary
/// - Table: frequency table validation failures
/// - Codec: encode/decode failures on the bit-string path
/// - BitIo: reading/writing packed bits from/to byte buffers
/// - Container: binary container serialization/parsing
/// - CRC: data corruption detected in a container
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input text (or encoded payload) is empty after trimming
    #[error("input is empty")]
    EmptyInput,

    /// Frequency table is empty or internally inconsistent
    #[error("frequency table error: {0}")]
    Table(#[from] TableError),

    /// Encoding or decoding failed (e.g., malformed bit string)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Binary container error (e.g., bad magic, length mismatch)
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// CRC validation failed, indicating data corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Frequency table validation errors.
#[derive(Debug, Error)]
pub enum TableError {
    /// No symbols with a frequency (cannot build a tree)
    #[error("frequency table has no entries")]
    Empty,

    /// The same symbol appears in more than one entry
    #[error("duplicate symbol {symbol:?} in frequency table")]
    DuplicateSymbol { symbol: char },

    /// An entry claims a frequency of zero
    #[error("symbol {symbol:?} has zero frequency")]
    ZeroCount { symbol: char },
}

/// Encode/decode errors on the '0'/'1' bit-string path.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Text contains a symbol the codebook has no code for
    #[error("no code for symbol {symbol:?}")]
    MissingCode { symbol: char },

    /// Encoded payload contains a character other than '0' or '1'
    #[error("invalid bit {found:?} at position {position} (expected '0' or '1')")]
    InvalidBit { position: usize, found: char },

    /// Encoded payload ends in the middle of a code
    #[error("bit sequence ends mid-code (incomplete code starts at bit {position})")]
    Truncated { position: usize },

    /// A '1' bit was taken against a single-leaf tree, which has no branches
    #[error("bit '1' at position {position} has no branch in a single-symbol tree")]
    DeadBranch { position: usize },
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream")]
    UnexpectedEof,
}

/// Binary container errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Invalid magic number in the header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Container is too short to hold what its header promises
    #[error("container too short: need at least {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    /// Container size disagrees with what the header implies
    #[error("container length mismatch: header implies {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A table entry holds a value that is not a Unicode scalar
    #[error("table entry {index} holds invalid Unicode scalar {value:#x}")]
    InvalidSymbol { index: usize, value: u32 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
