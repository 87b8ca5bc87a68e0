//! Request/response types for embedding the codec behind a JSON surface.
//!
//! # Design
//!
//! This is the validation boundary. The engine itself is permissive
//! (empty bit strings decode to empty text); this layer rejects
//! blank requests so callers get a clear "input is empty" instead of a
//! silently trivial result.
//!
//! Field names follow the wire contract: symbols serialize as "char",
//! counts as "freq".

use serde::{Deserialize, Serialize};

use crate::code::CodeEntry;
use crate::codec;
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::layout::{self, LayoutNode};
use crate::stats::CompressionStats;

/// Body of an encode request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub text: String,
}

/// Everything a client needs to display an encoding.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeResponse {
    /// The '0'/'1' bit string.
    pub encoded: String,
    /// Symbol frequencies in first-occurrence order.
    pub frequency_table: FrequencyTable,
    /// Per-symbol codes in leaf order.
    pub huffman_codes: Vec<CodeEntry>,
    pub stats: CompressionStats,
    /// The tree with drawing coordinates.
    pub tree_structure: LayoutNode,
}

/// Body of a decode request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeRequest {
    pub encoded: String,
    pub frequency_table: FrequencyTable,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodeResponse {
    pub decoded: String,
}

/// Error envelope: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Encodes the request text and bundles the display artifacts.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if the text is empty or whitespace-only;
/// otherwise encoding errors propagate.
pub fn encode(request: &EncodeRequest) -> Result<EncodeResponse> {
    if request.text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    let encoding = codec::encode(&request.text)?;
    let stats = CompressionStats::measure(&request.text, &encoding.bits);
    let tree_structure = layout::layout_tree(&encoding.tree, &encoding.codebook);
    Ok(EncodeResponse {
        encoded: encoding.bits,
        frequency_table: encoding.table,
        huffman_codes: encoding.codebook.entries().to_vec(),
        stats,
        tree_structure,
    })
}

/// Decodes the request payload against its frequency table.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if the payload is empty; table and
/// codec errors propagate.
pub fn decode(request: &DecodeRequest) -> Result<DecodeResponse> {
    if request.encoded.is_empty() {
        return Err(Error::EmptyInput);
    }
    let decoded = codec::decode(&request.encoded, &request.frequency_table)?;
    Ok(DecodeResponse { decoded })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_text(text: &str) -> EncodeResponse {
        encode(&EncodeRequest {
            text: text.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_encode_bundles_all_artifacts() {
        let response = encode_text("aaabbc");
        assert_eq!(response.encoded, "000111110");
        assert_eq!(response.frequency_table.len(), 3);
        assert_eq!(response.huffman_codes.len(), 3);
        assert_eq!(response.stats.original_size, 48);
        assert_eq!(response.stats.compressed_size, 9);
        assert!(!response.tree_structure.is_leaf);
    }

    #[test]
    fn test_encode_rejects_blank_text() {
        let err = encode(&EncodeRequest {
            text: "   \n\t ".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_interior_whitespace_is_fine() {
        let response = encode_text("a b");
        assert_eq!(response.frequency_table.len(), 3);
    }

    #[test]
    fn test_decode_round_trips_encode() {
        let response = encode_text("compress me please");
        let decoded = decode(&DecodeRequest {
            encoded: response.encoded.clone(),
            frequency_table: response.frequency_table.clone(),
        })
        .unwrap();
        assert_eq!(decoded.decoded, "compress me please");
    }

    #[test]
    fn test_decode_rejects_empty_payload() {
        let response = encode_text("abc");
        let err = decode(&DecodeRequest {
            encoded: String::new(),
            frequency_table: response.frequency_table,
        })
        .unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_empty_payload_precedes_table_checks() {
        // An empty payload with an empty table reports EmptyInput,
        // not a table error.
        let err = decode(&DecodeRequest {
            encoded: String::new(),
            frequency_table: FrequencyTable::default(),
        })
        .unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_error_envelope_wraps_message() {
        let err = encode(&EncodeRequest {
            text: String::new(),
        })
        .unwrap_err();
        let envelope = ErrorResponse::from(&err);
        assert_eq!(envelope.error, "input is empty");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, serde_json::json!({"error": "input is empty"}));
    }

    #[test]
    fn test_encode_response_wire_shape() {
        let response = encode_text("ab");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["encoded"], "01");
        assert_eq!(json["frequency_table"][0]["char"], "a");
        assert_eq!(json["frequency_table"][0]["freq"], 1);
        assert_eq!(json["huffman_codes"][0]["char"], "a");
        assert_eq!(json["huffman_codes"][0]["code"], "0");
        assert_eq!(json["stats"]["original_size"], 16);
        assert_eq!(json["tree_structure"]["side"], "");
        assert_eq!(json["tree_structure"]["children"][0]["char"], "a");
    }

    #[test]
    fn test_decode_request_parses_from_wire() {
        let request: DecodeRequest = serde_json::from_str(
            r#"{
                "encoded": "01",
                "frequency_table": [
                    {"char": "a", "freq": 1},
                    {"char": "b", "freq": 1}
                ]
            }"#,
        )
        .unwrap();
        let decoded = decode(&request).unwrap();
        assert_eq!(decoded.decoded, "ab");
    }
}
