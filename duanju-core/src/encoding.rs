//! Candidate encodings and strict decode attempts
//!
//! Decoding uses the strict `encoding_rs` entry points so a malformed byte
//! sequence rejects the candidate instead of producing U+FFFD replacements.

use std::borrow::Cow;

use encoding_rs::{Encoding, GB18030, GBK, UTF_16BE, UTF_16LE, UTF_8};

/// One named encoding attempted during decode-detection
pub struct EncodingCandidate {
    name: &'static str,
    decode: fn(&[u8]) -> Option<String>,
}

impl EncodingCandidate {
    /// Name reported when this candidate succeeds
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Attempt a full strict decode of `bytes`
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        (self.decode)(bytes)
    }
}

static CANDIDATES: [EncodingCandidate; 4] = [
    EncodingCandidate {
        name: "utf-8",
        decode: decode_utf8,
    },
    EncodingCandidate {
        name: "gbk",
        decode: decode_gbk,
    },
    EncodingCandidate {
        name: "gb18030",
        decode: decode_gb18030,
    },
    EncodingCandidate {
        name: "utf-16",
        decode: decode_utf16,
    },
];

/// Candidate encodings in priority order
///
/// The first candidate that decodes without error wins; no further check is
/// made that the decoded text is the "right" reading of the bytes. Note that
/// GBK shares the gb18030 decoder, so the `gb18030` entry only documents the
/// candidate set and cannot win over `gbk`.
pub fn candidates() -> &'static [EncodingCandidate] {
    &CANDIDATES
}

/// Decode `bytes` with the first candidate that accepts them
pub fn decode_with_candidates(bytes: &[u8]) -> Option<(String, &'static str)> {
    candidates()
        .iter()
        .find_map(|candidate| candidate.decode(bytes).map(|text| (text, candidate.name())))
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    decode_strict(UTF_8, bytes)
}

fn decode_gbk(bytes: &[u8]) -> Option<String> {
    decode_strict(GBK, bytes)
}

fn decode_gb18030(bytes: &[u8]) -> Option<String> {
    decode_strict(GB18030, bytes)
}

/// UTF-16 with BOM sniffing: FF FE selects little-endian, FE FF big-endian,
/// and the BOM is stripped. Without a BOM the bytes are read as little-endian.
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (encoding, payload) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (UTF_16LE, rest),
        [0xFE, 0xFF, rest @ ..] => (UTF_16BE, rest),
        _ => (UTF_16LE, bytes),
    };
    decode_strict(encoding, payload)
}
