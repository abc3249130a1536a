//! URL safe base64 without padding, the only text encoding used by tokens.
//!
//! Decoding rejects `=` padding outright, matching what encoding produces.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::{DecodeError, Engine as _};

pub fn encode_segment(data: &[u8]) -> String {
  URL_SAFE_NO_PAD.encode(data)
}

pub fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
  URL_SAFE_NO_PAD.decode(segment.as_bytes())
}
