//! Pretty-printing of raw JSON text.

use serde_json::Value;

/// Sentinel returned whenever the input cannot be parsed as JSON.
pub const INVALID_JSON: &str = "❌ Invalid JSON";

/// Pretty-print raw text as JSON.
///
/// Parses `raw` as a generic JSON value and re-serializes it with
/// two-space indentation. Object keys keep their encountered order, so the
/// output is deterministic for a given input. Any parse failure (malformed
/// syntax, empty input) yields [`INVALID_JSON`]; this function never
/// returns an error.
pub fn format(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| INVALID_JSON.to_string())
        }
        Err(_) => INVALID_JSON.to_string(),
    }
}

/// Pretty-print raw bytes as JSON.
///
/// Same contract as [`format`]; bytes that do not decode as UTF-8 yield
/// [`INVALID_JSON`].
pub fn format_bytes(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => format(text),
        Err(_) => INVALID_JSON.to_string(),
    }
}
