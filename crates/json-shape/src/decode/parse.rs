//! Byte-level decode entry points: parse first, then run the decoder
//! against the tree.

use serde_json::Value;

use crate::error::DecodeError;

use super::decoder::Decoder;

/// Decode a typed value from JSON text bytes.
pub fn from_slice<T>(decoder: &Decoder<T>, input: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(input).map_err(syntax)?;
    decoder.run(&value, &[])
}

/// Decode a typed value from JSON text.
pub fn from_str<T>(decoder: &Decoder<T>, input: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(input).map_err(syntax)?;
    decoder.run(&value, &[])
}

/// Decode a typed value from an already parsed tree.
pub fn from_value<T>(decoder: &Decoder<T>, value: &Value) -> Result<T, DecodeError> {
    decoder.run(value, &[])
}

fn syntax(err: serde_json::Error) -> DecodeError {
    DecodeError::Syntax {
        line: err.line(),
        column: err.column(),
    }
}
