//! The typed decode engine: composable decoders, field bindings, and the
//! byte-level entry points.

pub mod decoder;
pub mod field;
pub mod parse;

pub use decoder::Decoder;
pub use field::{Field, Fields};
pub use parse::{from_slice, from_str, from_value};
