//! Declarative typed JSON decoding.
//!
//! A [`Decoder`] pairs a declared [`Shape`] with the extraction that
//! realizes it: field-renaming record bindings with required, optional, and
//! defaulted presence policies; ordered unions tagged into caller enums;
//! list decoding; and keyed-object reshaping into ordered lists. Decoding is
//! one depth-first pass over a parsed JSON tree, all or nothing, with the
//! first failure reported as a [`DecodeError`] carrying the full path from
//! the root.

pub mod decode;
pub mod error;
pub mod path;
pub mod random;
pub mod shape;

// Re-export the most commonly used types at crate root
pub use decode::{from_slice, from_str, from_value, Decoder, Field, Fields};
pub use error::DecodeError;
pub use path::{Path, Segment};
pub use random::Random;
pub use shape::{check_shape, kind_of, FieldShape, RecordShape, SchemaError, Shape};
