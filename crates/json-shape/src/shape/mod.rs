//! Declarative value shapes: the schema AST decoders carry and the
//! integrity checks run against it.

pub mod check;
pub mod shape;

pub use check::{check_shape, SchemaError};
pub use shape::{kind_of, FieldShape, RecordShape, Shape};
