//! Decode failure taxonomy.

use thiserror::Error;

use crate::path::Path;

/// A structured decode failure.
///
/// Decoding is all-or-nothing: the first failure aborts the whole decode and
/// is reported through one of these variants. Every variant except
/// [`DecodeError::Syntax`] carries the full field path from the JSON root to
/// the offending value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// The input bytes are not well-formed JSON.
    #[error("invalid JSON at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
    /// A required binding's source key is absent from its object.
    #[error("missing key `{key}` in object at {path}")]
    MissingField { path: Path, key: String },
    /// A value's JSON type matches no declared shape.
    #[error("expected {expected}, found {found} at {path}")]
    TypeMismatch {
        path: Path,
        expected: String,
        found: &'static str,
    },
    /// A union value matched none of its declared alternatives.
    #[error("expected one of {}, found {found} at {path}", .attempted.join(", "))]
    InvalidUnion {
        path: Path,
        attempted: Vec<String>,
        found: &'static str,
    },
}

impl DecodeError {
    /// Short name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "SYNTAX",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::InvalidUnion { .. } => "INVALID_UNION",
        }
    }

    /// Path to the offending value. Absent for syntax errors, which happen
    /// before any tree exists.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Syntax { .. } => None,
            Self::MissingField { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::InvalidUnion { path, .. } => Some(path),
        }
    }
}
