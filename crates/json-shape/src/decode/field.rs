//! Declared field bindings: source key, element decoder, presence policy.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::path::{Path, Segment};
use crate::shape::{FieldShape, Shape};

use super::decoder::Decoder;

type ExtractFn<T> = dyn Fn(&Map<String, Value>, &[Segment]) -> Result<T, DecodeError> + Send + Sync;

/// The JSON object a record is being decoded from, as seen by its build
/// closure. Handed to [`Field::get`].
pub struct Fields<'a> {
    pub(crate) object: &'a Map<String, Value>,
    pub(crate) path: &'a [Segment],
}

/// One declared binding of a record: a JSON source key, the decoder for its
/// value, and what absence means.
///
/// A binding's target name is whatever the build closure assigns it to;
/// renaming a source key is nothing more than binding `"birth_year"` to a
/// `birth_year` struct field.
pub struct Field<T> {
    shape: FieldShape,
    extract: Arc<ExtractFn<T>>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Field {
            shape: self.shape.clone(),
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Field<T> {
    /// The key must be present; absence is a [`DecodeError::MissingField`].
    pub fn required(key: impl Into<String>, decoder: Decoder<T>) -> Field<T> {
        let key = key.into();
        let shape = FieldShape {
            key: key.clone(),
            shape: decoder.shape.clone(),
            required: true,
        };
        let run = decoder.run;
        Field {
            shape,
            extract: Arc::new(move |object, path| {
                let member = match object.get(&key) {
                    Some(member) => member,
                    None => {
                        return Err(DecodeError::MissingField {
                            path: Path::from(path),
                            key: key.clone(),
                        })
                    }
                };
                let mut p = path.to_vec();
                p.push(Segment::Key(key.clone()));
                (run)(member, &p)
            }),
        }
    }

    /// Absence and JSON `null` both decode as `None`.
    pub fn optional(key: impl Into<String>, decoder: Decoder<T>) -> Field<Option<T>> {
        let key = key.into();
        let shape = FieldShape {
            key: key.clone(),
            shape: Shape::Optional(Box::new(decoder.shape.clone())),
            required: false,
        };
        let run = decoder.run;
        Field {
            shape,
            extract: Arc::new(move |object, path| {
                let member = match object.get(&key) {
                    Some(member) if !member.is_null() => member,
                    _ => return Ok(None),
                };
                let mut p = path.to_vec();
                p.push(Segment::Key(key.clone()));
                (run)(member, &p).map(Some)
            }),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Field<T> {
    /// Absence and JSON `null` both decode as `fallback`.
    pub fn defaulted(key: impl Into<String>, decoder: Decoder<T>, fallback: T) -> Field<T> {
        let key = key.into();
        let shape = FieldShape {
            key: key.clone(),
            shape: Shape::Optional(Box::new(decoder.shape.clone())),
            required: false,
        };
        let run = decoder.run;
        Field {
            shape,
            extract: Arc::new(move |object, path| {
                let member = match object.get(&key) {
                    Some(member) if !member.is_null() => member,
                    _ => return Ok(fallback.clone()),
                };
                let mut p = path.to_vec();
                p.push(Segment::Key(key.clone()));
                (run)(member, &p)
            }),
        }
    }
}

impl<T> Field<T> {
    /// The declared row for the record's field table
    /// (see [`Decoder::record`]).
    pub fn binding(&self) -> FieldShape {
        self.shape.clone()
    }

    /// Extracts this field from the record under decode.
    pub fn get(&self, fields: &Fields<'_>) -> Result<T, DecodeError> {
        (self.extract)(fields.object, fields.path)
    }
}
