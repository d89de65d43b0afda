//! Composable typed decoders: the interpreter that runs a declared shape
//! against a parsed JSON tree.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::DecodeError;
use crate::path::{Path, Segment};
use crate::shape::{check_shape, kind_of, FieldShape, RecordShape, SchemaError, Shape};

use super::field::Fields;

pub(crate) type RunFn<T> = dyn Fn(&Value, &[Segment]) -> Result<T, DecodeError> + Send + Sync;

/// A typed decoder: a declared [`Shape`] plus the extraction realizing it.
///
/// Decoders are built by composing the constructors below and are immutable
/// once built; one decoder may be shared freely across threads. Running one
/// is a single depth-first pass over the value tree, aborting on the first
/// failure with the full path from the root.
pub struct Decoder<T> {
    pub(crate) shape: Shape,
    pub(crate) run: Arc<RunFn<T>>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Decoder {
            shape: self.shape.clone(),
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

impl<T> Decoder<T> {
    /// The declared shape this decoder realizes.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Check the declared shape for structural integrity.
    pub fn check(&self) -> Result<(), SchemaError> {
        check_shape(&self.shape)
    }

    pub(crate) fn run(&self, value: &Value, path: &[Segment]) -> Result<T, DecodeError> {
        (self.run)(value, path)
    }
}

impl Decoder<bool> {
    /// A JSON boolean.
    pub fn bool() -> Decoder<bool> {
        Decoder {
            shape: Shape::Bool,
            run: Arc::new(|value, path| match value.as_bool() {
                Some(b) => Ok(b),
                None => Err(mismatch("bool", value, path)),
            }),
        }
    }
}

impl Decoder<i64> {
    /// An exact `i64` JSON number. Fractional numbers are a type mismatch,
    /// never truncated.
    pub fn int() -> Decoder<i64> {
        Decoder {
            shape: Shape::Int,
            run: Arc::new(|value, path| match value.as_i64() {
                Some(n) => Ok(n),
                None => Err(mismatch("int", value, path)),
            }),
        }
    }
}

impl Decoder<f64> {
    /// Any JSON number, widened to `f64`.
    pub fn float() -> Decoder<f64> {
        Decoder {
            shape: Shape::Float,
            run: Arc::new(|value, path| match value.as_f64() {
                Some(n) => Ok(n),
                None => Err(mismatch("float", value, path)),
            }),
        }
    }
}

impl Decoder<String> {
    /// A JSON string.
    pub fn string() -> Decoder<String> {
        Decoder {
            shape: Shape::Str,
            run: Arc::new(|value, path| match value.as_str() {
                Some(s) => Ok(s.to_string()),
                None => Err(mismatch("string", value, path)),
            }),
        }
    }
}

impl<T: 'static> Decoder<T> {
    /// The inner shape, or JSON `null` decoded as `None`.
    pub fn nullable(inner: Decoder<T>) -> Decoder<Option<T>> {
        let shape = Shape::Optional(Box::new(inner.shape.clone()));
        let run = inner.run;
        Decoder {
            shape,
            run: Arc::new(move |value, path| {
                if value.is_null() {
                    return Ok(None);
                }
                (run)(value, path).map(Some)
            }),
        }
    }

    /// A homogeneous JSON array. Elements decode in order; the first bad
    /// element aborts the decode with its index on the path.
    pub fn list(inner: Decoder<T>) -> Decoder<Vec<T>> {
        let shape = Shape::List(Box::new(inner.shape.clone()));
        let run = inner.run;
        Decoder {
            shape,
            run: Arc::new(move |value, path| {
                let items = match value.as_array() {
                    Some(items) => items,
                    None => return Err(mismatch("array", value, path)),
                };
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let mut p = path.to_vec();
                    p.push(Segment::Index(index));
                    out.push((run)(item, &p)?);
                }
                Ok(out)
            }),
        }
    }

    /// An object of arbitrary keys reshaped into an ordered list of
    /// `(key, value)` pairs. Order is the object's source order; the first
    /// bad entry aborts the decode with its key on the path.
    pub fn entries(inner: Decoder<T>) -> Decoder<Vec<(String, T)>> {
        let shape = Shape::Keyed(Box::new(inner.shape.clone()));
        let run = inner.run;
        Decoder {
            shape,
            run: Arc::new(move |value, path| {
                let object = match value.as_object() {
                    Some(object) => object,
                    None => return Err(mismatch("object", value, path)),
                };
                let mut out = Vec::with_capacity(object.len());
                for (key, item) in object {
                    let mut p = path.to_vec();
                    p.push(Segment::Key(key.clone()));
                    out.push((key.clone(), (run)(item, &p)?));
                }
                Ok(out)
            }),
        }
    }

    /// Like [`Decoder::entries`], with the keys discarded.
    pub fn values(inner: Decoder<T>) -> Decoder<Vec<T>> {
        let shape = Shape::Keyed(Box::new(inner.shape.clone()));
        let run = inner.run;
        Decoder {
            shape,
            run: Arc::new(move |value, path| {
                let object = match value.as_object() {
                    Some(object) => object,
                    None => return Err(mismatch("object", value, path)),
                };
                let mut out = Vec::with_capacity(object.len());
                for (key, item) in object {
                    let mut p = path.to_vec();
                    p.push(Segment::Key(key.clone()));
                    out.push((run)(item, &p)?);
                }
                Ok(out)
            }),
        }
    }

    /// An ordered union. Arms are attempted first to last and the first
    /// success wins; exhausting every arm is an
    /// [`DecodeError::InvalidUnion`] naming the attempted alternatives.
    pub fn one_of(arms: Vec<Decoder<T>>) -> Decoder<T> {
        let shape = Shape::OneOf(arms.iter().map(|arm| arm.shape.clone()).collect());
        let attempted: Vec<String> = arms.iter().map(|arm| arm.shape.describe()).collect();
        let runs: Vec<Arc<RunFn<T>>> = arms.into_iter().map(|arm| arm.run).collect();
        Decoder {
            shape,
            run: Arc::new(move |value, path| {
                for run in &runs {
                    if let Ok(decoded) = (run)(value, path) {
                        return Ok(decoded);
                    }
                }
                Err(DecodeError::InvalidUnion {
                    path: Path::from(path),
                    attempted: attempted.clone(),
                    found: kind_of(value),
                })
            }),
        }
    }

    /// A wrapper object from which exactly one key is extracted; sibling
    /// keys are ignored.
    pub fn field(key: impl Into<String>, inner: Decoder<T>) -> Decoder<T> {
        let key = key.into();
        let shape = Shape::Key {
            key: key.clone(),
            shape: Box::new(inner.shape.clone()),
        };
        let expected = shape.describe();
        let run = inner.run;
        Decoder {
            shape,
            run: Arc::new(move |value, path| {
                let object = match value.as_object() {
                    Some(object) => object,
                    None => return Err(mismatch(expected.clone(), value, path)),
                };
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

    /// Nested wrapper extraction: `at(&["data", "stations"], inner)` unwraps
    /// `{"data": {"stations": ...}}`.
    pub fn at(keys: &[&str], inner: Decoder<T>) -> Decoder<T> {
        let mut decoder = inner;
        for key in keys.iter().rev() {
            decoder = Decoder::field(*key, decoder);
        }
        decoder
    }

    /// A named record decoded field-by-field from a JSON object.
    ///
    /// `bindings` is the declared field table (see [`super::Field`]);
    /// `build` reads the typed fields off the object and constructs the
    /// record. Keys not listed in the table are ignored.
    pub fn record<F>(name: impl Into<String>, bindings: Vec<FieldShape>, build: F) -> Decoder<T>
    where
        F: Fn(&Fields<'_>) -> Result<T, DecodeError> + Send + Sync + 'static,
    {
        let shape = Shape::Record(RecordShape {
            name: name.into(),
            fields: bindings,
        });
        let expected = shape.describe();
        Decoder {
            shape,
            run: Arc::new(move |value, path| {
                let object = match value.as_object() {
                    Some(object) => object,
                    None => return Err(mismatch(expected.clone(), value, path)),
                };
                build(&Fields { object, path })
            }),
        }
    }

    /// Post-transforms the decoded value, keeping the shape. This is how
    /// union arms tag themselves into a caller enum.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Decoder<U> {
        let run = self.run;
        Decoder {
            shape: self.shape,
            run: Arc::new(move |value, path| (run)(value, path).map(&f)),
        }
    }
}

pub(crate) fn mismatch(expected: impl Into<String>, value: &Value, path: &[Segment]) -> DecodeError {
    DecodeError::TypeMismatch {
        path: Path::from(path),
        expected: expected.into(),
        found: kind_of(value),
    }
}
