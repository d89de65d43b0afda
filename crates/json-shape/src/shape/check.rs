//! Shape integrity checker.
//!
//! Shapes are built infallibly by the decoder combinators; this is the
//! explicit construction-time gate that rejects declarations no input could
//! ever satisfy sensibly.

use thiserror::Error;

use super::shape::{RecordShape, Shape};

/// A structurally invalid shape declaration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("record `{record}` declares a binding with an empty source key")]
    EmptyFieldKey { record: String },
    #[error("record `{record}` declares source key `{key}` more than once")]
    DuplicateFieldKey { record: String, key: String },
    #[error("union declares no alternatives")]
    EmptyUnion,
    #[error("wrapper declares an empty key")]
    EmptyKey,
}

/// Check a shape for structural integrity.
///
/// Returns `Ok(())` if the shape is well-formed, or the first problem found
/// in declaration order.
pub fn check_shape(shape: &Shape) -> Result<(), SchemaError> {
    match shape {
        Shape::Bool | Shape::Int | Shape::Float | Shape::Str => Ok(()),
        Shape::Optional(inner) | Shape::List(inner) | Shape::Keyed(inner) => check_shape(inner),
        Shape::Record(record) => check_record(record),
        Shape::OneOf(arms) => {
            if arms.is_empty() {
                return Err(SchemaError::EmptyUnion);
            }
            for arm in arms {
                check_shape(arm)?;
            }
            Ok(())
        }
        Shape::Key { key, shape } => {
            if key.is_empty() {
                return Err(SchemaError::EmptyKey);
            }
            check_shape(shape)
        }
    }
}

fn check_record(record: &RecordShape) -> Result<(), SchemaError> {
    let mut seen: Vec<&str> = Vec::with_capacity(record.fields.len());
    for field in &record.fields {
        if field.key.is_empty() {
            return Err(SchemaError::EmptyFieldKey {
                record: record.name.clone(),
            });
        }
        if seen.contains(&field.key.as_str()) {
            return Err(SchemaError::DuplicateFieldKey {
                record: record.name.clone(),
                key: field.key.clone(),
            });
        }
        seen.push(&field.key);
        check_shape(&field.shape)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::FieldShape;

    fn field(key: &str, shape: Shape) -> FieldShape {
        FieldShape {
            key: key.to_string(),
            shape,
            required: true,
        }
    }

    #[test]
    fn accepts_well_formed_shapes() {
        let shape = Shape::Key {
            key: "results".to_string(),
            shape: Box::new(Shape::List(Box::new(Shape::Record(RecordShape {
                name: "Person".to_string(),
                fields: vec![
                    field("gender", Shape::Str),
                    field("postcode", Shape::OneOf(vec![Shape::Int, Shape::Str])),
                ],
            })))),
        };
        assert_eq!(check_shape(&shape), Ok(()));
    }

    #[test]
    fn rejects_empty_field_key() {
        let shape = Shape::Record(RecordShape {
            name: "City".to_string(),
            fields: vec![field("", Shape::Str)],
        });
        assert_eq!(
            check_shape(&shape),
            Err(SchemaError::EmptyFieldKey {
                record: "City".to_string(),
            })
        );
    }

    #[test]
    fn rejects_duplicate_field_key() {
        let shape = Shape::Record(RecordShape {
            name: "City".to_string(),
            fields: vec![field("title", Shape::Str), field("title", Shape::Str)],
        });
        assert_eq!(
            check_shape(&shape),
            Err(SchemaError::DuplicateFieldKey {
                record: "City".to_string(),
                key: "title".to_string(),
            })
        );
    }

    #[test]
    fn rejects_empty_union_anywhere_in_tree() {
        let shape = Shape::List(Box::new(Shape::Record(RecordShape {
            name: "Location".to_string(),
            fields: vec![field("postcode", Shape::OneOf(Vec::new()))],
        })));
        assert_eq!(check_shape(&shape), Err(SchemaError::EmptyUnion));
    }

    #[test]
    fn rejects_empty_wrapper_key() {
        let shape = Shape::Key {
            key: String::new(),
            shape: Box::new(Shape::Bool),
        };
        assert_eq!(check_shape(&shape), Err(SchemaError::EmptyKey));
    }
}
