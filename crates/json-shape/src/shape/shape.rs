use serde_json::Value;

/// One declared field of a record: the JSON source key it binds, the shape
/// of its value, and whether the key must be present.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub key: String,
    pub shape: Shape,
    pub required: bool,
}

/// A named record: a JSON object decoded field-by-field into a fixed type.
/// Keys not listed in `fields` are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordShape {
    pub name: String,
    pub fields: Vec<FieldShape>,
}

/// The declarative shape of a decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Bool,
    /// An exact `i64` JSON number.
    Int,
    Float,
    Str,
    /// The inner shape, or JSON `null`.
    Optional(Box<Shape>),
    /// A homogeneous JSON array.
    List(Box<Shape>),
    /// An object decoded into a fixed record.
    Record(RecordShape),
    /// An object of arbitrary keys whose values share one shape.
    Keyed(Box<Shape>),
    /// Ordered union: alternatives are attempted first to last and the
    /// first match wins.
    OneOf(Vec<Shape>),
    /// A wrapper object from which exactly one key is extracted.
    Key { key: String, shape: Box<Shape> },
}

impl Shape {
    /// Returns the "kind" string identifier for this shape node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Optional(_) => "opt",
            Self::List(_) => "arr",
            Self::Record(_) => "obj",
            Self::Keyed(_) => "map",
            Self::OneOf(_) => "or",
            Self::Key { .. } => "key",
        }
    }

    /// Human-readable expectation, as rendered into decode errors.
    pub fn describe(&self) -> String {
        match self {
            Self::Bool => "bool".to_string(),
            Self::Int => "int".to_string(),
            Self::Float => "float".to_string(),
            Self::Str => "string".to_string(),
            Self::Optional(inner) => format!("{} or null", inner.describe()),
            Self::List(_) => "array".to_string(),
            Self::Record(record) => {
                if record.name.is_empty() {
                    "object".to_string()
                } else {
                    format!("{} object", record.name)
                }
            }
            Self::Keyed(_) => "object".to_string(),
            Self::OneOf(arms) => {
                let arms: Vec<String> = arms.iter().map(Shape::describe).collect();
                format!("one of {}", arms.join(", "))
            }
            Self::Key { key, .. } => format!("object with key `{key}`"),
        }
    }
}

/// Classifies a JSON value for `found` reporting in decode errors.
///
/// Numbers split three ways: `int` for exact `i64`, `uint` for integers
/// above `i64::MAX`, `float` for everything else.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() {
                "int"
            } else if n.is_u64() {
                "uint"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
