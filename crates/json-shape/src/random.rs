//! Random value generator for shapes.

use rand::Rng;
use serde_json::{Map, Value};

use crate::shape::{RecordShape, Shape};

/// Generates random JSON values that conform to a given [`Shape`].
///
/// Every generated value decodes successfully against a decoder carrying the
/// same shape, which makes this the fixture side of generator-driven tests.
pub struct Random;

impl Random {
    pub fn new() -> Self {
        Self
    }

    /// Generate a random value matching the given shape.
    pub fn gen(&self, shape: &Shape) -> Value {
        match shape {
            Shape::Bool => Value::Bool(rand::thread_rng().gen_bool(0.5)),
            Shape::Int => Value::from(rand::thread_rng().gen_range(-1_000_000..=1_000_000i64)),
            Shape::Float => Value::from(rand::thread_rng().gen_range(-1.0e6..1.0e6)),
            Shape::Str => Value::String(gen_string()),
            Shape::Optional(inner) => {
                if rand::thread_rng().gen_bool(0.5) {
                    Value::Null
                } else {
                    self.gen(inner)
                }
            }
            Shape::List(inner) => {
                let count = rand::thread_rng().gen_range(0..=5usize);
                Value::Array((0..count).map(|_| self.gen(inner)).collect())
            }
            Shape::Record(record) => self.gen_record(record),
            Shape::Keyed(inner) => {
                let count = rand::thread_rng().gen_range(0..=5usize);
                let mut map = Map::new();
                for i in 0..count {
                    // Suffix with the slot number so generated keys never collide.
                    let key = format!("{}_{i}", gen_string());
                    map.insert(key, self.gen(inner));
                }
                Value::Object(map)
            }
            Shape::OneOf(arms) => {
                if arms.is_empty() {
                    return Value::Null;
                }
                let idx = rand::thread_rng().gen_range(0..arms.len());
                self.gen(&arms[idx])
            }
            Shape::Key { key, shape } => {
                let mut map = Map::new();
                map.insert(key.clone(), self.gen(shape));
                Value::Object(map)
            }
        }
    }

    fn gen_record(&self, record: &RecordShape) -> Value {
        let mut map = Map::new();
        for field in &record.fields {
            if !field.required && rand::thread_rng().gen_bool(0.5) {
                continue;
            }
            map.insert(field.key.clone(), self.gen(&field.shape));
        }
        Value::Object(map)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

fn gen_string() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(0..=12usize);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}
