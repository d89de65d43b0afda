//! Field paths: the trail of object keys and array indices from the JSON
//! root to the value a decode error is about.

use std::fmt;

/// One step from the JSON root toward a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// An object member, by source key.
    Key(String),
    /// An array element, by position.
    Index(usize),
}

impl Segment {
    pub fn key(key: impl Into<String>) -> Segment {
        Segment::Key(key.into())
    }

    pub fn index(index: usize) -> Segment {
        Segment::Index(index)
    }
}

/// A root-to-value trail, formatted as an RFC 6901 pointer.
///
/// `Display` renders `/data/stations/0/capacity` style pointers, with the
/// empty path shown as `(root)`; [`Path::pointer`] returns the exact RFC 6901
/// form (the empty path formats as `""`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn root() -> Path {
        Path(Vec::new())
    }

    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// RFC 6901 pointer form, `~`/`/` escaped as `~0`/`~1`.
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.0 {
            out.push('/');
            match segment {
                Segment::Key(key) => out.push_str(&escape(key)),
                Segment::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Path {
        Path(segments)
    }
}

impl From<&[Segment]> for Path {
    fn from(segments: &[Segment]) -> Path {
        Path(segments.to_vec())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.pointer())
        }
    }
}

/// Escapes one pointer token component.
fn escape(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}
