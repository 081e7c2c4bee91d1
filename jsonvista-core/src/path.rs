//! Structural node paths.
//!
//! Node identity is built from the path of object keys and array indices
//! leading to a value, not by raw string concatenation. Rendering to the wire
//! id escapes the reserved separator characters inside keys, so two distinct
//! paths can never render to the same id even when keys contain `=` or `[`.

use std::fmt::Write as _;

/// One step from a value to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object-member step, holding the raw (unescaped) key.
    Key(String),
    /// Array-element step.
    Index(usize),
}

/// Path from the document root to a value. The root itself is the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Path of this value's member under `key`.
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// Path of this value's element at `index`.
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Render the wire id: `root`, then `=key` per object step and `[index]`
    /// per array step. Reserved characters in keys are backslash-escaped.
    pub fn to_id(&self) -> String {
        let mut id = String::from("root");
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => {
                    id.push('=');
                    push_escaped(&mut id, key);
                }
                PathSegment::Index(index) => {
                    let _ = write!(id, "[{index}]");
                }
            }
        }
        id
    }

    /// Wire id of the synthetic node holding a scalar's displayed value.
    ///
    /// The `-` is part of the reserved set, so a key spelled `a-value` renders
    /// as `a\-value` and can never collide with the value node of a sibling
    /// key `a`.
    pub fn value_id(&self) -> String {
        let mut id = self.to_id();
        id.push_str("-value");
        id
    }

    /// Display label: the raw key of the last object step followed by any
    /// trailing index steps (`a`, `a[0]`), or the full id when the path has
    /// no object step at all (`root[1]`).
    pub fn label(&self) -> String {
        let last_key = self
            .segments
            .iter()
            .rposition(|s| matches!(s, PathSegment::Key(_)));
        let Some(pos) = last_key else {
            return self.to_id();
        };
        let mut label = match &self.segments[pos] {
            PathSegment::Key(key) => key.clone(),
            PathSegment::Index(_) => unreachable!(),
        };
        for segment in &self.segments[pos + 1..] {
            if let PathSegment::Index(index) = segment {
                let _ = write!(label, "[{index}]");
            }
        }
        label
    }
}

fn push_escaped(out: &mut String, key: &str) {
    for ch in key.chars() {
        if matches!(ch, '\\' | '=' | '[' | ']' | '-') {
            out.push('\\');
        }
        out.push(ch);
    }
}
