//! Read-only view over one position in a YAML document.
//!
//! `serde_yaml::Value` is the raw node tree; `Node` pairs a position in it
//! with the dotted path from the document root so decode failures can point
//! at the offending input. Absent nodes are first-class: looking up a
//! missing key yields an absent `Node`, and primitive coercion of an absent
//! node produces the type's zero value instead of an error. Only a
//! *present* node of the wrong shape fails.

use super::error::DecodeError;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// The shape of a node. Each field decoder dispatches on this exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Missing key or explicit YAML null.
    Absent,
    /// String, number, or boolean.
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Absent => "absent",
            ShapeKind::Scalar => "scalar",
            ShapeKind::Sequence => "sequence",
            ShapeKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Strip YAML tags; decoding only cares about the underlying value.
fn untag(value: &Value) -> &Value {
    let mut value = value;
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    value
}

/// A read-only handle to one position in the document tree.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: Option<&'a Value>,
    path: String,
}

impl<'a> Node<'a> {
    /// View the root of a document.
    pub fn root(value: &'a Value) -> Self {
        Node {
            value: Some(value),
            path: String::new(),
        }
    }

    /// The dotted field path for error messages.
    pub fn error_path(&self) -> String {
        if self.path.is_empty() {
            "document root".to_string()
        } else {
            self.path.clone()
        }
    }

    fn join(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// The shape kind of this node.
    pub fn shape(&self) -> ShapeKind {
        match self.value.map(untag) {
            None | Some(Value::Null) => ShapeKind::Absent,
            Some(Value::Bool(_) | Value::Number(_) | Value::String(_)) => ShapeKind::Scalar,
            Some(Value::Sequence(_)) => ShapeKind::Sequence,
            Some(Value::Mapping(_)) => ShapeKind::Mapping,
            Some(Value::Tagged(_)) => unreachable!("untag strips tags"),
        }
    }

    /// Whether this mapping node carries the key, even with a null value.
    pub fn has_key(&self, name: &str) -> bool {
        self.value.map(untag).and_then(|v| v.get(name)).is_some()
    }

    /// Child under `name`. Absent if this node is not a mapping or the key
    /// is missing.
    pub fn key(&self, name: &str) -> Node<'a> {
        Node {
            value: self.value.map(untag).and_then(|v| v.get(name)),
            path: self.join(name),
        }
    }

    /// Sequence elements in document order. Empty for non-sequence nodes.
    pub fn items(&self) -> Vec<Node<'a>> {
        match self.value.map(untag) {
            Some(Value::Sequence(seq)) => seq
                .iter()
                .enumerate()
                .map(|(i, value)| Node {
                    value: Some(value),
                    path: format!("{}[{}]", self.path, i),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Mapping entries in document order, keys coerced to strings.
    ///
    /// Empty for non-mapping nodes; callers that require a mapping check
    /// the shape first.
    pub fn entries(&self) -> Result<Vec<(String, Node<'a>)>, DecodeError> {
        let Some(Value::Mapping(map)) = self.value.map(untag) else {
            return Ok(Vec::new());
        };

        let mut out = Vec::with_capacity(map.len());
        for (key, value) in map {
            let key = match untag(key) {
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                _ => {
                    return Err(DecodeError::TypeMismatch {
                        path: self.error_path(),
                        expected: "a string key",
                    });
                }
            };
            let path = self.join(&key);
            out.push((
                key,
                Node {
                    value: Some(value),
                    path,
                },
            ));
        }
        Ok(out)
    }

    /// Build a `ShapeMismatch` for this node.
    pub fn shape_mismatch(&self, expected: &'static str) -> DecodeError {
        DecodeError::ShapeMismatch {
            path: self.error_path(),
            expected,
            found: self.shape(),
        }
    }

    // =====================================================================
    // Primitive coercion
    // =====================================================================

    /// Coerce to a string. Numbers and booleans stringify; absent nodes
    /// yield the empty string.
    pub fn as_string(&self) -> Result<String, DecodeError> {
        match self.value.map(untag) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(_) => Err(self.shape_mismatch("scalar")),
        }
    }

    /// Coerce to a filesystem path. Absent nodes yield the empty path.
    pub fn as_path(&self) -> Result<PathBuf, DecodeError> {
        self.as_string().map(PathBuf::from)
    }

    /// Coerce to a string-to-string mapping. Absent nodes yield an empty
    /// mapping.
    pub fn as_string_map(&self) -> Result<BTreeMap<String, String>, DecodeError> {
        match self.shape() {
            ShapeKind::Absent => Ok(BTreeMap::new()),
            ShapeKind::Mapping => {
                let mut out = BTreeMap::new();
                for (key, child) in self.entries()? {
                    out.insert(key, child.as_string()?);
                }
                Ok(out)
            }
            _ => Err(self.shape_mismatch("mapping")),
        }
    }
}
