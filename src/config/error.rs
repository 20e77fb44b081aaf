//! Decode failure taxonomy.
//!
//! Every failure carries the dotted path of the field being decoded so the
//! offending input can be located. All failures are fatal to the whole
//! parse; there is no partial or best-effort result.

use super::node::ShapeKind;
use thiserror::Error;

/// A decode failure in a configuration document.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A node's shape kind is not among the shapes legal for the field.
    #[error("{path}: expected {expected}, found {found}")]
    ShapeMismatch {
        path: String,
        expected: &'static str,
        found: ShapeKind,
    },

    /// A present node's content cannot coerce to the requested primitive.
    #[error("{path}: value does not coerce to {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
    },

    /// An enum-valued scalar does not match any recognized literal.
    #[error("{path}: unknown value '{value}' (expected one of: {expected})")]
    UnknownVariant {
        path: String,
        value: String,
        expected: &'static str,
    },

    /// A required key is syntactically absent.
    #[error("{path}: missing required key '{field}'")]
    MissingField {
        path: String,
        field: &'static str,
    },
}
