//! Configuration decoding for forge.
//!
//! A configuration document is a YAML tree describing build templates and
//! targets: named, conditionally-specialized bundles of sources, include
//! paths, precompiled headers, dependencies, settings, and preprocessor
//! definitions, each tagged with a visibility tier that determines how the
//! entry propagates to consumers.
//!
//! This module turns that shape-ambiguous tree into one canonical typed
//! `Config`. It decodes only: fetching repositories, evaluating conditions,
//! and composing templates all happen downstream of the model.

mod decode;
mod error;
mod model;
mod node;
mod operations;
pub mod types;


// Re-export public API
pub use error::DecodeError;
pub use model::{
    BuildOption, Case, Conditions, Config, Project, Repository, Settings, Switch, SwitchProject,
    Target, Template, VisibilityBucket,
};
pub use node::{Node, ShapeKind};
pub use operations::read;
