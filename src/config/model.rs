//! Typed configuration model.
//!
//! Every entity here is immutable once decoded. The decoder builds the tree
//! bottom-up in one pass; each parent exclusively owns its children, so
//! there are no cycles and no shared ownership. The model carries data for
//! downstream stages (condition evaluation, template composition) without
//! interpreting it.
//!
//! `Serialize` is derived for diagnostic output only (`forge show --json`);
//! the JSON dump is not the input format and does not round-trip.

use super::types::{ProjectType, Visibility};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Three ordered entry lists classified by how they propagate from the
/// owning project to its consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibilityBucket<T> {
    /// Applies to the owning project and propagates to consumers.
    pub public: Vec<T>,
    /// Applies only to the owning project.
    pub private: Vec<T>,
    /// Propagates to consumers without applying to the owning project.
    pub interface: Vec<T>,
}

// Manual impl: the derive would demand `T: Default`, but an empty bucket
// exists for any entry type.
impl<T> Default for VisibilityBucket<T> {
    fn default() -> Self {
        VisibilityBucket {
            public: Vec::new(),
            private: Vec::new(),
            interface: Vec::new(),
        }
    }
}

impl<T> VisibilityBucket<T> {
    /// The entries of one bucket.
    pub fn bucket(&self, visibility: Visibility) -> &[T] {
        match visibility {
            Visibility::Public => &self.public,
            Visibility::Private => &self.private,
            Visibility::Interface => &self.interface,
        }
    }

    pub(crate) fn bucket_mut(&mut self, visibility: Visibility) -> &mut Vec<T> {
        match visibility {
            Visibility::Public => &mut self.public,
            Visibility::Private => &mut self.private,
            Visibility::Interface => &mut self.interface,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.private.is_empty() && self.interface.is_empty()
    }
}

/// A named predicate evaluated outside the decode layer.
///
/// Either one named condition or a group of named sub-conditions; which
/// form was present in the document is preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conditions {
    /// One named condition.
    Single(String),
    /// Sub-condition name to sub-condition value.
    Group(BTreeMap<String, String>),
}

impl Default for Conditions {
    fn default() -> Self {
        Conditions::Single(String::new())
    }
}

/// A source-control reference a template can be fetched from.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Repository {
    pub url: String,
    /// Empty means the remote's default branch.
    pub branch: String,
    /// Subdirectory of the checkout the template is rooted at; empty means
    /// the checkout root.
    pub subdirectory: PathBuf,
    /// Patch files applied in sequence order after checkout.
    pub patches: Vec<PathBuf>,
}

/// A named build-time choice a consumer can set.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BuildOption {
    pub description: String,
    /// Value used when the consumer does not set the option.
    #[serde(rename = "default")]
    pub default_value: String,
    /// Preprocessor symbol the option maps to when consumed.
    pub definition: String,
}

/// Named options and plain variables attached to a project or config.
///
/// In the document, `options` and `variables` live alongside the owner's
/// other keys rather than nested under a `settings` key.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Settings {
    pub options: BTreeMap<String, BuildOption>,
    pub variables: BTreeMap<String, String>,
}

/// One project fragment: sources, include paths, and build properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Project {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub sources: Vec<PathBuf>,
    pub includes: VisibilityBucket<PathBuf>,
    /// Precompiled headers.
    pub pchs: VisibilityBucket<PathBuf>,
    /// Names of other templates/targets this project depends on.
    pub dependencies: VisibilityBucket<String>,
    pub settings: Settings,
    /// Preprocessor definitions.
    pub definitions: VisibilityBucket<String>,
    /// Compiler flags; the `name=value` entries come from the flag-mapping
    /// document form.
    pub compile_options: VisibilityBucket<String>,
}

/// One conditional variant of a project.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Case {
    /// Name of the condition that activates this case.
    pub case: String,
    pub project: Project,
}

/// Ordered conditional variants of a project.
///
/// Order is semantic: when several case labels match at once, the first
/// case in document order wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Switch {
    pub cases: Vec<Case>,
}

/// A base project plus its conditional variants.
///
/// Resolving the winning case into the base (scalar override, bucket and
/// sequence concatenation) happens downstream; this layer only decodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SwitchProject {
    pub project: Project,
    pub switch: Switch,
}

/// A reusable, path-rooted project definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Template {
    /// Filesystem location the resolved project is rooted at.
    pub path: PathBuf,
    /// Optional source-control origin; default when the template is local.
    pub repository: Repository,
    /// Free-form key/value overrides a consumer may apply.
    pub overrides: BTreeMap<String, String>,
    pub project: SwitchProject,
}

/// A buildable artifact composed from templates plus its own fragment.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Target {
    /// The target's own template fields, flattened onto the target node.
    #[serde(flatten)]
    pub template: Template,
    /// Names of templates this target composes; later entries take
    /// priority in override semantics.
    pub templates: Vec<String>,
}

/// Root of a decoded configuration document.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Config {
    pub name: String,
    /// Other configuration documents to merge in (merge happens downstream).
    pub include: Vec<PathBuf>,
    pub conditions: BTreeMap<String, Conditions>,
    pub templates: BTreeMap<String, Template>,
    pub targets: BTreeMap<String, Target>,
    pub settings: Settings,
    /// Global preprocessor definitions, name to value.
    pub definitions: BTreeMap<String, String>,
    /// Global compiler flags.
    pub compile_options: Vec<String>,
}
