//! Enumerations and per-field constants for the configuration model.
//!
//! This module defines the closed string-to-enum tables and the default
//! visibility bucket each shorthand-capable field falls back to.

use serde::Serialize;

/// How a build property propagates from its owning project to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Applies to the owning project and propagates to direct and
    /// transitive consumers.
    Public,
    /// Applies only to the owning project.
    #[default]
    Private,
    /// Propagates to consumers but does not apply to the owning project.
    Interface,
}

impl Visibility {
    /// The key this bucket is spelled as in mapping-form fields.
    pub const fn key(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Interface => "interface",
        }
    }
}

/// The bucket keys recognized in mapping-form visibility fields.
pub const BUCKET_KEYS: [Visibility; 3] = [
    Visibility::Public,
    Visibility::Private,
    Visibility::Interface,
];

/// Kind of artifact a project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// A linkable executable (default).
    #[default]
    Executable,
    /// A static or shared library.
    Library,
    /// A header-only project with nothing to build.
    Interface,
}

impl ProjectType {
    /// The document spelling of this project type.
    pub const fn as_str(self) -> &'static str {
        match self {
            ProjectType::Executable => "executable",
            ProjectType::Library => "library",
            ProjectType::Interface => "interface",
        }
    }

    /// Parse a project type from its document spelling.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "executable" => Some(Self::Executable),
            "library" => Some(Self::Library),
            "interface" => Some(Self::Interface),
            _ => None,
        }
    }
}

// =========================================================================
// Default buckets
// =========================================================================
// Bare-scalar and bare-sequence shorthands place all entries in the field's
// declared default bucket. Include directories are consumer-facing by
// default; everything else stays private to the owning project.

/// Default bucket for `includes`.
pub const INCLUDES_DEFAULT: Visibility = Visibility::Public;
/// Default bucket for `pchs`.
pub const PCHS_DEFAULT: Visibility = Visibility::Private;
/// Default bucket for `dependencies`.
pub const DEPENDENCIES_DEFAULT: Visibility = Visibility::Private;
/// Default bucket for `definitions`.
pub const DEFINITIONS_DEFAULT: Visibility = Visibility::Private;
/// Default bucket for `compile_options`.
pub const COMPILE_OPTIONS_DEFAULT: Visibility = Visibility::Private;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_from_str_covers_all_variants() {
        assert_eq!(ProjectType::from_str("executable"), Some(ProjectType::Executable));
        assert_eq!(ProjectType::from_str("library"), Some(ProjectType::Library));
        assert_eq!(ProjectType::from_str("interface"), Some(ProjectType::Interface));
        assert_eq!(ProjectType::from_str("other"), None);
        assert_eq!(ProjectType::from_str("Library"), None);
    }

    #[test]
    fn bucket_keys_match_spellings() {
        let keys: Vec<&str> = BUCKET_KEYS.iter().map(|v| v.key()).collect();
        assert_eq!(keys, vec!["public", "private", "interface"]);
    }
}
