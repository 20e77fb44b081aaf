//! Shape-polymorphic decoding of configuration documents.
//!
//! Most fields accept more than one surface shape: a bare scalar, a flat
//! sequence, or a keyed mapping, depending on how terse the author wants to
//! be. Each decoder inspects the node's shape kind exactly once and maps
//! each kind to exactly one rule; a shape that is not legal for the field
//! fails with a `ShapeMismatch` carrying the dotted field path.
//!
//! Two rules are stated once and reused everywhere:
//!
//! - scalar-or-sequence-of-T ([`scalar_or_seq`]): a bare scalar decodes as
//!   a one-element sequence.
//! - bucket shorthand ([`bucket`]): a bare scalar or sequence fills the
//!   field's declared default bucket; a mapping distributes entries across
//!   `public`/`private`/`interface` keys, and a mapping with none of those
//!   keys is rejected so a typo'd bucket name cannot silently drop entries.
//!
//! Sibling keys decode independently of one another. The one documented
//! exception is settings flattening: `options` and `variables` live
//! alongside the owner's other keys, so [`settings`] decodes from the
//! owner's own node.

use super::error::DecodeError;
use super::model::{
    BuildOption, Case, Conditions, Config, Project, Repository, Settings, Switch, SwitchProject,
    Target, Template, VisibilityBucket,
};
use super::node::{Node, ShapeKind};
use super::types::{self, ProjectType, Visibility};
use std::collections::BTreeMap;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, DecodeError>;

fn string_elem(node: &Node<'_>) -> Result<String> {
    node.as_string()
}

fn path_elem(node: &Node<'_>) -> Result<PathBuf> {
    node.as_path()
}

/// Scalar-or-sequence-of-T: a bare scalar is a one-element sequence, an
/// absent node an empty one.
fn scalar_or_seq<T, F>(node: &Node<'_>, elem: F) -> Result<Vec<T>>
where
    F: Fn(&Node<'_>) -> Result<T>,
{
    match node.shape() {
        ShapeKind::Absent => Ok(Vec::new()),
        ShapeKind::Scalar => Ok(vec![elem(node)?]),
        ShapeKind::Sequence => node.items().iter().map(|item| elem(item)).collect(),
        ShapeKind::Mapping => Err(node.shape_mismatch("scalar or sequence")),
    }
}

/// Bucket shorthand: scalar/sequence entries land in `default_bucket`;
/// a mapping distributes entries over the recognized bucket keys.
fn bucket<T, F>(node: &Node<'_>, default_bucket: Visibility, elem: F) -> Result<VisibilityBucket<T>>
where
    F: Fn(&Node<'_>) -> Result<T>,
{
    let mut out = VisibilityBucket::default();
    match node.shape() {
        ShapeKind::Absent => {}
        ShapeKind::Scalar | ShapeKind::Sequence => {
            *out.bucket_mut(default_bucket) = scalar_or_seq(node, &elem)?;
        }
        ShapeKind::Mapping => {
            let mut recognized = false;
            for visibility in types::BUCKET_KEYS {
                if node.has_key(visibility.key()) {
                    recognized = true;
                    *out.bucket_mut(visibility) = scalar_or_seq(&node.key(visibility.key()), &elem)?;
                }
            }
            if !recognized {
                return Err(node.shape_mismatch("public/private/interface keys"));
            }
        }
    }
    Ok(out)
}

/// `compile_options` bucket: like [`bucket`], except a mapping with no
/// recognized bucket key is the flag-name to flag-value form, folded into
/// the default bucket as `name=value` entries. Inside a bucket key the
/// value may again be a scalar, a sequence, or a flag mapping.
fn options_bucket(node: &Node<'_>) -> Result<VisibilityBucket<String>> {
    let mut out = VisibilityBucket::default();
    match node.shape() {
        ShapeKind::Absent => {}
        ShapeKind::Scalar | ShapeKind::Sequence => {
            *out.bucket_mut(types::COMPILE_OPTIONS_DEFAULT) = scalar_or_seq(node, string_elem)?;
        }
        ShapeKind::Mapping => {
            let mut recognized = false;
            for visibility in types::BUCKET_KEYS {
                if node.has_key(visibility.key()) {
                    recognized = true;
                    *out.bucket_mut(visibility) = flag_list(&node.key(visibility.key()))?;
                }
            }
            if !recognized {
                *out.bucket_mut(types::COMPILE_OPTIONS_DEFAULT) = flag_map(node)?;
            }
        }
    }
    Ok(out)
}

fn flag_list(node: &Node<'_>) -> Result<Vec<String>> {
    match node.shape() {
        ShapeKind::Mapping => flag_map(node),
        _ => scalar_or_seq(node, string_elem),
    }
}

/// Flag mapping to `name=value` entries, preserving document order.
fn flag_map(node: &Node<'_>) -> Result<Vec<String>> {
    node.entries()?
        .into_iter()
        .map(|(name, value)| Ok(format!("{}={}", name, value.as_string()?)))
        .collect()
}

/// A name-keyed mapping whose values share one decoder.
fn named<T, F>(node: &Node<'_>, entry: F) -> Result<BTreeMap<String, T>>
where
    F: Fn(&Node<'_>) -> Result<T>,
{
    match node.shape() {
        ShapeKind::Absent => Ok(BTreeMap::new()),
        ShapeKind::Mapping => node
            .entries()?
            .into_iter()
            .map(|(name, child)| Ok((name, entry(&child)?)))
            .collect(),
        _ => Err(node.shape_mismatch("mapping")),
    }
}

/// Either one named condition (scalar) or a group of named sub-conditions
/// (mapping).
fn conditions(node: &Node<'_>) -> Result<Conditions> {
    match node.shape() {
        ShapeKind::Absent | ShapeKind::Scalar => Ok(Conditions::Single(node.as_string()?)),
        ShapeKind::Mapping => Ok(Conditions::Group(node.as_string_map()?)),
        ShapeKind::Sequence => Err(node.shape_mismatch("scalar or mapping")),
    }
}

fn repository(node: &Node<'_>) -> Result<Repository> {
    match node.shape() {
        ShapeKind::Absent => Ok(Repository::default()),
        // Bare-scalar shorthand: the scalar is the url.
        ShapeKind::Scalar => Ok(Repository {
            url: node.as_string()?,
            ..Repository::default()
        }),
        ShapeKind::Mapping => Ok(Repository {
            url: node.key("url").as_string()?,
            branch: node.key("branch").as_string()?,
            subdirectory: node.key("subdirectory").as_path()?,
            patches: scalar_or_seq(&node.key("patches"), path_elem)?,
        }),
        ShapeKind::Sequence => Err(node.shape_mismatch("scalar or mapping")),
    }
}

/// Settings keys live alongside the owner's other keys; callers pass the
/// owning node itself.
fn settings(node: &Node<'_>) -> Result<Settings> {
    Ok(Settings {
        options: named(&node.key("options"), build_option)?,
        variables: node.key("variables").as_string_map()?,
    })
}

fn build_option(node: &Node<'_>) -> Result<BuildOption> {
    if node.shape() != ShapeKind::Mapping {
        return Err(node.shape_mismatch("mapping"));
    }
    Ok(BuildOption {
        description: node.key("description").as_string()?,
        default_value: node.key("default").as_string()?,
        definition: node.key("definition").as_string()?,
    })
}

fn project_type(node: &Node<'_>) -> Result<ProjectType> {
    match node.shape() {
        ShapeKind::Absent => Ok(ProjectType::default()),
        ShapeKind::Scalar => {
            let raw = node.as_string()?;
            ProjectType::from_str(&raw).ok_or_else(|| DecodeError::UnknownVariant {
                path: node.error_path(),
                value: raw,
                expected: "executable, library, interface",
            })
        }
        _ => Err(node.shape_mismatch("scalar")),
    }
}

fn project(node: &Node<'_>) -> Result<Project> {
    match node.shape() {
        ShapeKind::Absent => return Ok(Project::default()),
        ShapeKind::Mapping => {}
        _ => return Err(node.shape_mismatch("mapping")),
    }
    Ok(Project {
        project_type: project_type(&node.key("type"))?,
        sources: scalar_or_seq(&node.key("sources"), path_elem)?,
        includes: bucket(&node.key("includes"), types::INCLUDES_DEFAULT, path_elem)?,
        pchs: bucket(&node.key("pchs"), types::PCHS_DEFAULT, path_elem)?,
        dependencies: bucket(
            &node.key("dependencies"),
            types::DEPENDENCIES_DEFAULT,
            string_elem,
        )?,
        settings: settings(node)?,
        definitions: bucket(
            &node.key("definitions"),
            types::DEFINITIONS_DEFAULT,
            string_elem,
        )?,
        compile_options: options_bucket(&node.key("compile_options"))?,
    })
}

fn case(node: &Node<'_>) -> Result<Case> {
    if node.shape() != ShapeKind::Mapping {
        return Err(node.shape_mismatch("mapping"));
    }
    if !node.has_key("case") {
        return Err(DecodeError::MissingField {
            path: node.error_path(),
            field: "case",
        });
    }
    Ok(Case {
        case: node.key("case").as_string()?,
        // An absent project is legal and decodes to the default fragment.
        project: project(&node.key("project"))?,
    })
}

/// A switch is always a sequence; there is no scalar shorthand. Document
/// order of the cases is preserved so the first matching case wins
/// downstream.
fn switch(node: &Node<'_>) -> Result<Switch> {
    match node.shape() {
        ShapeKind::Absent => Ok(Switch::default()),
        ShapeKind::Sequence => Ok(Switch {
            cases: node.items().iter().map(case).collect::<Result<_>>()?,
        }),
        _ => Err(node.shape_mismatch("sequence")),
    }
}

/// The base project and the `switch` key flatten onto the same node.
fn switch_project(node: &Node<'_>) -> Result<SwitchProject> {
    Ok(SwitchProject {
        project: project(node)?,
        switch: switch(&node.key("switch"))?,
    })
}

fn template(node: &Node<'_>) -> Result<Template> {
    match node.shape() {
        ShapeKind::Absent => return Ok(Template::default()),
        ShapeKind::Mapping => {}
        _ => return Err(node.shape_mismatch("mapping")),
    }
    Ok(Template {
        path: node.key("path").as_path()?,
        repository: repository(&node.key("repository"))?,
        overrides: node.key("overrides").as_string_map()?,
        project: switch_project(&node.key("project"))?,
    })
}

/// A target is a template flattened onto the target's own node, plus the
/// names of other templates it composes.
fn target(node: &Node<'_>) -> Result<Target> {
    Ok(Target {
        template: template(node)?,
        templates: scalar_or_seq(&node.key("templates"), string_elem)?,
    })
}

/// Decode a full document from its root node.
pub fn config(node: &Node<'_>) -> Result<Config> {
    if node.shape() != ShapeKind::Mapping {
        return Err(node.shape_mismatch("mapping"));
    }
    Ok(Config {
        name: node.key("name").as_string()?,
        include: scalar_or_seq(&node.key("include"), path_elem)?,
        conditions: named(&node.key("conditions"), conditions)?,
        templates: named(&node.key("templates"), template)?,
        targets: named(&node.key("targets"), target)?,
        settings: settings(node)?,
        definitions: node.key("definitions").as_string_map()?,
        compile_options: scalar_or_seq(&node.key("compile_options"), string_elem)?,
    })
}
