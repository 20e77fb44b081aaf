//! Config loading and validation operations.

use super::decode;
use super::model::{Config, Repository};
use super::node::Node;
use crate::error::{ForgeError, Result};
use std::path::Path;

/// Read and decode a configuration document from `path`.
///
/// Decoding is all-or-nothing: the first failure aborts and no partial
/// `Config` is ever returned.
///
/// # Returns
///
/// * `Ok(Config)` - Successfully decoded config
/// * `Err(ForgeError::Io)` - The path does not exist or is unreadable
/// * `Err(ForgeError::Yaml)` - The file is not parseable YAML
/// * `Err(ForgeError::Decode)` - The document does not fit the schema
pub fn read<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| ForgeError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Config::from_yaml(&content)
}

impl Config {
    /// Decode a configuration document from a YAML string.
    ///
    /// No file I/O happens here; `read` is a thin wrapper over this.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        Ok(decode::config(&Node::root(&document))?)
    }

    /// Validate decoded values and return an error on invalid ones.
    ///
    /// Decoding tolerates an absent `name` (it defaults to the empty
    /// string); validation is where an empty `name` becomes an error.
    /// Not invoked by `read`/`from_yaml`, so the decode layer stays a pure
    /// shape function; `forge check` calls this after decoding.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ForgeError::UserError(
                "config validation failed: name must not be empty".to_string(),
            ));
        }

        for (name, template) in &self.templates {
            validate_repository(&template.repository, &format!("template '{}'", name))?;
        }
        for (name, target) in &self.targets {
            validate_repository(&target.template.repository, &format!("target '{}'", name))?;

            if target.templates.iter().any(|composed| composed == name) {
                return Err(ForgeError::UserError(format!(
                    "config validation failed: target '{}' lists itself in templates",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// A repository that carries a branch, subdirectory, or patches must also
/// carry a url.
fn validate_repository(repository: &Repository, owner: &str) -> Result<()> {
    let has_details = !repository.branch.is_empty()
        || !repository.subdirectory.as_os_str().is_empty()
        || !repository.patches.is_empty();

    if repository.url.is_empty() && has_details {
        return Err(ForgeError::UserError(format!(
            "config validation failed: {} has repository details but no url",
            owner
        )));
    }

    Ok(())
}
