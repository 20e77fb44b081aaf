//! Error types for the forge CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. File problems (`Io`) are kept distinct from content problems
//! (`Yaml`, `Decode`) so callers can tell "the file is missing" apart from
//! "the file says something the schema does not allow".

use crate::config::DecodeError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for forge operations.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The file is not parseable YAML at all.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its shape or content does not fit the
    /// configuration schema.
    #[error("{0}")]
    Decode(#[from] DecodeError),

    /// User provided invalid arguments or the config failed validation.
    #[error("{0}")]
    UserError(String),
}

impl ForgeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ForgeError::Io { .. } => exit_codes::IO_FAILURE,
            ForgeError::Yaml(_) | ForgeError::Decode(_) => exit_codes::DECODE_FAILURE,
            ForgeError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for forge operations.
pub type Result<T> = std::result::Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_has_io_exit_code() {
        let err = ForgeError::Io {
            path: "missing.yml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn user_error_has_user_exit_code() {
        let err = ForgeError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn decode_error_has_decode_exit_code() {
        let err = ForgeError::Decode(DecodeError::MissingField {
            path: "templates.base".to_string(),
            field: "case",
        });
        assert_eq!(err.exit_code(), exit_codes::DECODE_FAILURE);
    }
}
