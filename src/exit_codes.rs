//! Exit code constants for the forge CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, validation failure)
//! - 2: Decode failure (document content does not fit the schema)
//! - 3: I/O failure (document could not be read)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or post-decode validation failure.
pub const USER_ERROR: i32 = 1;

/// Decode failure: the document is not valid YAML or its shape does not
/// match the configuration schema.
pub const DECODE_FAILURE: i32 = 2;

/// I/O failure: the configuration file could not be read.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, DECODE_FAILURE, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
