//! Error types for the engine.
//!
//! Block access, meshing, physics and raycasting never fail; they fall back to
//! air, no-ops or safe defaults. Errors only come from configuration and
//! command-line input.

use thiserror::Error;

/// Engine-wide error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A configuration value is outside its valid range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A command-line argument could not be parsed
    #[error("Invalid argument {name}: {value}")]
    InvalidArgument { name: String, value: String },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::InvalidConfig("world_size must be at least 1".into());
        assert_eq!(err.to_string(), "Invalid config: world_size must be at least 1");

        let err = Error::InvalidArgument {
            name: "--seed".into(),
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "Invalid argument --seed: abc");
    }
}
