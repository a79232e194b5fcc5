//! Error types for turl

use std::path::PathBuf;
use thiserror::Error;

/// A YAML document could not be turned into a config model
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config file too large: {path} is {size} bytes (max {max} bytes)")]
    TooLarge {
        path: PathBuf,
        size: u64,
        max: u64,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolving a single request failed; other requests are unaffected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("No request found matching name '{name}'")]
    RequestNotFound { name: String },

    #[error("No endpoint group named '{group}'")]
    GroupNotFound { group: String },

    #[error("Variable '{variable}' is not defined in request, group or global env")]
    UnresolvedVariable { variable: String },
}

/// Main error type for turl
#[derive(Error, Debug)]
pub enum TurlError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Discovery error: {0}")]
    Discovery(String),

    #[error("Invalid HTTP method: {0}")]
    Method(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Request cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, TurlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_messages_name_the_culprit() {
        let err = ResolutionError::UnresolvedVariable { variable: "token".to_string() };
        assert!(err.to_string().contains("'token'"));

        let err = ResolutionError::RequestNotFound { name: "get_user".to_string() };
        assert!(err.to_string().contains("'get_user'"));
    }

    #[test]
    fn test_resolution_error_converts_transparently() {
        let err: TurlError = ResolutionError::GroupNotFound { group: "users".to_string() }.into();
        assert_eq!(err.to_string(), "No endpoint group named 'users'");
    }
}
