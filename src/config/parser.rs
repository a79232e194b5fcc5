//! YAML config parsing

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::model::GlobalConfig;
use crate::errors::ParseError;

/// Maximum config file size (1 MB)
/// YAML parsers can expand memory 10-20x, so limit input size
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Parse raw YAML text into a config model
///
/// Either the whole document is accepted or an error is returned; no partial
/// model is ever produced. Variables are not checked here.
pub fn parse(yaml_text: &str) -> Result<GlobalConfig, ParseError> {
    if yaml_text.trim().is_empty() {
        return Ok(GlobalConfig::default());
    }

    let config: Option<GlobalConfig> = serde_yaml::from_str(yaml_text)?;
    let config = config.unwrap_or_default();

    for (name, groups) in config.duplicate_request_names() {
        warn!(
            request = %name,
            groups = %groups.join(", "),
            "Request name defined in several groups; lookup by name alone uses the first"
        );
    }

    debug!(
        project = %config.project,
        groups = config.endpoints.len(),
        requests = config.request_count(),
        "Parsed config"
    );

    Ok(config)
}

/// Read and parse a config file
pub fn load_file(path: &Path) -> Result<GlobalConfig, ParseError> {
    let read_err = |source| ParseError::Read { path: path.to_path_buf(), source };

    let size = fs::metadata(path).map_err(read_err)?.len();
    if size > MAX_CONFIG_FILE_SIZE {
        return Err(ParseError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_CONFIG_FILE_SIZE,
        });
    }

    let content = fs::read_to_string(path).map_err(read_err)?;

    parse(&content).map_err(|e| match e {
        ParseError::Yaml(source) => ParseError::File { path: path.to_path_buf(), source },
        other => other,
    })
}
