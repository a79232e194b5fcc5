//! Config file discovery
//!
//! The root directory is `TURL_ROOT_DIR` when set, otherwise
//! `$HOME/.config/turl/`. Every `.yaml`/`.yml` file directly inside it is a
//! candidate config source.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::context::Environment;
use crate::errors::{Result, TurlError};

/// Root directory relative to the user's home
pub const DEFAULT_ROOT_DIR: &str = ".config/turl";

/// Locate the config root directory
///
/// Precedence: explicit override (`--root`), then `TURL_ROOT_DIR`, then the
/// default under the home directory.
pub fn root_dir(env: &Environment, cli_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = cli_override {
        return Ok(dir.to_path_buf());
    }

    if let Some(ref dir) = env.root_dir_override {
        return Ok(dir.clone());
    }

    env.home_dir
        .as_ref()
        .map(|home| home.join(DEFAULT_ROOT_DIR))
        .ok_or_else(|| TurlError::Discovery("Could not determine home directory".to_string()))
}

/// Whether a path has a YAML extension
pub fn is_config_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_lowercase().as_str(), "yaml" | "yml"))
        .unwrap_or(false)
}

/// List YAML files in `root`, sorted by file name
pub fn discover_config_files(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|e| {
        TurlError::Discovery(format!("Couldn't read directory {}: {}", root.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_config_file(&path) {
            trace!(path = %path.display(), "Found config file");
            files.push(path);
        }
    }

    files.sort();
    debug!(root = %root.display(), count = files.len(), "Discovered config files");

    Ok(files)
}
