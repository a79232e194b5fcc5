//! The set of loaded config sources
//!
//! Each YAML file is parsed independently: a broken file is recorded as a
//! failure and the remaining files stay usable.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::model::GlobalConfig;
use super::parser::load_file;
use crate::errors::{ParseError, ResolutionError};
use crate::resolve::{self, ResolvedRequest};

/// A successfully parsed config document
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// File it came from, `None` for in-memory documents
    pub path: Option<PathBuf>,
    pub config: GlobalConfig,
}

impl ConfigSource {
    /// Project name, falling back to the file stem
    pub fn display_name(&self) -> String {
        if !self.config.project.is_empty() {
            return self.config.project.clone();
        }
        self.path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "config".to_string())
    }
}

/// A file that could not be loaded
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: ParseError,
}

/// An endpoint group as listed to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    /// Index of the owning source
    pub source: usize,
    pub group: String,
    /// Group name, prefixed with the project when several sources are loaded
    pub label: String,
}

/// All loaded config sources, in load order
#[derive(Debug, Default)]
pub struct Catalog {
    sources: Vec<ConfigSource>,
    failures: Vec<LoadFailure>,
}

impl Catalog {
    /// Load every file in `paths`, keeping going past broken ones
    pub fn load(paths: &[PathBuf]) -> Self {
        let mut catalog = Self::default();

        for path in paths {
            match load_file(path) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        groups = config.endpoints.len(),
                        "Loaded config"
                    );
                    catalog.sources.push(ConfigSource { path: Some(path.clone()), config });
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "Skipping config file");
                    catalog.failures.push(LoadFailure { path: path.clone(), error });
                }
            }
        }

        catalog
    }

    /// Build a catalog from already parsed documents
    pub fn from_configs(configs: impl IntoIterator<Item = GlobalConfig>) -> Self {
        Self {
            sources: configs
                .into_iter()
                .map(|config| ConfigSource { path: None, config })
                .collect(),
            failures: Vec::new(),
        }
    }

    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Every endpoint group across all sources
    pub fn list_endpoint_groups(&self) -> Vec<GroupEntry> {
        let qualify = self.sources.len() > 1;

        self.sources
            .iter()
            .enumerate()
            .flat_map(|(index, source)| {
                let project = source.display_name();
                source.config.group_names().map(move |group| GroupEntry {
                    source: index,
                    group: group.to_string(),
                    label: if qualify {
                        format!("{}/{}", project, group)
                    } else {
                        group.to_string()
                    },
                })
            })
            .collect()
    }

    /// Request names of one group, in document order
    pub fn list_requests(&self, entry: &GroupEntry) -> Vec<String> {
        self.sources
            .get(entry.source)
            .and_then(|s| s.config.endpoints.get(&entry.group))
            .map(|g| g.requests.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Resolve a request picked from the UI (always group-qualified)
    pub fn resolve(&self, entry: &GroupEntry, request: &str) -> Result<ResolvedRequest, ResolutionError> {
        let source = self
            .sources
            .get(entry.source)
            .ok_or_else(|| ResolutionError::GroupNotFound { group: entry.group.clone() })?;
        resolve::resolve_request_in_group(&source.config, &entry.group, request)
    }

    /// Resolve by name across sources, optionally restricted to one group
    ///
    /// Sources are searched in load order and the first match wins. With a
    /// group, every source defining that group is searched.
    pub fn resolve_by_name(&self, group: Option<&str>, name: &str) -> Result<ResolvedRequest, ResolutionError> {
        match group {
            Some(group) => {
                let mut owners = self
                    .sources
                    .iter()
                    .filter(|s| s.config.endpoints.contains_key(group))
                    .peekable();
                if owners.peek().is_none() {
                    return Err(ResolutionError::GroupNotFound { group: group.to_string() });
                }
                let source = owners
                    .find(|s| resolve::find_request_in_group(&s.config, group, name).is_ok())
                    .ok_or_else(|| ResolutionError::RequestNotFound { name: name.to_string() })?;
                resolve::resolve_request_in_group(&source.config, group, name)
            }
            None => {
                let source = self
                    .sources
                    .iter()
                    .find(|s| resolve::find_request_by_name(&s.config, name).is_some())
                    .ok_or_else(|| ResolutionError::RequestNotFound { name: name.to_string() })?;
                resolve::resolve_request(&source.config, name)
            }
        }
    }
}
