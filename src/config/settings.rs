//! Settings file handling (`turl.toml` in the root directory)

use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::errors::TurlError;

/// Settings file name inside the root directory
pub const SETTINGS_FILE: &str = "turl.toml";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_IDLE_PER_HOST: usize = 100;
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 90;
pub const USER_AGENT_STRING: &str = concat!("turl/", env!("CARGO_PKG_VERSION"));

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Total time allowed for one request
    pub timeout: Duration,
    /// Idle connections kept per host
    pub max_idle_per_host: usize,
    /// How long an idle pooled connection is kept
    pub idle_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_idle_per_host: DEFAULT_MAX_IDLE_PER_HOST,
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            user_agent: USER_AGENT_STRING.to_string(),
        }
    }
}

/// turl settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub client: ClientSettings,
}

impl Settings {
    /// Load settings from `turl.toml` in `root`; a missing file yields defaults
    pub fn load(root: &Path) -> Result<Self, TurlError> {
        let settings_file = root.join(SETTINGS_FILE);

        if !settings_file.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&settings_file)
            .map_err(|e| TurlError::Config(format!("Failed to read settings: {}", e)))?;

        let settings = Self::parse(&content)?;
        debug!(path = %settings_file.display(), ?settings, "Loaded settings");
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self, TurlError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| TurlError::Config(format!("Invalid settings TOML: {}", e)))?;

        let client = toml_value.get("client");
        let defaults = ClientSettings::default();

        let timeout = match Self::parse_u64(client, "timeout_secs")? {
            Some(0) => {
                return Err(TurlError::Config(
                    "client.timeout_secs must be greater than zero".to_string(),
                ))
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.timeout,
        };

        let max_idle_per_host = Self::parse_u64(client, "max_idle_per_host")?
            .map(|v| v as usize)
            .unwrap_or(defaults.max_idle_per_host);

        let idle_timeout = Self::parse_u64(client, "idle_timeout_secs")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.idle_timeout);

        let user_agent = client
            .and_then(|c| c.get("user_agent"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or(defaults.user_agent);

        Ok(Self {
            client: ClientSettings {
                timeout,
                max_idle_per_host,
                idle_timeout,
                user_agent,
            },
        })
    }

    /// Read a non-negative integer from a table, rejecting other types
    fn parse_u64(table: Option<&toml::Value>, key: &str) -> Result<Option<u64>, TurlError> {
        let value = match table.and_then(|t| t.get(key)) {
            Some(v) => v,
            None => return Ok(None),
        };

        value
            .as_integer()
            .and_then(|i| u64::try_from(i).ok())
            .map(Some)
            .ok_or_else(|| {
                TurlError::Config(format!("client.{} must be a non-negative integer", key))
            })
    }
}
