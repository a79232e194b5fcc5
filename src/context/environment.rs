//! Environment struct (terminal state, home and root directories)

use std::path::PathBuf;

/// Environment variable overriding the config root directory
pub const ROOT_DIR_ENV_VAR: &str = "TURL_ROOT_DIR";

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    pub stdout_isatty: bool,
    pub program_name: String,
    /// Value of `TURL_ROOT_DIR`, if set and non-empty
    pub root_dir_override: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
}

impl Environment {
    /// Initialize the environment from the running process
    pub fn init() -> Self {
        Self::default()
    }

    /// An environment detached from the real process, for tests
    pub fn detached(home_dir: Option<PathBuf>, root_dir_override: Option<PathBuf>) -> Self {
        Self {
            stdout_isatty: false,
            program_name: "turl".to_string(),
            root_dir_override,
            home_dir,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdout_isatty: atty::is(atty::Stream::Stdout),
            program_name: "turl".to_string(),
            root_dir_override: std::env::var_os(ROOT_DIR_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            home_dir: dirs::home_dir(),
        }
    }
}
