//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::context::ROOT_DIR_ENV_VAR;

/// turl - Browse and send HTTP requests defined in YAML files
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "turl", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // ACTIONS (none starts the terminal UI)
    // =========================================================================
    /// List every loaded config file, endpoint group and request
    #[arg(long = "list", action = ArgAction::SetTrue, conflicts_with_all = ["resolve", "run"])]
    pub list: bool,

    /// Print the resolved URL of a request
    #[arg(long = "resolve", value_name = "NAME", conflicts_with = "run")]
    pub resolve: Option<String>,

    /// Resolve a request, send it, and print the response body
    #[arg(long = "run", value_name = "NAME")]
    pub run: Option<String>,

    /// With --resolve, also print each variable and the scope it came from
    #[arg(long = "explain", action = ArgAction::SetTrue, requires = "resolve")]
    pub explain: bool,

    /// Look the request up in this endpoint group only
    #[arg(long = "group", short = 'g', value_name = "GROUP")]
    pub group: Option<String>,

    // =========================================================================
    // CONFIG SOURCES
    // =========================================================================
    /// Directory holding the YAML files and turl.toml
    #[arg(long = "root", value_name = "DIR", env = ROOT_DIR_ENV_VAR)]
    pub root: Option<PathBuf>,

    /// Load this file instead of discovering files in the root (repeatable)
    #[arg(long = "file", short = 'f', value_name = "PATH", action = ArgAction::Append)]
    pub files: Vec<PathBuf>,

    /// Total request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<f64>,

    // =========================================================================
    // LOGGING
    // =========================================================================
    /// Verbose output. Use -vv for even more verbose
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Write logs to this file (the terminal UI logs nowhere otherwise)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// The action selected on the command line.
    pub fn action(&self) -> Action<'_> {
        if self.list {
            Action::List
        } else if let Some(ref name) = self.resolve {
            Action::Resolve {
                name,
                explain: self.explain,
            }
        } else if let Some(ref name) = self.run {
            Action::Run { name }
        } else {
            Action::Tui
        }
    }
}

/// What a single invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    List,
    Resolve { name: &'a str, explain: bool },
    Run { name: &'a str },
    Tui,
}

/// Log format
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
