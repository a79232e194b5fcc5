//! Tracing subscriber setup
//!
//! Verbosity levels:
//! - 0 (default): `RUST_LOG` if set, otherwise warn
//! - 1 (-v): Info level
//! - 2 (-vv): Debug level
//! - 3+ (-vvv): Trace level

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

use crate::cli::LogFormat;
use crate::errors::{Result, TurlError};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
    /// No subscriber is installed
    Silent,
}

impl LogSink {
    /// The terminal UI owns the terminal, so it only logs to an explicit file.
    pub fn select(log_file: Option<PathBuf>, tui: bool) -> Self {
        match log_file {
            Some(path) => LogSink::File(path),
            None if tui => LogSink::Silent,
            None => LogSink::Stderr,
        }
    }
}

/// Filter for a `-v` count.
pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber.
pub fn init(verbose: u8, format: LogFormat, sink: LogSink) -> Result<()> {
    let (writer, ansi) = match sink {
        LogSink::Silent => return Ok(()),
        LogSink::Stderr => (BoxMakeWriter::new(std::io::stderr), atty::is(atty::Stream::Stderr)),
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Text => fmt::layer().with_writer(writer).with_ansi(ansi).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter_for(verbose))
        .try_init()
        .map_err(|e| TurlError::Config(format!("Failed to initialize logging: {}", e)))
}
