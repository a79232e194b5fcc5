//! turl library interface
//!
//! Browse and send HTTP requests described in YAML files.
//!
//! # Module Organization
//!
//! - [`config`] - YAML model, parser, discovery and settings
//! - [`resolve`] - Variable extraction, scope resolution and URL building
//! - [`client`] - HTTP client (RequestClient)
//! - [`tui`] - Terminal UI over a navigation grid
//! - [`errors`] - Error types (ParseError, ResolutionError, TurlError)
//! - [`core`] - Main execution logic

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod json;
pub mod logging;
pub mod resolve;
pub mod signals;
pub mod status;
pub mod tui;
