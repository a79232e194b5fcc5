//! Execution context

pub mod environment;

pub use environment::{Environment, ROOT_DIR_ENV_VAR};
