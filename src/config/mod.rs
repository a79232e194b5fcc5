//! Config model, parsing, discovery and settings

pub mod catalog;
pub mod discovery;
pub mod model;
pub mod parser;
pub mod settings;

pub use catalog::{Catalog, ConfigSource, GroupEntry, LoadFailure};
pub use discovery::{discover_config_files, root_dir};
pub use model::{EndpointGroup, Env, GlobalConfig, Request};
pub use parser::{load_file, parse};
pub use settings::{ClientSettings, Settings};
