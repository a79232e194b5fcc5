//! HTTP client functionality

pub mod http;

// Re-exports
pub use http::{parse_method, FetchResponse, RequestClient};
