//! Request resolution: lookup, variable extraction, scope resolution and
//! URL substitution
//!
//! ```text
//! GlobalConfig ──lookup──▶ Request + group env
//!                               │ extract_variables(url)
//!                               ▼
//!                  resolve_scopes (request > group > global)
//!                               │
//!                               ▼
//!                  substitute + compose_url(base_url)
//! ```

pub mod lookup;
pub mod scope;
pub mod url;
pub mod variables;

pub use lookup::{find_request_by_name, find_request_in_group, RequestRef};
pub use scope::{resolve_scopes, Binding, Bindings, Scope};
pub use url::{compose_url, resolve_url, substitute};
pub use variables::{extract_variables, URL_VAR_PATTERN};

use tracing::debug;

use crate::config::GlobalConfig;
use crate::errors::ResolutionError;

/// A request ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub group: String,
    pub name: String,
    pub method: String,
    pub url: String,
    pub body: String,
    pub bindings: Bindings,
}

/// Resolve the first request named `name` (groups in document order)
pub fn resolve_request(config: &GlobalConfig, name: &str) -> Result<ResolvedRequest, ResolutionError> {
    let found = find_request_by_name(config, name)
        .ok_or_else(|| ResolutionError::RequestNotFound { name: name.to_string() })?;
    resolve_found(config, found)
}

/// Resolve request `name` of group `group`
pub fn resolve_request_in_group(
    config: &GlobalConfig,
    group: &str,
    name: &str,
) -> Result<ResolvedRequest, ResolutionError> {
    let found = find_request_in_group(config, group, name)?;
    resolve_found(config, found)
}

fn resolve_found(config: &GlobalConfig, found: RequestRef<'_>) -> Result<ResolvedRequest, ResolutionError> {
    let bindings = resolve_scopes(found.request, &found.group.env, &config.global_env)?;
    let url = resolve_url(found.request, &bindings, &config.base_url);

    debug!(group = found.group_name, request = found.name, %url, "Resolved request");

    Ok(ResolvedRequest {
        group: found.group_name.to_string(),
        name: found.name.to_string(),
        method: found.request.method(),
        url,
        body: found.request.body.clone(),
        bindings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse;

    const YAML: &str = r#"
env:
  host: example.com
endpoints:
  users:
    env:
      version: v1
    requests:
      get_user:
        name: Get user
        url: "https://${host}/${version}/users/${id}"
        env:
          id: "7"
      broken:
        url: "https://${host}/${nowhere}"
"#;

    #[test]
    fn test_end_to_end_resolution() {
        let config = parse(YAML).unwrap();
        let resolved = resolve_request(&config, "get_user").unwrap();

        assert_eq!(resolved.url, "https://example.com/v1/users/7");
        assert_eq!(resolved.group, "users");
        assert_eq!(resolved.method, "GET");
        assert_eq!(resolved.bindings.scope_of("host"), Some(Scope::Global));
        assert_eq!(resolved.bindings.scope_of("version"), Some(Scope::Group));
        assert_eq!(resolved.bindings.scope_of("id"), Some(Scope::Request));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let config = parse(YAML).unwrap();
        let first = resolve_request(&config, "get_user").unwrap();
        let second = resolve_request(&config, "get_user").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_one_bad_request_does_not_affect_others() {
        let config = parse(YAML).unwrap();
        let snapshot = config.clone();

        assert_eq!(
            resolve_request(&config, "broken").unwrap_err(),
            ResolutionError::UnresolvedVariable { variable: "nowhere".to_string() }
        );
        assert_eq!(
            resolve_request(&config, "missing").unwrap_err(),
            ResolutionError::RequestNotFound { name: "missing".to_string() }
        );
        assert!(resolve_request(&config, "get_user").is_ok());
        assert_eq!(config, snapshot);
    }

    #[test]
    fn test_resolve_in_group() {
        let config = parse(YAML).unwrap();
        let resolved = resolve_request_in_group(&config, "users", "get_user").unwrap();
        assert_eq!(resolved.url, "https://example.com/v1/users/7");

        assert!(matches!(
            resolve_request_in_group(&config, "admins", "get_user"),
            Err(ResolutionError::GroupNotFound { .. })
        ));
    }

    #[test]
    fn test_base_url_composition() {
        let yaml = r#"
base_url: https://api.example.com
endpoints:
  users:
    requests:
      get:
        url: "users/${id}"
        env: { id: 42 }
"#;
        let config = parse(yaml).unwrap();
        let resolved = resolve_request(&config, "get").unwrap();
        assert_eq!(resolved.url, "https://api.example.com/users/42");
    }
}
