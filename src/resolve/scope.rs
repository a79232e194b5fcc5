//! Layered variable lookup: request, then group, then global

use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

use super::variables::extract_variables;
use crate::config::{Env, Request};
use crate::errors::ResolutionError;

/// Which scope supplied a variable's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Scope {
    Request,
    Group,
    Global,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Request => "request",
            Scope::Group => "group",
            Scope::Global => "global",
        };
        write!(f, "{}", name)
    }
}

/// A resolved variable value and its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub value: String,
    pub scope: Scope,
}

/// Resolved variables of one request, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    vars: BTreeMap<String, Binding>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>, scope: Scope) {
        self.vars.insert(name.into(), Binding { value: value.into(), scope });
    }

    /// Value bound to `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|b| b.value.as_str())
    }

    /// Scope that supplied `name`
    pub fn scope_of(&self, name: &str) -> Option<Scope> {
        self.vars.get(name).map(|b| b.scope)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Resolve every variable referenced by `request.url_template`
///
/// Each name is looked up in `request.env`, then `group_env`, then
/// `global_env`; the first scope holding it wins. The first name missing
/// from all three aborts resolution of this request.
pub fn resolve_scopes(
    request: &Request,
    group_env: &Env,
    global_env: &Env,
) -> Result<Bindings, ResolutionError> {
    let mut bindings = Bindings::new();

    for name in extract_variables(&request.url_template) {
        let layers = [
            (Scope::Request, &request.env),
            (Scope::Group, group_env),
            (Scope::Global, global_env),
        ];

        let found = layers
            .iter()
            .find_map(|(scope, env)| env.get(&name).map(|value| (*scope, value)));

        match found {
            Some((scope, value)) => {
                trace!(variable = %name, %scope, "Resolved variable");
                bindings.insert(name, value.clone(), scope);
            }
            None => return Err(ResolutionError::UnresolvedVariable { variable: name }),
        }
    }

    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Env {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn request(url: &str, pairs: &[(&str, &str)]) -> Request {
        Request {
            url_template: url.to_string(),
            env: env(pairs),
            ..Default::default()
        }
    }

    #[test]
    fn test_request_scope_wins() {
        let req = request("${x}", &[("x", "request")]);
        let bindings = resolve_scopes(&req, &env(&[("x", "group")]), &env(&[("x", "global")])).unwrap();

        assert_eq!(bindings.get("x"), Some("request"));
        assert_eq!(bindings.scope_of("x"), Some(Scope::Request));
    }

    #[test]
    fn test_fallback_to_group_then_global() {
        let group = env(&[("x", "group")]);
        let global = env(&[("x", "global")]);

        let req = request("${x}", &[]);
        let bindings = resolve_scopes(&req, &group, &global).unwrap();
        assert_eq!(bindings.get("x"), Some("group"));
        assert_eq!(bindings.scope_of("x"), Some(Scope::Group));

        let bindings = resolve_scopes(&req, &Env::new(), &global).unwrap();
        assert_eq!(bindings.get("x"), Some("global"));
        assert_eq!(bindings.scope_of("x"), Some(Scope::Global));
    }

    #[test]
    fn test_mixed_scopes() {
        let req = request("https://${host}/${version}/users/${id}", &[("id", "7")]);
        let bindings = resolve_scopes(
            &req,
            &env(&[("version", "v1")]),
            &env(&[("host", "example.com")]),
        )
        .unwrap();

        assert_eq!(bindings.len(), 3);
        assert_eq!(bindings.get("host"), Some("example.com"));
        assert_eq!(bindings.get("version"), Some("v1"));
        assert_eq!(bindings.get("id"), Some("7"));
    }

    #[test]
    fn test_unresolved_variable_names_exact_variable() {
        let req = request("${host}/${missing}", &[]);
        let err = resolve_scopes(&req, &Env::new(), &env(&[("host", "h")])).unwrap_err();

        assert_eq!(
            err,
            ResolutionError::UnresolvedVariable { variable: "missing".to_string() }
        );
    }

    #[test]
    fn test_unused_scope_entries_are_ignored() {
        let req = request("static/path", &[("unused", "1")]);
        let bindings = resolve_scopes(&req, &env(&[("also", "2")]), &Env::new()).unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_empty_value_is_still_a_binding() {
        let req = request("a${suffix}", &[("suffix", "")]);
        let bindings = resolve_scopes(&req, &Env::new(), &Env::new()).unwrap();
        assert_eq!(bindings.get("suffix"), Some(""));
    }
}
