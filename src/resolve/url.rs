//! Placeholder substitution and base URL composition

use regex::Captures;

use super::scope::Bindings;
use super::variables::URL_VAR_RE;
use crate::config::Request;

/// Replace each `${name}` in `template` with its bound value
///
/// One left-to-right pass: substituted text is never scanned again, so a
/// value containing `${...}` stays literal. Placeholders without a binding
/// are kept verbatim.
pub fn substitute(template: &str, bindings: &Bindings) -> String {
    URL_VAR_RE
        .replace_all(template, |caps: &Captures| match bindings.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Join a base URL and a resolved path with a single `/`
///
/// An empty base leaves the path unchanged. Slashes already present on either
/// side are not normalized.
pub fn compose_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base_url, path)
    }
}

/// Final URL for `request`
pub fn resolve_url(request: &Request, bindings: &Bindings, base_url: &str) -> String {
    compose_url(base_url, &substitute(&request.url_template, bindings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::scope::Scope;

    fn bindings(pairs: &[(&str, &str)]) -> Bindings {
        let mut b = Bindings::new();
        for (k, v) in pairs {
            b.insert(*k, *v, Scope::Global);
        }
        b
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let b = bindings(&[("id", "42")]);
        assert_eq!(substitute("users/${id}/posts?owner=${id}", &b), "users/42/posts?owner=42");
    }

    #[test]
    fn test_substitute_is_single_pass() {
        let b = bindings(&[("a", "${b}"), ("b", "nope")]);
        assert_eq!(substitute("x/${a}", &b), "x/${b}");
    }

    #[test]
    fn test_substitute_no_escaping() {
        let b = bindings(&[("q", "a b&c=d/é")]);
        assert_eq!(substitute("search?q=${q}", &b), "search?q=a b&c=d/é");
    }

    #[test]
    fn test_substitute_leaves_unbound_placeholders() {
        let b = bindings(&[("known", "k")]);
        assert_eq!(substitute("${known}/${unknown}", &b), "k/${unknown}");
    }

    #[test]
    fn test_substitute_value_with_dollar_sign() {
        let b = bindings(&[("price", "$1")]);
        assert_eq!(substitute("cost=${price}", &b), "cost=$1");
    }

    #[test]
    fn test_compose_url() {
        assert_eq!(
            compose_url("https://api.example.com", "users/42"),
            "https://api.example.com/users/42"
        );
        assert_eq!(compose_url("", "https://x.io/a"), "https://x.io/a");
        // Duplicate slashes are kept as written
        assert_eq!(compose_url("https://x.io/", "/a"), "https://x.io///a");
    }

    #[test]
    fn test_resolve_url_with_base() {
        let request = Request {
            url_template: "users/${id}".to_string(),
            ..Default::default()
        };
        let b = bindings(&[("id", "42")]);
        assert_eq!(
            resolve_url(&request, &b, "https://api.example.com"),
            "https://api.example.com/users/42"
        );
    }
}
