//! `${name}` placeholder scanning

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// `${` followed by one or more non-`}` characters and `}`
pub const URL_VAR_PATTERN: &str = r"\$\{([^}]+)\}";

pub(crate) static URL_VAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(URL_VAR_PATTERN).expect("Invalid URL variable regex")
});

/// Names of all variables referenced in `template`
///
/// Duplicates collapse; an empty set means the template has no placeholders.
pub fn extract_variables(template: &str) -> BTreeSet<String> {
    URL_VAR_RE
        .captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
