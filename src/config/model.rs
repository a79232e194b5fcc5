//! In-memory config model
//!
//! Built once per YAML document and read-only afterwards. Mappings are
//! `IndexMap`s so iteration follows document order.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A variable scope: name to value
pub type Env = IndexMap<String, String>;

/// A single named HTTP request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Request {
    /// Display name (the lookup key is the entry's key in the group)
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// HTTP method; empty means GET
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// URL template, may contain `${var}` placeholders
    #[serde(rename = "url", default, deserialize_with = "null_as_default")]
    pub url_template: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,

    /// Request-local scope
    #[serde(default, deserialize_with = "scalar_env")]
    pub env: Env,
}

/// A named collection of requests sharing one scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EndpointGroup {
    #[serde(default, deserialize_with = "scalar_env")]
    pub env: Env,

    #[serde(default, deserialize_with = "null_as_default")]
    pub requests: IndexMap<String, Request>,
}

/// One parsed config document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub project: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub base_url: String,

    /// Visible to every request in every group
    #[serde(rename = "env", default, deserialize_with = "scalar_env")]
    pub global_env: Env,

    #[serde(default, deserialize_with = "null_as_default")]
    pub endpoints: IndexMap<String, EndpointGroup>,
}

impl Request {
    /// HTTP method, defaulting to GET when `type` is empty
    pub fn method(&self) -> String {
        let kind = self.kind.trim();
        if kind.is_empty() {
            "GET".to_string()
        } else {
            kind.to_uppercase()
        }
    }
}

impl GlobalConfig {
    /// Group names in document order
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    /// Total number of requests across all groups
    pub fn request_count(&self) -> usize {
        self.endpoints.values().map(|g| g.requests.len()).sum()
    }

    /// Request names defined in more than one group, with the groups defining them
    pub fn duplicate_request_names(&self) -> Vec<(String, Vec<String>)> {
        let mut owners: IndexMap<&str, Vec<String>> = IndexMap::new();
        for (group_name, group) in &self.endpoints {
            for request_name in group.requests.keys() {
                owners.entry(request_name).or_default().push(group_name.clone());
            }
        }

        owners
            .into_iter()
            .filter(|(_, groups)| groups.len() > 1)
            .map(|(name, groups)| (name.to_string(), groups))
            .collect()
    }
}

/// `key:` with no value deserializes as null; treat it as the empty default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Env values may be written as numbers or booleans; store them as strings
fn scalar_env<'de, D>(deserializer: D) -> Result<Env, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let raw: Option<IndexMap<String, Value>> = Option::deserialize(deserializer)?;
    let mut env = Env::new();

    for (key, value) in raw.unwrap_or_default() {
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            _ => {
                return Err(D::Error::custom(format!(
                    "env value for '{}' must be a scalar",
                    key
                )))
            }
        };
        env.insert(key, value);
    }

    Ok(env)
}
