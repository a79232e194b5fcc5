//! JSON utilities
//!
//! Response bodies that are JSON get pretty-printed for display.

/// Load JSON while preserving key order
///
/// Uses serde_json with preserve_order feature.
pub fn load_json_preserve_order(s: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(s).map_err(|e| format!("JSON parse error: {}", e))
}

/// Whether a Content-Type header value denotes JSON
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

/// Format a body for display
///
/// Bodies declared as JSON, or that look like a JSON object/array, are
/// re-indented. Anything that fails to parse is returned unchanged.
pub fn format_body(content_type: Option<&str>, body: &str) -> String {
    let declared = content_type.map(is_json_content_type).unwrap_or(false);
    let trimmed = body.trim_start();
    let looks_like_json = trimmed.starts_with('{') || trimmed.starts_with('[');

    if !declared && !looks_like_json {
        return body.to_string();
    }

    load_json_preserve_order(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}
