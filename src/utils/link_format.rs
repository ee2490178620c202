//! Display formatting for shareable links
//!
//! The widget shows `origin + path` of the tracked address followed by a
//! short summary of the storage parameters in the live query string. The
//! copied value is always the full address; these helpers only shape what
//! is shown.

use url::Url;

/// Query keys shown in the summary, in display order
pub const DISPLAY_PARAM_KEYS: [&str; 3] = ["bucket", "path", "endpoint"];

/// Origin and path of `tracked`, without query or fragment
///
/// Falls back to `fallback_origin + fallback_path` (the live location) when
/// `tracked` is not a valid absolute URL.
pub fn display_address(tracked: &str, fallback_origin: &str, fallback_path: &str) -> String {
    match Url::parse(tracked) {
        Ok(url) => format!("{}{}", url.origin().ascii_serialization(), url.path()),
        Err(e) => {
            log::debug!("Tracked address {:?} did not parse ({}), using live location", tracked, e);
            format!("{}{}", fallback_origin, fallback_path)
        }
    }
}

/// Reduce an endpoint URL to its hostname
///
/// Values that are not absolute URLs are returned unchanged.
pub fn simplify_endpoint(endpoint: &str) -> String {
    match Url::parse(endpoint) {
        Ok(url) => url.host_str().unwrap_or_default().to_string(),
        Err(_) => endpoint.to_string(),
    }
}

/// Summary of the recognized parameters in `search`
///
/// `search` may include the leading `?`. Returns `?bucket=..&path=..&endpoint=..`
/// with only the keys present (and non-empty), or an empty string.
pub fn display_params(search: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);

    let parts: Vec<String> = DISPLAY_PARAM_KEYS
        .iter()
        .filter_map(|key| {
            let value = first_param(query, key)?;
            let shown = if *key == "endpoint" {
                simplify_endpoint(&value)
            } else {
                value
            };
            Some(format!("{}={}", key, shown))
        })
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

/// First non-empty decoded value for `key`
fn first_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
