//! Locating the label's download URL in a response of unknown shape.
//!
//! The marketplace places `download_url` at varying depths depending on the
//! endpoint version, so the response is searched depth-first. At an object,
//! its own `download_url` is checked before its values are descended into,
//! in document order; at an array, elements are descended into by index.
//! The first non-empty string found wins.

use serde_json::Value;

/// The key holding the label document's URL.
pub const DOWNLOAD_URL_KEY: &str = "download_url";

/// Find the first non-empty `download_url` string anywhere in `node`.
pub fn find_download_url(node: &Value) -> Option<&str> {
    // Children are pushed in reverse so they are popped in document order.
    let mut stack = vec![node];

    while let Some(node) = stack.pop() {
        match node {
            Value::Object(map) => {
                if let Some(Value::String(url)) = map.get(DOWNLOAD_URL_KEY) {
                    if !url.is_empty() {
                        return Some(url);
                    }
                }
                stack.extend(map.values().rev());
            }
            Value::Array(items) => stack.extend(items.iter().rev()),
            _ => {}
        }
    }

    None
}
