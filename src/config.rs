//! Backend origin resolution.
//!
//! The API origin is injected rather than hardcoded at call sites. Resolution
//! order: a `<meta name="perpul-api-base">` tag in the host document (set by
//! whoever serves the bundle), the `PERPUL_API_BASE` env var at compile time,
//! then the local dev default.

use wasm_bindgen::JsCast;

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const META_NAME: &str = "perpul-api-base";

/// Resolve the backend origin for this page load.
pub fn api_base() -> String {
    meta_override()
        .or_else(|| option_env!("PERPUL_API_BASE").map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
}

/// Absolute URL for an API path, e.g. `endpoint("upload")`.
pub fn endpoint(path: &str) -> String {
    join(&api_base(), path)
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn meta_override() -> Option<String> {
    let meta = web_sys::window()?
        .document()?
        .query_selector(&format!("meta[name='{META_NAME}']"))
        .ok()??
        .dyn_into::<web_sys::HtmlMetaElement>()
        .ok()?;
    let content = meta.content();
    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn join_inserts_single_slash() {
        assert_eq!(join("http://localhost:8000", "upload"), "http://localhost:8000/upload");
        assert_eq!(join("http://localhost:8000/", "upload"), "http://localhost:8000/upload");
        assert_eq!(join("http://localhost:8000", "/upload"), "http://localhost:8000/upload");
        assert_eq!(join("http://localhost:8000/", "/upload"), "http://localhost:8000/upload");
    }

    #[test]
    fn join_keeps_nested_paths() {
        assert_eq!(
            join("https://api.perpul.example", "painting/abc123"),
            "https://api.perpul.example/painting/abc123"
        );
    }
}
