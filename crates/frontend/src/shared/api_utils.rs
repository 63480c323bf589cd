//! URL helpers for frontend-backend communication

/// Join a base origin and an absolute path without doubling the slash
///
/// # Example
/// ```rust
/// use energia_frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://127.0.0.1:8000/", "/dependencias"), "http://127.0.0.1:8000/dependencias");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Percent-encode a single path segment supplied by the caller
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
