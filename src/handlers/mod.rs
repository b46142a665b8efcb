pub mod approval_handlers;
pub mod claim_handlers;
pub mod dashboard;
pub mod landing;
pub mod staff_handlers;

/// Local redirect target from a form field. Anything that is not a plain
/// absolute path on this site falls back to `default`.
pub(crate) fn safe_return_to(return_to: Option<&str>, default: &str) -> String {
    match return_to.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains("://")
                && !path.contains('\\') =>
        {
            path.to_string()
        }
        _ => default.to_string(),
    }
}
