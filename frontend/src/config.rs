/// Configuration for the frontend application

/// Base URL for static assets
/// - For local development: "/"
/// - For a project sub-path deployment: "/launchpad/"
#[cfg(not(feature = "subpath"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "subpath")]
pub const BASE_URL: &str = "/launchpad/";

/// Helper function to construct asset paths. Absolute URLs pass through.
pub fn asset_path(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
