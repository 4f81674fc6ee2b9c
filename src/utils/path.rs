use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components lexically
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                if !result.pop() {
                    result.push(component);
                }
            },
            Component::CurDir => {},
            _ => result.push(component),
        }
    }

    result
}

/// Whether `path` lies under `root`, after lexical normalization
pub fn is_within<P: AsRef<Path>, R: AsRef<Path>>(path: P, root: R) -> bool {
    normalize_path(path).starts_with(normalize_path(root))
}

/// Render a relative path with forward slashes regardless of host separator
pub fn to_url_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a normalized base URL and a relative path with exactly one slash
pub fn join_url(base_url: &str, relative: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), relative.trim_start_matches('/'))
}

/// Strip trailing slashes from a base URL and make sure a non-empty base
/// starts with one
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') || trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
