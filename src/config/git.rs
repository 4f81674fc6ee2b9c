use std::fs;
use std::path::Path;

use log::debug;

/// Derive a base URL from the `origin` remote in `<dir>/.git/config`.
///
/// A project repository `owner/blog` is published under `/blog`; a user or
/// organisation pages repository (`owner.github.io`) is served from the
/// domain root, which is `Some("")`. `None` means nothing could be detected.
pub fn detect_base_url(dir: &Path) -> Option<String> {
    let git_config_path = dir.join(".git").join("config");
    let content = fs::read_to_string(&git_config_path).ok()?;

    let remote = origin_url(&content)?;
    debug!("Found origin remote in {}: {}", git_config_path.display(), remote);

    repo_base_url(&remote)
}

/// Extract `remote "origin"`'s url from git config text
fn origin_url(git_config: &str) -> Option<String> {
    let mut in_origin = false;

    for line in git_config.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_origin = line == "[remote \"origin\"]";
            continue;
        }

        if in_origin {
            if let Some((key, value)) = line.split_once('=') {
                if key.trim() == "url" {
                    return Some(value.trim().to_string());
                }
            }
        }
    }

    None
}

/// Map a remote url to the sub-path its pages are served under
pub fn repo_base_url(remote_url: &str) -> Option<String> {
    let trimmed = remote_url.trim().trim_end_matches('/');
    let name = trimmed.rsplit(|c| c == '/' || c == ':').next()?;
    let name = name.strip_suffix(".git").unwrap_or(name);

    if name.is_empty() {
        return None;
    }

    if name.to_ascii_lowercase().ends_with(".github.io") {
        Some(String::new())
    } else {
        Some(format!("/{}", name))
    }
}
