use std::path::{Component, Path, PathBuf};

use crate::utils::error::{NotFoundKind, SiteError, SiteResult};
use crate::utils::path::{join_url, to_url_path};

/// Output path for a document: its path relative to the content root, with
/// an `.html` extension, rooted at the output directory
pub fn output_path_for(content_dir: &Path, document: &Path, output_root: &Path) -> SiteResult<PathBuf> {
    let relative = document
        .strip_prefix(content_dir)
        .ok()
        .filter(|rel| {
            !rel.as_os_str().is_empty()
                && rel.components().all(|c| matches!(c, Component::Normal(_)))
        })
        .ok_or_else(|| SiteError::not_found(NotFoundKind::Document, document))?;

    Ok(output_root.join(relative).with_extension("html"))
}

/// Output path relative to its root, rendered with forward slashes
pub fn relative_url(output_root: &Path, output_path: &Path) -> String {
    to_url_path(output_path.strip_prefix(output_root).unwrap_or(output_path))
}

/// Public URL of a page
pub fn page_url(base_url: &str, relative_url: &str) -> String {
    join_url(base_url, relative_url)
}

/// Title derived from a file name: `about_us.md` becomes "About Us"
pub fn title_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    title_case(&stem.replace(['_', '-'], " "))
}

/// Upper-case the first letter of every word and lower-case the rest
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = !c.is_numeric();
        }
    }

    result
}
