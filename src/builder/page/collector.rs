use std::path::PathBuf;

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::utils::error::{NotFoundKind, SiteError, SiteResult};

/// Collect every document under the content root.
///
/// Traversal is sorted by file name, so the order is stable across runs and
/// hosts. Hidden files and directories are skipped.
pub fn collect_documents(config: &Config) -> SiteResult<Vec<PathBuf>> {
    let content_dir = &config.content_dir;
    if !content_dir.is_dir() {
        return Err(SiteError::not_found(NotFoundKind::ContentDir, content_dir));
    }

    debug!("Collecting documents under {}", content_dir.display());
    let mut documents = Vec::new();

    let walker = WalkDir::new(content_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(content_dir).to_path_buf();
            SiteError::fs(&path, e.into())
        })?;

        if entry.file_type().is_file() && is_document(&entry, config) {
            documents.push(entry.into_path());
        }
    }

    debug!("Collected {} documents", documents.len());
    Ok(documents)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_document(entry: &DirEntry, config: &Config) -> bool {
    entry
        .path()
        .extension()
        .map(|ext| config.is_markdown_ext(&ext.to_string_lossy()))
        .unwrap_or(false)
}
