use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::front_matter::parser;
use crate::front_matter::types::Document;
use crate::utils::error::{NotFoundKind, SiteError, SiteResult};

/// Read a document from disk and split off its metadata header
pub fn load_document<P: AsRef<Path>>(path: P) -> SiteResult<Document> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SiteError::not_found(NotFoundKind::Document, path),
        _ => SiteError::fs(path, e),
    })?;

    let (metadata, body) = parser::parse(&content, path)?;
    debug!("Loaded {} ({} metadata keys)", path.display(), metadata.len());

    Ok(Document {
        path: path.to_path_buf(),
        metadata,
        body,
    })
}
