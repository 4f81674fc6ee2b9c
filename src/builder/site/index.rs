use std::path::{Path, PathBuf};

use liquid::model::Value;
use liquid::Object;
use log::{debug, info};

use crate::builder::page::Page;
use crate::builder::types::BuildContext;
use crate::utils::error::SiteResult;
use crate::utils::fs::write_file;

/// Index file name at every output root
pub const INDEX_FILE: &str = "index.html";

/// Render the page listing to `<root>/index.html`.
///
/// Returns `false` when an existing index is kept, which happens when
/// `overwrite_index` is off and a document already produced one.
pub fn write_index(ctx: &BuildContext, output_root: &Path, pages: &[Page]) -> SiteResult<bool> {
    let index_path = index_path(output_root);
    if index_path.exists() && !ctx.config.overwrite_index {
        info!("Keeping existing {}", index_path.display());
        return Ok(false);
    }

    let rendered = ctx.templates.render(&ctx.config.index_template, &index_variables(pages))?;
    write_file(&index_path, &rendered)?;
    debug!("Wrote index with {} pages to {}", pages.len(), index_path.display());

    Ok(true)
}

pub fn index_path(output_root: &Path) -> PathBuf {
    output_root.join(INDEX_FILE)
}

/// `pages` in discovery order, each as `{title, url, path}`
fn index_variables(pages: &[Page]) -> Object {
    let listing = pages.iter().map(Page::to_liquid).collect::<Vec<Value>>();

    let mut vars = Object::new();
    vars.insert("pages".into(), Value::Array(listing));
    vars
}
