use std::path::Path;

use liquid::model::Value;
use liquid::Object;
use log::debug;

use crate::builder::page::model::Page;
use crate::builder::page::utils::{output_path_for, page_url, relative_url, title_from_path};
use crate::builder::types::BuildContext;
use crate::front_matter::{load_document, Document};
use crate::template::yaml_to_liquid;
use crate::utils::error::SiteResult;
use crate::utils::fs::write_file;

/// Page template title when a document has none
const UNTITLED: &str = "Untitled";

/// Render one document into `output_root` and describe the result.
///
/// Nothing is written unless loading and both render steps succeed.
pub fn render_page(ctx: &BuildContext, document_path: &Path, output_root: &Path) -> SiteResult<Page> {
    let output_path = output_path_for(&ctx.config.content_dir, document_path, output_root)?;

    let document = load_document(document_path)?;
    let content = ctx.renderer.render(&document.body)?;

    let template_name = document
        .metadata
        .template()
        .unwrap_or_else(|| ctx.config.default_template.clone());
    let rendered = ctx.templates.render(&template_name, &page_variables(&document, content))?;

    write_file(&output_path, &rendered)?;
    debug!("Wrote {} from {} using {}", output_path.display(), document.path().display(), template_name);

    let relative = relative_url(output_root, &output_path);
    Ok(Page {
        url: page_url(&ctx.config.base_url, &relative),
        title: document
            .metadata
            .title()
            .unwrap_or_else(|| title_from_path(&output_path)),
        relative_url: relative,
        output_path,
    })
}

/// Template variables for a page: every metadata key, then `content` and
/// `title`, which are always present
pub fn page_variables(document: &Document, content: String) -> Object {
    let mut vars = Object::new();
    for (key, value) in document.metadata.iter() {
        vars.insert(key.into(), yaml_to_liquid(value));
    }

    let title = document.metadata.title().unwrap_or_else(|| UNTITLED.to_string());
    vars.insert("content".into(), Value::scalar(content));
    vars.insert("title".into(), Value::scalar(title));
    vars
}
