use std::path::{Component, Path, PathBuf};

use liquid::model::Value;
use liquid::partials::{InMemorySource, LazyCompiler};
use liquid::{Object, Parser};
use log::debug;
use walkdir::WalkDir;

use crate::template::filters::RelativeUrlFilterParser;
use crate::template::TemplateEngine;
use crate::utils::error::{NotFoundKind, SiteError, SiteResult};
use crate::utils::fs;
use crate::utils::path::to_url_path;

/// Extensions tried, in order, for template names given without one
const TEMPLATE_EXTENSIONS: [&str; 2] = ["html", "liquid"];

/// Liquid-backed template engine rooted at a template directory.
///
/// Every template in the root is also available to `{% include %}`.
pub struct LiquidTemplates {
    /// Template lookup root
    template_dir: PathBuf,

    /// Base URL exposed to every template as `base_url`
    base_url: String,

    parser: Parser,
}

impl LiquidTemplates {
    pub fn new(template_dir: &Path, base_url: &str) -> SiteResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .filter(RelativeUrlFilterParser { base_url: base_url.to_string() })
            .partials(LazyCompiler::new(load_partials(template_dir)?))
            .build()
            .map_err(|e| SiteError::Render(format!("Failed to create template parser: {}", e)))?;

        Ok(LiquidTemplates {
            template_dir: template_dir.to_path_buf(),
            base_url: base_url.to_string(),
            parser,
        })
    }

    /// Find a template file by name under the template root
    fn find_template(&self, name: &str) -> SiteResult<PathBuf> {
        let relative = Path::new(name);
        let not_found = || SiteError::not_found(NotFoundKind::Template, self.template_dir.join(name));

        // Names must stay inside the template root
        if name.is_empty() || !relative.components().all(|c| matches!(c, Component::Normal(_))) {
            return Err(not_found());
        }

        let exact = self.template_dir.join(relative);
        if exact.is_file() {
            return Ok(exact);
        }

        if relative.extension().is_none() {
            for ext in TEMPLATE_EXTENSIONS {
                let with_ext = exact.with_extension(ext);
                if with_ext.is_file() {
                    return Ok(with_ext);
                }
            }
        }

        Err(not_found())
    }
}

impl TemplateEngine for LiquidTemplates {
    fn render(&self, name: &str, vars: &Object) -> SiteResult<String> {
        let template_path = self.find_template(name)?;
        debug!("Using template: {}", template_path.display());

        let source = fs::read_file(&template_path)?;

        let template = self.parser.parse(&source)
            .map_err(|e| SiteError::Render(format!("Failed to parse template {}: {}", name, e)))?;

        let mut globals = Object::new();
        globals.insert("base_url".into(), Value::scalar(self.base_url.clone()));
        for (key, value) in vars.iter() {
            globals.insert(key.clone(), value.clone());
        }

        template.render(&globals)
            .map_err(|e| SiteError::Render(format!("Failed to render template {}: {}", name, e)))
    }
}

/// Register every file under the template root as an includable partial
fn load_partials(template_dir: &Path) -> SiteResult<InMemorySource> {
    let mut source = InMemorySource::new();
    if !template_dir.is_dir() {
        return Ok(source);
    }

    for entry in WalkDir::new(template_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(template_dir).to_path_buf();
            SiteError::fs(&path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry.path().strip_prefix(template_dir).unwrap_or(entry.path());
        source.add(to_url_path(rel), fs::read_file(entry.path())?);
    }

    Ok(source)
}
