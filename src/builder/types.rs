use std::path::PathBuf;

use crate::builder::page::Page;
use crate::config::Config;
use crate::markdown::ContentRenderer;
use crate::template::TemplateEngine;

/// Everything a page render needs, built once per build and borrowed by
/// every pipeline call
pub struct BuildContext<'a> {
    pub config: &'a Config,
    pub renderer: &'a dyn ContentRenderer,
    pub templates: &'a dyn TemplateEngine,

    /// Stylesheet for highlighted code, written to every output root
    pub highlight_css: Option<&'a str>,
}

/// Outcome of building one output root
#[derive(Debug)]
pub struct BuildSummary {
    pub output_dir: PathBuf,

    /// Pages in discovery order
    pub pages: Vec<Page>,

    pub static_files: usize,

    /// False when an existing `index.html` was kept
    pub index_written: bool,
}
