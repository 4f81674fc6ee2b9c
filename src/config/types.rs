use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::defaults;

/// Site configuration, built once at startup and read-only during a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned recursively for documents
    #[serde(default = "defaults::default_content_dir")]
    pub content_dir: PathBuf,

    /// One or more output roots; each receives a full build
    #[serde(
        default = "defaults::default_output_dirs",
        alias = "output_dir",
        deserialize_with = "deserialize_path_or_seq"
    )]
    pub output_dirs: Vec<PathBuf>,

    /// Template lookup root
    #[serde(default = "defaults::default_template_dir")]
    pub template_dir: PathBuf,

    /// Copied verbatim to `<output>/static` when it exists
    #[serde(default = "defaults::default_static_dir")]
    pub static_dir: PathBuf,

    /// URL prefix for every generated link, without trailing slash
    #[serde(default = "defaults::default_base_url", alias = "baseurl")]
    pub base_url: String,

    /// Template for documents without a `template` key
    #[serde(default = "defaults::default_template")]
    pub default_template: String,

    /// Template for the generated index page
    #[serde(default = "defaults::default_index_template")]
    pub index_template: String,

    /// File extensions treated as documents
    #[serde(default = "defaults::default_markdown_ext")]
    pub markdown_ext: Vec<String>,

    /// Regenerate `index.html` even when a document already produced one
    #[serde(default)]
    pub overwrite_index: bool,

    /// Derive the base URL from the git remote when none is set
    #[serde(default = "defaults::default_true")]
    pub derive_base_url: bool,

    /// Write `highlight.css` for this syntect theme into each output root
    #[serde(default)]
    pub highlight_theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dir: defaults::default_content_dir(),
            output_dirs: defaults::default_output_dirs(),
            template_dir: defaults::default_template_dir(),
            static_dir: defaults::default_static_dir(),
            base_url: defaults::default_base_url(),
            default_template: defaults::default_template(),
            index_template: defaults::default_index_template(),
            markdown_ext: defaults::default_markdown_ext(),
            overwrite_index: false,
            derive_base_url: true,
            highlight_theme: None,
        }
    }
}

impl Config {
    /// Whether a file extension marks a document
    pub fn is_markdown_ext(&self, ext: &str) -> bool {
        self.markdown_ext.iter().any(|md_ext| md_ext.eq_ignore_ascii_case(ext))
    }
}

/// Accept either a single path or a list of paths
fn deserialize_path_or_seq<'de, D>(deserializer: D) -> Result<Vec<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PathOrSeq {
        One(PathBuf),
        Many(Vec<PathBuf>),
    }

    Ok(match PathOrSeq::deserialize(deserializer)? {
        PathOrSeq::One(path) => vec![path],
        PathOrSeq::Many(paths) => paths,
    })
}
