use std::path::PathBuf;

/// Config files looked up in the working directory, first match wins
pub const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Default content directory
pub fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

/// Default output directories
pub fn default_output_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("output")]
}

/// Default template directory
pub fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

/// Default static assets directory
pub fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// Default base URL (site served from the domain root)
pub fn default_base_url() -> String {
    String::new()
}

/// Template used by documents without a `template` key
pub fn default_template() -> String {
    "page.html".to_string()
}

/// Template used for the generated index page
pub fn default_index_template() -> String {
    "index.html".to_string()
}

/// Default markdown extensions
pub fn default_markdown_ext() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

pub fn default_true() -> bool {
    true
}
