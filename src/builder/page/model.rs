use std::path::PathBuf;

use liquid::model::Value;
use liquid::Object;

/// A rendered page, kept in memory for the index
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Written file, under the output root
    pub output_path: PathBuf,

    /// Output path relative to the output root, forward slashes
    pub relative_url: String,

    /// Public URL: base URL, one slash, relative path
    pub url: String,

    pub title: String,
}

impl Page {
    /// Template view of the page for the index listing
    pub fn to_liquid(&self) -> Value {
        let mut obj = Object::new();
        obj.insert("title".into(), Value::scalar(self.title.clone()));
        obj.insert("url".into(), Value::scalar(self.url.clone()));
        obj.insert("path".into(), Value::scalar(self.relative_url.clone()));
        Value::Object(obj)
    }
}
