use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

/// Metadata header of a document, in the order the keys were written.
///
/// No schema is applied: callers decide how to default missing keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    values: Mapping,
}

impl FrontMatter {
    pub fn new(values: Mapping) -> Self {
        FrontMatter { values }
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Scalar value for a key rendered as a string (strings, numbers, bools)
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// Explicit `title` key, if present and non-empty
    pub fn title(&self) -> Option<String> {
        self.get_str("title").filter(|t| !t.trim().is_empty())
    }

    /// Explicit `template` key, if present and non-empty
    pub fn template(&self) -> Option<String> {
        self.get_str("template").filter(|t| !t.trim().is_empty())
    }

    /// Iterate over string-convertible keys and their values
    pub fn iter(&self) -> impl Iterator<Item = (String, &Value)> {
        self.values
            .iter()
            .filter_map(|(k, v)| scalar_to_string(k).map(|key| (key, v)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Convert a scalar YAML value to its string form
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

/// A content file split into its metadata header and markup body
#[derive(Debug, Clone)]
pub struct Document {
    /// Path the document was loaded from
    pub path: PathBuf,

    /// Parsed metadata header (empty when the file has none)
    pub metadata: FrontMatter,

    /// Markup body following the header
    pub body: String,
}

impl Document {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
