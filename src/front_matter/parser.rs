use std::path::Path;

use serde_yaml::Value;

use crate::front_matter::types::FrontMatter;
use crate::utils::error::{SiteError, SiteResult};

const OPEN_DELIMITER: &str = "---";
const CLOSE_DELIMITERS: [&str; 2] = ["---", "..."];

/// Split text into its metadata header and body.
///
/// A header exists only when the first line is exactly `---` and a later
/// line closes it with `---` or `...`. Otherwise the whole text is body.
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(first_end) = content.find('\n') else {
        return (None, content);
    };
    if content[..first_end].trim_end_matches('\r') != OPEN_DELIMITER {
        return (None, content);
    }

    let header_start = first_end + 1;
    let mut pos = header_start;
    while pos <= content.len() {
        let line_end = content[pos..].find('\n').map(|i| pos + i);
        let line = &content[pos..line_end.unwrap_or(content.len())];

        if CLOSE_DELIMITERS.contains(&line.trim_end_matches('\r')) {
            let header = &content[header_start..pos];
            let body = match line_end {
                Some(end) => strip_leading_blank_lines(&content[end + 1..]),
                None => "",
            };
            return (Some(header), body);
        }

        match line_end {
            Some(end) => pos = end + 1,
            None => break,
        }
    }

    (None, content)
}

fn strip_leading_blank_lines(text: &str) -> &str {
    let mut rest = text;
    loop {
        let line_end = match rest.find('\n') {
            Some(i) => i,
            None => return if rest.trim().is_empty() { "" } else { rest },
        };
        if rest[..line_end].trim().is_empty() {
            rest = &rest[line_end + 1..];
        } else {
            return rest;
        }
    }
}

/// Parse a YAML header into front matter. `path` is only used for errors.
pub fn parse_front_matter(header: &str, path: &Path) -> SiteResult<FrontMatter> {
    if header.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let value: Value = serde_yaml::from_str(header).map_err(|e| SiteError::FrontMatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match value {
        Value::Mapping(map) => Ok(FrontMatter::new(map)),
        Value::Null => Ok(FrontMatter::default()),
        other => Err(SiteError::FrontMatter {
            path: path.to_path_buf(),
            message: format!("expected key/value pairs, found {}", describe(&other)),
        }),
    }
}

/// Split and parse in one step
pub fn parse(content: &str, path: &Path) -> SiteResult<(FrontMatter, String)> {
    let (header, body) = split_front_matter(content);
    let metadata = match header {
        Some(header) => parse_front_matter(header, path)?,
        None => FrontMatter::default(),
    };
    Ok((metadata, body.to_string()))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
