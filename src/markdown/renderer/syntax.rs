use lazy_static::lazy_static;
use regex::{Captures, Regex};
use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::utils::error::{SiteError, SiteResult};

lazy_static! {
    static ref CODE_BLOCK_REGEX: Regex =
        Regex::new(r#"<pre><code(?: class="language-([^"]+)")?>([^<]*)</code></pre>"#).unwrap();
}

const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Component for syntax highlighting code blocks in HTML.
///
/// Output uses CSS classes rather than inline colours, so any theme
/// stylesheet (see [`highlight_css`]) can style it.
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        SyntaxHighlighter {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Process HTML content to add syntax highlighting to code blocks
    pub fn highlight_html(&self, html: &str) -> SiteResult<String> {
        let mut failure = None;

        let highlighted = CODE_BLOCK_REGEX.replace_all(html, |caps: &Captures| {
            let lang = caps.get(1).map(|m| m.as_str()).unwrap_or("text");
            let code = html_escape::decode_html_entities(&caps[2]);

            match self.highlight_code(&code, lang) {
                Ok(block) => block,
                Err(e) => {
                    failure.get_or_insert(e);
                    caps[0].to_string()
                }
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(highlighted.into_owned()),
        }
    }

    /// Highlight a specific code block with specified language
    pub fn highlight_code(&self, code: &str, lang: &str) -> SiteResult<String> {
        let syntax = self.syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            CLASS_STYLE,
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| SiteError::Render(format!("Failed to highlight {} code: {}", lang, e)))?;
        }

        Ok(format!(
            "<div class=\"highlight\"><pre class=\"highlight {}\"><code>{}</code></pre></div>",
            html_escape::encode_double_quoted_attribute(lang),
            generator.finalize()
        ))
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Stylesheet matching the classed markup for one of syntect's bundled themes
pub fn highlight_css(theme_name: &str) -> SiteResult<String> {
    let themes = ThemeSet::load_defaults();
    let theme = themes.themes.get(theme_name).ok_or_else(|| {
        let mut known: Vec<&str> = themes.themes.keys().map(|k| k.as_str()).collect();
        known.sort_unstable();
        SiteError::Config(format!(
            "Unknown highlight theme '{}' (available: {})",
            theme_name,
            known.join(", ")
        ))
    })?;

    css_for_theme_with_class_style(theme, CLASS_STYLE)
        .map_err(|e| SiteError::Render(format!("Failed to build highlight CSS: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_highlighting() {
        let highlighter = SyntaxHighlighter::new();
        let code = "fn main() {\n    println!(\"Hello, World!\");\n}";
        let html = highlighter.highlight_code(code, "rust").unwrap();

        assert!(html.contains("<div class=\"highlight\">"));
        assert!(html.contains("<pre class=\"highlight rust\">"));
        assert!(html.contains("<span class=\"source rust\">"));
    }

    #[test]
    fn test_empty_code_block_is_wrapped() {
        let highlighter = SyntaxHighlighter::new();
        let html = highlighter
            .highlight_html("<pre><code class=\"language-rust\"></code></pre>\n")
            .unwrap();

        assert_eq!(
            html,
            "<div class=\"highlight\"><pre class=\"highlight rust\"><code></code></pre></div>\n"
        );
    }

    #[test]
    fn test_html_processing() {
        let highlighter = SyntaxHighlighter::new();
        let html = "<p>x</p>\n<pre><code class=\"language-rust\">fn main() {\n    println!(&quot;Hello&quot;);\n}</code></pre>";
        let processed = highlighter.highlight_html(html).unwrap();

        assert!(processed.starts_with("<p>x</p>"));
        assert!(processed.contains("<pre class=\"highlight rust\">"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let highlighter = SyntaxHighlighter::new();
        let html = highlighter.highlight_code("just words\n", "no-such-lang").unwrap();
        assert!(html.contains("just words"));
        assert!(html.contains("highlight no-such-lang"));
    }

    #[test]
    fn test_highlight_css() {
        let css = highlight_css("InspiredGitHub").unwrap();
        assert!(!css.trim().is_empty());
        assert!(matches!(highlight_css("nope"), Err(SiteError::Config(_))));
    }
}
