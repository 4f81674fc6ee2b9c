use comrak::Options;

use crate::markdown::engine::{create_comrak_options, render_markdown};
use crate::markdown::renderer::syntax::SyntaxHighlighter;
use crate::markdown::ContentRenderer;
use crate::utils::error::SiteResult;

/// Markdown renderer with syntax highlighting.
///
/// Holds only immutable options and the syntax set; every call parses into a
/// fresh document, so nothing carries over between documents.
pub struct MarkdownRenderer {
    options: Options<'static>,
    syntax_highlighter: SyntaxHighlighter,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        MarkdownRenderer {
            options: create_comrak_options(),
            syntax_highlighter: SyntaxHighlighter::new(),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentRenderer for MarkdownRenderer {
    fn render(&self, content: &str) -> SiteResult<String> {
        let html = render_markdown(content, &self.options);
        self.syntax_highlighter.highlight_html(&html)
    }
}
