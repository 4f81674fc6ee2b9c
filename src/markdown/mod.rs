pub mod engine;
pub mod renderer;

pub use renderer::{highlight_css, MarkdownRenderer};

use crate::utils::error::SiteResult;

/// Converts a document body into an HTML fragment.
///
/// Implementations must be deterministic and keep no state between calls.
pub trait ContentRenderer {
    fn render(&self, body: &str) -> SiteResult<String>;
}
