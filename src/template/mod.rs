mod convert;
mod filters;
mod liquid_engine;

pub use convert::yaml_to_liquid;
pub use liquid_engine::LiquidTemplates;

use liquid::Object;

use crate::utils::error::SiteResult;

/// Resolves a named template and renders it with a set of variables.
///
/// A missing template is a `NotFound` error; engine failures are `Render`.
/// Variables are strict: a bare `{{ author }}` with no `author` key fails to
/// render, so optional keys need a guard such as `{% if author %}`.
pub trait TemplateEngine {
    fn render(&self, name: &str, vars: &Object) -> SiteResult<String>;
}
