use std::fmt;

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::{Filter, FilterReflection, Result as LiquidResult, Runtime, Value, ValueView};

use crate::utils::path::join_url;

/// `{{ "css/site.css" | relative_url }}` prefixes the site base URL
#[derive(Debug, Clone)]
pub struct RelativeUrlFilter {
    base_url: String,
}

impl Filter for RelativeUrlFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let path = input.to_kstr().to_string();

        // Absolute URLs and fragments are left alone
        if path.contains("://") || path.starts_with('#') {
            return Ok(Value::scalar(path));
        }

        Ok(Value::scalar(join_url(&self.base_url, &path)))
    }
}

impl fmt::Display for RelativeUrlFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "relative_url")
    }
}

/// Parse filter factory for relative_url
#[derive(Debug, Clone)]
pub struct RelativeUrlFilterParser {
    pub base_url: String,
}

impl FilterReflection for RelativeUrlFilterParser {
    fn name(&self) -> &str {
        "relative_url"
    }

    fn description(&self) -> &str {
        "Prepends the site's base URL to the input"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for RelativeUrlFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn Filter>> {
        Ok(Box::new(RelativeUrlFilter {
            base_url: self.base_url.clone(),
        }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(base_url: &str, template: &str) -> String {
        let parser = liquid::ParserBuilder::with_stdlib()
            .filter(RelativeUrlFilterParser { base_url: base_url.to_string() })
            .build()
            .unwrap();
        parser.parse(template).unwrap().render(&liquid::Object::new()).unwrap()
    }

    #[test]
    fn test_relative_url() {
        assert_eq!(render("/myrepo", "{{ 'static/site.css' | relative_url }}"), "/myrepo/static/site.css");
        assert_eq!(render("/myrepo", "{{ '/about.html' | relative_url }}"), "/myrepo/about.html");
        assert_eq!(render("", "{{ 'about.html' | relative_url }}"), "/about.html");
    }

    #[test]
    fn test_absolute_urls_untouched() {
        assert_eq!(
            render("/myrepo", "{{ 'https://example.org/x' | relative_url }}"),
            "https://example.org/x"
        );
    }
}
