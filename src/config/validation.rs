use std::path::Path;

use crate::config::Config;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::path::is_within;

/// Validate the configuration
pub fn validate_config(config: &Config) -> SiteResult<()> {
    validate_output_directories(config)?;
    validate_names(config)?;
    Ok(())
}

/// Output roots are deleted at the start of a build, so none of them may
/// hold an input directory or another output root
fn validate_output_directories(config: &Config) -> SiteResult<()> {
    if config.output_dirs.is_empty() {
        return Err(SiteError::Config("At least one output directory is required".to_string()));
    }

    let inputs: [(&str, &Path); 3] = [
        ("content", config.content_dir.as_path()),
        ("template", config.template_dir.as_path()),
        ("static", config.static_dir.as_path()),
    ];

    for (i, output) in config.output_dirs.iter().enumerate() {
        if output.as_os_str().is_empty() {
            return Err(SiteError::Config("Output directory must not be empty".to_string()));
        }

        for (label, input) in &inputs {
            if is_within(input, output) {
                return Err(SiteError::Config(format!(
                    "Output directory {} would delete the {} directory {}",
                    output.display(), label, input.display()
                )));
            }
        }

        for other in config.output_dirs.iter().skip(i + 1) {
            if is_within(other, output) || is_within(output, other) {
                return Err(SiteError::Config(format!(
                    "Output directories overlap: {} and {}",
                    output.display(), other.display()
                )));
            }
        }
    }

    Ok(())
}

fn validate_names(config: &Config) -> SiteResult<()> {
    if config.default_template.trim().is_empty() {
        return Err(SiteError::Config("default_template must not be empty".to_string()));
    }
    if config.index_template.trim().is_empty() {
        return Err(SiteError::Config("index_template must not be empty".to_string()));
    }
    if config.markdown_ext.iter().all(|ext| ext.trim().is_empty()) {
        return Err(SiteError::Config("markdown_ext must name at least one extension".to_string()));
    }
    if config.base_url.ends_with('/') {
        return Err(SiteError::Config(format!("base_url must not end with '/': {}", config.base_url)));
    }
    Ok(())
}
