use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::defaults::CONFIG_FILES;
use crate::config::git;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{IoResultExt, NotFoundKind, SiteError, SiteResult};
use crate::utils::path::{normalize_base_url, normalize_path};

/// Settings given on the command line or through the environment.
///
/// Anything set here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub content_dir: Option<PathBuf>,
    pub output_dirs: Vec<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub overwrite_index: Option<bool>,
    pub highlight_theme: Option<String>,
}

/// Load site configuration: defaults, then the config file, then overrides,
/// then a git-derived base URL if none was given.
///
/// Relative paths are resolved against `working_dir`, which is itself made
/// absolute first so every configured directory compares in the same form.
pub fn load_config(
    working_dir: &Path,
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> SiteResult<Config> {
    let working_dir = &absolute_dir(working_dir)?;
    let mut config = match find_config_file(working_dir, config_file)? {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        },
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        },
    };

    apply_overrides(&mut config, overrides);

    if config.base_url.trim().is_empty() && config.derive_base_url {
        if let Some(base_url) = git::detect_base_url(working_dir) {
            info!("Using base URL derived from git remote: '{}'", base_url);
            config.base_url = base_url;
        }
    }

    config.base_url = normalize_base_url(&config.base_url);
    resolve_paths(&mut config, working_dir);

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// An explicit file must exist; otherwise the first default name present wins
fn find_config_file(working_dir: &Path, explicit: Option<&Path>) -> SiteResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = working_dir.join(path);
        if !path.is_file() {
            return Err(SiteError::not_found(NotFoundKind::ConfigFile, path));
        }
        return Ok(Some(path));
    }

    Ok(CONFIG_FILES
        .iter()
        .map(|name| working_dir.join(name))
        .find(|path| path.is_file()))
}

fn parse_config_file(path: &Path) -> SiteResult<Config> {
    let content = fs::read_to_string(path).map_err(|e| SiteError::fs(path, e))?;
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| SiteError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        ))),
        // Assume YAML for anything else
        _ => serde_yaml::from_str(&content).map_err(|e| SiteError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        ))),
    }
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(content_dir) = &overrides.content_dir {
        config.content_dir = content_dir.clone();
    }
    if !overrides.output_dirs.is_empty() {
        config.output_dirs = overrides.output_dirs.clone();
    }
    if let Some(template_dir) = &overrides.template_dir {
        config.template_dir = template_dir.clone();
    }
    if let Some(static_dir) = &overrides.static_dir {
        config.static_dir = static_dir.clone();
    }
    if let Some(base_url) = &overrides.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(overwrite_index) = overrides.overwrite_index {
        config.overwrite_index = overwrite_index;
    }
    if overrides.highlight_theme.is_some() {
        config.highlight_theme = overrides.highlight_theme.clone();
    }
}

fn absolute_dir(dir: &Path) -> SiteResult<PathBuf> {
    if dir.is_absolute() {
        return Ok(normalize_path(dir));
    }
    let cwd = env::current_dir().with_path(dir)?;
    Ok(normalize_path(cwd.join(dir)))
}

/// Anchor every directory at `working_dir` (absolute) and drop `.`/`..`
fn resolve_paths(config: &mut Config, working_dir: &Path) {
    let resolve = |path: &Path| normalize_path(working_dir.join(path));

    config.content_dir = resolve(&config.content_dir);
    config.template_dir = resolve(&config.template_dir);
    config.static_dir = resolve(&config.static_dir);
    for output_dir in &mut config.output_dirs {
        *output_dir = resolve(output_dir);
    }
}
