use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "sitegen")]
#[command(about = "Builds a static HTML site from Markdown documents and Liquid templates", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory the site is built from (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true, default_value = ".")]
    pub source: PathBuf,

    /// Custom configuration file, relative to the source directory
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub site: SiteArgs,

    /// Print debug output
    #[arg(short, long, default_value_t = false, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Site settings that override the configuration file
#[derive(Args, Debug, Default)]
pub struct SiteArgs {
    /// Markdown content directory (defaults to ./content)
    #[arg(long, value_name = "DIR", env = "SITE_CONTENT_DIR", global = true)]
    pub content_dir: Option<PathBuf>,

    /// Output directory; repeat or comma-separate for several (defaults to ./output)
    #[arg(
        short,
        long = "output",
        value_name = "DIR",
        env = "SITE_OUTPUT_DIRS",
        value_delimiter = ',',
        global = true
    )]
    pub output_dirs: Vec<PathBuf>,

    /// Template directory (defaults to ./templates)
    #[arg(long, value_name = "DIR", env = "SITE_TEMPLATE_DIR", global = true)]
    pub template_dir: Option<PathBuf>,

    /// Static assets directory, copied to <output>/static (defaults to ./static)
    #[arg(long, value_name = "DIR", env = "SITE_STATIC_DIR", global = true)]
    pub static_dir: Option<PathBuf>,

    /// URL prefix for generated links, e.g. /myrepo
    #[arg(short, long, value_name = "URL", env = "SITE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Replace an index.html produced by a document with the generated index
    #[arg(
        long,
        value_name = "BOOL",
        env = "SITE_OVERWRITE_INDEX",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true",
        global = true
    )]
    pub overwrite_index: Option<bool>,

    /// Syntect theme used to write <output>/highlight.css
    #[arg(long, value_name = "THEME", global = true)]
    pub highlight_theme: Option<String>,
}

impl SiteArgs {
    pub fn to_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            content_dir: self.content_dir.clone(),
            output_dirs: self.output_dirs.clone(),
            template_dir: self.template_dir.clone(),
            static_dir: self.static_dir.clone(),
            base_url: self.base_url.clone(),
            overwrite_index: self.overwrite_index,
            highlight_theme: self.highlight_theme.clone(),
        }
    }
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Build the site into every output directory
    #[command(alias = "b")]
    Build,

    /// Remove every output directory
    Clean,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_build_defaults() {
        let cli = Cli::try_parse_from(["sitegen"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.source, PathBuf::from("."));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_output_dirs_repeat_and_split() {
        let cli = Cli::try_parse_from(["sitegen", "build", "-o", "out,docs", "--output", "extra"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Build));
        assert_eq!(
            cli.site.output_dirs,
            vec![PathBuf::from("out"), PathBuf::from("docs"), PathBuf::from("extra")]
        );
    }

    #[test]
    fn test_overwrite_index_flag_forms() {
        let cli = Cli::try_parse_from(["sitegen", "--overwrite-index"]).unwrap();
        assert_eq!(cli.site.overwrite_index, Some(true));

        let cli = Cli::try_parse_from(["sitegen", "--overwrite-index=false"]).unwrap();
        assert_eq!(cli.site.overwrite_index, Some(false));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["sitegen", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_overrides_carry_flags() {
        let cli = Cli::try_parse_from(["sitegen", "clean", "--base-url", "/site", "--content-dir", "docs-src"]).unwrap();
        let overrides = cli.site.to_overrides();
        assert_eq!(overrides.base_url.as_deref(), Some("/site"));
        assert_eq!(overrides.content_dir, Some(PathBuf::from("docs-src")));
    }
}
