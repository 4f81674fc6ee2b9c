pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

use crate::config;
use crate::utils::error::SiteResult;

/// Run the command-line interface
pub fn run() -> SiteResult<()> {
    let cli = types::Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet);

    let config = config::load_config(&cli.source, cli.config.as_deref(), &cli.site.to_overrides())?;

    match cli.command.unwrap_or(types::Commands::Build) {
        types::Commands::Build => commands::handle_build_command(&config),
        types::Commands::Clean => commands::handle_clean_command(&config),
    }
}
