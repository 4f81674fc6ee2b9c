use log::info;

use crate::builder;
use crate::config::Config;
use crate::utils::error::SiteResult;

/// Handle the build command
pub fn handle_build_command(config: &Config) -> SiteResult<()> {
    info!("Building site...");
    let summaries = builder::build_site(config)?;

    for summary in &summaries {
        info!(
            "Built {} pages into {}{}",
            summary.pages.len(),
            summary.output_dir.display(),
            if summary.index_written { "" } else { " (kept existing index.html)" }
        );
    }

    // base_url is normalised without a trailing slash, "" for the host root
    info!("Site will be published at {}/", config.base_url);
    Ok(())
}
