use log::info;

use crate::config::Config;
use crate::utils::error::SiteResult;
use crate::utils::fs::remove_directory;

/// Handle the clean command
pub fn handle_clean_command(config: &Config) -> SiteResult<()> {
    for output_dir in &config.output_dirs {
        info!("Cleaning site at {}", output_dir.display());
        remove_directory(output_dir)?;
    }

    info!("Site cleaned successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_clean_removes_every_output_root() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output");
        let docs = dir.path().join("docs");
        fs::create_dir_all(out.join("blog")).unwrap();
        fs::write(out.join("blog/post.html"), "x").unwrap();

        let config = Config {
            output_dirs: vec![out.clone(), docs.clone()],
            ..Config::default()
        };
        handle_clean_command(&config).unwrap();

        assert!(!out.exists());
        assert!(!docs.exists());
    }
}
