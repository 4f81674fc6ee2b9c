use std::fs;
use std::path::Path;

use log::info;

use crate::utils::error::{IoResultExt, SiteResult};

/// Delete the destination directory and recreate it empty.
///
/// Everything previously in the tree is lost, including manual edits.
pub fn clean_destination(destination: &Path) -> SiteResult<()> {
    if destination.exists() {
        info!("Cleaning destination directory: {}", destination.display());
        if destination.is_dir() {
            fs::remove_dir_all(destination).with_path(destination)?;
        } else {
            fs::remove_file(destination).with_path(destination)?;
        }
    }

    fs::create_dir_all(destination).with_path(destination)
}
