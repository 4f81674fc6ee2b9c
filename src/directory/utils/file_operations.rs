use std::io;
use std::path::Path;

use fs_extra::dir::{self, CopyOptions};
use log::debug;

use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs::{create_directory, remove_directory};

/// Copy the static assets tree into `destination`, replacing any previous
/// copy there. Returns the number of files copied; a missing source copies
/// nothing.
pub fn copy_static_dir(source: &Path, destination: &Path) -> SiteResult<usize> {
    if !source.is_dir() {
        debug!("No static directory at {}, skipping", source.display());
        return Ok(0);
    }

    remove_directory(destination)?;
    create_directory(destination)?;

    debug!("Copying static files from {} to {}", source.display(), destination.display());

    let options = CopyOptions::new().overwrite(true).content_only(true);
    dir::copy(source, destination, &options).map_err(|e| fs_extra_error(source, e))?;

    let content = dir::get_dir_content(source).map_err(|e| fs_extra_error(source, e))?;
    Ok(content.files.len())
}

fn fs_extra_error(path: &Path, err: fs_extra::error::Error) -> SiteError {
    SiteError::fs(path, io::Error::new(io::ErrorKind::Other, err))
}
