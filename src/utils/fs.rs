use std::fs;
use std::path::Path;

use crate::utils::error::{IoResultExt, SiteResult};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).with_path(path)
}

/// Remove a directory and all its contents, if present
pub fn remove_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    let path = path.as_ref();
    if path.is_dir() {
        fs::remove_dir_all(path).with_path(path)?;
    }
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> SiteResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_path(path)
}

/// Write a string to a file, creating parent directories and replacing any
/// existing file
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> SiteResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_directory(parent)?;
    }
    fs::write(path, contents).with_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c.html");

        write_file(&target, "first").unwrap();
        write_file(&target, "second").unwrap();

        assert_eq!(read_file(&target).unwrap(), "second");
    }

    #[test]
    fn test_read_missing_file_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("nope.md")).unwrap_err();
        assert!(err.to_string().contains("nope.md"));
    }

    #[test]
    fn test_remove_directory_ignores_missing() {
        let dir = tempfile::tempdir().unwrap();
        remove_directory(dir.path().join("missing")).unwrap();
    }
}
