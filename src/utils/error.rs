use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Common result type for site generation
pub type SiteResult<T> = Result<T, SiteError>;

/// What kind of input could not be found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Document,
    Template,
    ContentDir,
    ConfigFile,
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotFoundKind::Document => "Document",
            NotFoundKind::Template => "Template",
            NotFoundKind::ContentDir => "Content directory",
            NotFoundKind::ConfigFile => "Configuration file",
        };
        f.write_str(name)
    }
}

/// Error types for site generation
#[derive(Debug)]
pub enum SiteError {
    /// A required document, template or directory is missing
    NotFound { kind: NotFoundKind, path: PathBuf },
    /// Markdown or template engine failure
    Render(String),
    /// Malformed metadata header in a document
    FrontMatter { path: PathBuf, message: String },
    /// IO failure on read/write/copy/delete
    Filesystem { path: PathBuf, source: io::Error },
    /// Invalid configuration
    Config(String),
}

impl SiteError {
    pub fn not_found(kind: NotFoundKind, path: impl Into<PathBuf>) -> Self {
        SiteError::NotFound { kind, path: path.into() }
    }

    /// Wrap an IO error together with the path it happened on
    pub fn fs(path: &Path, source: io::Error) -> Self {
        SiteError::Filesystem { path: path.to_path_buf(), source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteError::NotFound { .. })
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::NotFound { kind, path } => write!(f, "{} not found: {}", kind, path.display()),
            SiteError::Render(msg) => write!(f, "Render error: {}", msg),
            SiteError::FrontMatter { path, message } => {
                write!(f, "Front matter error in {}: {}", path.display(), message)
            }
            SiteError::Filesystem { path, source } => {
                write!(f, "Filesystem error on {}: {}", path.display(), source)
            }
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SiteError::Filesystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<liquid::Error> for SiteError {
    fn from(err: liquid::Error) -> Self {
        SiteError::Render(err.to_string())
    }
}

/// Extension for attaching a path to IO results
pub trait IoResultExt<T> {
    fn with_path(self, path: &Path) -> SiteResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path(self, path: &Path) -> SiteResult<T> {
        self.map_err(|e| SiteError::fs(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_path() {
        let err = SiteError::not_found(NotFoundKind::Template, "templates/post.html");
        assert_eq!(err.to_string(), "Template not found: templates/post.html");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_filesystem_error_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let res: io::Result<()> = Err(io_err);
        let err = res.with_path(Path::new("out/index.html")).unwrap_err();
        assert!(err.to_string().contains("out/index.html"));
        assert!(err.source().is_some());
    }
}
