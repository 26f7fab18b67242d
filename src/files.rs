//! File store behind the `/files/` routes
//!
//! Resolves client-supplied names against the serving directory and refuses
//! anything that would land outside of it.

use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::http::response::Response;

/// Errors raised by [`FileStore`] operations
#[derive(Debug)]
pub enum FileStoreError {
    /// No serving directory was configured
    NoDirectory,
    /// The file does not exist or is not a regular file
    NotFound,
    /// The name resolves outside the serving directory
    OutsideRoot,
    /// Reading or writing failed
    Io(io::Error),
}

impl FileStoreError {
    /// The response sent to the client for this error.
    pub fn response(&self) -> Response {
        match self {
            FileStoreError::NoDirectory | FileStoreError::NotFound | FileStoreError::OutsideRoot => {
                Response::not_found()
            }
            FileStoreError::Io(_) => Response::internal_error(),
        }
    }
}

impl fmt::Display for FileStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStoreError::NoDirectory => f.write_str("directory not specified"),
            FileStoreError::NotFound => f.write_str("file not found"),
            FileStoreError::OutsideRoot => f.write_str("path escapes the serving directory"),
            FileStoreError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for FileStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileStoreError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileStoreError {
    fn from(e: io::Error) -> Self {
        FileStoreError::Io(e)
    }
}

/// Download and upload operations scoped to one directory
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    root: Option<PathBuf>,
}

impl FileStore {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// A store with file routes disabled
    pub fn disabled() -> Self {
        Self { root: None }
    }

    /// Reads the whole file named `name`.
    pub async fn download(&self, name: &str) -> Result<Vec<u8>, FileStoreError> {
        let root = self.canonical_root().await?;
        let path = root.join(relative_name(name)?);

        let resolved = match tokio::fs::canonicalize(&path).await {
            Ok(p) => p,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(FileStoreError::NotFound),
            Err(e) => return Err(e.into()),
        };
        // Symlinks may point anywhere
        if !resolved.starts_with(&root) {
            return Err(FileStoreError::OutsideRoot);
        }

        let metadata = tokio::fs::metadata(&resolved)
            .await
            .map_err(|_| FileStoreError::NotFound)?;
        if !metadata.is_file() {
            return Err(FileStoreError::NotFound);
        }

        let contents = tokio::fs::read(&resolved).await?;
        tracing::debug!(path = %resolved.display(), bytes = contents.len(), "File read");
        Ok(contents)
    }

    /// Creates or truncates the file named `name` and writes `data` to it.
    ///
    /// Never creates directories; the parent must already exist inside the
    /// serving directory.
    pub async fn upload(&self, name: &str, data: &[u8]) -> Result<(), FileStoreError> {
        let root = self.canonical_root().await?;
        let path = root.join(relative_name(name)?);

        let parent = path.parent().unwrap_or(root.as_path());
        let parent = tokio::fs::canonicalize(parent).await?;
        if !parent.starts_with(&root) {
            return Err(FileStoreError::OutsideRoot);
        }

        // Writing through a symlink follows it; a dangling one cannot be checked
        if let Ok(meta) = tokio::fs::symlink_metadata(&path).await {
            if meta.file_type().is_symlink() {
                match tokio::fs::canonicalize(&path).await {
                    Ok(target) if target.starts_with(&root) => {}
                    _ => return Err(FileStoreError::OutsideRoot),
                }
            }
        }

        tokio::fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "File written");
        Ok(())
    }

    async fn canonical_root(&self) -> Result<PathBuf, FileStoreError> {
        let root = self.root.as_ref().ok_or(FileStoreError::NoDirectory)?;
        tokio::fs::canonicalize(root).await.map_err(|e| {
            tracing::warn!(dir = %root.display(), error = %e, "Serving directory unavailable");
            FileStoreError::NoDirectory
        })
    }
}

/// Accepts only names made of plain components (no `..`, no root, not empty).
fn relative_name(name: &str) -> Result<&Path, FileStoreError> {
    let path = Path::new(name);
    let mut components = path.components().peekable();

    if components.peek().is_none() {
        return Err(FileStoreError::NotFound);
    }
    if components.all(|c| matches!(c, Component::Normal(_))) {
        Ok(path)
    } else {
        Err(FileStoreError::OutsideRoot)
    }
}
