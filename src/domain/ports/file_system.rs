//! FileSystem port - read-only view of the project directory
//!
//! The detector only ever asks "is this a file / a directory" and reads the
//! manifest, so the port is deliberately narrow. Paths are relative to the
//! project root the implementation was constructed with.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Read-only project file system
///
/// Implementations:
/// - `LocalFs` - rooted at a directory on disk
/// - `MemoryFs` - in-memory, for tests
///
/// A missing path is `Ok(false)`, never an error.
pub trait ProjectFs {
    /// Check if `path` exists and is a regular file
    fn is_file(&self, path: &Path) -> FsResult<bool>;

    /// Check if `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> FsResult<bool>;

    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> FsResult<String>;
}

impl<T: ProjectFs + ?Sized> ProjectFs for &T {
    fn is_file(&self, path: &Path) -> FsResult<bool> {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> FsResult<bool> {
        (**self).is_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        (**self).read_to_string(path)
    }
}

/// In-memory file system for testing
///
/// Probes for paths registered with `with_error` fail with that error kind,
/// which lets tests exercise permission problems without touching disk.
/// Files added with `with_unreadable` exist but fail when read.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    files: std::collections::HashMap<PathBuf, String>,
    dirs: std::collections::HashSet<PathBuf>,
    errors: std::collections::HashMap<PathBuf, std::io::ErrorKind>,
    read_errors: std::collections::HashMap<PathBuf, std::io::ErrorKind>,
}

#[cfg(test)]
impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub fn with_error(mut self, path: impl Into<PathBuf>, kind: std::io::ErrorKind) -> Self {
        self.errors.insert(path.into(), kind);
        self
    }

    pub fn with_unreadable(mut self, path: impl Into<PathBuf>, kind: std::io::ErrorKind) -> Self {
        let path = path.into();
        self.files.insert(path.clone(), String::new());
        self.read_errors.insert(path, kind);
        self
    }

    fn check(&self, path: &Path) -> FsResult<()> {
        match self.errors.get(path) {
            Some(kind) => Err(FsError::from_io(path, std::io::Error::from(*kind))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
impl ProjectFs for MemoryFs {
    fn is_file(&self, path: &Path) -> FsResult<bool> {
        self.check(path)?;
        Ok(self.files.contains_key(path))
    }

    fn is_dir(&self, path: &Path) -> FsResult<bool> {
        self.check(path)?;
        Ok(self.dirs.contains(path))
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        self.check(path)?;
        if let Some(kind) = self.read_errors.get(path) {
            return Err(FsError::from_io(path, std::io::Error::from(*kind)));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}
