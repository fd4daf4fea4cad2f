//! Local File System Implementation
//!
//! Implements the ProjectFs port for a directory on disk.

use crate::domain::ports::file_system::{FsError, FsResult, ProjectFs};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Local file system rooted at the project directory
///
/// Relative paths are resolved against `root`; symlinks are followed.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Create a new LocalFs rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn metadata(&self, path: &Path) -> FsResult<Option<std::fs::Metadata>> {
        let full = self.root.join(path);
        match std::fs::metadata(&full) {
            Ok(meta) => Ok(Some(meta)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FsError::from_io(&full, e)),
        }
    }
}

impl ProjectFs for LocalFs {
    fn is_file(&self, path: &Path) -> FsResult<bool> {
        Ok(self.metadata(path)?.is_some_and(|m| m.is_file()))
    }

    fn is_dir(&self, path: &Path) -> FsResult<bool> {
        Ok(self.metadata(path)?.is_some_and(|m| m.is_dir()))
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|e| FsError::from_io(&full, e))
    }
}
