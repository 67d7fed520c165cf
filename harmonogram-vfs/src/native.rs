//! Native file system

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// `std::fs` backed file system. Relative paths resolve against the base
/// directory when one is set.
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem {
    base: Option<PathBuf>,
}

impl NativeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve<'a>(&self, path: &'a Path) -> Cow<'a, Path> {
        match &self.base {
            Some(base) if path.is_relative() => Cow::Owned(base.join(path)),
            _ => Cow::Borrowed(path),
        }
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        std::fs::read(self.resolve(path)).map_err(|e| VfsError::from_io(path, e))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        std::fs::write(self.resolve(path), content).map_err(|e| VfsError::from_io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.resolve(path).is_dir()
    }
}
