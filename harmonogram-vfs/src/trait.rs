//! VirtualFileSystem trait

use crate::error::{VfsError, VfsResult};
use std::path::Path;

/// Read-mostly file access used by the parser
///
/// Implementations must be shareable across threads; a single instance may
/// serve several parse runs.
pub trait VirtualFileSystem: Send + Sync {
    /// Raw file contents
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>>;

    /// Create or truncate `path` with `content`
    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// File contents decoded as UTF-8
    fn read_to_string(&self, path: &Path) -> VfsResult<String> {
        let bytes = self.read_file(path)?;
        String::from_utf8(bytes).map_err(|_| VfsError::InvalidUtf8 {
            path: path.display().to_string(),
        })
    }
}
