//! In-memory file system

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Files kept in a shared map keyed by normalized path. Clones share
/// storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated file system
    pub fn with_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<Path>,
        C: AsRef<[u8]>,
    {
        let fs = Self::new();
        {
            let mut map = fs.write_lock();
            for (path, content) in files {
                map.insert(normalize(path.as_ref()), content.as_ref().to_vec());
            }
        }
        fs
    }

    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, BTreeMap<String, Vec<u8>>> {
        self.files.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Vec<u8>>> {
        self.files.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// forward slashes regardless of host
fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let key = normalize(path);
        self.read_lock()
            .get(&key)
            .cloned()
            .ok_or(VfsError::NotFound { path: key })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        self.write_lock().insert(normalize(path), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read_lock().contains_key(&normalize(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.exists(path)
    }

    // flat namespace: a directory is any prefix of a stored path
    fn is_dir(&self, path: &Path) -> bool {
        let mut prefix = normalize(path);
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        self.read_lock().keys().any(|key| key.starts_with(&prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_fs_is_empty() {
        let fs = MemoryFileSystem::new();
        assert!(fs.is_empty());
        assert!(!fs.exists(Path::new("anything.hg")));
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let fs = MemoryFileSystem::new();
        let err = fs.read_file(Path::new("missing.hg")).unwrap_err();
        assert_eq!(
            err,
            VfsError::NotFound {
                path: "missing.hg".to_string()
            }
        );
    }

    #[test]
    fn test_read_to_string_rejects_invalid_utf8() {
        let fs = MemoryFileSystem::with_files([("bad.hg", vec![0xff, 0xfe, 0x00])]);
        let err = fs.read_to_string(Path::new("bad.hg")).unwrap_err();
        assert!(matches!(err, VfsError::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_backslashes_normalized() {
        let fs = MemoryFileSystem::with_files([("dir/a.hg", "x")]);
        assert!(fs.exists(Path::new("dir\\a.hg")));
    }

    #[test]
    fn test_is_dir_from_prefix() {
        let fs = MemoryFileSystem::with_files([("shapes/a.hg", "x")]);
        assert!(fs.is_dir(Path::new("shapes")));
        assert!(!fs.is_dir(Path::new("shapes/a.hg")));
        assert!(!fs.is_dir(Path::new("sha")));
    }

    #[test]
    fn test_clone_shares_data() {
        let fs1 = MemoryFileSystem::new();
        let path = Path::new("shared.hg");
        fs1.write_file(path, b"first").unwrap();

        let fs2 = fs1.clone();
        fs2.write_file(path, b"second").unwrap();
        assert_eq!(fs1.read_file(path).unwrap(), b"second");
        assert_eq!(fs1.len(), 1);
    }

    #[test]
    fn test_concurrent_reads() {
        let fs = MemoryFileSystem::with_files([("a.hg", "name: A")]);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let fs = fs.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        assert_eq!(fs.read_to_string(Path::new("a.hg")).unwrap(), "name: A");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
