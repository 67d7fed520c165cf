//! Harmonogram virtual file system
//!
//! Source files reach the parser through [`VirtualFileSystem`], so runs can
//! be fed from disk ([`NativeFileSystem`]) or from memory
//! ([`MemoryFileSystem`], used throughout the test suites).
//!
//! ```
//! use harmonogram_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::with_files([("a.hg", "name: A")]);
//! assert_eq!(fs.read_to_string(Path::new("a.hg")).unwrap(), "name: A");
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::VirtualFileSystem;

pub fn memory_fs() -> MemoryFileSystem {
    MemoryFileSystem::new()
}

pub fn native_fs() -> NativeFileSystem {
    NativeFileSystem::new()
}
