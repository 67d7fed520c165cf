//! VFS errors

use thiserror::Error;

pub type VfsResult<T> = Result<T, VfsError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VfsError {
    #[error("path not found: {path}")]
    NotFound { path: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: String },

    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
}

impl VfsError {
    /// Map an IO error on `path` to the closest variant
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => VfsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { path },
            _ => VfsError::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            VfsError::NotFound { path }
            | VfsError::PermissionDenied { path }
            | VfsError::InvalidUtf8 { path }
            | VfsError::Io { path, .. } => path,
        }
    }
}
