//! Source file loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Why a source file could not be loaded.
///
/// Every variant is recoverable: the caller reports it and moves on to the
/// next file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data at byte {valid_up_to}", .path.display())]
    InvalidUtf8 { path: PathBuf, valid_up_to: usize },
    #[error("'{}' is too large to tokenize ({len} bytes)", .path.display())]
    TooLarge { path: PathBuf, len: usize },
    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::PermissionDenied { path }
            | LoadError::InvalidUtf8 { path, .. }
            | LoadError::TooLarge { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }
}

/// Read a whole file into memory as UTF-8 text.
///
/// Token spans are `u32` byte offsets, so files longer than `u32::MAX`
/// bytes are refused.
pub fn load_source(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::Io { path, source },
        }
    })?;

    if u32::try_from(bytes.len()).is_err() {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            len: bytes.len(),
        });
    }

    let source = String::from_utf8(bytes).map_err(|e| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;
    debug!(path = %path.display(), len = source.len(), "source loaded");
    Ok(source)
}
