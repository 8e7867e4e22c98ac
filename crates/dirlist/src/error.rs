//! Error type for directory listing.

use std::io;
use std::path::{Path, PathBuf};

/// Why a directory couldn't be listed.
///
/// Every variant keeps the path and the OS error so callers can report the host code,
/// but the only distinction callers should rely on is success vs failure.
#[derive(Debug)]
pub enum ListingError {
    /// Path doesn't exist
    NotFound { path: PathBuf, source: io::Error },
    /// Can't open or read the directory
    PermissionDenied { path: PathBuf, source: io::Error },
    /// Path exists but isn't a directory
    NotADirectory { path: PathBuf, source: io::Error },
    /// Any other enumeration failure
    Io { path: PathBuf, source: io::Error },
}

impl ListingError {
    /// Classifies an I/O error raised while opening or reading `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// The directory that failed to list.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::NotADirectory { path, .. }
            | Self::Io { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::NotFound { source, .. }
            | Self::PermissionDenied { source, .. }
            | Self::NotADirectory { source, .. }
            | Self::Io { source, .. } => source,
        }
    }

    /// Host error code (errno on POSIX), if the OS supplied one.
    pub fn raw_os_error(&self) -> Option<i32> {
        self.io_error().raw_os_error()
    }
}

impl std::fmt::Display for ListingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path, .. } => write!(f, "Directory not found: {}", path.display()),
            Self::PermissionDenied { path, .. } => write!(f, "Permission denied: {}", path.display()),
            Self::NotADirectory { path, .. } => write!(f, "Not a directory: {}", path.display()),
            Self::Io { path, source } => write!(f, "Couldn't list {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}
