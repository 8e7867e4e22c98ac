//! Error type for bridge operations.

use std::io;
use std::path::PathBuf;

use dirlist::ListingError;

use crate::toolkit::HelpId;

/// Everything the bridge can fail with. A dismissed dialog is not an error; it shows
/// up as `None`.
#[derive(Debug)]
pub enum BridgeError {
    /// Reading a file for the toolkit failed (for example, loading help content).
    Io { path: PathBuf, source: io::Error },
    /// Directory listing failed.
    Listing(ListingError),
    /// The toolkit thread couldn't be started.
    ThreadSpawn(io::Error),
    /// The toolkit actor has shut down.
    Disconnected,
    /// The job panicked on the toolkit thread. The actor keeps running.
    JobPanicked,
    /// The help window behind a handle no longer exists.
    HelpWindowClosed(HelpId),
    /// A blocking call was made from the toolkit thread itself.
    Reentrant,
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            Self::Listing(e) => write!(f, "{}", e),
            Self::ThreadSpawn(e) => write!(f, "Couldn't start toolkit thread: {}", e),
            Self::Disconnected => write!(f, "Toolkit thread is not running"),
            Self::JobPanicked => write!(f, "Toolkit job panicked"),
            Self::HelpWindowClosed(id) => write!(f, "Help window #{} is closed", id.0),
            Self::Reentrant => write!(f, "Blocking toolkit call made from the toolkit thread"),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::ThreadSpawn(source) => Some(source),
            Self::Listing(e) => Some(e),
            Self::Disconnected | Self::JobPanicked | Self::HelpWindowClosed(_) | Self::Reentrant => None,
        }
    }
}

impl From<ListingError> for BridgeError {
    fn from(e: ListingError) -> Self {
        Self::Listing(e)
    }
}
