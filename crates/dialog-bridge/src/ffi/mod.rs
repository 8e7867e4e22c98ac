//! Flat C surface over the bridge.
//!
//! Conventions:
//! - Handles are opaque pointers created by `*_new` and freed by `*_delete`.
//! - An absent string is a null pointer, never "".
//! - Returned strings stay valid until the next call on the same handle (for
//!   `cfl_input`/`cfl_password`, until the next such call on the same thread).
//! - Constructors return null when no toolkit is installed.

use std::ffi::{CStr, CString, c_char, c_int};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::actor::{ToolkitActor, ToolkitHandle};
use crate::config::{BridgeConfig, load_config};
use crate::console::ConsoleToolkit;
use crate::error::BridgeError;
use crate::ignore_poison::IgnorePoison;
use crate::toolkit::Toolkit;

pub mod chooser;
pub mod dialog;
pub mod filename;
pub mod help;

/// The process-wide toolkit actor used by the C surface.
static BRIDGE: Mutex<Option<ToolkitActor>> = Mutex::new(None);

/// Installs `toolkit` as the one the C surface talks to. Any previous toolkit is shut
/// down; handles created against it report failures from then on.
pub fn install_toolkit(toolkit: Box<dyn Toolkit>, config: BridgeConfig) -> Result<(), BridgeError> {
    let actor = ToolkitActor::spawn(toolkit, config)?;
    let previous = BRIDGE.lock_ignore_poison().replace(actor);
    // Joined outside the lock
    drop(previous);
    Ok(())
}

/// Shuts down the installed toolkit, if any.
pub fn uninstall_toolkit() {
    let previous = BRIDGE.lock_ignore_poison().take();
    drop(previous);
}

pub(crate) fn current_handle() -> Option<ToolkitHandle> {
    BRIDGE.lock_ignore_poison().as_ref().map(ToolkitActor::handle)
}

/// Installs the console toolkit with the user's config and sets up logging.
/// Returns 0 on success, -1 if the toolkit thread couldn't start.
#[unsafe(no_mangle)]
pub extern "C" fn cfl_bridge_init_console() -> c_int {
    crate::init_logging();
    let config = load_config(None);
    let toolkit = ConsoleToolkit::stdio(&config);
    match install_toolkit(Box::new(toolkit), config) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("cfl_bridge_init_console: {}", e);
            -1
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn cfl_bridge_shutdown() {
    uninstall_toolkit();
}

// ============================================================================
// String marshaling
// ============================================================================

/// Reads a C string. Null gives `None`; invalid UTF-8 is replaced.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn opt_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract
    let s = unsafe { CStr::from_ptr(ptr) };
    Some(s.to_string_lossy().into_owned())
}

/// Reads a C string as a path, byte-exact on Unix.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn opt_path(ptr: *const c_char) -> Option<PathBuf> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract
    let s = unsafe { CStr::from_ptr(ptr) };
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Some(PathBuf::from(std::ffi::OsStr::from_bytes(s.to_bytes())))
    }
    #[cfg(not(unix))]
    {
        Some(PathBuf::from(s.to_string_lossy().into_owned()))
    }
}

/// Converts for return to C. Strings with interior NULs can't cross and come back as
/// absent.
pub(crate) fn to_cstring(s: &str) -> Option<CString> {
    CString::new(s).ok()
}

pub(crate) fn path_to_cstring(path: &Path) -> Option<CString> {
    CString::new(path.as_os_str().as_encoded_bytes()).ok()
}

pub(crate) fn as_ptr(s: &Option<CString>) -> *const c_char {
    s.as_ref().map_or(std::ptr::null(), |s| s.as_ptr())
}
