//! C entry points for the help viewer.

use std::ffi::{CString, c_char, c_int};

use super::{as_ptr, current_handle, opt_path, opt_str, to_cstring};
use crate::error::BridgeError;
use crate::help::HelpDialog;

pub struct CflHelp {
    dialog: HelpDialog,
    value: Option<CString>,
}

/// # Safety
/// `ptr` must be null or a live handle from [`cfl_help_new`].
unsafe fn help_mut<'a>(ptr: *mut CflHelp) -> Option<&'a mut CflHelp> {
    // SAFETY: forwarded caller contract
    unsafe { ptr.as_mut() }
}

/// Runs `f` on the dialog, logging and swallowing failures into `fallback`.
///
/// # Safety
/// `ptr` must be null or a live handle from [`cfl_help_new`].
unsafe fn with_help<R>(
    name: &str,
    ptr: *mut CflHelp,
    fallback: R,
    f: impl FnOnce(&mut CflHelp) -> Result<R, BridgeError>,
) -> R {
    // SAFETY: forwarded caller contract
    let Some(this) = (unsafe { help_mut(ptr) }) else {
        return fallback;
    };
    f(this).unwrap_or_else(|e| {
        log::warn!("{}: {}", name, e);
        fallback
    })
}

/// Creates a hidden help window. Returns null if no toolkit is installed.
#[unsafe(no_mangle)]
pub extern "C" fn cfl_help_new() -> *mut CflHelp {
    let Some(handle) = current_handle() else {
        return std::ptr::null_mut();
    };
    match HelpDialog::new(handle) {
        Ok(dialog) => Box::into_raw(Box::new(CflHelp { dialog, value: None })),
        Err(e) => {
            log::warn!("cfl_help_new: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// # Safety
/// `ptr` must be null or a handle from [`cfl_help_new`] not yet deleted.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_delete(ptr: *mut CflHelp) {
    if !ptr.is_null() {
        // SAFETY: ownership returns from C exactly once per the caller's contract
        drop(unsafe { Box::from_raw(ptr) });
    }
}

/// Loads HTML from `path`. Returns 0 on success, -1 on failure.
///
/// # Safety
/// `ptr` must be null or a live help handle; `path` null or NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_load(ptr: *mut CflHelp, path: *const c_char) -> c_int {
    // SAFETY: forwarded caller contract
    let Some(path) = (unsafe { opt_path(path) }) else {
        return -1;
    };
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_load", ptr, -1, |this| this.dialog.load(&path).map(|()| 0)) }
}

/// # Safety
/// `ptr` must be null or a live help handle; `html` null or NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_set_value(ptr: *mut CflHelp, html: *const c_char) {
    // SAFETY: forwarded caller contract
    let html = unsafe { opt_str(html) };
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_set_value", ptr, (), |this| this.dialog.set_value(html.as_deref())) }
}

/// Current HTML content, or null.
///
/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_value(ptr: *mut CflHelp) -> *const c_char {
    // SAFETY: forwarded caller contract
    unsafe {
        with_help("cfl_help_value", ptr, std::ptr::null(), |this| {
            this.value = this.dialog.value()?.as_deref().and_then(to_cstring);
            Ok(as_ptr(&this.value))
        })
    }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_show(ptr: *mut CflHelp) {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_show", ptr, (), |this| this.dialog.show()) }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_hide(ptr: *mut CflHelp) {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_hide", ptr, (), |this| this.dialog.hide()) }
}

/// 1 if shown, 0 otherwise.
///
/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_visible(ptr: *mut CflHelp) -> c_int {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_visible", ptr, 0, |this| this.dialog.visible().map(c_int::from)) }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_position(ptr: *mut CflHelp, x: c_int, y: c_int) {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_position", ptr, (), |this| this.dialog.position(x, y)) }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_resize(ptr: *mut CflHelp, x: c_int, y: c_int, w: c_int, h: c_int) {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_resize", ptr, (), |this| this.dialog.resize(x, y, w, h)) }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_x(ptr: *mut CflHelp) -> c_int {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_x", ptr, 0, |this| this.dialog.x()) }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_y(ptr: *mut CflHelp) -> c_int {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_y", ptr, 0, |this| this.dialog.y()) }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_w(ptr: *mut CflHelp) -> c_int {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_w", ptr, 0, |this| this.dialog.w()) }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_h(ptr: *mut CflHelp) -> c_int {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_h", ptr, 0, |this| this.dialog.h()) }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_set_text_size(ptr: *mut CflHelp, size: c_int) {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_set_text_size", ptr, (), |this| this.dialog.set_text_size(size)) }
}

/// # Safety
/// `ptr` must be null or a live help handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_help_text_size(ptr: *mut CflHelp) -> c_int {
    // SAFETY: forwarded caller contract
    unsafe { with_help("cfl_help_text_size", ptr, 0, |this| this.dialog.text_size()) }
}
