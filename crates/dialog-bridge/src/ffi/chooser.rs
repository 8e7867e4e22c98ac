//! C entry points for the native file chooser.

use std::ffi::{CString, c_char, c_int};

use super::{as_ptr, current_handle, opt_path, opt_str, path_to_cstring, to_cstring};
use crate::chooser::{ChooserStatus, NativeFileChooser};
use crate::toolkit::{ChooserOptions, ChooserType};

/// Opaque chooser handle plus C copies of everything it hands out.
pub struct CflChooser {
    chooser: NativeFileChooser,
    names: Vec<CString>,
    directory: Option<CString>,
    errmsg: Option<CString>,
}

impl CflChooser {
    fn refresh_names(&mut self) {
        self.names = self
            .chooser
            .filenames()
            .iter()
            .filter_map(|p| path_to_cstring(p))
            .collect();
        self.errmsg = self.chooser.error_message().and_then(to_cstring);
    }
}

/// # Safety
/// `ptr` must be null or a live handle from [`cfl_chooser_new`].
unsafe fn chooser_mut<'a>(ptr: *mut CflChooser) -> Option<&'a mut CflChooser> {
    // SAFETY: forwarded caller contract
    unsafe { ptr.as_mut() }
}

/// Creates a chooser of the given type (0..=5; unknown values browse for a file).
/// Returns null if no toolkit is installed.
#[unsafe(no_mangle)]
pub extern "C" fn cfl_chooser_new(kind: c_int) -> *mut CflChooser {
    let Some(handle) = current_handle() else {
        return std::ptr::null_mut();
    };
    let kind = ChooserType::from_raw(kind).unwrap_or_default();
    Box::into_raw(Box::new(CflChooser {
        chooser: NativeFileChooser::new(handle, kind),
        names: Vec::new(),
        directory: None,
        errmsg: None,
    }))
}

/// # Safety
/// `ptr` must be null or a handle from [`cfl_chooser_new`] not yet deleted.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_delete(ptr: *mut CflChooser) {
    if !ptr.is_null() {
        // SAFETY: ownership returns from C exactly once per the caller's contract
        drop(unsafe { Box::from_raw(ptr) });
    }
}

/// First picked path, or null.
///
/// # Safety
/// `ptr` must be null or a live chooser handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_filename(ptr: *mut CflChooser) -> *const c_char {
    // SAFETY: forwarded caller contract
    unsafe { cfl_chooser_filenames(ptr, 0) }
}

/// Picked path at `index`, or null when out of range.
///
/// # Safety
/// `ptr` must be null or a live chooser handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_filenames(ptr: *mut CflChooser, index: c_int) -> *const c_char {
    // SAFETY: forwarded caller contract
    let Some(this) = (unsafe { chooser_mut(ptr) }) else {
        return std::ptr::null();
    };
    usize::try_from(index)
        .ok()
        .and_then(|i| this.names.get(i))
        .map_or(std::ptr::null(), |name| name.as_ptr())
}

/// # Safety
/// `ptr` must be null or a live chooser handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_count(ptr: *mut CflChooser) -> c_int {
    // SAFETY: forwarded caller contract
    unsafe { chooser_mut(ptr) }.map_or(0, |this| c_int::try_from(this.names.len()).unwrap_or(c_int::MAX))
}

/// # Safety
/// `ptr` must be null or a live chooser handle; `dir` null or NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_set_directory(ptr: *mut CflChooser, dir: *const c_char) {
    // SAFETY: forwarded caller contract
    let Some(this) = (unsafe { chooser_mut(ptr) }) else { return };
    // SAFETY: forwarded caller contract
    let dir = unsafe { opt_path(dir) };
    this.chooser.set_directory(dir.as_deref());
}

/// # Safety
/// `ptr` must be null or a live chooser handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_directory(ptr: *mut CflChooser) -> *const c_char {
    // SAFETY: forwarded caller contract
    let Some(this) = (unsafe { chooser_mut(ptr) }) else {
        return std::ptr::null();
    };
    this.directory = this.chooser.directory().and_then(path_to_cstring);
    as_ptr(&this.directory)
}

/// Runs the chooser: 0 when something was picked, 1 when cancelled, -1 on error
/// (see [`cfl_chooser_errmsg`]).
///
/// # Safety
/// `ptr` must be null or a live chooser handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_show(ptr: *mut CflChooser) -> c_int {
    // SAFETY: forwarded caller contract
    let Some(this) = (unsafe { chooser_mut(ptr) }) else {
        return ChooserStatus::Failed.as_raw();
    };
    match this.chooser.show() {
        Ok(status) => {
            this.refresh_names();
            status.as_raw()
        }
        Err(e) => {
            this.names.clear();
            this.errmsg = to_cstring(&e.to_string());
            ChooserStatus::Failed.as_raw()
        }
    }
}

/// Sets option bits; unknown bits are ignored.
///
/// # Safety
/// `ptr` must be null or a live chooser handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_set_option(ptr: *mut CflChooser, opt: c_int) {
    // SAFETY: forwarded caller contract
    if let Some(this) = unsafe { chooser_mut(ptr) } {
        this.chooser.set_options(ChooserOptions::from_bits_truncate(opt as u32));
    }
}

/// # Safety
/// `ptr` must be null or a live chooser handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_set_type(ptr: *mut CflChooser, kind: c_int) {
    // SAFETY: forwarded caller contract
    if let Some(this) = unsafe { chooser_mut(ptr) } {
        this.chooser.set_type(ChooserType::from_raw(kind).unwrap_or_default());
    }
}

/// # Safety
/// `ptr` must be null or a live chooser handle; `title` null or NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_set_title(ptr: *mut CflChooser, title: *const c_char) {
    // SAFETY: forwarded caller contract
    if let Some(this) = unsafe { chooser_mut(ptr) } {
        // SAFETY: forwarded caller contract
        let title = unsafe { opt_str(title) };
        this.chooser.set_title(title.as_deref());
    }
}

/// # Safety
/// `ptr` must be null or a live chooser handle; `filter` null or NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_set_filter(ptr: *mut CflChooser, filter: *const c_char) {
    // SAFETY: forwarded caller contract
    if let Some(this) = unsafe { chooser_mut(ptr) } {
        // SAFETY: forwarded caller contract
        let filter = unsafe { opt_str(filter) };
        this.chooser.set_filter(filter.as_deref());
    }
}

/// # Safety
/// `ptr` must be null or a live chooser handle; `name` null or NUL-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_set_preset_file(ptr: *mut CflChooser, name: *const c_char) {
    // SAFETY: forwarded caller contract
    if let Some(this) = unsafe { chooser_mut(ptr) } {
        // SAFETY: forwarded caller contract
        let name = unsafe { opt_str(name) };
        this.chooser.set_preset_file(name.as_deref());
    }
}

/// Why the last show failed, or null.
///
/// # Safety
/// `ptr` must be null or a live chooser handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_chooser_errmsg(ptr: *mut CflChooser) -> *const c_char {
    // SAFETY: forwarded caller contract
    unsafe { chooser_mut(ptr) }.map_or(std::ptr::null(), |this| as_ptr(&this.errmsg))
}
