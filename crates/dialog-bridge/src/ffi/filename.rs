//! C entry points for sorted directory listings.
//!
//! The listing crosses to C as an opaque handle. `cfl_filename_free_list` takes a
//! pointer to the caller's handle variable and nulls it, so freeing the same
//! variable twice is a no-op.

use std::ffi::{CString, c_char, c_int};

use dirlist::{DirectoryListing, SortPolicy, list_directory};

use super::opt_path;

pub struct CflListing {
    listing: DirectoryListing,
    names: Vec<CString>,
}

impl CflListing {
    fn new(listing: DirectoryListing) -> Self {
        let names = listing
            .iter()
            .map(|entry| CString::new(entry.name().as_encoded_bytes()).unwrap_or_default())
            .collect();
        Self { listing, names }
    }
}

/// Lists directory `d` sorted by `sort` (0 alpha, 1 case-insensitive alpha, 2 natural,
/// 3 case-insensitive natural) and stores the handle in `*list`.
///
/// Returns the entry count, or a negated host error code on failure (`-EINVAL` for
/// bad arguments, `-EIO` when the OS didn't give one). `*list` is null on failure.
///
/// # Safety
/// `d` must be null or NUL-terminated; `list` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_filename_list(d: *const c_char, list: *mut *mut CflListing, sort: c_int) -> c_int {
    if list.is_null() {
        return -libc::EINVAL;
    }
    // SAFETY: checked non-null; writable per the caller's contract
    unsafe { *list = std::ptr::null_mut() };

    // SAFETY: forwarded caller contract
    let Some(directory) = (unsafe { opt_path(d) }) else {
        return -libc::EINVAL;
    };
    let Some(policy) = SortPolicy::from_raw(sort) else {
        return -libc::EINVAL;
    };

    match list_directory(&directory, policy) {
        Ok(listing) => {
            let Ok(count) = c_int::try_from(listing.len()) else {
                return -libc::ERANGE;
            };
            // SAFETY: as above
            unsafe { *list = Box::into_raw(Box::new(CflListing::new(listing))) };
            count
        }
        Err(e) => {
            log::debug!("cfl_filename_list: {}", e);
            -e.raw_os_error().unwrap_or(libc::EIO)
        }
    }
}

/// Number of entries, or 0 for a null handle.
///
/// # Safety
/// `list` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_filename_list_count(list: *const CflListing) -> c_int {
    // SAFETY: forwarded caller contract
    unsafe { list.as_ref() }.map_or(0, |this| c_int::try_from(this.listing.len()).unwrap_or(c_int::MAX))
}

/// Entry name at `index`, or null when out of range.
///
/// # Safety
/// `list` must be null or a live handle. The pointer lives as long as the handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_filename_list_get(list: *const CflListing, index: c_int) -> *const c_char {
    // SAFETY: forwarded caller contract
    let Some(this) = (unsafe { list.as_ref() }) else {
        return std::ptr::null();
    };
    usize::try_from(index)
        .ok()
        .and_then(|i| this.names.get(i))
        .map_or(std::ptr::null(), |name| name.as_ptr())
}

/// Frees the listing in `*list` and sets `*list` to null.
///
/// # Safety
/// `list` must be null or point to null or a handle from [`cfl_filename_list`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_filename_free_list(list: *mut *mut CflListing) {
    if list.is_null() {
        return;
    }
    // SAFETY: checked non-null
    let handle = unsafe { std::mem::replace(&mut *list, std::ptr::null_mut()) };
    if handle.is_null() {
        return;
    }
    // SAFETY: the handle came from Box::into_raw in cfl_filename_list and was just
    // detached from the caller's variable
    let owned = unsafe { Box::from_raw(handle) };
    owned.listing.release();
}
