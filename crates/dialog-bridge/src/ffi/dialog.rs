//! C entry points for message dialogs and beep.

use std::cell::RefCell;
use std::ffi::{CString, c_char, c_int};

use super::{as_ptr, current_handle, opt_str, to_cstring};
use crate::dialogs;
use crate::toolkit::{BeepKind, ChoiceButtons, MessagePosition};

thread_local! {
    /// Backing storage for the pointer returned by cfl_input/cfl_password.
    static LAST_TEXT: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn remember(text: Option<String>) -> *const c_char {
    LAST_TEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        *slot = text.as_deref().and_then(to_cstring);
        as_ptr(&slot)
    })
}

/// # Safety
/// `txt` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_message(x: c_int, y: c_int, txt: *const c_char) {
    let Some(handle) = current_handle() else { return };
    // SAFETY: forwarded caller contract
    let text = unsafe { opt_str(txt) }.unwrap_or_default();
    if let Err(e) = dialogs::message(&handle, MessagePosition::from_raw(x, y), &text) {
        log::warn!("cfl_message: {}", e);
    }
}

/// # Safety
/// `txt` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_alert(x: c_int, y: c_int, txt: *const c_char) {
    let Some(handle) = current_handle() else { return };
    // SAFETY: forwarded caller contract
    let text = unsafe { opt_str(txt) }.unwrap_or_default();
    if let Err(e) = dialogs::alert(&handle, MessagePosition::from_raw(x, y), &text) {
        log::warn!("cfl_alert: {}", e);
    }
}

/// Returns the chosen button index, or -1 if the dialog was dismissed. A null or
/// empty `b2` hides the third button.
///
/// # Safety
/// Every pointer must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_choice(
    x: c_int,
    y: c_int,
    txt: *const c_char,
    b0: *const c_char,
    b1: *const c_char,
    b2: *const c_char,
) -> c_int {
    let Some(handle) = current_handle() else { return -1 };
    // SAFETY: forwarded caller contract
    let (text, b0, b1, b2) = unsafe { (opt_str(txt), opt_str(b0), opt_str(b1), opt_str(b2)) };
    let buttons = ChoiceButtons::new(
        b0.as_deref().unwrap_or_default(),
        b1.as_deref().unwrap_or_default(),
        b2.as_deref(),
    );
    match dialogs::choice(
        &handle,
        MessagePosition::from_raw(x, y),
        text.as_deref().unwrap_or_default(),
        buttons,
    ) {
        Ok(Some(index)) => c_int::try_from(index).unwrap_or(-1),
        Ok(None) => -1,
        Err(e) => {
            log::warn!("cfl_choice: {}", e);
            -1
        }
    }
}

/// Returns the entered text, or null if cancelled.
///
/// # Safety
/// `txt` and `deflt` must be null or NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_input(x: c_int, y: c_int, txt: *const c_char, deflt: *const c_char) -> *const c_char {
    let Some(handle) = current_handle() else { return remember(None) };
    // SAFETY: forwarded caller contract
    let (prompt, default) = unsafe { (opt_str(txt), opt_str(deflt)) };
    let answer = dialogs::input(
        &handle,
        MessagePosition::from_raw(x, y),
        prompt.as_deref().unwrap_or_default(),
        default.as_deref(),
    );
    remember(answer.unwrap_or_else(|e| {
        log::warn!("cfl_input: {}", e);
        None
    }))
}

/// Like [`cfl_input`] with the input hidden.
///
/// # Safety
/// `txt` and `deflt` must be null or NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cfl_password(
    x: c_int,
    y: c_int,
    txt: *const c_char,
    deflt: *const c_char,
) -> *const c_char {
    let Some(handle) = current_handle() else { return remember(None) };
    // SAFETY: forwarded caller contract
    let (prompt, default) = unsafe { (opt_str(txt), opt_str(deflt)) };
    let answer = dialogs::password(
        &handle,
        MessagePosition::from_raw(x, y),
        prompt.as_deref().unwrap_or_default(),
        default.as_deref(),
    );
    remember(answer.unwrap_or_else(|e| {
        log::warn!("cfl_password: {}", e);
        None
    }))
}

#[unsafe(no_mangle)]
pub extern "C" fn cfl_beep(kind: c_int) {
    if let Some(handle) = current_handle() {
        let _ = dialogs::beep(&handle, BeepKind::from_raw(kind));
    }
}
