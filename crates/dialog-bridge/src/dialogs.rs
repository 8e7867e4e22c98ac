//! Modal message dialogs and the beep primitive.
//!
//! Each function blocks until the toolkit thread has run the dialog. Dismissing a
//! dialog gives `Ok(None)`, never an empty string.

use crate::actor::ToolkitHandle;
use crate::error::BridgeError;
use crate::toolkit::{BeepKind, ChoiceButtons, MessagePosition};

/// Shows an informational message.
pub fn message(handle: &ToolkitHandle, at: Option<MessagePosition>, text: &str) -> Result<(), BridgeError> {
    let text = text.to_string();
    handle.call(move |state| state.toolkit().message(at, &text))
}

/// Shows a warning.
pub fn alert(handle: &ToolkitHandle, at: Option<MessagePosition>, text: &str) -> Result<(), BridgeError> {
    let text = text.to_string();
    handle.call(move |state| state.toolkit().alert(at, &text))
}

/// Asks a question with two or three buttons. Returns the chosen button's index.
pub fn choice(
    handle: &ToolkitHandle,
    at: Option<MessagePosition>,
    text: &str,
    buttons: ChoiceButtons,
) -> Result<Option<usize>, BridgeError> {
    let text = text.to_string();
    handle.call(move |state| {
        let picked = state.toolkit().choice(at, &text, &buttons);
        // Anything past the last button counts as dismissed
        picked.filter(|&index| index < buttons.len())
    })
}

/// Asks for a line of text, pre-filled with `default`.
pub fn input(
    handle: &ToolkitHandle,
    at: Option<MessagePosition>,
    prompt: &str,
    default: Option<&str>,
) -> Result<Option<String>, BridgeError> {
    let prompt = prompt.to_string();
    let default = default.map(str::to_string);
    handle.call(move |state| state.toolkit().input(at, &prompt, default.as_deref()))
}

/// Asks for a secret, pre-filled with `default`.
pub fn password(
    handle: &ToolkitHandle,
    at: Option<MessagePosition>,
    prompt: &str,
    default: Option<&str>,
) -> Result<Option<String>, BridgeError> {
    let prompt = prompt.to_string();
    let default = default.map(str::to_string);
    handle.call(move |state| state.toolkit().password(at, &prompt, default.as_deref()))
}

/// Plays a system sound. Doesn't wait for the toolkit.
pub fn beep(handle: &ToolkitHandle, kind: BeepKind) -> Result<(), BridgeError> {
    handle.post(move |state| state.toolkit().beep(kind))
}
