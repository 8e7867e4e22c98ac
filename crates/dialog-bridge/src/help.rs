//! Help viewer client. The window itself lives on the toolkit thread; this is a
//! handle to it that closes the window when dropped.

use std::fs;
use std::path::Path;

use crate::actor::{ToolkitHandle, ToolkitState};
use crate::error::BridgeError;
use crate::toolkit::{HelpId, HelpWindow};

pub struct HelpDialog {
    handle: ToolkitHandle,
    id: HelpId,
}

impl HelpDialog {
    /// Creates a hidden help window.
    pub fn new(handle: ToolkitHandle) -> Result<Self, BridgeError> {
        let id = handle.call(ToolkitState::create_help)?;
        log::trace!("HelpDialog::new: id={:?}", id);
        Ok(Self { handle, id })
    }

    pub fn id(&self) -> HelpId {
        self.id
    }

    /// Loads HTML from `path`. On failure the current content is kept.
    pub fn load(&self, path: &Path) -> Result<(), BridgeError> {
        let contents = fs::read_to_string(path).map_err(|source| BridgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = path.to_path_buf();
        self.update(move |window| {
            window.value = Some(contents);
            window.source = Some(source);
        })
    }

    /// Replaces the content with `html`. `None` clears it.
    pub fn set_value(&self, html: Option<&str>) -> Result<(), BridgeError> {
        let html = html.filter(|s| !s.is_empty()).map(str::to_string);
        self.update(move |window| {
            window.value = html;
            window.source = None;
        })
    }

    pub fn value(&self) -> Result<Option<String>, BridgeError> {
        self.read(|window| window.value.clone())
    }

    pub fn show(&self) -> Result<(), BridgeError> {
        let id = self.id;
        self.handle.call(move |state| state.show_help(id))
    }

    pub fn hide(&self) -> Result<(), BridgeError> {
        let id = self.id;
        self.handle.call(move |state| state.hide_help(id))
    }

    pub fn visible(&self) -> Result<bool, BridgeError> {
        self.read(|window| window.visible)
    }

    pub fn position(&self, x: i32, y: i32) -> Result<(), BridgeError> {
        self.update(move |window| {
            window.x = x;
            window.y = y;
        })
    }

    pub fn resize(&self, x: i32, y: i32, w: i32, h: i32) -> Result<(), BridgeError> {
        self.update(move |window| {
            window.x = x;
            window.y = y;
            window.w = w;
            window.h = h;
        })
    }

    pub fn x(&self) -> Result<i32, BridgeError> {
        self.read(|window| window.x)
    }

    pub fn y(&self) -> Result<i32, BridgeError> {
        self.read(|window| window.y)
    }

    pub fn w(&self) -> Result<i32, BridgeError> {
        self.read(|window| window.w)
    }

    pub fn h(&self) -> Result<i32, BridgeError> {
        self.read(|window| window.h)
    }

    pub fn set_text_size(&self, size: i32) -> Result<(), BridgeError> {
        self.update(move |window| window.text_size = size)
    }

    pub fn text_size(&self) -> Result<i32, BridgeError> {
        self.read(|window| window.text_size)
    }

    fn update<F>(&self, change: F) -> Result<(), BridgeError>
    where
        F: FnOnce(&mut HelpWindow) + Send + 'static,
    {
        let id = self.id;
        self.handle
            .call(move |state| state.update_help(id, change))?
            .ok_or(BridgeError::HelpWindowClosed(id))
    }

    fn read<R, F>(&self, get: F) -> Result<R, BridgeError>
    where
        R: Send + 'static,
        F: FnOnce(&HelpWindow) -> R + Send + 'static,
    {
        let id = self.id;
        self.handle
            .call(move |state| state.help(id).map(get))?
            .ok_or(BridgeError::HelpWindowClosed(id))
    }
}

impl Drop for HelpDialog {
    fn drop(&mut self) {
        let id = self.id;
        let _ = self.handle.post(move |state| state.destroy_help(id));
    }
}
