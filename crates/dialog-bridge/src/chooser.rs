//! Native file chooser client.
//!
//! Configuration stays on the caller's side; only `show` crosses to the toolkit
//! thread.

use std::path::{Path, PathBuf};

use crate::actor::ToolkitHandle;
use crate::error::BridgeError;
use crate::toolkit::{ChooserOptions, ChooserOutcome, ChooserRequest, ChooserType};

/// Result of [`NativeFileChooser::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooserStatus {
    Picked,
    Cancelled,
    Failed,
}

impl ChooserStatus {
    /// The toolkit's integer convention: 0 picked, 1 cancelled, -1 error.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Picked => 0,
            Self::Cancelled => 1,
            Self::Failed => -1,
        }
    }
}

pub struct NativeFileChooser {
    handle: ToolkitHandle,
    request: ChooserRequest,
    selection: Vec<PathBuf>,
    error: Option<String>,
}

impl NativeFileChooser {
    pub fn new(handle: ToolkitHandle, kind: ChooserType) -> Self {
        Self {
            handle,
            request: ChooserRequest {
                kind,
                ..ChooserRequest::default()
            },
            selection: Vec::new(),
            error: None,
        }
    }

    pub fn set_type(&mut self, kind: ChooserType) {
        self.request.kind = kind;
    }

    pub fn set_options(&mut self, options: ChooserOptions) {
        self.request.options = options;
    }

    /// Sets the dialog title. An empty title means the toolkit's default.
    pub fn set_title(&mut self, title: Option<&str>) {
        self.request.title = non_empty(title);
    }

    pub fn title(&self) -> Option<&str> {
        self.request.title.as_deref()
    }

    pub fn set_filter(&mut self, filter: Option<&str>) {
        self.request.filter = non_empty(filter);
    }

    pub fn filter(&self) -> Option<&str> {
        self.request.filter.as_deref()
    }

    /// Starting directory.
    pub fn set_directory(&mut self, directory: Option<&Path>) {
        self.request.directory = directory
            .filter(|d| !d.as_os_str().is_empty())
            .map(Path::to_path_buf);
    }

    pub fn directory(&self) -> Option<&Path> {
        self.request.directory.as_deref()
    }

    /// File name pre-filled in save mode.
    pub fn set_preset_file(&mut self, name: Option<&str>) {
        self.request.preset_file = non_empty(name);
    }

    pub fn preset_file(&self) -> Option<&str> {
        self.request.preset_file.as_deref()
    }

    /// Runs the chooser. Replaces the previous selection and error.
    pub fn show(&mut self) -> Result<ChooserStatus, BridgeError> {
        let request = self.request.clone();
        let outcome = self
            .handle
            .call(move |state| state.toolkit().run_file_chooser(&request))?;

        self.selection.clear();
        self.error = None;
        let status = match outcome {
            ChooserOutcome::Picked(paths) if paths.is_empty() => ChooserStatus::Cancelled,
            ChooserOutcome::Picked(paths) => {
                self.selection = paths;
                ChooserStatus::Picked
            }
            ChooserOutcome::Cancelled => ChooserStatus::Cancelled,
            ChooserOutcome::Failed(message) => {
                log::debug!("NativeFileChooser::show failed: {}", message);
                self.error = Some(message);
                ChooserStatus::Failed
            }
        };
        Ok(status)
    }

    /// Number of paths picked by the last `show`.
    pub fn count(&self) -> usize {
        self.selection.len()
    }

    /// First picked path.
    pub fn filename(&self) -> Option<&Path> {
        self.filename_at(0)
    }

    pub fn filename_at(&self, index: usize) -> Option<&Path> {
        self.selection.get(index).map(PathBuf::as_path)
    }

    pub fn filenames(&self) -> &[PathBuf] {
        &self.selection
    }

    /// Why the last `show` failed, if it did.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}
