//! The toolkit seam: what the bridge needs from the GUI toolkit, and the value types
//! that cross it.
//!
//! A `Toolkit` is only ever touched from the actor thread, so implementations can keep
//! plain mutable state.

use std::path::{Path, PathBuf};

use bitflags::bitflags;

// ============================================================================
// Dialog types
// ============================================================================

/// Screen position for a message-style dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePosition {
    pub x: i32,
    pub y: i32,
}

impl MessagePosition {
    /// Maps C coordinates to a position. Both negative means "toolkit default".
    pub fn from_raw(x: i32, y: i32) -> Option<Self> {
        if x < 0 && y < 0 { None } else { Some(Self { x, y }) }
    }
}

/// Kind of system sound for [`Toolkit::beep`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BeepKind {
    #[default]
    Default,
    Message,
    Error,
    Question,
    Password,
    Notification,
}

impl BeepKind {
    /// Unknown values fall back to the default sound.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Message,
            2 => Self::Error,
            3 => Self::Question,
            4 => Self::Password,
            5 => Self::Notification,
            _ => Self::Default,
        }
    }
}

/// Button labels for a choice dialog, in index order.
///
/// Always has the first two buttons. The third is dropped when its label is empty,
/// which hides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceButtons {
    labels: Vec<String>,
}

impl ChoiceButtons {
    pub fn new(first: &str, second: &str, third: Option<&str>) -> Self {
        let mut labels = vec![first.to_string(), second.to_string()];
        if let Some(third) = third.filter(|s| !s.is_empty()) {
            labels.push(third.to_string());
        }
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ============================================================================
// File chooser types
// ============================================================================

/// What the native file chooser browses for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChooserType {
    #[default]
    BrowseFile,
    BrowseDirectory,
    BrowseMultiFile,
    BrowseMultiDirectory,
    BrowseSaveFile,
    BrowseSaveDirectory,
}

impl ChooserType {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::BrowseFile),
            1 => Some(Self::BrowseDirectory),
            2 => Some(Self::BrowseMultiFile),
            3 => Some(Self::BrowseMultiDirectory),
            4 => Some(Self::BrowseSaveFile),
            5 => Some(Self::BrowseSaveDirectory),
            _ => None,
        }
    }

    pub fn is_multi(self) -> bool {
        matches!(self, Self::BrowseMultiFile | Self::BrowseMultiDirectory)
    }

    pub fn is_save(self) -> bool {
        matches!(self, Self::BrowseSaveFile | Self::BrowseSaveDirectory)
    }

    pub fn wants_directory(self) -> bool {
        matches!(
            self,
            Self::BrowseDirectory | Self::BrowseMultiDirectory | Self::BrowseSaveDirectory
        )
    }
}

bitflags! {
    /// Native file chooser options. Values match the toolkit's option bits.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ChooserOptions: u32 {
        /// Ask before overwriting an existing file in save mode.
        const SAVEAS_CONFIRM = 1;
        /// Offer a "new folder" button.
        const NEW_FOLDER = 2;
        /// Show a preview pane.
        const PREVIEW = 4;
        /// Append the selected filter's extension to the typed name.
        const USE_FILTER_EXT = 8;
    }
}

/// Everything the toolkit needs to run one chooser session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChooserRequest {
    pub kind: ChooserType,
    pub options: ChooserOptions,
    pub title: Option<String>,
    /// Tab/newline separated filter spec, like "Text\t*.txt\nSources\t*.{c,h}".
    pub filter: Option<String>,
    pub directory: Option<PathBuf>,
    pub preset_file: Option<String>,
}

/// How a chooser session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooserOutcome {
    Picked(Vec<PathBuf>),
    Cancelled,
    Failed(String),
}

// ============================================================================
// Help viewer types
// ============================================================================

/// Identifies a help window owned by the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HelpId(pub u64);

/// State of one help window. Lives on the actor thread; the toolkit renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpWindow {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub text_size: i32,
    /// HTML content currently shown.
    pub value: Option<String>,
    /// File the content was loaded from, if any.
    pub source: Option<PathBuf>,
    pub visible: bool,
}

// ============================================================================
// The trait
// ============================================================================

/// The GUI toolkit as seen by the bridge.
pub trait Toolkit: Send + 'static {
    /// Shows an informational message and waits for acknowledgement.
    fn message(&mut self, at: Option<MessagePosition>, text: &str);

    /// Like `message`, styled as a warning.
    fn alert(&mut self, at: Option<MessagePosition>, text: &str);

    /// Asks a question. Returns the index of the chosen button, or `None` if dismissed.
    fn choice(&mut self, at: Option<MessagePosition>, text: &str, buttons: &ChoiceButtons) -> Option<usize>;

    /// Asks for a line of text. `None` if cancelled.
    fn input(&mut self, at: Option<MessagePosition>, prompt: &str, default: Option<&str>) -> Option<String>;

    /// Asks for a line of text without echoing it. `None` if cancelled.
    fn password(&mut self, at: Option<MessagePosition>, prompt: &str, default: Option<&str>) -> Option<String>;

    fn beep(&mut self, kind: BeepKind);

    /// Runs a modal file chooser.
    fn run_file_chooser(&mut self, request: &ChooserRequest) -> ChooserOutcome;

    /// Shows (or refreshes) a help window.
    fn present_help(&mut self, id: HelpId, window: &HelpWindow);

    /// Takes a help window off screen.
    fn dismiss_help(&mut self, id: HelpId);

    /// Called after every job the actor runs, so an event loop can repaint.
    fn awake(&mut self) {}
}

/// Resolves a typed path against the chooser's starting directory.
pub(crate) fn resolve_against(directory: Option<&Path>, typed: &str) -> PathBuf {
    let typed = Path::new(typed);
    match directory {
        Some(dir) if typed.is_relative() => dir.join(typed),
        _ => typed.to_path_buf(),
    }
}
