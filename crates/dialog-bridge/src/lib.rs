//! Bridge between foreign callers and a GUI toolkit's dialogs.
//!
//! The toolkit is owned by a single actor thread ([`ToolkitActor`]); everything else
//! talks to it through a [`ToolkitHandle`]. The flat C surface lives in [`ffi`].

// Deny unused code to catch dead code early
#![deny(unused)]
// Warn on unused dependencies to catch platform-specific cfg mismatches
#![warn(unused_crate_dependencies)]
// Warn on redundant path prefixes (e.g., std::path::Path when Path is imported)
#![warn(unused_qualifications)]
// Use log::* macros instead of println!/eprintln! for proper log level control
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod actor;
pub mod chooser;
pub mod config;
pub mod console;
pub mod dialogs;
mod error;
pub mod ffi;
pub mod help;
mod ignore_poison;
pub mod toolkit;

pub use actor::{ToolkitActor, ToolkitHandle, ToolkitState};
pub use chooser::{ChooserStatus, NativeFileChooser};
pub use config::{BridgeConfig, load_config};
pub use console::ConsoleToolkit;
pub use error::BridgeError;
pub use ffi::{install_toolkit, uninstall_toolkit};
pub use help::HelpDialog;
pub use toolkit::{
    BeepKind, ChoiceButtons, ChooserOptions, ChooserOutcome, ChooserRequest, ChooserType, HelpId, HelpWindow,
    MessagePosition, Toolkit,
};

// Re-exported so hosts don't need a direct dependency for listings
pub use dirlist;

/// Initializes logging for hosts that don't bring their own logger.
///
/// Respects `RUST_LOG` (default: info). Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

#[cfg(test)]
mod help_test;
#[cfg(test)]
mod test_support;
