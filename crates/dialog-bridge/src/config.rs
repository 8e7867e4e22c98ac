//! Configuration: compile-time constants plus an optional JSON file.
//!
//! The file lives at `<config dir>/dialog-bridge/config.json`. A missing or unreadable
//! file gives defaults.

use std::fs;
use std::path::{Path, PathBuf};

use dirlist::{ListOptions, SortPolicy};
use serde::{Deserialize, Serialize};

/// Name of the thread that owns the toolkit.
pub const TOOLKIT_THREAD_NAME: &str = "toolkit";

/// Default help window geometry, matching the toolkit's own help dialog.
pub const HELP_DEFAULT_WIDTH: i32 = 530;
pub const HELP_DEFAULT_HEIGHT: i32 = 385;

pub const DEFAULT_HELP_TEXT_SIZE: i32 = 12;

const CONFIG_DIR_NAME: &str = "dialog-bridge";
const CONFIG_FILE_NAME: &str = "config.json";

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeConfig {
    /// Order used when the bridge lists directories on its own (console chooser).
    pub default_sort: SortPolicy,
    pub list_options: ListOptions,
    /// Text size for new help windows.
    pub help_text_size: i32,
    /// Whether the console toolkit rings the terminal bell.
    pub beep: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            default_sort: SortPolicy::CaseNumeric,
            list_options: ListOptions {
                include_dot_entries: false,
                mark_directories: true,
            },
            help_text_size: DEFAULT_HELP_TEXT_SIZE,
            beep: true,
        }
    }
}

/// Default location of the config file, if the platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads the config from `path`, or from [`config_path`] when `None`.
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> BridgeConfig {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(path) => path,
        None => return BridgeConfig::default(),
    };

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            log::debug!("load_config: no config at {} ({}), using defaults", path.display(), e);
            return BridgeConfig::default();
        }
    };

    match serde_json::from_str::<BridgeConfig>(&contents) {
        Ok(config) => sanitize(config),
        Err(e) => {
            log::warn!("load_config: ignoring malformed {}: {}", path.display(), e);
            BridgeConfig::default()
        }
    }
}

fn sanitize(mut config: BridgeConfig) -> BridgeConfig {
    if config.help_text_size <= 0 {
        log::warn!(
            "load_config: helpTextSize {} is not positive, using {}",
            config.help_text_size,
            DEFAULT_HELP_TEXT_SIZE
        );
        config.help_text_size = DEFAULT_HELP_TEXT_SIZE;
    }
    config
}
