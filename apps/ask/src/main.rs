//! Manual test program: drives every dialog through the console toolkit.
//!
//! Usage: `ask [DIR]`. DIR is where the chooser starts and what `list` prints
//! (default: the working directory).

use std::path::PathBuf;
use std::process::ExitCode;

use dialog_bridge::dirlist::{self, SortPolicy};
use dialog_bridge::{
    BeepKind, BridgeError, ChoiceButtons, ChooserOptions, ChooserStatus, ChooserType, ConsoleToolkit, HelpDialog,
    NativeFileChooser, ToolkitActor, ToolkitHandle, dialogs, load_config,
};

const COMMANDS: &str = "Command (rename, password, choose, help, list, beep, quit):";

const HELP_PAGE: &str = "<html><body>\n\
<h2>ask</h2>\n\
<p>Try every command once. <b>Cancel</b> any prompt with end of input.</p>\n\
</body></html>";

/// The two labels the rename commands edit.
struct Labels {
    text: String,
    password: String,
}

fn main() -> ExitCode {
    dialog_bridge::init_logging();

    let directory = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(None);
    let toolkit = ConsoleToolkit::stdio(&config);

    let actor = match ToolkitActor::spawn(Box::new(toolkit), config) {
        Ok(actor) => actor,
        Err(e) => {
            log::error!("ask: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&actor.handle(), directory);
    actor.shutdown();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("ask: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(handle: &ToolkitHandle, directory: Option<PathBuf>) -> Result<(), BridgeError> {
    let mut labels = Labels {
        text: "Test text".to_string(),
        password: "MyPassword".to_string(),
    };

    loop {
        // End of input quits without asking
        let Some(command) = dialogs::input(handle, None, COMMANDS, None)? else {
            return Ok(());
        };
        match command.trim() {
            "rename" | "r" => rename(handle, &mut labels)?,
            "password" | "p" => rename_password(handle, &mut labels)?,
            "choose" | "c" => choose(handle, directory.clone())?,
            "help" | "h" => show_help(handle)?,
            "list" | "l" => list(handle, directory.clone())?,
            "beep" | "b" => dialogs::beep(handle, BeepKind::Default)?,
            "quit" | "q" => {
                if confirm_quit(handle)? {
                    return Ok(());
                }
            }
            "" => {}
            other => dialogs::alert(handle, None, &format!("Unknown command: {}", other))?,
        }
    }
}

fn rename(handle: &ToolkitHandle, labels: &mut Labels) -> Result<(), BridgeError> {
    if let Some(text) = dialogs::input(handle, None, "Input:", Some(&labels.text))? {
        labels.text = text;
    }
    dialogs::message(handle, None, &format!("Button label: {}", labels.text))
}

fn rename_password(handle: &ToolkitHandle, labels: &mut Labels) -> Result<(), BridgeError> {
    if let Some(text) = dialogs::password(handle, None, "Input PWD:", Some(&labels.password))? {
        labels.password = text;
    }
    dialogs::message(handle, None, &format!("Password is {} characters", labels.password.chars().count()))
}

/// Returns true when the user confirms.
fn confirm_quit(handle: &ToolkitHandle) -> Result<bool, BridgeError> {
    let buttons = ChoiceButtons::new("Cancel", "Quit", Some("Dunno"));
    match dialogs::choice(handle, None, "Are you sure you want to quit?", buttons)? {
        Some(1) => Ok(true),
        Some(2) => {
            dialogs::message(handle, None, "Well, maybe you should know before we quit.")?;
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn choose(handle: &ToolkitHandle, directory: Option<PathBuf>) -> Result<(), BridgeError> {
    let kinds = ChoiceButtons::new("Open file", "Open files", Some("Save file"));
    let kind = match dialogs::choice(handle, None, "Which chooser?", kinds)? {
        Some(0) => ChooserType::BrowseFile,
        Some(1) => ChooserType::BrowseMultiFile,
        Some(2) => ChooserType::BrowseSaveFile,
        _ => return Ok(()),
    };

    let mut chooser = NativeFileChooser::new(handle.clone(), kind);
    chooser.set_directory(directory.as_deref());
    chooser.set_filter(Some("Text\t*.txt\nAll files\t*"));
    if kind.is_save() {
        chooser.set_options(ChooserOptions::SAVEAS_CONFIRM);
        chooser.set_preset_file(Some("untitled.txt"));
    }

    match chooser.show()? {
        ChooserStatus::Picked => {
            let picked: Vec<String> = chooser.filenames().iter().map(|p| p.display().to_string()).collect();
            dialogs::message(handle, None, &format!("Picked: {}", picked.join(", ")))
        }
        ChooserStatus::Cancelled => dialogs::message(handle, None, "Cancelled"),
        ChooserStatus::Failed => {
            let reason = chooser.error_message().unwrap_or("unknown error").to_string();
            dialogs::alert(handle, None, &format!("Chooser failed: {}", reason))
        }
    }
}

fn show_help(handle: &ToolkitHandle) -> Result<(), BridgeError> {
    let help = HelpDialog::new(handle.clone())?;
    help.set_value(Some(HELP_PAGE))?;
    help.show()?;
    dialogs::message(handle, None, "Help shown, closing it now.")?;
    help.hide()
}

fn list(handle: &ToolkitHandle, directory: Option<PathBuf>) -> Result<(), BridgeError> {
    let directory = match directory {
        Some(directory) => directory,
        None => match std::env::current_dir() {
            Ok(directory) => directory,
            Err(e) => return dialogs::alert(handle, None, &format!("No working directory: {}", e)),
        },
    };

    for policy in SortPolicy::ALL {
        let listing = match dirlist::list_directory(&directory, policy) {
            Ok(listing) => listing,
            Err(e) => return dialogs::alert(handle, None, &format!("Can't list: {}", e)),
        };
        let names: Vec<String> = listing.iter().map(|entry| entry.to_string_lossy()).collect();
        dialogs::message(handle, None, &format!("{:?} ({}): {}", policy, listing.len(), names.join(" ")))?;
        listing.release();
    }
    Ok(())
}
