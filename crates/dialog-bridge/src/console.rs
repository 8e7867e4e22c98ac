//! A terminal-backed toolkit.
//!
//! Reads answers line by line and writes prompts to any writer, so it doubles as a
//! headless fallback and as a scriptable toolkit. End of input cancels whatever is
//! being asked.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use dirlist::{ListOptions, SortPolicy};
use regex::Regex;

use crate::config::BridgeConfig;
use crate::toolkit::{
    BeepKind, ChoiceButtons, ChooserOptions, ChooserOutcome, ChooserRequest, ChooserType, HelpId, HelpWindow,
    MessagePosition, Toolkit, resolve_against,
};

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static pattern is valid"));

pub struct ConsoleToolkit<R, W> {
    input: R,
    output: W,
    bell: bool,
    sort: SortPolicy,
    list_options: ListOptions,
}

impl ConsoleToolkit<BufReader<Stdin>, Stdout> {
    /// A console toolkit on the process's stdin/stdout.
    pub fn stdio(config: &BridgeConfig) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), config)
    }
}

impl<R, W> ConsoleToolkit<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, config: &BridgeConfig) -> Self {
        Self {
            input,
            output,
            bell: config.beep,
            sort: config.default_sort,
            list_options: config.list_options,
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Reads one line without its terminator. `None` on end of input or read error.
    fn read_line(&mut self) -> Option<String> {
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\r', '\n']).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(e) => {
                log::debug!("ConsoleToolkit: read failed: {}", e);
                None
            }
        }
    }

    fn ring(&mut self) {
        if self.bell {
            let _ = write!(self.output, "\x07");
        }
    }

    fn ask_text(&mut self, prompt: &str, shown_default: Option<&str>, default: Option<&str>) -> Option<String> {
        match shown_default {
            Some(shown) => {
                let _ = write!(self.output, "{} [{}] ", prompt, shown);
            }
            None => {
                let _ = write!(self.output, "{} ", prompt);
            }
        }
        let line = self.read_line()?;
        if line.is_empty() {
            Some(default.unwrap_or_default().to_string())
        } else {
            Some(line)
        }
    }

    fn print_directory(&mut self, directory: &Path) -> Result<(), String> {
        let listing =
            dirlist::list_directory_with(directory, self.sort, self.list_options).map_err(|e| e.to_string())?;
        let _ = writeln!(self.output, "{} ({} entries)", directory.display(), listing.len());
        for entry in &listing {
            let _ = writeln!(self.output, "  {}", entry.to_string_lossy());
        }
        Ok(())
    }

    fn read_paths(&mut self, request: &ChooserRequest) -> Vec<String> {
        if request.kind.is_multi() {
            let _ = writeln!(self.output, "Enter paths, one per line, blank line to finish:");
            let mut typed = Vec::new();
            while let Some(line) = self.read_line() {
                if line.is_empty() {
                    break;
                }
                typed.push(line);
            }
            return typed;
        }

        let preset = request.preset_file.as_deref().filter(|_| request.kind.is_save());
        let _ = match preset {
            Some(preset) => write!(self.output, "Path [{}]: ", preset),
            None => write!(self.output, "Path: "),
        };
        match self.read_line() {
            Some(line) if !line.is_empty() => vec![line],
            Some(_) => preset.map(|p| vec![p.to_string()]).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    fn confirm_overwrite(&mut self, path: &Path) -> bool {
        let _ = write!(self.output, "{} already exists. Overwrite? [y/N] ", path.display());
        matches!(self.read_line().as_deref(), Some("y" | "Y" | "yes"))
    }
}

impl<R, W> Toolkit for ConsoleToolkit<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    fn message(&mut self, at: Option<MessagePosition>, text: &str) {
        log::trace!("ConsoleToolkit::message at={:?}", at);
        let _ = writeln!(self.output, "[message] {}", text);
    }

    fn alert(&mut self, at: Option<MessagePosition>, text: &str) {
        log::trace!("ConsoleToolkit::alert at={:?}", at);
        self.ring();
        let _ = writeln!(self.output, "[alert] {}", text);
    }

    fn choice(&mut self, _at: Option<MessagePosition>, text: &str, buttons: &ChoiceButtons) -> Option<usize> {
        let _ = writeln!(self.output, "[choice] {}", text);
        for (index, label) in buttons.labels().iter().enumerate() {
            let _ = writeln!(self.output, "  {}) {}", index, label);
        }
        let _ = write!(self.output, "> ");
        let answer = self.read_line()?;
        let answer = answer.trim();

        if let Ok(index) = answer.parse::<usize>() {
            return (index < buttons.len()).then_some(index);
        }
        buttons
            .labels()
            .iter()
            .position(|label| !answer.is_empty() && label.eq_ignore_ascii_case(answer))
    }

    fn input(&mut self, _at: Option<MessagePosition>, prompt: &str, default: Option<&str>) -> Option<String> {
        self.ask_text(prompt, default, default)
    }

    fn password(&mut self, _at: Option<MessagePosition>, prompt: &str, default: Option<&str>) -> Option<String> {
        let masked = default.map(|d| "*".repeat(d.chars().count()));
        self.ask_text(prompt, masked.as_deref(), default)
    }

    fn beep(&mut self, kind: BeepKind) {
        log::trace!("ConsoleToolkit::beep kind={:?}", kind);
        self.ring();
    }

    fn run_file_chooser(&mut self, request: &ChooserRequest) -> ChooserOutcome {
        let title = request.title.as_deref().unwrap_or(match request.kind {
            ChooserType::BrowseFile | ChooserType::BrowseMultiFile => "Open",
            ChooserType::BrowseDirectory | ChooserType::BrowseMultiDirectory => "Choose directory",
            ChooserType::BrowseSaveFile | ChooserType::BrowseSaveDirectory => "Save",
        });
        let _ = writeln!(self.output, "== {} ==", title);
        if let Some(filter) = &request.filter {
            let _ = writeln!(self.output, "Filter: {}", filter.replace('\t', " ").replace('\n', "; "));
        }

        let directory = request.directory.clone().or_else(|| std::env::current_dir().ok());
        if let Some(directory) = &directory {
            if let Err(message) = self.print_directory(directory) {
                return ChooserOutcome::Failed(message);
            }
        }

        let typed = self.read_paths(request);
        if typed.is_empty() {
            return ChooserOutcome::Cancelled;
        }

        let mut picked: Vec<PathBuf> = Vec::with_capacity(typed.len());
        for line in &typed {
            let path = resolve_against(directory.as_deref(), line);
            if !request.kind.is_save() {
                if !path.exists() {
                    return ChooserOutcome::Failed(format!("No such file or directory: {}", path.display()));
                }
                if request.kind.wants_directory() != path.is_dir() {
                    let what = if request.kind.wants_directory() { "Not a directory" } else { "Is a directory" };
                    return ChooserOutcome::Failed(format!("{}: {}", what, path.display()));
                }
            } else if path.exists()
                && request.options.contains(ChooserOptions::SAVEAS_CONFIRM)
                && !self.confirm_overwrite(&path)
            {
                return ChooserOutcome::Cancelled;
            }
            picked.push(path);
        }
        ChooserOutcome::Picked(picked)
    }

    fn present_help(&mut self, id: HelpId, window: &HelpWindow) {
        let source = window
            .source
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "untitled".to_string());
        let _ = writeln!(self.output, "== Help #{} ({}) ==", id.0, source);
        if let Some(html) = &window.value {
            let text = HTML_TAG.replace_all(html, "");
            for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                let _ = writeln!(self.output, "{}", line);
            }
        }
        let _ = writeln!(self.output, "== end of help ==");
    }

    fn dismiss_help(&mut self, id: HelpId) {
        let _ = writeln!(self.output, "[help #{} closed]", id.0);
    }

    fn awake(&mut self) {
        let _ = self.output.flush();
    }
}
