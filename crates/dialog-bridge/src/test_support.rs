//! Recording toolkit with scripted answers, shared by the bridge's tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::actor::{ToolkitActor, ToolkitHandle};
use crate::config::BridgeConfig;
use crate::toolkit::{
    BeepKind, ChoiceButtons, ChooserOutcome, ChooserRequest, HelpId, HelpWindow, MessagePosition, Toolkit,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Message { at: Option<MessagePosition>, text: String },
    Alert { at: Option<MessagePosition>, text: String },
    Choice { text: String, buttons: Vec<String> },
    Input { prompt: String, default: Option<String> },
    Password { prompt: String, default: Option<String> },
    Beep(BeepKind),
    Chooser(ChooserRequest),
    PresentHelp(HelpId, HelpWindow),
    DismissHelp(HelpId),
}

/// What the toolkit saw, and what it will answer next.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    pub threads: Vec<Option<String>>,
    pub awakes: usize,
    pub choices: VecDeque<Option<usize>>,
    pub texts: VecDeque<Option<String>>,
    pub chooser_outcomes: VecDeque<ChooserOutcome>,
}

pub type SharedRecorder = Arc<Mutex<Recorder>>;

pub struct RecordingToolkit {
    recorder: SharedRecorder,
}

impl RecordingToolkit {
    pub fn new() -> (Self, SharedRecorder) {
        let recorder = SharedRecorder::default();
        (
            Self {
                recorder: Arc::clone(&recorder),
            },
            recorder,
        )
    }

    fn record(&self, call: Call) {
        let mut recorder = self.recorder.lock().unwrap();
        recorder.calls.push(call);
        recorder.threads.push(thread::current().name().map(str::to_string));
    }
}

impl Toolkit for RecordingToolkit {
    fn message(&mut self, at: Option<MessagePosition>, text: &str) {
        self.record(Call::Message {
            at,
            text: text.to_string(),
        });
    }

    fn alert(&mut self, at: Option<MessagePosition>, text: &str) {
        self.record(Call::Alert {
            at,
            text: text.to_string(),
        });
    }

    fn choice(&mut self, _at: Option<MessagePosition>, text: &str, buttons: &ChoiceButtons) -> Option<usize> {
        self.record(Call::Choice {
            text: text.to_string(),
            buttons: buttons.labels().to_vec(),
        });
        self.recorder.lock().unwrap().choices.pop_front().flatten()
    }

    fn input(&mut self, _at: Option<MessagePosition>, prompt: &str, default: Option<&str>) -> Option<String> {
        self.record(Call::Input {
            prompt: prompt.to_string(),
            default: default.map(str::to_string),
        });
        self.recorder.lock().unwrap().texts.pop_front().flatten()
    }

    fn password(&mut self, _at: Option<MessagePosition>, prompt: &str, default: Option<&str>) -> Option<String> {
        self.record(Call::Password {
            prompt: prompt.to_string(),
            default: default.map(str::to_string),
        });
        self.recorder.lock().unwrap().texts.pop_front().flatten()
    }

    fn beep(&mut self, kind: BeepKind) {
        self.record(Call::Beep(kind));
    }

    fn run_file_chooser(&mut self, request: &ChooserRequest) -> ChooserOutcome {
        self.record(Call::Chooser(request.clone()));
        self.recorder
            .lock()
            .unwrap()
            .chooser_outcomes
            .pop_front()
            .unwrap_or(ChooserOutcome::Cancelled)
    }

    fn present_help(&mut self, id: HelpId, window: &HelpWindow) {
        self.record(Call::PresentHelp(id, window.clone()));
    }

    fn dismiss_help(&mut self, id: HelpId) {
        self.record(Call::DismissHelp(id));
    }

    fn awake(&mut self) {
        self.recorder.lock().unwrap().awakes += 1;
    }
}

/// Spawns an actor around a fresh recording toolkit.
pub fn spawn_recording() -> (ToolkitActor, ToolkitHandle, SharedRecorder) {
    let (toolkit, recorder) = RecordingToolkit::new();
    let actor = ToolkitActor::spawn(Box::new(toolkit), BridgeConfig::default()).unwrap();
    let handle = actor.handle();
    (actor, handle, recorder)
}

pub fn calls(recorder: &SharedRecorder) -> Vec<Call> {
    recorder.lock().unwrap().calls.clone()
}
