//! The toolkit actor: one thread owns the toolkit, everyone else sends it jobs.
//!
//! This replaces "lock, call, unlock, wake" around every toolkit access. A job is a
//! closure over [`ToolkitState`]; the actor runs jobs in arrival order and calls
//! [`Toolkit::awake`] after each one.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread::{self, JoinHandle, ThreadId};

use crate::config::{BridgeConfig, HELP_DEFAULT_HEIGHT, HELP_DEFAULT_WIDTH, TOOLKIT_THREAD_NAME};
use crate::error::BridgeError;
use crate::toolkit::{HelpId, HelpWindow, Toolkit};

type Job = Box<dyn FnOnce(&mut ToolkitState) + Send>;

enum Message {
    Run(Job),
    Shutdown,
}

// ============================================================================
// State owned by the actor thread
// ============================================================================

/// Everything that only the toolkit thread may touch.
pub struct ToolkitState {
    toolkit: Box<dyn Toolkit>,
    config: BridgeConfig,
    help_windows: HashMap<HelpId, HelpWindow>,
    next_help_id: u64,
}

impl ToolkitState {
    fn new(toolkit: Box<dyn Toolkit>, config: BridgeConfig) -> Self {
        Self {
            toolkit,
            config,
            help_windows: HashMap::new(),
            next_help_id: 1,
        }
    }

    pub fn toolkit(&mut self) -> &mut dyn Toolkit {
        &mut *self.toolkit
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Allocates a hidden help window with default geometry.
    pub(crate) fn create_help(&mut self) -> HelpId {
        let id = HelpId(self.next_help_id);
        self.next_help_id += 1;
        self.help_windows.insert(
            id,
            HelpWindow {
                x: 0,
                y: 0,
                w: HELP_DEFAULT_WIDTH,
                h: HELP_DEFAULT_HEIGHT,
                text_size: self.config.help_text_size,
                value: None,
                source: None,
                visible: false,
            },
        );
        id
    }

    pub(crate) fn help(&self, id: HelpId) -> Option<&HelpWindow> {
        self.help_windows.get(&id)
    }

    /// Applies `change` to a help window and re-presents it if it's on screen.
    /// Returns `None` if the window doesn't exist.
    pub(crate) fn update_help<R>(&mut self, id: HelpId, change: impl FnOnce(&mut HelpWindow) -> R) -> Option<R> {
        let window = self.help_windows.get_mut(&id)?;
        let result = change(window);
        if window.visible {
            self.toolkit.present_help(id, window);
        }
        Some(result)
    }

    pub(crate) fn show_help(&mut self, id: HelpId) {
        if let Some(window) = self.help_windows.get_mut(&id) {
            window.visible = true;
            self.toolkit.present_help(id, window);
        }
    }

    pub(crate) fn hide_help(&mut self, id: HelpId) {
        let Some(window) = self.help_windows.get_mut(&id) else {
            return;
        };
        if window.visible {
            window.visible = false;
            self.toolkit.dismiss_help(id);
        }
    }

    pub(crate) fn destroy_help(&mut self, id: HelpId) {
        self.hide_help(id);
        self.help_windows.remove(&id);
    }

    #[cfg(test)]
    pub(crate) fn help_window_count(&self) -> usize {
        self.help_windows.len()
    }

    fn close_all_help(&mut self) {
        let mut ids: Vec<HelpId> = self.help_windows.keys().copied().collect();
        ids.sort();
        for id in ids {
            self.destroy_help(id);
        }
    }
}

// ============================================================================
// Handle
// ============================================================================

/// Sends jobs to the toolkit thread. Cheap to clone and shareable across threads.
#[derive(Clone)]
pub struct ToolkitHandle {
    sender: mpsc::Sender<Message>,
    thread_id: ThreadId,
}

impl ToolkitHandle {
    /// Runs `f` on the toolkit thread and waits for its result.
    ///
    /// Fails with `Reentrant` when called from the toolkit thread (it would wait on
    /// itself), with `JobPanicked` if `f` panics, and with `Disconnected` once the
    /// actor has stopped.
    pub fn call<R, F>(&self, f: F) -> Result<R, BridgeError>
    where
        R: Send + 'static,
        F: FnOnce(&mut ToolkitState) -> R + Send + 'static,
    {
        if self.is_toolkit_thread() {
            return Err(BridgeError::Reentrant);
        }

        let (reply_tx, reply_rx) = mpsc::channel();
        let job: Job = Box::new(move |state| {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| f(state)));
            if outcome.is_err() {
                log::error!("ToolkitActor: job panicked, continuing");
            }
            let _ = reply_tx.send(outcome.map_err(|_| BridgeError::JobPanicked));
        });
        self.sender
            .send(Message::Run(job))
            .map_err(|_| BridgeError::Disconnected)?;

        // A job dropped unrun (actor stopped first) closes the reply channel
        reply_rx.recv().map_err(|_| BridgeError::Disconnected)?
    }

    /// Queues `f` without waiting. Safe from any thread, including the toolkit thread.
    pub fn post<F>(&self, f: F) -> Result<(), BridgeError>
    where
        F: FnOnce(&mut ToolkitState) + Send + 'static,
    {
        self.sender
            .send(Message::Run(Box::new(f)))
            .map_err(|_| BridgeError::Disconnected)
    }

    pub fn is_toolkit_thread(&self) -> bool {
        thread::current().id() == self.thread_id
    }
}

// ============================================================================
// Actor
// ============================================================================

/// Owns the toolkit thread. Dropping it stops the thread and closes any help windows.
pub struct ToolkitActor {
    handle: ToolkitHandle,
    thread: Option<JoinHandle<()>>,
}

impl ToolkitActor {
    pub fn spawn(toolkit: Box<dyn Toolkit>, config: BridgeConfig) -> Result<Self, BridgeError> {
        let (sender, receiver) = mpsc::channel();
        let thread = thread::Builder::new()
            .name(TOOLKIT_THREAD_NAME.to_string())
            .spawn(move || run(receiver, ToolkitState::new(toolkit, config)))
            .map_err(BridgeError::ThreadSpawn)?;

        let handle = ToolkitHandle {
            sender,
            thread_id: thread.thread().id(),
        };
        log::debug!("ToolkitActor: started thread {:?}", handle.thread_id);

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }

    pub fn handle(&self) -> ToolkitHandle {
        self.handle.clone()
    }

    /// Stops the thread after it finishes already-queued jobs.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        let _ = self.handle.sender.send(Message::Shutdown);
        if self.handle.is_toolkit_thread() {
            // Can't join ourselves; the loop exits on the Shutdown message
            return;
        }
        if thread.join().is_err() {
            log::warn!("ToolkitActor: toolkit thread panicked during shutdown");
        }
        log::debug!("ToolkitActor: stopped");
    }
}

impl Drop for ToolkitActor {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(receiver: mpsc::Receiver<Message>, mut state: ToolkitState) {
    for message in receiver {
        match message {
            Message::Run(job) => {
                if panic::catch_unwind(AssertUnwindSafe(|| job(&mut state))).is_err() {
                    log::error!("ToolkitActor: job panicked, continuing");
                }
                state.toolkit.awake();
            }
            Message::Shutdown => break,
        }
    }
    state.close_all_help();
}
