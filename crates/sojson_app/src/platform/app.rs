use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use sojson_client::{ClientHandle, PersistError, RequestClient};
use sojson_core::{update, AppState, Effect, Msg, NoticeKind};
use sojson_logging::{sojson_error, sojson_info, sojson_warn};

use super::clipboard::{Clipboard, SelectionFallback};
use super::config::RuntimeSettings;
use super::effects::EffectRunner;
use super::render::render;
use super::shell::{self, ShellCommand, ShellInput};
use super::surface::TextSurface;

/// Everything the controller loop reacts to.
#[derive(Debug)]
pub enum Input {
    Msg(Msg),
    Line(String),
    Closed,
}

/// Result of a one-shot run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub success: bool,
    pub message: Option<String>,
    pub text: String,
}

/// Owns the state machine and wires it to the injected surface, request
/// client and clipboard.
pub struct Controller {
    state: AppState,
    surface: Box<dyn TextSurface>,
    effects: EffectRunner,
    inbox: mpsc::Receiver<Input>,
    inbox_tx: mpsc::Sender<Input>,
    status: Box<dyn Write + Send>,
}

impl Controller {
    pub fn new(
        settings: &RuntimeSettings,
        client: Arc<dyn RequestClient>,
        surface: Box<dyn TextSurface>,
        clipboard: Box<dyn Clipboard>,
        fallback: SelectionFallback,
        status: Box<dyn Write + Send>,
    ) -> io::Result<Self> {
        let (handle, client_events) = ClientHandle::spawn(client)?;
        let (inbox_tx, inbox) = mpsc::channel();
        let effects = EffectRunner::new(
            handle,
            client_events,
            clipboard,
            fallback,
            settings.download_dir.clone(),
            inbox_tx.clone(),
        );
        sojson_info!(
            "controller ready: surface={} operation={} indent={}",
            surface.describe(),
            settings.operation,
            settings.indent
        );
        Ok(Self {
            state: AppState::with_defaults(settings.operation, settings.indent),
            surface,
            effects,
            inbox,
            inbox_tx,
            status,
        })
    }

    /// Applies one message, mirrors the buffer onto the surface and runs the
    /// effects. A rejected surface write becomes an error notice. Returns
    /// whether the view changed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let mut effects = self.apply(msg);
        if let Err(err) = self.sync_to_surface() {
            sojson_error!("Failed to update {}: {}", self.surface.describe(), err);
            effects.extend(self.apply(Msg::SurfaceWriteFailed(err.to_string())));
        }
        let changed = self.state.consume_dirty();
        self.effects.run(effects, self.surface.as_mut());
        changed
    }

    fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    /// Pulls edits made directly on the surface into the state.
    fn sync_from_surface(&mut self) {
        let text = self.surface.get_text();
        if text != self.state.text() {
            self.dispatch(Msg::TextChanged(text));
        }
    }

    fn sync_to_surface(&mut self) -> Result<(), PersistError> {
        if self.surface.get_text() == self.state.text() {
            return Ok(());
        }
        self.surface.set_text(self.state.text())
    }

    fn render(&mut self) {
        for line in render(&self.state.view()) {
            self.status_line(&line);
        }
    }

    fn status_line(&mut self, line: &str) {
        let _ = writeln!(self.status, "{line}");
    }

    fn append_line(&mut self, line: &str) {
        let mut text = self.surface.get_text();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(line);
        text.push('\n');
        if let Err(err) = self.surface.set_text(&text) {
            sojson_warn!("Failed to append to {}: {}", self.surface.describe(), err);
        }
        self.sync_from_surface();
    }

    /// Interactive loop over stdin lines until `:quit` or end of input.
    pub fn run_shell(mut self) {
        spawn_stdin_reader(self.inbox_tx.clone());
        self.status_line("sojson shell, :help for commands");
        self.render();

        while let Ok(input) = self.inbox.recv() {
            match input {
                Input::Msg(msg) => {
                    if self.dispatch(msg) {
                        self.render();
                    }
                }
                Input::Line(line) => match shell::parse_line(&line) {
                    Ok(ShellInput::Append(text)) => self.append_line(&text),
                    Ok(ShellInput::Command(ShellCommand::Quit)) => break,
                    Ok(ShellInput::Command(ShellCommand::Help)) => {
                        self.status_line(shell::HELP);
                    }
                    Ok(ShellInput::Command(ShellCommand::Show)) => {
                        self.sync_from_surface();
                        println!("{}", self.state.text());
                        self.render();
                    }
                    Ok(ShellInput::Command(command)) => {
                        if let Some(msg) = command.to_msg() {
                            self.sync_from_surface();
                            self.dispatch(msg);
                            self.render();
                        }
                    }
                    Err(err) => self.status_line(&format!("error: {err}")),
                },
                Input::Closed => break,
            }
        }
        sojson_info!("shell finished");
    }

    /// Sends the surface text once and waits for the answer.
    pub fn run_once(mut self) -> RunReport {
        self.sync_from_surface();
        self.dispatch(Msg::ProcessClicked);

        while self.state.is_loading() {
            match self.inbox.recv() {
                // Keep the notice around for the report.
                Ok(Input::Msg(Msg::NoticeExpired { .. })) => {}
                Ok(Input::Msg(msg)) => {
                    self.dispatch(msg);
                }
                Ok(Input::Line(_)) | Ok(Input::Closed) => {}
                Err(_) => break,
            }
        }

        let notice = self.state.notice();
        RunReport {
            success: notice.is_some_and(|notice| notice.kind == NoticeKind::Success),
            message: notice.map(|notice| notice.message.clone()),
            text: self.state.text().to_string(),
        }
    }
}

fn spawn_stdin_reader(inbox: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if inbox.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    sojson_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
        let _ = inbox.send(Input::Closed);
    });
}
