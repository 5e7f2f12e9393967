use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use chrono::Utc;
use sojson_client::{save_download, ClientEvent, ClientHandle};
use sojson_core::{Effect, Msg};
use sojson_logging::{sojson_debug, sojson_error, sojson_info};

use super::app::Input;
use super::clipboard::{copy_with_fallback, Clipboard, SelectionFallback};
use super::surface::TextSurface;

/// Executes the effects emitted by `update` and feeds follow-up messages
/// back into the controller's inbox.
pub struct EffectRunner {
    client: ClientHandle,
    clipboard: Box<dyn Clipboard>,
    fallback: SelectionFallback,
    download_dir: PathBuf,
    inbox: mpsc::Sender<Input>,
}

impl EffectRunner {
    pub fn new(
        client: ClientHandle,
        client_events: mpsc::Receiver<ClientEvent>,
        clipboard: Box<dyn Clipboard>,
        fallback: SelectionFallback,
        download_dir: PathBuf,
        inbox: mpsc::Sender<Input>,
    ) -> Self {
        let runner = Self {
            client,
            clipboard,
            fallback,
            download_dir,
            inbox,
        };
        runner.spawn_event_forwarder(client_events);
        runner
    }

    pub fn run(&mut self, effects: Vec<Effect>, surface: &mut dyn TextSurface) {
        for effect in effects {
            match effect {
                Effect::SendRequest { seq, kind, request } => {
                    sojson_info!(
                        "SendRequest seq={} kind={} text_len={} indent={}",
                        seq,
                        kind,
                        request.text().len(),
                        request.indent()
                    );
                    if let Err(err) = self.client.submit(seq, kind, request) {
                        sojson_error!("SendRequest seq={} not queued: {}", seq, err);
                        self.send(Msg::ResponseReceived {
                            seq,
                            result: err.into(),
                        });
                    }
                }
                Effect::ScheduleNoticeDismiss { notice_id, after } => {
                    let inbox = self.inbox.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = inbox.send(Input::Msg(Msg::NoticeExpired { notice_id }));
                    });
                }
                Effect::ReadClipboard => {
                    let read = self
                        .clipboard
                        .read_text()
                        .map_err(|err| err.to_string());
                    self.send(Msg::ClipboardRead(read));
                }
                Effect::WriteClipboard { text } => {
                    let outcome =
                        copy_with_fallback(self.clipboard.as_mut(), &mut self.fallback, &text);
                    self.send(Msg::ClipboardWritten(outcome));
                }
                Effect::SaveDownload { content } => {
                    let saved = save_download(&self.download_dir, Utc::now(), &content)
                        .map(|path| path.display().to_string())
                        .map_err(|err| {
                            sojson_error!("Download to {:?} failed: {}", self.download_dir, err);
                            err.to_string()
                        });
                    self.send(Msg::DownloadFinished(saved));
                }
                Effect::FocusEditor => {
                    sojson_debug!("focus {}", surface.describe());
                    surface.focus();
                }
            }
        }
    }

    fn send(&self, msg: Msg) {
        let _ = self.inbox.send(Input::Msg(msg));
    }

    fn spawn_event_forwarder(&self, events: mpsc::Receiver<ClientEvent>) {
        let inbox = self.inbox.clone();
        thread::spawn(move || {
            while let Ok(event) = events.recv() {
                let msg = match event {
                    ClientEvent::Completed { seq, kind, result } => {
                        sojson_debug!("Completed seq={} kind={}", seq, kind);
                        Msg::ResponseReceived { seq, result }
                    }
                };
                if inbox.send(Input::Msg(msg)).is_err() {
                    break;
                }
            }
        });
    }
}
