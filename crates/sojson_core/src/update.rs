use crate::notices;
use crate::{
    AppState, CopyOutcome, Effect, Msg, NoticeKind, ProcessingRequest, ProcessingResult,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextChanged(text) => {
            state.set_text(text);
            Vec::new()
        }
        Msg::OperationSelected(kind) => {
            state.select(kind);
            state.hide_notice();
            Vec::new()
        }
        Msg::IndentSelected(indent) => {
            state.set_indent(indent);
            Vec::new()
        }
        Msg::ProcessClicked => {
            // The trigger is disabled while a request is outstanding.
            if state.is_loading() {
                return (state, Vec::new());
            }
            match ProcessingRequest::new(state.text(), state.indent()) {
                Ok(request) => {
                    let kind = state.selected();
                    let seq = state.begin_request();
                    state.hide_notice();
                    vec![Effect::SendRequest { seq, kind, request }]
                }
                Err(_) => vec![state.show_notice(NoticeKind::Error, notices::INPUT_REQUIRED)],
            }
        }
        Msg::ResponseReceived { seq, result } => {
            if !state.finish_request(seq) {
                return (state, Vec::new());
            }
            apply_result(&mut state, result)
        }
        Msg::ClearClicked => {
            state.set_text(String::new());
            state.hide_notice();
            vec![Effect::FocusEditor]
        }
        Msg::PasteClicked => vec![Effect::ReadClipboard],
        Msg::ClipboardRead(Ok(text)) => {
            state.set_text(text);
            vec![Effect::FocusEditor]
        }
        Msg::ClipboardRead(Err(_)) => {
            vec![state.show_notice(NoticeKind::Error, notices::CLIPBOARD_UNAVAILABLE)]
        }
        Msg::CopyClicked => {
            if state.text().is_empty() {
                vec![state.show_notice(NoticeKind::Error, notices::NOTHING_TO_COPY)]
            } else {
                vec![Effect::WriteClipboard {
                    text: state.text().to_string(),
                }]
            }
        }
        Msg::ClipboardWritten(outcome) => {
            let (kind, message) = match outcome {
                CopyOutcome::Copied => (NoticeKind::Success, notices::COPIED),
                CopyOutcome::Selected => (NoticeKind::Success, notices::SELECTED_FOR_COPY),
                CopyOutcome::Failed => (NoticeKind::Error, notices::COPY_FAILED),
            };
            vec![state.show_notice(kind, message)]
        }
        Msg::DownloadClicked => {
            if state.text().is_empty() {
                vec![state.show_notice(NoticeKind::Error, notices::NOTHING_TO_DOWNLOAD)]
            } else {
                vec![Effect::SaveDownload {
                    content: state.text().to_string(),
                }]
            }
        }
        Msg::DownloadFinished(Ok(path)) => {
            vec![state.show_notice(NoticeKind::Success, format!("Saved to {path}"))]
        }
        Msg::DownloadFinished(Err(reason)) => vec![state.show_notice(
            NoticeKind::Error,
            format!("{}: {reason}", notices::DOWNLOAD_FAILED),
        )],
        Msg::DismissClicked => {
            state.hide_notice();
            Vec::new()
        }
        Msg::NoticeExpired { notice_id } => {
            state.expire_notice(notice_id);
            Vec::new()
        }
        Msg::SurfaceWriteFailed(reason) => vec![state.show_notice(
            NoticeKind::Error,
            format!("{}: {reason}", notices::SURFACE_WRITE_FAILED),
        )],
    };

    (state, effects)
}

fn apply_result(state: &mut AppState, result: ProcessingResult) -> Vec<Effect> {
    let dismiss = match result {
        ProcessingResult::Transformed { text } => {
            state.set_text(text);
            state.show_notice(NoticeKind::Success, notices::PROCESSED)
        }
        ProcessingResult::Validated { valid: true, .. } => {
            state.show_notice(NoticeKind::Success, notices::VALID_JSON)
        }
        ProcessingResult::Validated {
            valid: false,
            detail,
        } => {
            let message = match detail {
                Some(detail) if !detail.is_empty() => {
                    format!("{}: {detail}", notices::INVALID_JSON)
                }
                _ => notices::INVALID_JSON.to_string(),
            };
            state.show_notice(NoticeKind::Error, message)
        }
        ProcessingResult::Failed { message } => {
            let message = if message.trim().is_empty() {
                notices::PROCESSING_FAILED.to_string()
            } else {
                message
            };
            state.show_notice(NoticeKind::Error, message)
        }
    };
    vec![dismiss]
}
