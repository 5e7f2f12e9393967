use std::time::Duration;

use crate::view_model::{AppViewModel, NoticeView, OperationButtonView};
use crate::{Effect, IndentSize, OperationKind};

/// Sequence number tagging each issued request.
pub type RequestSeq = u64;

/// How long a notice stays visible before it is dismissed automatically.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Label shown on the trigger while a request is outstanding.
pub const BUSY_LABEL: &str = "Working…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selected: OperationKind,
    indent: IndentSize,
    text: String,
    /// Sequence number of the newest request issued, if any.
    latest_seq: Option<RequestSeq>,
    loading: bool,
    notice: Option<Notice>,
    next_notice_id: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(selected: OperationKind, indent: IndentSize) -> Self {
        Self {
            selected,
            indent,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let operations = OperationKind::ALL
            .into_iter()
            .map(|kind| OperationButtonView {
                kind,
                label: kind.label(),
                active: kind == self.selected,
            })
            .collect();
        AppViewModel {
            selected: self.selected,
            operations,
            trigger_label: if self.loading {
                BUSY_LABEL
            } else {
                self.selected.label()
            },
            trigger_enabled: !self.loading,
            loading: self.loading,
            indent: self.indent,
            text: self.text.clone(),
            char_count: self.text.chars().count(),
            notice: self.notice.as_ref().map(|notice| NoticeView {
                kind: notice.kind,
                message: notice.message.clone(),
            }),
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn selected(&self) -> OperationKind {
        self.selected
    }

    pub fn indent(&self) -> IndentSize {
        self.indent
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn set_text(&mut self, text: String) {
        if self.text != text {
            self.text = text;
            self.dirty = true;
        }
    }

    pub(crate) fn select(&mut self, kind: OperationKind) {
        if self.selected != kind {
            self.selected = kind;
            self.dirty = true;
        }
    }

    pub(crate) fn set_indent(&mut self, indent: IndentSize) {
        if self.indent != indent {
            self.indent = indent;
            self.dirty = true;
        }
    }

    /// Issues the next sequence number and enters the loading state.
    pub(crate) fn begin_request(&mut self) -> RequestSeq {
        let seq = self.latest_seq.map_or(1, |seq| seq + 1);
        self.latest_seq = Some(seq);
        self.loading = true;
        self.dirty = true;
        seq
    }

    /// Leaves the loading state if `seq` is the newest request.
    pub(crate) fn finish_request(&mut self, seq: RequestSeq) -> bool {
        if self.latest_seq != Some(seq) {
            return false;
        }
        self.loading = false;
        self.dirty = true;
        true
    }

    /// Replaces any visible notice and returns the effect that dismisses it later.
    pub(crate) fn show_notice(&mut self, kind: NoticeKind, message: impl Into<String>) -> Effect {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notice = Some(Notice {
            id,
            kind,
            message: message.into(),
        });
        self.dirty = true;
        Effect::ScheduleNoticeDismiss {
            notice_id: id,
            after: NOTICE_TTL,
        }
    }

    pub(crate) fn hide_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn expire_notice(&mut self, notice_id: u64) {
        if self.notice.as_ref().is_some_and(|notice| notice.id == notice_id) {
            self.hide_notice();
        }
    }
}
