use std::time::Duration;

use crate::{OperationKind, ProcessingRequest, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendRequest {
        seq: RequestSeq,
        kind: OperationKind,
        request: ProcessingRequest,
    },
    ScheduleNoticeDismiss { notice_id: u64, after: Duration },
    ReadClipboard,
    WriteClipboard { text: String },
    SaveDownload { content: String },
    FocusEditor,
}
