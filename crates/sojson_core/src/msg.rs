use crate::{IndentSize, OperationKind, ProcessingResult, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the text buffer.
    TextChanged(String),
    /// User picked an operation kind.
    OperationSelected(OperationKind),
    /// User picked an indentation width.
    IndentSelected(IndentSize),
    /// User pressed the trigger control.
    ProcessClicked,
    /// The service answered (or failed to answer) request `seq`.
    ResponseReceived {
        seq: RequestSeq,
        result: ProcessingResult,
    },
    /// User cleared the buffer.
    ClearClicked,
    /// User asked to paste from the clipboard.
    PasteClicked,
    /// Clipboard read finished.
    ClipboardRead(Result<String, String>),
    /// User asked to copy the buffer.
    CopyClicked,
    /// Clipboard write finished.
    ClipboardWritten(CopyOutcome),
    /// User asked to save the buffer to a file.
    DownloadClicked,
    /// Download finished with the written path or an error message.
    DownloadFinished(Result<String, String>),
    /// User dismissed the current notice.
    DismissClicked,
    /// Auto-dismiss timer for notice `notice_id` fired.
    NoticeExpired { notice_id: u64 },
    /// The editor surface rejected the new text.
    SurfaceWriteFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text landed on the system clipboard.
    Copied,
    /// System clipboard unavailable; text was presented for manual selection.
    Selected,
    Failed,
}
