//! SoJSON core: pure controller state machine and view-model helpers.
mod effect;
mod msg;
pub mod notices;
mod operation;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{CopyOutcome, Msg};
pub use operation::{IndentSize, OperationKind, UnknownOperation, UnsupportedIndent};
pub use request::{ProcessingRequest, ProcessingResult, RequestError};
pub use state::{AppState, Notice, NoticeKind, RequestSeq, BUSY_LABEL, NOTICE_TTL};
pub use update::update;
pub use view_model::{AppViewModel, NoticeView, OperationButtonView};
