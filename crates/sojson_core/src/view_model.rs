use crate::{IndentSize, NoticeKind, OperationKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationButtonView {
    pub kind: OperationKind,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub selected: OperationKind,
    pub operations: Vec<OperationButtonView>,
    pub trigger_label: &'static str,
    pub trigger_enabled: bool,
    pub loading: bool,
    pub indent: IndentSize,
    pub text: String,
    pub char_count: usize,
    pub notice: Option<NoticeView>,
}

impl AppViewModel {
    pub fn active_operations(&self) -> impl Iterator<Item = &OperationButtonView> {
        self.operations.iter().filter(|button| button.active)
    }
}
