use crate::IndentSize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("input required")]
    InputRequired,
}

/// One user-triggered processing request. The text is stored trimmed and is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingRequest {
    text: String,
    indent: IndentSize,
}

impl ProcessingRequest {
    pub fn new(text: &str, indent: IndentSize) -> Result<Self, RequestError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(RequestError::InputRequired);
        }
        Ok(Self {
            text: trimmed.to_string(),
            indent,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn indent(&self) -> IndentSize {
        self.indent
    }
}

/// Outcome of one exchange with the service, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// Replacement text from a format/unescape/process call.
    Transformed { text: String },
    /// Verdict from a validate call; `detail` carries the service's reason.
    Validated { valid: bool, detail: Option<String> },
    Failed { message: String },
}
