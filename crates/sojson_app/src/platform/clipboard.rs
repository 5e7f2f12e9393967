use std::io::{self, Write};

use sojson_core::CopyOutcome;
use sojson_logging::sojson_warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard access failed: {0}")]
    Access(String),
}

pub trait Clipboard: Send {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard, opened per operation.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Self::open()?
            .get_text()
            .map_err(|err| ClipboardError::Access(err.to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        Self::open()?
            .set_text(text)
            .map_err(|err| ClipboardError::Access(err.to_string()))
    }
}

/// Fallback copy path: writes the text between markers so the user can
/// select it in the terminal.
pub struct SelectionFallback {
    out: Box<dyn Write + Send>,
}

impl SelectionFallback {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn present(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "----- select and copy below -----")?;
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "----- end -----")?;
        self.out.flush()
    }
}

/// Tries the clipboard first and the selection fallback second.
pub fn copy_with_fallback(
    clipboard: &mut dyn Clipboard,
    fallback: &mut SelectionFallback,
    text: &str,
) -> CopyOutcome {
    match clipboard.write_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => {
            sojson_warn!("Clipboard write failed, using selection fallback: {}", err);
            match fallback.present(text) {
                Ok(()) => CopyOutcome::Selected,
                Err(err) => {
                    sojson_warn!("Selection fallback failed: {}", err);
                    CopyOutcome::Failed
                }
            }
        }
    }
}
