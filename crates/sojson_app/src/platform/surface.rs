//! Editor surfaces holding the text the user works on.
//!
//! The surface is chosen once at start-up; the controller only sees the trait.

use std::fs;
use std::path::{Path, PathBuf};

use sojson_client::{write_atomically, PersistError};
use sojson_logging::{sojson_debug, sojson_warn};

pub trait TextSurface: Send {
    fn get_text(&self) -> String;
    fn set_text(&mut self, text: &str) -> Result<(), PersistError>;
    fn focus(&mut self);
    fn describe(&self) -> String;
}

/// Plain in-memory buffer.
#[derive(Debug, Default)]
pub struct BufferSurface {
    text: String,
    focused: bool,
}

impl BufferSurface {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            focused: false,
        }
    }

    #[cfg(test)]
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl TextSurface for BufferSurface {
    fn get_text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) -> Result<(), PersistError> {
        self.text = text.to_string();
        Ok(())
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn describe(&self) -> String {
        "buffer".to_string()
    }
}

/// Text mirrored to a file, so an external editor can work on it between
/// commands. Reads always go to disk; the last good read is kept as fallback.
#[derive(Debug)]
pub struct FileSurface {
    path: PathBuf,
    cached: std::sync::Mutex<String>,
}

impl FileSurface {
    /// Opens `path`, treating a missing file as empty.
    pub fn open(path: &Path) -> Result<Self, PersistError> {
        let initial = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            cached: std::sync::Mutex::new(initial),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn remember(&self, text: &str) {
        if let Ok(mut cached) = self.cached.lock() {
            text.clone_into(&mut *cached);
        }
    }

    fn last_known(&self) -> String {
        self.cached
            .lock()
            .map(|cached| cached.clone())
            .unwrap_or_default()
    }
}

impl TextSurface for FileSurface {
    fn get_text(&self) -> String {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                self.remember(&text);
                text
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => {
                sojson_warn!("Failed to read {:?}: {}", self.path, err);
                self.last_known()
            }
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), PersistError> {
        write_atomically(&self.path, text)?;
        self.remember(text);
        Ok(())
    }

    fn focus(&mut self) {
        sojson_debug!("focus on {:?}", self.path);
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_round_trips_text_and_focus() {
        let mut surface = BufferSurface::new("a");
        surface.set_text("{}").unwrap();
        surface.focus();

        assert_eq!(surface.get_text(), "{}");
        assert!(surface.is_focused());
    }

    #[test]
    fn file_surface_sees_external_edits_and_writes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, "{\"a\":1}").unwrap();

        let mut surface = FileSurface::open(&path).unwrap();
        assert_eq!(surface.get_text(), "{\"a\":1}");

        fs::write(&path, "[1]").unwrap();
        assert_eq!(surface.get_text(), "[1]");

        surface.set_text("[\n  1\n]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[\n  1\n]");
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let surface = FileSurface::open(&dir.path().join("new.json")).unwrap();
        assert_eq!(surface.get_text(), "");
    }
}
