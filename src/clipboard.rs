//! Clipboard access.
//!
//! [`ClipboardAccess`] is the seam the popup actions talk to; the system
//! implementation is a thin wrapper around the `arboard` crate. On some
//! platforms or in headless CI environments clipboard initialization may
//! fail, so every operation returns a [`ClipboardError`] instead of panicking.

use thiserror::Error;

/// Failure talking to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard init: {0}")]
    Init(String),
    #[error("clipboard get: {0}")]
    Read(String),
    #[error("clipboard set: {0}")]
    Write(String),
}

/// Read/write text on a clipboard.
pub trait ClipboardAccess {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: ClipboardAccess + ?Sized> ClipboardAccess for &mut T {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        (**self).read_text()
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// The OS clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(|e| ClipboardError::Init(e.to_string()))?;
        Ok(SystemClipboard { inner })
    }
}

impl ClipboardAccess for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.inner
            .get_text()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Copy `s` to the system clipboard.
pub fn copy_to_clipboard(s: &str) -> Result<(), ClipboardError> {
    SystemClipboard::new()?.write_text(s)
}

/// Read the current text content of the system clipboard.
pub fn paste_from_clipboard() -> Result<String, ClipboardError> {
    SystemClipboard::new()?.read_text()
}
