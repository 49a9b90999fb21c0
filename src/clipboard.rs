//! Clipboard access.
//!
//! The UI reads the clipboard when the intake dialog opens or when batch links
//! are pulled from it, and writes to it for the "Copy ..." commands.

use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard error: {0}")]
    Backend(String),

    #[error("clipboard has no text")]
    NoText,
}

pub trait Clipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError>;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(|error| ClipboardError::Backend(error.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Err(ClipboardError::NoText),
            Err(error) => Err(ClipboardError::Backend(error.to_string())),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|error| ClipboardError::Backend(error.to_string()))
    }
}

/// Process-local clipboard, used when no desktop clipboard is reachable (e.g. over SSH) and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Arc::new(Mutex::new(Some(text.to_string()))),
        }
    }

    /// Current contents, if any.
    pub fn contents(&self) -> Option<String> {
        self.text.lock().ok().and_then(|text| text.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.contents().ok_or(ClipboardError::NoText)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .text
            .lock()
            .map_err(|_| ClipboardError::Backend("clipboard lock poisoned".to_string()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

/// Open the desktop clipboard, falling back to a process-local one.
pub fn open_clipboard() -> Box<dyn Clipboard> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            log::warn!("Falling back to in-memory clipboard: {}", e);
            Box::new(MemoryClipboard::new())
        }
    }
}
