//! System clipboard port
//!
//! The OS clipboard is shared with every other process on the machine, so
//! any call may find it held by someone else. Implementations report that
//! case as [`ClipboardAccessError::Locked`] and leave retrying to the caller.

use thiserror::Error;

use crate::clipboard::ImagePayload;

#[derive(Debug, Error)]
pub enum ClipboardAccessError {
    /// Another process holds the clipboard open. Worth retrying.
    #[error("clipboard is locked by another process")]
    Locked,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

impl ClipboardAccessError {
    pub fn is_transient(&self) -> bool {
        matches!(self, ClipboardAccessError::Locked)
    }
}

/// Synchronous access to the local clipboard.
///
/// Calls are short and blocking; the capture use case owns retry and backoff.
pub trait SystemClipboardPort: Send + Sync {
    /// Current text, or `None` when the clipboard holds no text.
    fn read_text(&self) -> Result<Option<String>, ClipboardAccessError>;

    fn has_image(&self) -> Result<bool, ClipboardAccessError>;

    /// Current image encoded as PNG, or `None` when there is no image.
    fn read_image(&self) -> Result<Option<ImagePayload>, ClipboardAccessError>;

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError>;

    fn write_image(&self, image: &ImagePayload) -> Result<(), ClipboardAccessError>;
}
