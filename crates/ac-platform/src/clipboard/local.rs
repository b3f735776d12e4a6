use std::sync::{Arc, Mutex, MutexGuard};

use ac_core::clipboard::ImagePayload;
use ac_core::ports::{ClipboardAccessError, SystemClipboardPort};
use anyhow::Result;
use clipboard_rs::ClipboardContext;

use super::common::CommonClipboardImpl;

/// The user's clipboard, through clipboard-rs.
pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow::anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn ctx(&self) -> Result<MutexGuard<'_, ClipboardContext>, ClipboardAccessError> {
        self.inner
            .lock()
            .map_err(|_| ClipboardAccessError::Unavailable("clipboard context poisoned".into()))
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardAccessError> {
        CommonClipboardImpl::read_text(&*self.ctx()?)
    }

    fn has_image(&self) -> Result<bool, ClipboardAccessError> {
        CommonClipboardImpl::has_image(&*self.ctx()?)
    }

    fn read_image(&self) -> Result<Option<ImagePayload>, ClipboardAccessError> {
        CommonClipboardImpl::read_image(&*self.ctx()?)
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardAccessError> {
        CommonClipboardImpl::write_text(&*self.ctx()?, text)
    }

    fn write_image(&self, image: &ImagePayload) -> Result<(), ClipboardAccessError> {
        CommonClipboardImpl::write_image(&*self.ctx()?, image)
    }
}
