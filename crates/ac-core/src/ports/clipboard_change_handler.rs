//! Clipboard change handler port
//!
//! The platform watcher calls this from its own blocking thread whenever
//! the OS reports a clipboard change. Implementations must return quickly;
//! the actual read happens later on the orchestrator task.

pub trait ClipboardChangeHandler: Send + Sync {
    fn on_clipboard_changed(&self);
}
