//! OS clipboard change notifications.
//!
//! clipboard-rs blocks a thread inside `start_watch`, so the watcher runs on
//! tokio's blocking pool. It only forwards a signal; reading the clipboard
//! is left to whoever handles the signal.

use std::sync::Arc;

use ac_core::ports::ClipboardChangeHandler;
use anyhow::Result;
use clipboard_rs::{
    ClipboardHandler, ClipboardWatcher as RSClipboardWatcher, ClipboardWatcherContext,
    WatcherShutdown,
};
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub struct ClipboardWatcher {
    handler: Arc<dyn ClipboardChangeHandler>,
}

impl ClipboardWatcher {
    pub fn new(handler: Arc<dyn ClipboardChangeHandler>) -> Self {
        Self { handler }
    }
}

impl ClipboardHandler for ClipboardWatcher {
    fn on_clipboard_change(&mut self) {
        debug!("clipboard change notification");
        self.handler.on_clipboard_changed();
    }
}

/// Running watcher thread and the channel that stops it.
pub struct WatcherHandle {
    join: JoinHandle<()>,
    shutdown: WatcherShutdown,
}

impl WatcherHandle {
    pub async fn stop(self) {
        self.shutdown.stop();
        if let Err(e) = self.join.await {
            tracing::warn!(error = %e, "clipboard watcher thread ended abnormally");
        }
    }
}

pub fn start_clipboard_watcher(handler: Arc<dyn ClipboardChangeHandler>) -> Result<WatcherHandle> {
    let mut watcher_ctx = ClipboardWatcherContext::new()
        .map_err(|e| anyhow::anyhow!("Failed to create watcher context: {}", e))?;

    let shutdown = watcher_ctx
        .add_handler(ClipboardWatcher::new(handler))
        .get_shutdown_channel();

    let join = tokio::task::spawn_blocking(move || {
        info!("start clipboard watch");
        watcher_ctx.start_watch();
        info!("clipboard watch stopped");
    });

    Ok(WatcherHandle { join, shutdown })
}
