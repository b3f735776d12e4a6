use std::path::PathBuf;

use ac_core::clipboard::ItemEdit;
use ac_core::ids::ItemId;
use ac_core::ports::ClipboardChangeHandler;
use ac_core::settings::Settings;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::snapshot::CoreSnapshot;
use crate::usecases::{ExportFormat, ExportScope};

const CORE_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug)]
pub enum CoreCommand {
    /// A clipboard change was observed.
    CaptureNow,
    CopyCurrent,
    SaveCurrent,
    Delete { id: ItemId },
    ClearAll,
    TogglePin { id: ItemId },
    /// 1-based, matching the quick key.
    LoadSlot { position: usize },
    SetSlotCount { count: i64 },
    ToggleVisibility,
    ToggleMonitoring,
    ApplyEdits { edits: Vec<ItemEdit> },
    RefreshSettings { settings: Settings },
    /// Replies with the number of exported items once the file is written.
    Export {
        format: ExportFormat,
        scope: ExportScope,
        dest: PathBuf,
        reply: oneshot::Sender<anyhow::Result<usize>>,
    },
    Snapshot { reply: oneshot::Sender<CoreSnapshot> },
    Shutdown,
}

pub type CoreCommandSender = mpsc::Sender<CoreCommand>;
pub type CoreCommandReceiver = mpsc::Receiver<CoreCommand>;

pub fn core_channel() -> (CoreCommandSender, CoreCommandReceiver) {
    mpsc::channel(CORE_CHANNEL_CAPACITY)
}

/// Turns watcher notifications into `CaptureNow` commands.
///
/// Runs on the watcher's blocking thread, so it only ever `try_send`s.
pub struct ChannelClipboardChangeHandler {
    tx: CoreCommandSender,
}

impl ChannelClipboardChangeHandler {
    pub fn new(tx: CoreCommandSender) -> Self {
        Self { tx }
    }
}

impl ClipboardChangeHandler for ChannelClipboardChangeHandler {
    fn on_clipboard_changed(&self) {
        match self.tx.try_send(CoreCommand::CaptureNow) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("core command queue full, clipboard change dropped");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                debug!("core runtime stopped, clipboard change ignored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn change_handler_enqueues_capture() {
        let (tx, mut rx) = core_channel();
        let handler = ChannelClipboardChangeHandler::new(tx);

        handler.on_clipboard_changed();

        assert!(matches!(rx.recv().await, Some(CoreCommand::CaptureNow)));
    }

    #[test]
    fn change_handler_tolerates_closed_channel() {
        let (tx, rx) = core_channel();
        drop(rx);
        ChannelClipboardChangeHandler::new(tx).on_clipboard_changed();
    }
}
