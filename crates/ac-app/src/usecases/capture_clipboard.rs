use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ac_core::clipboard::{looks_like_code, ClipboardItem, ImagePayload};
use ac_core::ports::{ClipboardAccessError, ClockPort, SystemClipboardPort};
use chrono::{DateTime, Local};
use tracing::{debug, warn};

/// Attempts per clipboard-change signal, first try included.
pub const CAPTURE_ATTEMPTS: u32 = 5;
pub const CAPTURE_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Turns the current clipboard contents into a classified item.
///
/// Text wins over images when both are present. Images are captured as a
/// marker only; the bitmap comes from [`CaptureClipboard::read_image_payload`].
/// Timestamps are strictly increasing across calls on one instance, even
/// when the wall clock stalls or steps back.
pub struct CaptureClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
    clock: Arc<dyn ClockPort>,
    last_ms: AtomicI64,
}

impl CaptureClipboard {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            clipboard,
            clock,
            last_ms: AtomicI64::new(i64::MIN),
        }
    }

    /// Never fails: lock contention is retried, anything else yields `None`.
    #[tracing::instrument(name = "usecase.capture_clipboard.execute", skip(self))]
    pub async fn execute(&self) -> Option<ClipboardItem> {
        let item = self.with_retry(|| self.read_once()).await?;
        debug!(
            item_id = %item.id,
            content_type = ?item.content_type,
            is_code = item.is_code,
            "clipboard captured"
        );
        Some(item)
    }

    /// Fetches the bitmap behind an image capture, under the same retry policy.
    #[tracing::instrument(name = "usecase.capture_clipboard.read_image_payload", skip(self))]
    pub async fn read_image_payload(&self) -> Option<ImagePayload> {
        let payload = self.with_retry(|| self.clipboard.read_image()).await?;
        debug!(bytes = payload.len(), "clipboard image read");
        Some(payload)
    }

    async fn with_retry<T>(
        &self,
        mut read: impl FnMut() -> Result<Option<T>, ClipboardAccessError>,
    ) -> Option<T> {
        for attempt in 1..=CAPTURE_ATTEMPTS {
            match read() {
                Ok(value) => return value,
                Err(e) if e.is_transient() => {
                    if attempt < CAPTURE_ATTEMPTS {
                        debug!(attempt, "clipboard locked, retrying");
                        tokio::time::sleep(CAPTURE_RETRY_DELAY).await;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "clipboard read failed");
                    return None;
                }
            }
        }

        debug!(attempts = CAPTURE_ATTEMPTS, "clipboard stayed locked, read skipped");
        None
    }

    fn read_once(&self) -> Result<Option<ClipboardItem>, ClipboardAccessError> {
        if let Some(text) = self.clipboard.read_text()? {
            if !text.trim().is_empty() {
                let is_code = looks_like_code(&text);
                let mut item = ClipboardItem::text(text, self.next_timestamp());
                item.is_code = is_code;
                return Ok(Some(item));
            }
        }

        if self.clipboard.has_image()? {
            return Ok(Some(ClipboardItem::image(self.next_timestamp())));
        }

        Ok(None)
    }

    fn next_timestamp(&self) -> DateTime<Local> {
        let now = self.clock.now_ms();
        let mut assigned = now;
        let _ = self
            .last_ms
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                assigned = now.max(last.saturating_add(1));
                Some(assigned)
            });

        DateTime::from_timestamp_millis(assigned)
            .map(|utc| utc.with_timezone(&Local))
            .unwrap_or_else(Local::now)
    }
}
