use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use ac_core::clipboard::{normalize_json, ClipboardItem, ContentType, ImagePayload, ItemEdit};
use ac_core::ids::ItemId;
use ac_core::ports::{AppendOutcome, HistoryError, HistoryStorePort, SystemClipboardPort};
use ac_core::settings::{Settings, SlotCount};
use ac_core::slots::{CaptureEffect, SlotManager};
use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::snapshot::{status_line, CoreSnapshot, SlotView};
use crate::deps::AppDeps;
use crate::usecases::{CaptureClipboard, ExportFormat, ExportHistory, ExportScope};

/// Background append; dropping the handle leaves the save running.
pub type SaveHandle = JoinHandle<Result<AppendOutcome, HistoryError>>;

/// Background write-back of the current item to the system clipboard.
pub type CopyHandle = JoinHandle<Result<()>>;

/// Foreground state: slot view, current item and flags.
///
/// Every method returns without waiting on disk. Work that persists is
/// spawned and its handle handed back, which callers are free to drop.
pub struct Orchestrator {
    clipboard: Arc<dyn SystemClipboardPort>,
    history: Arc<dyn HistoryStorePort>,
    capture: CaptureClipboard,
    export: Arc<ExportHistory>,
    slots: SlotManager,
    settings: Settings,
    current: Option<ClipboardItem>,
    /// Bitmaps captured this session, for items still in the slots or current
    images: HashMap<ItemId, ImagePayload>,
    visible: bool,
    monitoring: bool,
}

impl Orchestrator {
    pub fn new(deps: &AppDeps, settings: Settings) -> Self {
        Self {
            clipboard: Arc::clone(&deps.clipboard),
            history: Arc::clone(&deps.history),
            capture: CaptureClipboard::new(Arc::clone(&deps.clipboard), Arc::clone(&deps.clock)),
            export: Arc::new(ExportHistory::new(
                Arc::clone(&deps.history),
                Arc::clone(&deps.clock),
            )),
            slots: SlotManager::new(settings.slot_count()),
            settings,
            current: None,
            images: HashMap::new(),
            visible: true,
            monitoring: true,
        }
    }

    /// Seeds the slot view from disk. Startup only.
    pub async fn load_initial(&mut self) {
        let history = self.history.load().await;
        let count = history.len();
        self.slots.load_initial(history);
        self.current = self
            .slots
            .items()
            .iter()
            .find(|s| !s.is_placeholder())
            .cloned();
        self.images.clear();
        info!(history_entries = count, "slot view seeded from history");
    }

    pub fn slots(&self) -> &SlotManager {
        &self.slots
    }

    pub fn current(&self) -> Option<&ClipboardItem> {
        self.current.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring
    }

    /// Handles one clipboard-change signal.
    ///
    /// Returns the autosave handle when an append was spawned.
    #[tracing::instrument(name = "orchestrator.capture_now", skip(self))]
    pub async fn capture_now(&mut self) -> Option<SaveHandle> {
        if !self.monitoring {
            debug!("monitoring paused, clipboard change ignored");
            return None;
        }

        let mut item = self.capture.execute().await?;
        let mut image = None;

        match item.content_type {
            ContentType::Image => match self.capture.read_image_payload().await {
                Some(payload) => {
                    item.content = payload.file_name(&item.id);
                    image = Some(payload);
                }
                None => {
                    debug!("clipboard image could not be read, change dropped");
                    return None;
                }
            },
            ContentType::Text => {
                if let Some(pretty) = normalize_json(&item.content) {
                    item.content = pretty;
                }
            }
            ContentType::File => {}
        }

        let save = if self.settings.autosave_enabled {
            Some(self.spawn_append(item.clone(), image.clone()))
        } else {
            None
        };

        self.current = Some(item.clone());
        let item_id = item.id.clone();
        if let Some(payload) = image {
            self.images.insert(item_id.clone(), payload);
        }
        let effect = self.slots.on_captured(item);
        if effect == CaptureEffect::PinnedDuplicate {
            debug!(item_id = %item_id, "content already pinned, slot view unchanged");
        }
        self.prune_images();

        save
    }

    /// Writes the current item back to the system clipboard.
    ///
    /// Returns `None` when there is nothing to copy. Images restore from the
    /// session bitmap when there is one, otherwise from the stored asset.
    pub fn copy_current(&self) -> Option<CopyHandle> {
        let item = self.current.clone().filter(|i| !i.is_placeholder())?;
        let image = self.images.get(&item.id).cloned();
        let clipboard = Arc::clone(&self.clipboard);
        let history = Arc::clone(&self.history);

        Some(tokio::spawn(async move {
            let result = write_back(clipboard.as_ref(), history.as_ref(), &item, image).await;
            match &result {
                Ok(()) => debug!(item_id = %item.id, "current item copied to clipboard"),
                Err(e) => warn!(item_id = %item.id, error = ?e, "failed to copy current item"),
            }
            result
        }))
    }

    /// Explicit save, used in manual-save mode.
    pub fn save_current(&self) -> Option<SaveHandle> {
        let item = self.current.as_ref().filter(|i| !i.is_placeholder())?;
        let image = match item.content_type {
            ContentType::Image => self.images.get(&item.id).cloned(),
            _ => None,
        };
        Some(self.spawn_append(item.clone(), image))
    }

    pub fn delete(&mut self, id: &ItemId) -> JoinHandle<bool> {
        self.slots.remove(id);
        if self.current.as_ref().is_some_and(|c| &c.id == id) {
            self.current = None;
        }
        self.prune_images();

        let history = Arc::clone(&self.history);
        let id = id.clone();
        tokio::spawn(async move { history.delete_by_id(&id).await })
    }

    pub fn clear_all(&mut self) -> JoinHandle<bool> {
        self.slots.clear();
        self.current = None;
        self.images.clear();

        let history = Arc::clone(&self.history);
        tokio::spawn(async move { history.clear_all().await })
    }

    /// Returns the new pin state, or `None` for unknown ids.
    pub fn toggle_pin(&mut self, id: &ItemId) -> Option<bool> {
        let pinned = self.slots.toggle_pin(id)?;
        if let Some(current) = self.current.as_mut().filter(|c| &c.id == id) {
            current.is_pinned = pinned;
        }
        debug!(item_id = %id, pinned, "pin toggled");
        Some(pinned)
    }

    /// Shows a slot as the current item without touching the clipboard.
    pub fn load_slot(&mut self, position: usize) -> bool {
        let Some(item) = self.slots.get(position).filter(|s| !s.is_placeholder()) else {
            return false;
        };
        self.current = Some(item.clone());
        self.prune_images();
        true
    }

    pub fn set_slot_count(&mut self, count: i64) {
        let slot_count = SlotCount::new(count);
        self.settings.slot_count = slot_count.get() as i64;
        self.slots.set_slot_count(slot_count);
        self.prune_images();
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn toggle_monitoring(&mut self) -> bool {
        self.monitoring = !self.monitoring;
        info!(monitoring = self.monitoring, "clipboard monitoring toggled");
        self.monitoring
    }

    /// Mirrors editor changes into the view and merges them into history.
    pub fn apply_edits(&mut self, edits: Vec<ItemEdit>) -> JoinHandle<usize> {
        for edit in &edits {
            self.slots.update_fields(edit);
            if let Some(current) = self.current.as_mut() {
                current.apply_edit(edit);
            }
        }

        let history = Arc::clone(&self.history);
        tokio::spawn(async move { history.apply_edits(edits).await })
    }

    pub fn refresh_settings(&mut self, settings: Settings) {
        self.slots.set_slot_count(settings.slot_count());
        self.prune_images();
        info!(
            autosave = settings.autosave_enabled,
            slot_count = settings.slot_count().get(),
            "settings applied"
        );
        self.settings = settings;
    }

    /// Writes the persisted history to `dest` off the foreground task.
    pub fn export(
        &self,
        format: ExportFormat,
        scope: ExportScope,
        dest: PathBuf,
    ) -> JoinHandle<Result<usize>> {
        let export = Arc::clone(&self.export);
        tokio::spawn(async move { export.execute(format, scope, &dest).await })
    }

    /// Suggested export file name for the current local date.
    pub fn export_file_name(&self, format: ExportFormat, scope: ExportScope) -> String {
        self.export.default_file_name(format, scope)
    }

    pub fn snapshot(&self) -> CoreSnapshot {
        let current_is_image = self
            .current
            .as_ref()
            .is_some_and(|c| c.content_type == ContentType::Image);

        CoreSnapshot {
            slots: self.slots.items().iter().map(SlotView::of).collect(),
            current: self.current.clone(),
            status: status_line(self.current.as_ref(), self.settings.save_mode()),
            visible: self.visible,
            monitoring: self.monitoring,
            image_preview_visible: current_is_image && self.settings.image_preview_enabled,
            save_button_visible: !self.settings.autosave_enabled,
        }
    }

    fn prune_images(&mut self) {
        if self.images.is_empty() {
            return;
        }
        let slots = &self.slots;
        let current = self.current.as_ref().map(|c| &c.id);
        self.images
            .retain(|id, _| current == Some(id) || slots.find(id).is_some());
    }

    fn spawn_append(&self, item: ClipboardItem, image: Option<ImagePayload>) -> SaveHandle {
        let history = Arc::clone(&self.history);
        tokio::spawn(async move {
            let item_id = item.id.clone();
            let result = history.append(item, image).await;
            match &result {
                Ok(AppendOutcome::Stored(_)) => debug!(item_id = %item_id, "item saved"),
                Ok(AppendOutcome::Rejected(reason)) => {
                    debug!(item_id = %item_id, ?reason, "item not saved")
                }
                Err(e) => warn!(item_id = %item_id, error = %e, "failed to save item"),
            }
            result
        })
    }
}

async fn write_back(
    clipboard: &dyn SystemClipboardPort,
    history: &dyn HistoryStorePort,
    item: &ClipboardItem,
    image: Option<ImagePayload>,
) -> Result<()> {
    match item.content_type {
        ContentType::Image => {
            let payload = match image {
                Some(payload) => payload,
                None => {
                    let path = history.resolve_asset_path(&item.content);
                    let bytes = tokio::fs::read(&path)
                        .await
                        .with_context(|| format!("read image asset failed: {}", path.display()))?;
                    ImagePayload::png(bytes)
                }
            };
            clipboard
                .write_image(&payload)
                .context("write image to clipboard failed")?;
        }
        ContentType::Text | ContentType::File => {
            clipboard
                .write_text(&item.content)
                .context("write text to clipboard failed")?;
        }
    }
    Ok(())
}
