//! JSON file history store.
//!
//! The whole history lives in one indented JSON array. Every write is a full
//! snapshot written to `<file>.tmp` and renamed over the real file. One async
//! mutex serializes every load and save; operations that read, modify and
//! write hold it across all three steps.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use ac_core::clipboard::{ClipboardItem, ContentType, ImagePayload, ItemEdit};
use ac_core::ids::ItemId;
use ac_core::ports::history::HISTORY_CAPACITY;
use ac_core::ports::{AppendOutcome, HistoryError, HistoryStorePort, RejectReason};

use super::assets::ImageAssetStore;

pub struct FileHistoryStore {
    path: PathBuf,
    assets: ImageAssetStore,
    lock: Mutex<()>,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            assets: ImageAssetStore::new(asset_dir),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn assets(&self) -> &ImageAssetStore {
        &self.assets
    }

    /// Caller must hold `lock`.
    async fn read_locked(&self) -> Vec<ClipboardItem> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read history, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ClipboardItem>>(&content) {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history file is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Caller must hold `lock`.
    async fn write_locked(&self, items: &[ClipboardItem]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create history dir failed: {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(items).context("serialize history failed")?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp history failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp history to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    /// Save failures stop here as warnings.
    async fn persist_locked(&self, items: &[ClipboardItem]) -> bool {
        match self.write_locked(items).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = ?e, entries = items.len(), "failed to save history");
                false
            }
        }
    }
}

#[async_trait]
impl HistoryStorePort for FileHistoryStore {
    async fn load(&self) -> Vec<ClipboardItem> {
        let _guard = self.lock.lock().await;
        self.read_locked().await
    }

    #[tracing::instrument(
        name = "history.append",
        skip(self, item, image),
        fields(item_id = %item.id, content_type = ?item.content_type)
    )]
    async fn append(
        &self,
        mut item: ClipboardItem,
        image: Option<ImagePayload>,
    ) -> Result<AppendOutcome, HistoryError> {
        if item.is_placeholder() {
            return Ok(AppendOutcome::Rejected(RejectReason::Placeholder));
        }
        if item.is_blank_text() {
            return Ok(AppendOutcome::Rejected(RejectReason::EmptyText));
        }

        // asset names are unique per item id, so the write needs no lock
        if item.content_type == ContentType::Image {
            if let Some(payload) = image.as_ref() {
                item.content = self.assets.write(&item.id, payload).await?;
            }
        }

        let _guard = self.lock.lock().await;
        let mut items = self.read_locked().await;
        items.retain(|existing| !existing.same_content(&item));
        items.insert(0, item.clone());
        if items.len() > HISTORY_CAPACITY {
            let dropped = items.len() - HISTORY_CAPACITY;
            items.truncate(HISTORY_CAPACITY);
            debug!(dropped, "history trimmed to capacity");
        }
        self.persist_locked(&items).await;

        Ok(AppendOutcome::Stored(item))
    }

    async fn delete_by_id(&self, id: &ItemId) -> bool {
        let _guard = self.lock.lock().await;
        let mut items = self.read_locked().await;
        let Some(pos) = items.iter().position(|i| &i.id == id) else {
            return false;
        };
        let removed = items.remove(pos);
        let saved = self.persist_locked(&items).await;

        if removed.content_type == ContentType::Image {
            self.assets.remove(&removed.content).await;
        }
        info!(item_id = %id, saved, "history item deleted");
        saved
    }

    async fn clear_all(&self) -> bool {
        let _guard = self.lock.lock().await;
        self.assets.remove_all().await;
        let saved = self.persist_locked(&[]).await;
        info!(saved, "history cleared");
        saved
    }

    async fn save_full(&self, items: Vec<ClipboardItem>) -> bool {
        let items: Vec<ClipboardItem> = items
            .into_iter()
            .filter(|i| !i.is_placeholder() && !i.is_blank_text())
            .collect();
        let _guard = self.lock.lock().await;
        self.persist_locked(&items).await
    }

    async fn apply_edits(&self, edits: Vec<ItemEdit>) -> usize {
        if edits.is_empty() {
            return 0;
        }

        let _guard = self.lock.lock().await;
        let mut items = self.read_locked().await;
        let mut changed = 0;
        for edit in &edits {
            if let Some(item) = items.iter_mut().find(|i| i.id == edit.id) {
                if item.apply_edit(edit) {
                    changed += 1;
                }
            }
        }

        if changed > 0 {
            self.persist_locked(&items).await;
        }
        debug!(submitted = edits.len(), changed, "history edits applied");
        changed
    }

    fn resolve_asset_path(&self, content: &str) -> PathBuf {
        self.assets.resolve(content)
    }
}
