//! History store port
//!
//! The durable, bounded, deduplicated record of captured items. All
//! operations on one store are serialized; read-modify-write operations hold
//! that serialization for their whole duration.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::clipboard::{ClipboardItem, ImagePayload, ItemEdit};
use crate::ids::ItemId;

/// Maximum number of entries kept on disk.
pub const HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmptyText,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppendOutcome {
    /// The item as stored, with its asset filename filled in for images.
    Stored(ClipboardItem),
    Rejected(RejectReason),
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image payload is empty")]
    EmptyPayload,

    #[error("image payload is not a recognized image format")]
    UnrecognizedFormat,

    #[error("failed to write image asset {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Asset(#[from] AssetError),
}

#[async_trait]
pub trait HistoryStorePort: Send + Sync {
    /// Full history, newest first. Any read or parse failure yields an empty list.
    async fn load(&self) -> Vec<ClipboardItem>;

    async fn append(
        &self,
        item: ClipboardItem,
        image: Option<ImagePayload>,
    ) -> Result<AppendOutcome, HistoryError>;

    async fn delete_by_id(&self, id: &ItemId) -> bool;

    async fn clear_all(&self) -> bool;

    /// Overwrites the whole history. Placeholders are dropped.
    async fn save_full(&self, items: Vec<ClipboardItem>) -> bool;

    /// Merges editor changes by id and returns how many items changed.
    async fn apply_edits(&self, edits: Vec<ItemEdit>) -> usize;

    /// Absolute path of an image item's asset.
    fn resolve_asset_path(&self, content: &str) -> PathBuf;
}
