//! Clipboard domain models.
mod detect;
mod edit;
mod item;
mod payload;

pub use detect::{looks_like_code, normalize_json};
pub use edit::ItemEdit;
pub use item::{ClipboardItem, ContentType, IMAGE_CONTENT_MARKER, PLACEHOLDER_CONTENT};
pub use payload::{asset_file_name, ImagePayload};
