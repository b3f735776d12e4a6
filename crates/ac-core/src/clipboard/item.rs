//! The clipboard item model shared by capture, slots and history.
//!
//! A [`ClipboardItem`] is the unit of history, deduplication and slot
//! membership. Identity for deduplication is the `(content, content_type)`
//! pair, never the id: recapturing the same text yields a new id but replaces
//! the older entry.
//!
//! Placeholders, which pad the slot view up to the configured slot count, never
//! reach disk. `quick_key` is memory-only and skipped by serde.
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

use super::edit::ItemEdit;

/// Content marker for an image item whose bitmap has not been written yet.
pub const IMAGE_CONTENT_MARKER: &str = "[Image Content]";

/// Text shown in an empty slot.
pub const PLACEHOLDER_CONTENT: &str = "Waiting Copy";

const SUMMARY_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Text,
    Image,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardItem {
    pub id: ItemId,
    pub content_type: ContentType,

    /// Text: the raw string. Image: asset filename. File: a path reference.
    pub content: String,

    /// User override of the display summary
    #[serde(default)]
    pub title: Option<String>,

    pub timestamp: DateTime<Local>,

    #[serde(default)]
    pub is_code: bool,

    #[serde(default)]
    pub is_pinned: bool,

    /// Slot shortcut (1..=8), recomputed by the slot view
    #[serde(skip)]
    pub quick_key: Option<u8>,
}

impl ClipboardItem {
    pub fn new(content_type: ContentType, content: String, timestamp: DateTime<Local>) -> Self {
        Self {
            id: ItemId::new(),
            content_type,
            content,
            title: None,
            timestamp,
            is_code: false,
            is_pinned: false,
            quick_key: None,
        }
    }

    pub fn text(content: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self::new(ContentType::Text, content.into(), timestamp)
    }

    /// An image item whose bitmap lives with the clipboard collaborator.
    pub fn image(timestamp: DateTime<Local>) -> Self {
        Self::new(
            ContentType::Image,
            IMAGE_CONTENT_MARKER.to_string(),
            timestamp,
        )
    }

    pub fn placeholder(timestamp: DateTime<Local>) -> Self {
        Self {
            id: ItemId::placeholder(),
            ..Self::text(PLACEHOLDER_CONTENT, timestamp)
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_placeholder()
    }

    /// Text items with only whitespace are never stored.
    pub fn is_blank_text(&self) -> bool {
        self.content_type == ContentType::Text && self.content.trim().is_empty()
    }

    /// Deduplication key comparison. Placeholders match nothing.
    pub fn same_content(&self, other: &ClipboardItem) -> bool {
        !self.is_placeholder()
            && !other.is_placeholder()
            && self.content_type == other.content_type
            && self.content == other.content
    }

    /// Merge an editor change into this item, returning whether anything changed.
    ///
    /// An edit that would blank out a Text item is dropped as a whole.
    pub fn apply_edit(&mut self, edit: &ItemEdit) -> bool {
        if self.id != edit.id {
            return false;
        }
        if self.content_type == ContentType::Text && edit.content.trim().is_empty() {
            return false;
        }
        let title = edit.title.clone().filter(|t| !t.is_empty());
        let mut changed = false;
        if self.title != title {
            self.title = title;
            changed = true;
        }
        if self.content != edit.content {
            self.content = edit.content.clone();
            changed = true;
        }
        changed
    }

    /// One-line summary used by slot tabs and timelines.
    pub fn display_summary(&self) -> String {
        if let Some(title) = self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            return title.to_string();
        }
        if self.content_type == ContentType::Image {
            return "[COPY IMAGE]".to_string();
        }
        if self.content.trim().is_empty() {
            return "(Empty)".to_string();
        }

        let flat = self.content.replace("\r\n", " ").replace('\n', " ");
        let flat = flat.trim();
        if flat.chars().count() > SUMMARY_MAX_CHARS {
            let head: String = flat.chars().take(SUMMARY_MAX_CHARS).collect();
            format!("{head}...")
        } else {
            flat.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Local> {
        Local::now()
    }

    #[test]
    fn placeholders_never_match_for_dedup() {
        let a = ClipboardItem::placeholder(now());
        let b = ClipboardItem::placeholder(now());
        assert!(!a.same_content(&b));

        let real = ClipboardItem::text(PLACEHOLDER_CONTENT, now());
        assert!(!real.same_content(&a));
    }

    #[test]
    fn same_content_requires_matching_type() {
        let text = ClipboardItem::text("x.png", now());
        let mut image = ClipboardItem::image(now());
        image.content = "x.png".to_string();
        assert!(!text.same_content(&image));
        assert!(text.same_content(&ClipboardItem::text("x.png", now())));
    }

    #[test]
    fn summary_prefers_title_then_truncates_content() {
        let mut item = ClipboardItem::text("line one\nline two", now());
        assert_eq!(item.display_summary(), "line one line two");

        item.title = Some("  ".to_string());
        assert_eq!(item.display_summary(), "line one line two");

        item.title = Some("Renamed".to_string());
        assert_eq!(item.display_summary(), "Renamed");

        let long = ClipboardItem::text("é".repeat(60), now());
        let summary = long.display_summary();
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), 53);
    }

    #[test]
    fn summary_for_images_and_blank_text() {
        assert_eq!(ClipboardItem::image(now()).display_summary(), "[COPY IMAGE]");
        assert_eq!(ClipboardItem::text("   ", now()).display_summary(), "(Empty)");
    }

    #[test]
    fn quick_key_is_not_serialized() {
        let mut item = ClipboardItem::text("hello", now());
        item.quick_key = Some(2);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("quickKey").is_none());
        assert_eq!(json["contentType"], "Text");
        assert_eq!(json["isPinned"], false);

        let back: ClipboardItem = serde_json::from_value(json).unwrap();
        assert_eq!(back.quick_key, None);
        assert_eq!(back.content, "hello");
    }

    #[test]
    fn apply_edit_only_touches_matching_id() {
        let mut item = ClipboardItem::text("before", now());
        let other = ItemEdit {
            id: ItemId::new(),
            title: None,
            content: "after".to_string(),
        };
        assert!(!item.apply_edit(&other));

        let edit = ItemEdit {
            id: item.id.clone(),
            title: Some("Title".to_string()),
            content: "after".to_string(),
        };
        assert!(item.apply_edit(&edit));
        assert_eq!(item.content, "after");
        assert_eq!(item.title.as_deref(), Some("Title"));
        assert!(!item.apply_edit(&edit));
    }

    #[test]
    fn apply_edit_refuses_to_blank_text() {
        let mut item = ClipboardItem::text("keep me", now());
        let edit = ItemEdit {
            id: item.id.clone(),
            title: Some("New title".to_string()),
            content: " \n ".to_string(),
        };

        assert!(!item.apply_edit(&edit));
        assert_eq!(item.content, "keep me");
        assert_eq!(item.title, None);
    }
}
