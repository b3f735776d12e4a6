use ac_core::clipboard::{normalize_json, ClipboardItem, ContentType};
use ac_core::ids::ItemId;
use ac_core::settings::SaveMode;

/// Kind shown in the status line for the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLabel {
    Text,
    Code,
    Json,
    Image,
}

impl ContentLabel {
    pub fn of(item: &ClipboardItem) -> Self {
        match item.content_type {
            ContentType::Image => ContentLabel::Image,
            _ if normalize_json(&item.content).is_some() => ContentLabel::Json,
            _ if item.is_code => ContentLabel::Code,
            _ => ContentLabel::Text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentLabel::Text => "TEXT",
            ContentLabel::Code => "CODE",
            ContentLabel::Json => "JSON",
            ContentLabel::Image => "IMG",
        }
    }
}

/// `"<LABEL> - <MODE>"`, or just the mode when nothing is selected.
pub fn status_line(current: Option<&ClipboardItem>, mode: SaveMode) -> String {
    match current {
        Some(item) => format!("{} - {}", ContentLabel::of(item).as_str(), mode.label()),
        None => mode.label().to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub id: ItemId,
    pub quick_key: Option<u8>,
    pub summary: String,
    pub is_pinned: bool,
    pub is_placeholder: bool,
}

impl SlotView {
    pub fn of(item: &ClipboardItem) -> Self {
        Self {
            id: item.id.clone(),
            quick_key: item.quick_key,
            summary: if item.is_placeholder() {
                item.content.clone()
            } else {
                item.display_summary()
            },
            is_pinned: item.is_pinned,
            is_placeholder: item.is_placeholder(),
        }
    }
}

/// Read-only state for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreSnapshot {
    pub slots: Vec<SlotView>,
    pub current: Option<ClipboardItem>,
    pub status: String,
    pub visible: bool,
    pub monitoring: bool,
    pub image_preview_visible: bool,
    pub save_button_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn labels_follow_content_kind() {
        let now = Local::now();
        assert_eq!(ContentLabel::of(&ClipboardItem::image(now)), ContentLabel::Image);
        assert_eq!(
            ContentLabel::of(&ClipboardItem::text("{\n  \"a\": 1\n}", now)),
            ContentLabel::Json
        );
        let mut code = ClipboardItem::text("let x = 1;", now);
        code.is_code = true;
        assert_eq!(ContentLabel::of(&code), ContentLabel::Code);
        assert_eq!(ContentLabel::of(&ClipboardItem::text("hi", now)), ContentLabel::Text);
    }

    #[test]
    fn status_line_combines_label_and_mode() {
        let item = ClipboardItem::text("hi", Local::now());
        assert_eq!(status_line(Some(&item), SaveMode::Auto), "TEXT - AUTO-SAVE");
        assert_eq!(status_line(None, SaveMode::Manual), "MANUAL-SAVE");
    }

    #[test]
    fn placeholder_slots_show_waiting_text() {
        let view = SlotView::of(&ClipboardItem::placeholder(Local::now()));
        assert!(view.is_placeholder);
        assert_eq!(view.summary, "Waiting Copy");
    }
}
