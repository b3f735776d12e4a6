//! Quick-access slot view.
//!
//! The slot view is a fixed-size window over the clipboard: pinned items
//! first, then the most recent captures. It never persists anything; the
//! history store is the durable record and the view is seeded from it once
//! at startup.
//!
//! Placeholders pad the view so the presentation always has exactly
//! `slot_count` entries to render. They are stripped before every dedup or
//! eviction pass and re-added afterwards.

use chrono::Local;

use crate::clipboard::{ClipboardItem, ItemEdit};
use crate::ids::ItemId;
use crate::settings::SlotCount;

/// What `on_captured` did with the new item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureEffect {
    Inserted,
    /// Same content already sits in a pinned slot; the view is unchanged.
    PinnedDuplicate,
}

#[derive(Debug, Clone)]
pub struct SlotManager {
    slots: Vec<ClipboardItem>,
    slot_count: SlotCount,
}

impl SlotManager {
    pub fn new(slot_count: SlotCount) -> Self {
        let mut manager = Self {
            slots: Vec::new(),
            slot_count,
        };
        manager.ensure_placeholders();
        manager.refresh_quick_keys();
        manager
    }

    pub fn slot_count(&self) -> SlotCount {
        self.slot_count
    }

    pub fn items(&self) -> &[ClipboardItem] {
        &self.slots
    }

    /// Slot at a 1-based position, matching the quick key shown for it.
    pub fn get(&self, position: usize) -> Option<&ClipboardItem> {
        position.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    pub fn find(&self, id: &ItemId) -> Option<&ClipboardItem> {
        self.slots
            .iter()
            .find(|s| !s.is_placeholder() && &s.id == id)
    }

    /// Seeds the view from history at startup.
    pub fn load_initial(&mut self, history: impl IntoIterator<Item = ClipboardItem>) {
        let mut recent: Vec<ClipboardItem> = history
            .into_iter()
            .filter(|item| !item.is_placeholder())
            .collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(self.slot_count.get());

        self.slots = recent;
        self.sort_pinned_first();
        self.ensure_placeholders();
        self.refresh_quick_keys();
    }

    /// Integrates one freshly captured item.
    pub fn on_captured(&mut self, item: ClipboardItem) -> CaptureEffect {
        self.strip_placeholders();

        if let Some(pos) = self.slots.iter().position(|s| s.same_content(&item)) {
            if self.slots[pos].is_pinned {
                self.ensure_placeholders();
                self.refresh_quick_keys();
                return CaptureEffect::PinnedDuplicate;
            }
            self.slots.remove(pos);
        }

        let insert_at = self.slots.iter().take_while(|s| s.is_pinned).count();
        self.slots.insert(insert_at, item);

        self.evict_unpinned_overflow();
        self.ensure_placeholders();
        self.refresh_quick_keys();
        CaptureEffect::Inserted
    }

    /// Flips the pin flag and re-sorts the whole view.
    ///
    /// Returns the new pin state, or `None` when no real slot has this id.
    pub fn toggle_pin(&mut self, id: &ItemId) -> Option<bool> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| !s.is_placeholder() && &s.id == id)?;
        slot.is_pinned = !slot.is_pinned;
        let pinned = slot.is_pinned;

        self.strip_placeholders();
        self.sort_pinned_first();
        self.ensure_placeholders();
        self.refresh_quick_keys();
        Some(pinned)
    }

    pub fn set_slot_count(&mut self, slot_count: SlotCount) {
        self.slot_count = slot_count;
        self.strip_placeholders();
        self.evict_unpinned_overflow();
        self.ensure_placeholders();
        self.refresh_quick_keys();
    }

    /// Drops a deleted item from the view.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.is_placeholder() || &s.id != id);
        let removed = self.slots.len() != before;
        if removed {
            self.strip_placeholders();
            self.ensure_placeholders();
            self.refresh_quick_keys();
        }
        removed
    }

    /// Empties the view down to placeholders.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.ensure_placeholders();
        self.refresh_quick_keys();
    }

    /// Mirrors an editor change onto the slot holding the same id.
    pub fn update_fields(&mut self, edit: &ItemEdit) -> bool {
        self.slots
            .iter_mut()
            .filter(|s| !s.is_placeholder())
            .any(|s| s.apply_edit(edit))
    }

    fn strip_placeholders(&mut self) {
        self.slots.retain(|s| !s.is_placeholder());
    }

    fn sort_pinned_first(&mut self) {
        // stable: equal keys keep their current relative order
        self.slots.sort_by(|a, b| {
            b.is_pinned
                .cmp(&a.is_pinned)
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
    }

    fn evict_unpinned_overflow(&mut self) {
        let max = self.slot_count.get();
        while self.slots.iter().filter(|s| !s.is_pinned).count() > max {
            let Some(last) = self.slots.iter().rposition(|s| !s.is_pinned) else {
                break;
            };
            let _evicted = self.slots.remove(last);
            #[cfg(feature = "tracing")]
            tracing::debug!(item_id = %_evicted.id, "evicted unpinned slot");
        }
    }

    fn ensure_placeholders(&mut self) {
        let target = self.slot_count.get();
        self.slots.truncate(target);
        while self.slots.len() < target {
            self.slots.push(ClipboardItem::placeholder(Local::now()));
        }
    }

    fn refresh_quick_keys(&mut self) {
        let max = self.slot_count.get();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.quick_key = (i < max).then(|| (i + 1) as u8);
        }
    }
}
