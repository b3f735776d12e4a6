use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Number of quick-access slots, always within `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotCount(u8);

impl SlotCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// Clamps any requested count into range.
    pub fn new(n: i64) -> Self {
        Self(n.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for SlotCount {
    fn default() -> Self {
        Self(3)
    }
}

/// Resolved user configuration consumed by the core.
///
/// Out-of-range slot counts on disk are accepted and clamped when read
/// through [`Settings::slot_count`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_true")]
    pub autosave_enabled: bool,

    /// Presentation only; the core passes it through to the snapshot
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,

    #[serde(default = "default_slot_count")]
    pub slot_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Auto,
    Manual,
}

impl SaveMode {
    pub fn label(self) -> &'static str {
        match self {
            SaveMode::Auto => "AUTO-SAVE",
            SaveMode::Manual => "MANUAL-SAVE",
        }
    }
}

impl Settings {
    pub fn slot_count(&self) -> SlotCount {
        SlotCount::new(self.slot_count)
    }

    pub fn save_mode(&self) -> SaveMode {
        if self.autosave_enabled {
            SaveMode::Auto
        } else {
            SaveMode::Manual
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            autosave_enabled: true,
            image_preview_enabled: true,
            slot_count: default_slot_count(),
        }
    }
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_true() -> bool {
    true
}

fn default_slot_count() -> i64 {
    SlotCount::default().get() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_count_is_clamped() {
        assert_eq!(SlotCount::new(0).get(), 1);
        assert_eq!(SlotCount::new(-3).get(), 1);
        assert_eq!(SlotCount::new(5).get(), 5);
        assert_eq!(SlotCount::new(42).get(), 8);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.slot_count().get(), 3);
        assert_eq!(settings.save_mode(), SaveMode::Auto);
    }

    #[test]
    fn out_of_range_slot_count_is_read_clamped() {
        let settings: Settings =
            serde_json::from_str(r#"{"autosave_enabled": false, "slot_count": 12}"#).unwrap();
        assert_eq!(settings.slot_count().get(), 8);
        assert_eq!(settings.save_mode().label(), "MANUAL-SAVE");
    }
}
