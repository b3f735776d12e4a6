pub mod app_dirs;
pub mod clipboard;
pub mod ids;
pub mod ports;
pub mod settings;
pub mod slots;

// Re-export commonly used types at crate root
pub use app_dirs::AppDirs;
pub use clipboard::{ClipboardItem, ContentType, ImagePayload, ItemEdit};
pub use ids::ItemId;
pub use settings::{SaveMode, Settings, SlotCount};
pub use slots::{CaptureEffect, SlotManager};
