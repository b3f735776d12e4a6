pub mod capture_clipboard;
pub mod export_history;

pub use capture_clipboard::CaptureClipboard;
pub use export_history::{ExportFormat, ExportHistory, ExportScope};
