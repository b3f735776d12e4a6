//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `ac-app` and the
//! implementations in `ac-infra` and `ac-platform`. The core never performs
//! I/O itself.

pub mod app_dirs;
pub mod clipboard;
mod clipboard_change_handler;
mod clock;
pub mod errors;
pub mod history;
pub mod settings;

pub use app_dirs::AppDirsPort;
pub use clipboard::{ClipboardAccessError, SystemClipboardPort};
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use clock::*;
pub use errors::AppDirsError;
pub use history::{AppendOutcome, AssetError, HistoryError, HistoryStorePort, RejectReason};
pub use settings::SettingsPort;
