//! # ac-platform
//!
//! Operating-system adapters for AfterCopy: the local clipboard, the
//! clipboard change watcher and the per-user data directory.

pub mod app_dirs;
pub mod clipboard;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::{start_clipboard_watcher, LocalClipboard, WatcherHandle};
