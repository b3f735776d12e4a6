mod common;
mod local;
pub mod watcher;

pub use local::LocalClipboard;
pub use watcher::{start_clipboard_watcher, WatcherHandle};
