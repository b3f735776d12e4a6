//! Dependency assembly
//!
//! Creates the concrete infra and platform implementations and hands them
//! out as ports. No decisions are made here.

use std::sync::Arc;

use ac_app::{AppDeps, AppPaths};
use ac_core::ports::{AppDirsPort, SystemClipboardPort};
use ac_infra::{FileHistoryStore, FileSettingsRepository, SystemClock};
use ac_platform::{DirsAppDirsAdapter, LocalClipboard};
use anyhow::Context;

pub fn resolve_paths(app_dirs: &dyn AppDirsPort) -> anyhow::Result<AppPaths> {
    let dirs = app_dirs
        .get_app_dirs()
        .context("resolve application data directory")?;
    Ok(AppPaths::from_app_dirs(&dirs))
}

/// Paths for the current user and `AC_PROFILE`.
pub fn default_paths() -> anyhow::Result<AppPaths> {
    resolve_paths(&DirsAppDirsAdapter::new())
}

/// Everything except the system clipboard, which needs a display.
pub fn wire_with_clipboard(paths: &AppPaths, clipboard: Arc<dyn SystemClipboardPort>) -> AppDeps {
    AppDeps {
        clipboard,
        history: Arc::new(FileHistoryStore::new(&paths.history_path, &paths.images_dir)),
        settings: Arc::new(FileSettingsRepository::new(&paths.settings_path)),
        clock: Arc::new(SystemClock),
    }
}

pub fn wire_dependencies(paths: &AppPaths) -> anyhow::Result<AppDeps> {
    let clipboard = LocalClipboard::new().context("open system clipboard")?;
    Ok(wire_with_clipboard(paths, Arc::new(clipboard)))
}
