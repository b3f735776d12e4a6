//! Dependency grouping for orchestrator construction.
//!
//! Plain parameter grouping: every field is required and nothing here has
//! behaviour of its own.

use std::sync::Arc;

use ac_core::ports::{ClockPort, HistoryStorePort, SettingsPort, SystemClipboardPort};

pub struct AppDeps {
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub history: Arc<dyn HistoryStorePort>,
    pub settings: Arc<dyn SettingsPort>,
    pub clock: Arc<dyn ClockPort>,
}
