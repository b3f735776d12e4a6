use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use ac_core::clipboard::ClipboardItem;
use ac_core::ports::{ClockPort, HistoryStorePort};
use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Indented JSON array in the history file layout.
    Json,
    /// `--- <timestamp> ---`, the content, then a blank line, per item.
    Text,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    All,
    /// Items captured on the current local date.
    Today,
}

/// Writes the persisted history to a user-chosen file.
pub struct ExportHistory {
    history: Arc<dyn HistoryStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl ExportHistory {
    pub fn new(history: Arc<dyn HistoryStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { history, clock }
    }

    /// Returns the number of exported items.
    #[tracing::instrument(
        name = "usecase.export_history.execute",
        skip(self, dest),
        fields(dest = %dest.display())
    )]
    pub async fn execute(&self, format: ExportFormat, scope: ExportScope, dest: &Path) -> Result<usize> {
        let items = self.history.load().await;
        let selected = select(&items, scope, self.today());
        let rendered = render(&selected, format)?;

        tokio::fs::write(dest, rendered)
            .await
            .with_context(|| format!("write export failed: {}", dest.display()))?;

        info!(count = selected.len(), ?format, ?scope, "history exported");
        Ok(selected.len())
    }

    /// Suggested file name, e.g. `AfterCopy_Export_20240131.txt`.
    pub fn default_file_name(&self, format: ExportFormat, scope: ExportScope) -> String {
        let stem = match scope {
            ExportScope::All => "AfterCopy_Export_All".to_string(),
            ExportScope::Today => format!("AfterCopy_Export_{}", self.today().format("%Y%m%d")),
        };
        format!("{stem}.{}", format.extension())
    }

    fn today(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.clock.now_ms())
            .map(|utc| utc.with_timezone(&Local).date_naive())
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

fn select(items: &[ClipboardItem], scope: ExportScope, today: NaiveDate) -> Vec<ClipboardItem> {
    items
        .iter()
        .filter(|item| match scope {
            ExportScope::All => true,
            ExportScope::Today => item.timestamp.date_naive() == today,
        })
        .cloned()
        .collect()
}

fn render(items: &[ClipboardItem], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(items).context("serialize export failed")
        }
        ExportFormat::Text => {
            let mut out = String::new();
            for item in items {
                let _ = writeln!(out, "--- {} ---", item.timestamp.format("%Y-%m-%d %H:%M:%S"));
                let _ = writeln!(out, "{}", item.content);
                out.push('\n');
            }
            Ok(out)
        }
    }
}
