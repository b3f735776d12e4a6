use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

/// A field change submitted by an external editor (details view, daily log).
///
/// Edits are merged by id against the freshly loaded history, so a batch
/// never depends on the editor holding references into the live list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEdit {
    pub id: ItemId,
    /// `None` or an empty string clears the title
    pub title: Option<String>,
    pub content: String,
}
