use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Sentinel id carried by slot placeholders. Never written to history.
pub const PLACEHOLDER_ID: &str = "PLACEHOLDER";

/// Identifier of a captured clipboard item, stable for the item's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl_id!(ItemId);

impl ItemId {
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_ID.to_string())
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_ID
    }
}
