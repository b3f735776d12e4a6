use bytes::Bytes;

use crate::ids::ItemId;

/// Encoded image bytes handed over by the clipboard collaborator.
///
/// Capture never carries this; the orchestrator fetches it separately and
/// passes it to the history store, which writes it as an asset at save time.
/// Cloning is cheap so the foreground and a background save can share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    data: Bytes,
    extension: &'static str,
}

impl ImagePayload {
    pub fn png(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            extension: "png",
        }
    }

    pub fn with_extension(data: impl Into<Bytes>, extension: &'static str) -> Self {
        Self {
            data: data.into(),
            extension,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn extension(&self) -> &'static str {
        self.extension
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Asset filename for the item this payload belongs to: `<id>.<ext>`.
    pub fn file_name(&self, id: &ItemId) -> String {
        asset_file_name(id, self.extension)
    }
}

pub fn asset_file_name(id: &ItemId, extension: &str) -> String {
    format!("{}.{}", id, extension)
}
