//! Image asset directory.
//!
//! Each stored image is one file named `<item id>.<ext>`, where the
//! extension comes from sniffing the bytes rather than trusting the caller.

use std::path::{Path, PathBuf};

use ac_core::clipboard::{asset_file_name, ImagePayload};
use ac_core::ids::ItemId;
use ac_core::ports::AssetError;
use image::ImageFormat;
use tokio::fs;
use tracing::{debug, warn};

pub struct ImageAssetStore {
    dir: PathBuf,
}

impl ImageAssetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Rooted paths pass through; bare names live in the asset directory.
    pub fn resolve(&self, content: &str) -> PathBuf {
        let path = Path::new(content);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }

    /// Validates and writes the payload, returning the stored file name.
    pub async fn write(&self, id: &ItemId, payload: &ImagePayload) -> Result<String, AssetError> {
        if payload.is_empty() {
            return Err(AssetError::EmptyPayload);
        }
        let format =
            image::guess_format(payload.data()).map_err(|_| AssetError::UnrecognizedFormat)?;
        let extension = extension_for(format);

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| AssetError::Write {
                path: self.dir.clone(),
                source,
            })?;

        let file_name = asset_file_name(id, extension);
        let path = self.dir.join(&file_name);
        fs::write(&path, payload.data())
            .await
            .map_err(|source| AssetError::Write {
                path: path.clone(),
                source,
            })?;

        debug!(item_id = %id, path = %path.display(), bytes = payload.len(), "image asset written");
        Ok(file_name)
    }

    pub async fn read(&self, content: &str) -> std::io::Result<Vec<u8>> {
        fs::read(self.resolve(content)).await
    }

    /// Best effort; a missing or locked file is only logged.
    pub async fn remove(&self, content: &str) {
        let path = self.resolve(content);
        if let Err(e) = fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "failed to delete image asset");
            }
        }
    }

    /// Best effort removal of every file in the asset directory.
    pub async fn remove_all(&self) {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "failed to list image assets");
                return;
            }
        };

        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    let is_file = entry
                        .file_type()
                        .await
                        .map(|t| t.is_file())
                        .unwrap_or(false);
                    if !is_file {
                        continue;
                    }
                    if let Err(e) = fs::remove_file(&path).await {
                        warn!(path = %path.display(), error = %e, "failed to delete image asset");
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(dir = %self.dir.display(), error = %e, "failed to list image assets");
                    break;
                }
            }
        }
    }
}

fn extension_for(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("img")
}
