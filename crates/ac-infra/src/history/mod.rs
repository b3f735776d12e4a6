mod assets;
mod file_store;

pub use assets::ImageAssetStore;
pub use file_store::FileHistoryStore;
