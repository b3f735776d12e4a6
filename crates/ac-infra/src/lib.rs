pub mod history;
pub mod settings;
pub mod time;

pub use history::{FileHistoryStore, ImageAssetStore};
pub use settings::FileSettingsRepository;
pub use time::SystemClock;
