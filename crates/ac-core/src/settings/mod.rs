pub mod model;

pub use model::{SaveMode, Settings, SlotCount, CURRENT_SCHEMA_VERSION};
