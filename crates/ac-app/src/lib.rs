//! AfterCopy application layer
//!
//! Use cases and the orchestrator runtime that drives them.

pub mod app_paths;
pub mod deps;
pub mod runtime;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use runtime::{CoreCommand, CoreRuntime, Orchestrator};
