//! Daemon bootstrap
//!
//! The only place that knows every crate at once. It resolves directories,
//! installs tracing, loads settings, assembles the ports and runs the
//! orchestrator until Ctrl-C.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::load_settings;
pub use run::run_app;
pub use wiring::{resolve_paths, wire_dependencies};
