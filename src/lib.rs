//! AfterCopy: clipboard history daemon.

pub mod bootstrap;
