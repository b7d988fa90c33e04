//! Persistence for run state
//!
//! A single key-value record carries the run status between scheduled runs.

pub mod status_tracker;
pub mod store;

pub use status_tracker::{StatusTracker, STATUS_KEY};
pub use store::{JsonFileStore, MemoryStore, StatusStore};
