//! Platform abstraction layer
//!
//! Handles backend differences for:
//! - Input events (held-key snapshots to tick input)

pub mod input;

pub use input::{InputTracker, KeyState};
