//! Utility Module
//!
//! - [`time`]: frame timing for host loops

pub mod time;

pub use time::Timer;
