//! Ornament Animation
//!
//! - [`OrnamentAnimator`]: per-frame rotation, scale and tint smoothing,
//!   plus guarded audio playback commands
//! - [`Complexity`]: clamped segment/layer counts
//! - [`ShapeGenerator`], [`Sequencer`]: extension points invoked by the
//!   animator but implemented by the host
//! - [`smoothing`]: the interpolation used for target convergence

pub mod complexity;
pub mod controller;
pub mod sequencer;
pub mod smoothing;

pub use complexity::{Complexity, LogShapeGenerator, ShapeGenerator};
pub use controller::OrnamentAnimator;
pub use sequencer::Sequencer;
pub use smoothing::{Interpolatable, SMOOTHING_RATE};
