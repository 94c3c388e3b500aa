#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animator;
pub mod audio;
pub mod config;
pub mod errors;
pub mod scene;
pub mod utils;

pub use animator::{Complexity, LogShapeGenerator, OrnamentAnimator, Sequencer, ShapeGenerator};
pub use audio::{AudioPlayer, AudioSource, PlaybackState};
pub use config::AnimatorSettings;
pub use errors::{OrnamentError, Result};
pub use scene::{AudioHandle, Material, MaterialHandle, Node, NodeHandle, Scene, Transform};
pub use utils::time::Timer;
