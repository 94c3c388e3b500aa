//! Animator Configuration
//!
//! [`AnimatorSettings`] is the serialized configuration surface of an
//! [`OrnamentAnimator`](crate::OrnamentAnimator). All fields have defaults,
//! so a JSON document only needs the ones it overrides:
//!
//! ```rust,ignore
//! use ornament::AnimatorSettings;
//!
//! let settings = AnimatorSettings::from_json_str(r#"{ "rotation_speed": 45 }"#)?;
//! assert_eq!(settings.initial_scale, 1.0);
//! ```
//!
//! Scene references (node, material, audio player) are not part of the
//! settings; they are bound by handle on the animator.

use std::path::Path;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::animator::Complexity;
use crate::errors::Result;

/// Default rotation speed in degrees per second.
pub const DEFAULT_ROTATION_SPEED: i32 = 10;
/// Default tint (opaque blue).
pub const DEFAULT_COLOR: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorSettings {
    /// Degrees per second about the local forward axis.
    pub rotation_speed: i32,
    pub initial_scale: f32,
    /// RGBA, serialized as `[r, g, b, a]`.
    pub initial_color: Vec4,
    /// Radial segment count. Clamped to `[3, 24]` when applied.
    pub segments: i32,
    /// Ring layer count. Clamped to `[1, 10]` when applied.
    pub layers: i32,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            initial_scale: 1.0,
            initial_color: DEFAULT_COLOR,
            segments: Complexity::DEFAULT.segments as i32,
            layers: Complexity::DEFAULT.layers as i32,
        }
    }
}

impl AnimatorSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        log::debug!("Loaded animator settings from {}", path.display());
        Ok(settings)
    }

    /// The configured complexity, clamped into its valid ranges.
    #[must_use]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.segments, self.layers)
    }
}
