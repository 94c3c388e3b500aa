use std::ops::RangeInclusive;

/// Segment and layer counts of the ornament pattern.
///
/// Both are clamped into their valid ranges on construction, so a
/// `Complexity` value is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Complexity {
    pub segments: u32,
    pub layers: u32,
}

impl Complexity {
    pub const SEGMENTS: RangeInclusive<i32> = 3..=24;
    pub const LAYERS: RangeInclusive<i32> = 1..=10;

    pub const DEFAULT: Self = Self {
        segments: 8,
        layers: 3,
    };

    #[must_use]
    pub fn new(segments: i32, layers: i32) -> Self {
        Self {
            segments: segments.clamp(*Self::SEGMENTS.start(), *Self::SEGMENTS.end()) as u32,
            layers: layers.clamp(*Self::LAYERS.start(), *Self::LAYERS.end()) as u32,
        }
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Regenerates ornament geometry when its complexity changes.
///
/// Called synchronously from
/// [`OrnamentAnimator::set_complexity`](crate::OrnamentAnimator::set_complexity),
/// once per call, with the already-clamped value.
pub trait ShapeGenerator {
    fn rebuild(&mut self, complexity: Complexity);
}

/// Default generator: logs the new complexity and builds nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogShapeGenerator;

impl ShapeGenerator for LogShapeGenerator {
    fn rebuild(&mut self, complexity: Complexity) {
        log::info!(
            "Updating ornament with {} segments and {} layers",
            complexity.segments,
            complexity.layers
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_both_ends() {
        assert_eq!(Complexity::new(100, -5), Complexity { segments: 24, layers: 1 });
        assert_eq!(Complexity::new(0, 50), Complexity { segments: 3, layers: 10 });
        assert_eq!(Complexity::new(i32::MIN, i32::MAX), Complexity { segments: 3, layers: 10 });
    }

    #[test]
    fn in_range_values_pass_through() {
        assert_eq!(Complexity::new(3, 1), Complexity { segments: 3, layers: 1 });
        assert_eq!(Complexity::new(24, 10), Complexity { segments: 24, layers: 10 });
        assert_eq!(Complexity::new(12, 5), Complexity { segments: 12, layers: 5 });
    }
}
