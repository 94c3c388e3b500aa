use glam::Vec4;

/// Convergence rate of the per-tick smoothing, in 1/seconds.
pub const SMOOTHING_RATE: f32 = 2.0;

pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;

    /// One smoothing step toward `target` for a frame of `dt` seconds.
    #[inline]
    fn smooth_toward(self, target: Self, dt: f32) -> Self {
        Self::interpolate_linear(self, target, smoothing_factor(dt))
    }
}

/// Interpolation weight for a frame of `dt` seconds, clamped to `[0, 1]`.
///
/// Frames of `1 / SMOOTHING_RATE` seconds or longer jump straight to the
/// target; negative `dt` holds the current value.
#[inline]
#[must_use]
pub fn smoothing_factor(dt: f32) -> f32 {
    (dt * SMOOTHING_RATE).clamp(0.0, 1.0)
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec4 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_is_clamped() {
        assert_eq!(smoothing_factor(0.0), 0.0);
        assert_eq!(smoothing_factor(0.25), 0.5);
        assert_eq!(smoothing_factor(0.5), 1.0);
        assert_eq!(smoothing_factor(3.0), 1.0);
        assert_eq!(smoothing_factor(-1.0), 0.0);
    }

    #[test]
    fn long_frame_jumps_to_target() {
        assert_eq!(1.0_f32.smooth_toward(2.0, 0.5), 2.0);
        assert_eq!(Vec4::ZERO.smooth_toward(Vec4::ONE, 10.0), Vec4::ONE);
    }

    #[test]
    fn quarter_second_covers_half_the_gap() {
        let v = Vec4::ZERO.smooth_toward(Vec4::new(2.0, 4.0, 6.0, 8.0), 0.25);
        assert!((v - Vec4::new(1.0, 2.0, 3.0, 4.0)).length() < 1e-6);
    }
}
