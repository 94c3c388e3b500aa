use std::time::{Duration, Instant};

/// Frame clock for host loops.
///
/// Each [`tick`](Self::tick) measures the wall-clock time since the
/// previous one and returns it in seconds, ready for
/// [`OrnamentAnimator::tick`](crate::OrnamentAnimator::tick).
///
/// Hitches (window drags, breakpoints, a suspended process) can yield very
/// long frames. A cap set with [`with_max_delta`](Self::with_max_delta)
/// limits the delta handed to the animator; `elapsed` still follows the
/// wall clock.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    max_delta: Option<Duration>,
    /// Time since last tick, after capping
    pub delta: Duration,
    /// Wall-clock time since creation
    pub elapsed: Duration,
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            max_delta: None,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Caps every frame delta at `max_delta`.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = Some(max_delta);
        self
    }

    /// Starts a new frame and returns its (capped) delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.advance(now - self.last_update);
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.dt_seconds()
    }

    fn advance(&mut self, raw: Duration) {
        self.delta = match self.max_delta {
            Some(cap) if raw > cap => {
                log::debug!(
                    "Frame took {:.3}s; capping delta at {:.3}s",
                    raw.as_secs_f32(),
                    cap.as_secs_f32()
                );
                cap
            }
            _ => raw,
        };
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}
