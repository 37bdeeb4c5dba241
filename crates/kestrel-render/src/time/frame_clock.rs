use std::time::{Duration, Instant};

/// Timing snapshot for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, after clamping.
    pub dt: f32,

    /// Seconds of game time accumulated up to and including this tick.
    pub game_time: f32,

    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots and accumulates game time.
///
/// Deltas are clamped so that a stalled process does not make animated
/// textures jump by whole screens on the next frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    game_time: f32,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            game_time: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    #[inline]
    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    /// Re-bases the wall clock without touching game time.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances by the wall-clock time since the previous tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.advance(dt)
    }

    /// Advances by a caller-chosen delta.
    pub fn advance(&mut self, dt: Duration) -> FrameTime {
        let dt = dt.clamp(self.dt_min, self.dt_max).as_secs_f32();
        self.game_time += dt;

        let ft = FrameTime {
            dt,
            game_time: self.game_time,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
