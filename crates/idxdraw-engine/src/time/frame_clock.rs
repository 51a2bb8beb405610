use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Zero-based index of this frame.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots and a rolling frame-rate average.
///
/// Delta time is clamped so that debugger pauses or a minimized window do not
/// show up as absurd frame times.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,

    window_start: Instant,
    window_frames: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
            window_start: now,
            window_frames: 0,
        }
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock by one frame.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        self.window_frames += 1;
        ft
    }

    /// Returns the average frames per second once `period` has elapsed since
    /// the last report, then starts a new averaging window.
    pub fn take_fps(&mut self, period: Duration) -> Option<f32> {
        let elapsed = self.last.saturating_duration_since(self.window_start);
        if elapsed < period || self.window_frames == 0 {
            return None;
        }

        let fps = self.window_frames as f32 / elapsed.as_secs_f32();
        self.window_start = self.last;
        self.window_frames = 0;
        Some(fps)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_up_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn dt_is_clamped_to_max() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(ft.dt, 0.25);
    }

    #[test]
    fn dt_is_clamped_to_min() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start);
        assert_eq!(ft.dt, Duration::from_micros(100).as_secs_f32());
    }

    #[test]
    fn fps_reported_once_per_period() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        for i in 1..=60 {
            clock.tick_at(start + Duration::from_millis(i * 1000 / 60));
        }

        let fps = clock.take_fps(Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 0.5, "fps = {fps}");
        assert_eq!(clock.take_fps(Duration::from_secs(1)), None);
    }

    #[test]
    fn fps_withheld_before_period_elapses() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        clock.tick_at(start + Duration::from_millis(16));
        assert_eq!(clock.take_fps(Duration::from_secs(1)), None);
    }
}
