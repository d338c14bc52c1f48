use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick.
    pub dt: f32,
    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots and keeps a running FPS figure.
///
/// Every `report_every` of accumulated frame time the clock logs the frame
/// rate at debug level and starts a new measurement window.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_max: Duration,

    report_every: Duration,
    window_elapsed: Duration,
    window_frames: u32,
    fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_max: Duration::from_millis(250),
            report_every: Duration::from_secs(5),
            window_elapsed: Duration::ZERO,
            window_frames: 0,
            fps: 0.0,
        }
    }

    /// Overrides the FPS reporting interval.
    pub fn with_report_interval(mut self, every: Duration) -> Self {
        self.report_every = every;
        self
    }

    /// Advances the clock by real elapsed time.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.advance(dt)
    }

    /// Advances the clock by an explicit `dt`.
    ///
    /// Used by headless drivers and tests that feed synthetic frames.
    pub fn advance(&mut self, dt: Duration) -> FrameTime {
        // A stalled process (debugger, suspend) must not hand views a huge step.
        let dt = dt.min(self.dt_max);

        self.window_elapsed += dt;
        self.window_frames += 1;
        if self.window_elapsed >= self.report_every {
            self.fps = self.window_frames as f32 / self.window_elapsed.as_secs_f32();
            log::debug!("{:.0} FPS", self.fps);
            self.window_elapsed = Duration::ZERO;
            self.window_frames = 0;
        }

        let ft = FrameTime { dt: dt.as_secs_f32(), frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }

    /// Frame rate measured over the last completed reporting window.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
