use std::time::Instant;

/// Frame clock - turns wall-clock time into a bounded per-frame delta.
/// All motion in the navigation core is scaled by this delta, so behavior
/// stays frame-rate independent.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    max_delta: f32,
}

impl FrameClock {
    /// Create a new clock seeded to now. Seeding at construction keeps the
    /// first tick from reporting the time since program start.
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta,
        }
    }

    /// Get delta time since last tick and advance the clock.
    /// Returns delta in seconds, clamped to `max_delta`.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to an explicit timestamp. `tick` delegates here; tests drive
    /// this directly.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(self.max_delta)
    }

    /// Re-seed the clock to now. Called after a deliberately skipped frame
    /// (minimized window) so the next delta doesn't cover the idle gap.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(crate::config::NavConfig::default().max_frame_delta)
    }
}
