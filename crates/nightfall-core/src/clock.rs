//! Frame clock - per-tick delta and monotonic wall time.

use std::time::Instant;

/// One clock sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous sample.
    pub delta: f32,
    /// Seconds since the clock started.
    pub wall_time: f64,
}

/// Source of frame timing for the [`Driver`](crate::host::Driver).
pub trait FrameClock {
    fn sample(&mut self) -> FrameTime;
}

/// Real-time clock. Holds nothing but the last sample instant.
#[derive(Debug, Clone)]
pub struct Clock {
    start: Instant,
    last: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for Clock {
    fn sample(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        FrameTime {
            delta,
            wall_time: now.duration_since(self.start).as_secs_f64(),
        }
    }
}

/// Fixed-step clock for headless runs and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    step: f32,
    wall_time: f64,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
            wall_time: 0.0,
        }
    }
}

impl FrameClock for FixedClock {
    fn sample(&mut self) -> FrameTime {
        self.wall_time += self.step as f64;
        FrameTime {
            delta: self.step,
            wall_time: self.wall_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let mut clock = FixedClock::new(0.5);
        assert_eq!(clock.sample().wall_time, 0.5);
        let t = clock.sample();
        assert_eq!(t.delta, 0.5);
        assert_eq!(t.wall_time, 1.0);
    }

    #[test]
    fn test_real_clock_is_monotonic() {
        let mut clock = Clock::new();
        let a = clock.sample();
        let b = clock.sample();
        assert!(a.delta >= 0.0 && b.delta >= 0.0);
        assert!(b.wall_time >= a.wall_time);
    }
}
