//! Frame clock
//!
//! Turns wall-clock frame timestamps (milliseconds, as handed out by an
//! animation-frame callback) into a clamped delta-time.

use crate::consts::{MAX_DT, MAX_FPS, MIN_DT, MIN_FPS};

/// Tracks the previous frame timestamp
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a frame timestamp and return the delta-time in seconds.
    ///
    /// The instantaneous frame rate `1000 / (now - last)` is clamped to
    /// [`MIN_FPS`, `MAX_FPS`] and the delta is its reciprocal. The very first
    /// frame and non-advancing timestamps report the smallest step.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => {
                let elapsed = now_ms - last;
                let fps = if elapsed > 0.0 {
                    (1000.0 / elapsed) as f32
                } else {
                    MAX_FPS
                };
                1.0 / fps.clamp(MIN_FPS, MAX_FPS)
            }
            None => MIN_DT,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Timestamp of the previous frame, if any
    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }

    /// Forget the previous timestamp; the next frame reports the smallest step
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Clamp an externally supplied delta-time into the supported range
#[inline]
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_nan() {
        MIN_DT
    } else {
        dt.clamp(MIN_DT, MAX_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_min_dt() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12_345.0), MIN_DT);
        assert_eq!(clock.last_ms(), Some(12_345.0));
    }

    #[test]
    fn test_regular_frames() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        // 25 ms -> 40 fps
        let dt = clock.tick(25.0);
        assert!((dt - 1.0 / 40.0).abs() < 1e-6);
    }

    #[test]
    fn test_fast_and_slow_frames_are_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        // 2 ms would be 500 fps
        assert!((clock.tick(2.0) - MIN_DT).abs() < 1e-6);
        // Tab came back after 5 seconds
        assert!((clock.tick(5002.0) - MAX_DT).abs() < 1e-6);
    }

    #[test]
    fn test_stalled_or_backwards_clock() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(100.0), MIN_DT);
        assert_eq!(clock.tick(50.0), MIN_DT);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.reset();
        assert_eq!(clock.tick(10_000.0), MIN_DT);
    }

    #[test]
    fn test_clamp_dt() {
        assert_eq!(clamp_dt(0.0), MIN_DT);
        assert_eq!(clamp_dt(-1.0), MIN_DT);
        assert_eq!(clamp_dt(1.0), MAX_DT);
        assert_eq!(clamp_dt(f32::NAN), MIN_DT);
        assert_eq!(clamp_dt(f32::INFINITY), MAX_DT);
        assert_eq!(clamp_dt(0.05), 0.05);
    }
}
