/// Variable-step frame clock.
/// Measures the real time elapsed between consecutive tick requests.
/// The first sample yields a zero delta.
pub struct FrameClock {
    /// Timestamp of the previous tick, in seconds.
    last: Option<f64>,
    /// Number of ticks sampled so far.
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            frames: 0,
        }
    }

    /// Record a tick at `now_secs` and return the elapsed time since the
    /// previous tick. Timestamps that go backwards yield zero. Non-finite
    /// timestamps are not filtered and propagate into the delta.
    pub fn tick(&mut self, now_secs: f64) -> f32 {
        let delta = match self.last {
            Some(last) => {
                let elapsed = now_secs - last;
                if elapsed < 0.0 { 0.0 } else { elapsed as f32 }
            }
            None => 0.0,
        };
        self.last = Some(now_secs);
        self.frames += 1;
        delta
    }

    pub fn frames(&self) -> u64 {
        self.frames
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
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12.5), 0.0);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn delta_is_time_since_previous_tick() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        let dt = clock.tick(1.25);
        assert!((dt - 0.25).abs() < 1e-6);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn non_finite_timestamps_propagate() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        assert!(clock.tick(f64::NAN).is_nan());

        let mut clock = FrameClock::new();
        clock.tick(1.0);
        assert_eq!(clock.tick(f64::INFINITY), f32::INFINITY);
    }

    #[test]
    fn backwards_timestamp_yields_zero() {
        let mut clock = FrameClock::new();
        clock.tick(5.0);
        assert_eq!(clock.tick(4.0), 0.0);
        // Next delta is measured from the backwards sample.
        assert!((clock.tick(4.5) - 0.5).abs() < 1e-6);
    }
}
