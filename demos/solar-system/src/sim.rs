/// Pause flag plus the last frame delta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationState {
    pub paused: bool,
    /// Seconds since the previous tick. Replaced every tick, paused or not.
    pub dt: f32,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the pause flag. Returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Record this tick's delta and return it when the simulation should
    /// advance, `None` while paused.
    pub fn step(&mut self, dt: f32) -> Option<f32> {
        self.dt = dt;
        if self.paused {
            None
        } else {
            Some(dt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let mut sim = SimulationState::new();
        assert!(!sim.paused);
        assert_eq!(sim.step(0.5), Some(0.5));
    }

    #[test]
    fn paused_step_records_dt_but_gates() {
        let mut sim = SimulationState::new();
        assert!(sim.toggle_pause());
        assert_eq!(sim.step(0.25), None);
        assert_eq!(sim.dt, 0.25);
        assert!(!sim.toggle_pause());
        assert_eq!(sim.step(0.1), Some(0.1));
    }
}
