//! Simulated viewer magnet for demos, benches, and end-to-end tests.
//!
//! Produces a resting field with small noise, stepping up by `pull` while
//! the magnet lever is held and back down on release.

/// Press/release schedule for the simulated lever.
#[derive(Debug, Clone)]
pub struct PullSchedule {
    /// Resting magnitude (magnet present, lever released).
    pub baseline: f32,
    /// Fractional increase while the lever is pulled (0.1 = +10%).
    pub pull: f32,
    /// Released time before each pull, seconds.
    pub gap_secs: f64,
    /// Pulled time, seconds.
    pub hold_secs: f64,
    /// Peak uniform noise added to each reading.
    pub noise_amp: f32,
}

impl Default for PullSchedule {
    fn default() -> Self {
        Self {
            baseline: 300.0,
            pull: 0.1,
            gap_secs: 0.5,
            hold_secs: 0.2,
            noise_amp: 0.2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedMagnet {
    schedule: PullSchedule,
    rng: u32,
}

impl SimulatedMagnet {
    pub fn new(schedule: PullSchedule, seed: u32) -> Self {
        Self {
            schedule,
            rng: seed.max(1),
        }
    }

    pub fn schedule(&self) -> &PullSchedule {
        &self.schedule
    }

    /// Seconds per gap + hold cycle.
    pub fn cycle_secs(&self) -> f64 {
        self.schedule.gap_secs + self.schedule.hold_secs
    }

    /// Lever position at host time `t`.
    pub fn is_pulled(&self, t: f64) -> bool {
        let cycle = self.cycle_secs();
        if cycle <= 0.0 {
            return false;
        }
        t.rem_euclid(cycle) >= self.schedule.gap_secs
    }

    /// Field magnitude at host time `t`.
    pub fn read(&mut self, t: f64) -> f32 {
        let s = &self.schedule;
        let level = if self.is_pulled(t) {
            s.baseline * (1.0 + s.pull)
        } else {
            s.baseline
        };
        let amp = s.noise_amp;
        level + (self.next_unit() * 2.0 - 1.0) * amp
    }

    // xorshift32, uniform in [0, 1)
    fn next_unit(&mut self) -> f32 {
        let mut x = self.rng;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng = x;
        (x >> 8) as f32 / (1u32 << 24) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lever_follows_schedule() {
        let sim = SimulatedMagnet::new(PullSchedule::default(), 7);
        assert!(!sim.is_pulled(0.1));
        assert!(sim.is_pulled(0.6));
        assert!(!sim.is_pulled(0.75));
        assert!(sim.is_pulled(1.3));
    }

    #[test]
    fn noise_stays_within_amplitude() {
        let mut sim = SimulatedMagnet::new(PullSchedule::default(), 42);
        for i in 0..500 {
            let v = sim.read(f64::from(i) * 0.001);
            assert!((v - 300.0).abs() <= 0.2 + 1e-3, "reading {v}");
        }
    }
}
