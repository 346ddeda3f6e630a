use crate::error::{Result, SoftBodyError};

/// Converts irregular wall-clock polling into a whole number of fixed physics
/// steps.
///
/// Time is measured in seconds as `f64`. A poll only counts once more than one
/// full physics step has passed since the last counted poll; shorter intervals
/// are dropped and the reference time is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    last_time: f64,
    accumulator: f64,
    physics_step: f64,
}

impl SimulationClock {
    pub const DEFAULT_PHYSICS_STEP: f64 = 0.012;
    /// Longest slice of wall time a single poll may feed into the accumulator.
    pub const MAX_FRAME_TIME: f64 = 0.25;

    pub fn new(physics_step: f64, start_time: f64) -> Result<Self> {
        if !physics_step.is_finite() || physics_step <= 0.0 {
            return Err(SoftBodyError::InvalidPhysicsStep(physics_step));
        }

        Ok(Self {
            last_time: start_time,
            accumulator: 0.0,
            physics_step,
        })
    }

    pub fn physics_step(&self) -> f64 {
        self.physics_step
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Polls the clock at wall time `now` and calls `step` once per owed
    /// physics step, with the fixed step length.
    ///
    /// Returns the number of steps taken.
    pub fn advance<F>(&mut self, now: f64, mut step: F) -> usize
    where
        F: FnMut(f64),
    {
        if !now.is_finite() {
            ftlog::warn!("Ignoring non-finite wall time {now}");
            return 0;
        }

        let mut dt = now - self.last_time;

        if dt <= self.physics_step {
            return 0;
        }

        self.last_time = now;

        if dt > Self::MAX_FRAME_TIME {
            ftlog::warn!(
                "Frame took {dt:.3}s, clamping to {}s",
                Self::MAX_FRAME_TIME
            );
            dt = Self::MAX_FRAME_TIME;
        }
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= self.physics_step {
            step(self.physics_step);
            self.accumulator -= self.physics_step;
            steps += 1;
        }

        ftlog::debug!(
            "Ran {steps} physics steps, {:.5}s left in accumulator",
            self.accumulator
        );

        steps
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Binary fractions keep the accumulator arithmetic exact.
    const STEP: f64 = 1.0 / 64.0;

    fn count(clock: &mut SimulationClock, now: f64) -> usize {
        clock.advance(now, |_| {})
    }

    #[test]
    fn test_invalid_step() {
        assert_eq!(
            SimulationClock::new(0.0, 0.0),
            Err(SoftBodyError::InvalidPhysicsStep(0.0))
        );
        assert!(SimulationClock::new(-1.0, 0.0).is_err());
        assert!(SimulationClock::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_short_poll_is_ignored() {
        let mut clock = SimulationClock::new(STEP, 1.0).unwrap();

        assert_eq!(count(&mut clock, 1.0 + STEP / 2.0), 0);
        assert_eq!(clock.last_time(), 1.0);
        // exactly one step is not enough either
        assert_eq!(count(&mut clock, 1.0 + STEP), 0);
        assert_eq!(clock.last_time(), 1.0);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_non_finite_poll_is_ignored() {
        let mut clock = SimulationClock::new(STEP, 0.0).unwrap();

        for now in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(count(&mut clock, now), 0);
            assert_eq!(clock.last_time(), 0.0);
            assert_eq!(clock.accumulator(), 0.0);
        }

        // the clock keeps working afterwards
        assert_eq!(count(&mut clock, 3.0 * STEP), 3);
        assert_eq!(clock.last_time(), 3.0 * STEP);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_jump_runs_owed_steps() {
        let mut clock = SimulationClock::new(STEP, 0.0).unwrap();
        let mut dts = vec![];

        let steps = clock.advance(3.0 * STEP, |dt| dts.push(dt));

        assert_eq!(steps, 3);
        assert_eq!(dts, vec![STEP; 3]);
        assert_eq!(clock.accumulator(), 0.0);
        assert_eq!(clock.last_time(), 3.0 * STEP);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = SimulationClock::new(STEP, 0.0).unwrap();

        assert_eq!(count(&mut clock, 1.5 * STEP), 1);
        assert_eq!(clock.accumulator(), 0.5 * STEP);
        assert_eq!(count(&mut clock, 3.0 * STEP), 2);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_accumulator_stays_below_step() {
        let mut clock = SimulationClock::new(SimulationClock::DEFAULT_PHYSICS_STEP, 0.0).unwrap();
        let mut now = 0.0;

        for i in 0..500 {
            now += 0.001 + (i % 37) as f64 * 0.0013;
            count(&mut clock, now);
            assert!(clock.accumulator() >= 0.0);
            assert!(clock.accumulator() < clock.physics_step());
        }
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = SimulationClock::new(STEP, 0.0).unwrap();

        let steps = count(&mut clock, 10.0);

        assert_eq!(steps, (SimulationClock::MAX_FRAME_TIME / STEP) as usize);
        assert_eq!(steps, 16);
        assert_eq!(clock.last_time(), 10.0);
    }
}
