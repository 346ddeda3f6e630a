use crate::{
    clock::SimulationClock,
    error::Result,
    simulator::{ForceSource, Simulator},
    softbody::SoftBody,
};

/// Everything one running softbody needs: the sheet, the stepper and the
/// clock that decides how many steps each frame owes.
#[derive(Debug, Clone)]
pub struct Simulation {
    softbody: SoftBody,
    simulator: Simulator,
    clock: SimulationClock,
}

impl Simulation {
    pub fn new(softbody: SoftBody, physics_step: f64, start_time: f64) -> Result<Self> {
        Ok(Self {
            softbody,
            simulator: Simulator::new(),
            clock: SimulationClock::new(physics_step, start_time)?,
        })
    }

    /// Runs the physics steps owed at wall time `now`.
    ///
    /// `force_source` is sampled once per step and drives row 0. Returns the
    /// number of steps taken.
    pub fn advance<S>(&mut self, now: f64, force_source: &S) -> usize
    where
        S: ForceSource + ?Sized,
    {
        let Self {
            softbody,
            simulator,
            clock,
        } = self;

        clock.advance(now, |dt| {
            simulator.simulation_step(softbody, force_source.external_force(), dt as f32);
        })
    }

    pub fn softbody(&self) -> &SoftBody {
        &self.softbody
    }

    pub fn softbody_mut(&mut self) -> &mut SoftBody {
        &mut self.softbody
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Total physics steps since creation.
    pub fn steps(&self) -> u64 {
        self.simulator.steps()
    }
}

#[cfg(test)]
mod test {
    use glam::Vec3;

    use super::*;

    const STEP: f64 = 1.0 / 64.0;

    fn simulation() -> Simulation {
        let mut softbody = SoftBody::builder().subdivisions(5, 4).build().unwrap();
        softbody.apply_impulse(2, 2, Vec3::new(0.3, -0.1, 0.0)).unwrap();
        Simulation::new(softbody, STEP, 0.0).unwrap()
    }

    #[test]
    fn test_jump_matches_even_polling() {
        let force = Vec3::new(2.0, 0.0, 0.0);

        let mut jumped = simulation();
        let mut taken = jumped.advance(0.0, &force);
        taken += jumped.advance(3.0 * STEP, &force);
        taken += jumped.advance(3.0 * STEP + 0.001, &force);
        assert_eq!(taken, 3);

        // Polls have to exceed a full step to count, so space them slightly wider.
        let spacing = STEP + 1.0 / 1024.0;
        let mut even = simulation();
        let mut taken = 0;
        for k in 1..=3 {
            taken += even.advance(k as f64 * spacing, &force);
        }
        assert_eq!(taken, 3);

        assert_eq!(jumped.steps(), even.steps());
        assert_eq!(jumped.softbody(), even.softbody());
    }

    #[test]
    fn test_stall_bounds_catch_up() {
        let mut sim = simulation();

        let taken = sim.advance(10.0, &Vec3::ZERO);

        assert!(taken as f64 <= SimulationClock::MAX_FRAME_TIME / STEP);
        assert_eq!(sim.steps(), taken as u64);
    }

    #[test]
    fn test_force_source_sampled_per_step() {
        use std::cell::Cell;

        struct Counting(Cell<usize>);
        impl ForceSource for Counting {
            fn external_force(&self) -> Vec3 {
                self.0.set(self.0.get() + 1);
                Vec3::ZERO
            }
        }

        let mut sim = simulation();
        let source = Counting(Cell::new(0));

        let taken = sim.advance(5.0 * STEP, &source);

        assert_eq!(taken, 5);
        assert_eq!(source.0.get(), 5);
    }

    #[test]
    fn test_rest_sheet_stays_at_rest() {
        let softbody = SoftBody::builder().build().unwrap();
        let rest = softbody.clone();
        let mut sim = Simulation::new(softbody, STEP, 0.0).unwrap();

        sim.advance(0.2, &Vec3::ZERO);

        for (a, b) in sim.softbody().bodies().iter().zip(rest.bodies()) {
            assert!((a.position - b.position).length() < 1e-5);
            assert!(a.velocity.length() < 1e-4);
        }
    }
}
