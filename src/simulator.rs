use glam::Vec3;

use crate::softbody::SoftBody;

/// Supplies the external force pushed into row 0 of the softbody.
///
/// Sampled once per physics step.
pub trait ForceSource {
    fn external_force(&self) -> Vec3;
}

impl ForceSource for Vec3 {
    fn external_force(&self) -> Vec3 {
        *self
    }
}

/// Advances a `SoftBody` by fixed physics steps.
///
/// Every step first accumulates the forces on all bodies from one position
/// snapshot, then integrates all bodies.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    steps: u64,
    degenerate_connections: u64,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Physics steps run so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Connections skipped so far because both ends shared a position.
    pub fn degenerate_connections(&self) -> u64 {
        self.degenerate_connections
    }

    pub fn simulation_step(&mut self, softbody: &mut SoftBody, external_force: Vec3, dt: f32) {
        self.accumulate_forces(softbody, external_force);
        Self::integrate(softbody, dt);
        self.steps += 1;
    }

    /// Adds the spring, damping and external forces of this step to every
    /// body's force accumulator. Positions and velocities are left untouched.
    pub fn accumulate_forces(&mut self, softbody: &mut SoftBody, external_force: Vec3) {
        let f_vec = self.calculate_forces(softbody, external_force);

        for (rb, force) in softbody.bodies_mut().iter_mut().zip(f_vec) {
            rb.apply_force(force);
        }
    }

    fn calculate_forces(&mut self, softbody: &SoftBody, external_force: Vec3) -> Vec<Vec3> {
        let coefficients = softbody.coefficients();
        let bodies = softbody.bodies();
        let mut f_vec = vec![Vec3::ZERO; bodies.len()];
        let mut degenerate = 0;

        for i in 0..softbody.rows() {
            for j in 0..softbody.cols() {
                let index = softbody.index(i, j);
                let rb = &bodies[index];

                for (ni, nj, connection) in softbody.neighbors(i, j) {
                    let neighbor = &bodies[softbody.index(ni, nj)];
                    match coefficients.force(
                        rb.position,
                        neighbor.position,
                        softbody.rest_length(connection),
                        rb.velocity,
                    ) {
                        Some(force) => f_vec[index] += force,
                        None => degenerate += 1,
                    }
                }

                // Row 0 is the driven edge
                if i == 0 {
                    f_vec[index] += external_force;
                }
            }
        }

        if degenerate > 0 {
            ftlog::debug!("Skipped {degenerate} zero-length connections");
            self.degenerate_connections += degenerate;
        }

        f_vec
    }

    pub fn integrate(softbody: &mut SoftBody, dt: f32) {
        for rb in softbody.bodies_mut() {
            rb.integrate(dt);
        }
    }
}
