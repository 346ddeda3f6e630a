use glam::Vec3;

/// A single point mass of the softbody.
///
/// `net_force` and `net_impulse` are accumulators. They are filled during the
/// force pass and cleared again by [`RigidBody::integrate`].
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub net_force: Vec3,
    pub net_impulse: Vec3,
    /// `0.0` means infinite mass, the body never moves.
    pub inverse_mass: f32,
}

impl RigidBody {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            net_force: Vec3::ZERO,
            net_impulse: Vec3::ZERO,
            inverse_mass: 1.0,
        }
    }

    pub fn with_inverse_mass(mut self, inverse_mass: f32) -> Self {
        self.inverse_mass = inverse_mass;
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.inverse_mass == 0.0
    }

    pub fn apply_force(&mut self, force: Vec3) {
        self.net_force += force;
    }

    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.net_impulse += impulse;
    }

    /// Second order euler step over `dt`.
    ///
    /// The position update uses the velocity from *before* this step:
    /// `x += v0 * dt + 0.5 * a * dt^2`, then `v += a * dt + m^-1 * J`.
    pub fn integrate(&mut self, dt: f32) {
        let acceleration = self.inverse_mass * self.net_force;

        self.position += dt * self.velocity + 0.5 * acceleration * dt * dt;
        self.velocity += dt * acceleration + self.inverse_mass * self.net_impulse;

        self.net_force = Vec3::ZERO;
        self.net_impulse = Vec3::ZERO;
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn kinetic_energy(&self) -> f32 {
        if self.is_fixed() {
            return 0.0;
        }
        0.5 * self.velocity.length_squared() / self.inverse_mass
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_integrate_uses_old_velocity() {
        let mut rb = RigidBody::new(Vec3::ZERO);
        rb.velocity = Vec3::new(1.0, 0.0, 0.0);
        rb.apply_force(Vec3::new(2.0, 0.0, 0.0));

        rb.integrate(0.5);

        // x = 1.0 * 0.5 + 0.5 * 2.0 * 0.25
        assert_eq!(rb.position, Vec3::new(0.75, 0.0, 0.0));
        assert_eq!(rb.velocity, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_integrate_clears_accumulators() {
        let mut rb = RigidBody::new(Vec3::ZERO);
        rb.apply_force(Vec3::ONE);
        rb.apply_impulse(Vec3::ONE);

        rb.integrate(0.1);

        assert_eq!(rb.net_force, Vec3::ZERO);
        assert_eq!(rb.net_impulse, Vec3::ZERO);
    }

    #[test]
    fn test_impulse_changes_velocity_only() {
        let mut rb = RigidBody::new(Vec3::ZERO).with_inverse_mass(0.5);
        rb.apply_impulse(Vec3::new(0.0, 4.0, 0.0));

        rb.integrate(0.1);

        assert_eq!(rb.position, Vec3::ZERO);
        assert_eq!(rb.velocity, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_fixed_body_does_not_move() {
        let mut rb = RigidBody::new(Vec3::ONE).with_inverse_mass(0.0);
        rb.apply_force(Vec3::splat(100.0));
        rb.apply_impulse(Vec3::splat(100.0));

        rb.integrate(0.1);

        assert!(rb.is_fixed());
        assert_eq!(rb.position, Vec3::ONE);
        assert_eq!(rb.velocity, Vec3::ZERO);
        assert_eq!(rb.kinetic_energy(), 0.0);
    }

    #[test]
    fn test_kinetic_energy() {
        let mut rb = RigidBody::new(Vec3::ZERO).with_inverse_mass(0.5);
        rb.velocity = Vec3::new(3.0, 4.0, 0.0);
        // m = 2, |v|^2 = 25
        assert!((rb.kinetic_energy() - 25.0).abs() < 1e-5);
    }
}
