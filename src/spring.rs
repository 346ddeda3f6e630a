use glam::Vec3;

/// Connections shorter than this have no usable direction and contribute nothing.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// The two kinds of structural connection in the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// Between `(i, j)` and `(i ± 1, j)`, rests at the row spacing.
    Row,
    /// Between `(i, j)` and `(i, j ± 1)`, rests at the column spacing.
    Column,
}

/// Spring and damping coefficients shared by every connection of a softbody.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCoefficients {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringCoefficients {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    /// Force on the body at `position` from its neighbor at `neighbor_position`.
    ///
    /// Hooke's law along the connection plus a damping term on the body's own
    /// velocity: `k * (|d| - rest) * d/|d| - c * v`. A stretched connection pulls
    /// the body toward its neighbor, a compressed one pushes it away.
    ///
    /// Returns `None` when both ends occupy the same point.
    pub fn force(
        &self,
        position: Vec3,
        neighbor_position: Vec3,
        rest_length: f32,
        velocity: Vec3,
    ) -> Option<Vec3> {
        let displacement = neighbor_position - position;
        let magnitude = displacement.length();

        if magnitude < DEGENERATE_LENGTH {
            return None;
        }

        let direction = displacement / magnitude;

        Some(self.stiffness * (magnitude - rest_length) * direction - self.damping * velocity)
    }
}
