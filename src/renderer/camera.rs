use glam::{Mat4, Vec3};

/// Orthographic camera looking down the negative Z axis.
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub half_extent: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            half_extent: 1.0,
        }
    }

    pub fn look_at(&mut self, look_at: &Vec3) {
        self.target = *look_at;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        let e = self.half_extent;
        Mat4::orthographic_rh_gl(-e, e, -e, e, 0.1, 100.0)
    }

    pub fn matrix(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
