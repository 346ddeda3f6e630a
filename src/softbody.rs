use glam::Vec3;

use crate::{
    error::{Result, SoftBodyError},
    properties::RigidBody,
    spring::{Connection, SpringCoefficients},
};

/// A rectangular sheet of point masses joined by springs to their row and
/// column neighbors.
///
/// Bodies are stored row-major: `(row, col)` lives at `row * cols + col`,
/// which is also the vertex index used when the positions are exported.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftBody {
    bodies: Vec<RigidBody>,
    rows: usize,
    cols: usize,
    rest_row_spacing: f32,
    rest_col_spacing: f32,
    coefficients: SpringCoefficients,
}

impl SoftBody {
    pub fn builder() -> SoftBodyBuilder {
        SoftBodyBuilder::default()
    }

    /// Lays out `subdivisions_y` rows of `subdivisions_x` bodies over a
    /// `width x height` rectangle starting at its lower left corner
    /// `(-width / 2, -height / 2)`.
    pub fn new(
        width: f32,
        height: f32,
        subdivisions_x: usize,
        subdivisions_y: usize,
        spring_coefficient: f32,
        damping_coefficient: f32,
    ) -> Result<Self> {
        Self::builder()
            .size(width, height)
            .subdivisions(subdivisions_x, subdivisions_y)
            .spring_coefficient(spring_coefficient)
            .damping_coefficient(damping_coefficient)
            .build()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn rest_row_spacing(&self) -> f32 {
        self.rest_row_spacing
    }

    pub fn rest_col_spacing(&self) -> f32 {
        self.rest_col_spacing
    }

    pub fn coefficients(&self) -> SpringCoefficients {
        self.coefficients
    }

    pub fn rest_length(&self, connection: Connection) -> f32 {
        match connection {
            Connection::Row => self.rest_row_spacing,
            Connection::Column => self.rest_col_spacing,
        }
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(SoftBodyError::NodeOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index(row, col))
    }

    pub fn body(&self, row: usize, col: usize) -> Option<&RigidBody> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bodies.get(self.index(row, col))
    }

    pub fn body_mut(&mut self, row: usize, col: usize) -> Option<&mut RigidBody> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = self.index(row, col);
        self.bodies.get_mut(index)
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    /// Structural neighbors of `(row, col)`: up to two along the column axis
    /// (row connections) and two along the row axis (column connections).
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize, Connection)> {
        let (rows, cols) = (self.rows, self.cols);
        let above = (row > 0).then(|| (row - 1, col, Connection::Row));
        let below = (row + 1 < rows).then(|| (row + 1, col, Connection::Row));
        let left = (col > 0).then(|| (row, col - 1, Connection::Column));
        let right = (col + 1 < cols).then(|| (row, col + 1, Connection::Column));

        [above, below, left, right].into_iter().flatten()
    }

    pub fn set_inverse_mass(&mut self, row: usize, col: usize, inverse_mass: f32) -> Result<()> {
        let index = self.checked_index(row, col)?;
        if !valid_coefficient(inverse_mass) {
            return Err(SoftBodyError::InvalidCoefficient {
                name: "inverse mass",
                value: inverse_mass,
            });
        }
        self.bodies[index].inverse_mass = inverse_mass;
        Ok(())
    }

    /// Gives the body infinite mass so no force or impulse can move it.
    pub fn pin(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.checked_index(row, col)?;
        let body = &mut self.bodies[index];
        body.inverse_mass = 0.0;
        body.velocity = Vec3::ZERO;
        Ok(())
    }

    pub fn apply_impulse(&mut self, row: usize, col: usize, impulse: Vec3) -> Result<()> {
        let index = self.checked_index(row, col)?;
        self.bodies[index].apply_impulse(impulse);
        Ok(())
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.bodies.iter().map(|rb| rb.position).collect()
    }

    /// Copies positions into `out` by flat index. Extra slots on either side
    /// are left untouched.
    pub fn write_positions(&self, out: &mut [[f32; 3]]) {
        for (slot, rb) in out.iter_mut().zip(self.bodies.iter()) {
            *slot = rb.position.to_array();
        }
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(RigidBody::kinetic_energy).sum()
    }
}

/// Coefficients and inverse masses must be finite and non-negative.
fn valid_coefficient(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Builder for `SoftBody`
#[derive(Debug, Clone)]
pub struct SoftBodyBuilder {
    width: f32,
    height: f32,
    subdivisions_x: usize,
    subdivisions_y: usize,
    spring_coefficient: f32,
    damping_coefficient: f32,
    inverse_mass: f32,
}

impl SoftBodyBuilder {
    /// Get a Instance of `SoftBodyBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the undeformed sheet.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Number of bodies along x (columns) and along y (rows).
    pub fn subdivisions(mut self, subdivisions_x: usize, subdivisions_y: usize) -> Self {
        self.subdivisions_x = subdivisions_x;
        self.subdivisions_y = subdivisions_y;
        self
    }

    /// Hooke's constant shared by every spring
    pub fn spring_coefficient(mut self, spring_coefficient: f32) -> Self {
        self.spring_coefficient = spring_coefficient;
        self
    }

    /// How strongly a body's own velocity is resisted.
    /// `0.0` -> No Damping
    pub fn damping_coefficient(mut self, damping_coefficient: f32) -> Self {
        self.damping_coefficient = damping_coefficient;
        self
    }

    /// Inverse mass every body starts with.
    pub fn inverse_mass(mut self, inverse_mass: f32) -> Self {
        self.inverse_mass = inverse_mass;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.subdivisions_x == 0 || self.subdivisions_y == 0 {
            return Err(SoftBodyError::InvalidSubdivisions {
                x: self.subdivisions_x,
                y: self.subdivisions_y,
            });
        }

        let valid_len = |v: f32| v.is_finite() && v > 0.0;
        if !valid_len(self.width) || !valid_len(self.height) {
            return Err(SoftBodyError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        for (name, value) in [
            ("spring", self.spring_coefficient),
            ("damping", self.damping_coefficient),
            ("inverse mass", self.inverse_mass),
        ] {
            if !valid_coefficient(value) {
                return Err(SoftBodyError::InvalidCoefficient { name, value });
            }
        }

        Ok(())
    }

    /// Constructs a instance of `SoftBody`
    pub fn build(self) -> Result<SoftBody> {
        self.validate()?;

        let rows = self.subdivisions_y;
        let cols = self.subdivisions_x;

        let rest_col_spacing = self.width / cols as f32;
        let rest_row_spacing = self.height / rows as f32;

        let start_x = -self.width / 2.0;
        let start_y = -self.height / 2.0;

        let mut bodies = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let position = Vec3::new(
                    start_x + rest_col_spacing * j as f32,
                    start_y + rest_row_spacing * i as f32,
                    0.0,
                );
                bodies.push(RigidBody::new(position).with_inverse_mass(self.inverse_mass));
            }
        }

        ftlog::info!(
            "Created softbody with {rows}x{cols} bodies, spacing {rest_row_spacing}x{rest_col_spacing}, k={}, c={}",
            self.spring_coefficient,
            self.damping_coefficient
        );

        Ok(SoftBody {
            bodies,
            rows,
            cols,
            rest_row_spacing,
            rest_col_spacing,
            coefficients: SpringCoefficients::new(
                self.spring_coefficient,
                self.damping_coefficient,
            ),
        })
    }
}

impl Default for SoftBodyBuilder {
    /// Get a Instance of `SoftBodyBuilder` with default values
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            subdivisions_x: 10,
            subdivisions_y: 10,
            spring_coefficient: 25.0,
            damping_coefficient: 0.5,
            inverse_mass: 1.0,
        }
    }
}
