//! Render-side view of a softbody: one vertex per body, one line per spring.

use crate::softbody::SoftBody;

/// Index pairs of every row and column connection of a `rows x cols` lattice,
/// laid out for a line list.
pub fn lattice_lines(rows: usize, cols: usize) -> Vec<u32> {
    let lines = rows * cols.saturating_sub(1) + cols * rows.saturating_sub(1);
    let mut indices = Vec::with_capacity(2 * lines);
    let index = |i: usize, j: usize| (i * cols + j) as u32;

    for i in 0..rows {
        for j in 0..cols {
            if j + 1 < cols {
                indices.push(index(i, j));
                indices.push(index(i, j + 1));
            }
            if i + 1 < rows {
                indices.push(index(i, j));
                indices.push(index(i + 1, j));
            }
        }
    }
    indices
}

/// Vertex positions of `softbody` in flat index order, refreshed from the
/// simulation once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeMesh {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl LatticeMesh {
    pub fn new(softbody: &SoftBody) -> Self {
        let mut vertices = vec![[0.0; 3]; softbody.len()];
        softbody.write_positions(&mut vertices);

        Self {
            vertices,
            indices: lattice_lines(softbody.rows(), softbody.cols()),
        }
    }

    pub fn refresh(&mut self, softbody: &SoftBody) {
        softbody.write_positions(&mut self.vertices);
    }
}
