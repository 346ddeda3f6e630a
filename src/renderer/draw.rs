use glium::{
    glutin::surface::WindowSurface, implement_vertex, index::PrimitiveType, uniform, Display,
    IndexBuffer, Program, Surface, VertexBuffer,
};

use super::camera::Camera;
use crate::{error::RenderError, mesh::LatticeMesh, softbody::SoftBody};

static VERTEX_SHADER_SRC: &str = r#"
#version 140

in vec3 position;

uniform mat4 mvp;

void main() {
    gl_Position = mvp * vec4(position, 1.0);
}
"#;

static FRAGMENT_SHADER_SRC: &str = r#"
#version 140

uniform vec4 hue;
out vec4 color;

void main() {
    color = hue;
}
"#;

fn stage_positions(staging: &mut [Vertex], softbody: &SoftBody) {
    for (vertex, rb) in staging.iter_mut().zip(softbody.bodies()) {
        vertex.position = rb.position.to_array();
    }
}

const LATTICE_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];

#[derive(Copy, Clone, Debug)]
pub struct Vertex {
    pub position: [f32; 3],
}

implement_vertex!(Vertex, position);

/// GPU copy of the softbody lattice. Vertex `i * cols + j` is body `(i, j)`.
pub struct LatticeRenderer {
    program: Program,
    vertex_buffer: VertexBuffer<Vertex>,
    index_buffer: IndexBuffer<u32>,
    staging: Vec<Vertex>,
}

impl LatticeRenderer {
    pub fn new(display: &Display<WindowSurface>, softbody: &SoftBody) -> Result<Self, RenderError> {
        let program =
            Program::from_source(display, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, None)?;

        let LatticeMesh { vertices, indices } = LatticeMesh::new(softbody);
        let staging: Vec<Vertex> = vertices
            .into_iter()
            .map(|position| Vertex { position })
            .collect();

        let vertex_buffer = VertexBuffer::dynamic(display, &staging)?;
        let index_buffer = IndexBuffer::new(display, PrimitiveType::LinesList, &indices)?;

        Ok(Self {
            program,
            vertex_buffer,
            index_buffer,
            staging,
        })
    }

    /// Pushes the current body positions into the vertex buffer.
    pub fn refresh(&mut self, softbody: &SoftBody) {
        stage_positions(&mut self.staging, softbody);
        self.vertex_buffer.write(&self.staging);
    }

    pub fn draw(
        &self,
        display: &Display<WindowSurface>,
        camera: &Camera,
    ) -> Result<(), RenderError> {
        let mut target = display.draw();
        target.clear_color(0.0, 0.0, 0.0, 1.0);

        let uniforms = uniform! {
            mvp: camera.matrix().to_cols_array_2d(),
            hue: LATTICE_COLOR,
        };

        let drawn = target.draw(
            &self.vertex_buffer,
            &self.index_buffer,
            &self.program,
            &uniforms,
            &Default::default(),
        );

        // The frame has to be finished even when drawing failed.
        target.finish()?;
        drawn?;

        Ok(())
    }
}
