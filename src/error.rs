use thiserror::Error;

pub type Result<T> = std::result::Result<T, SoftBodyError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SoftBodyError {
    #[error("subdivisions must be at least 1x1, got {x}x{y}")]
    InvalidSubdivisions { x: usize, y: usize },

    #[error("softbody dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("{name} coefficient must be non-negative and finite, got {value}")]
    InvalidCoefficient { name: &'static str, value: f32 },

    #[error("physics step must be positive and finite, got {0}")]
    InvalidPhysicsStep(f64),

    #[error("node ({row}, {col}) is outside of a {rows}x{cols} grid")]
    NodeOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Failures of the window and drawing layer. None of these touch simulation state.
#[cfg(feature = "window")]
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    Program(#[from] glium::ProgramCreationError),

    #[error(transparent)]
    VertexBuffer(#[from] glium::vertex::BufferCreationError),

    #[error(transparent)]
    IndexBuffer(#[from] glium::index::BufferCreationError),

    #[error(transparent)]
    Draw(#[from] glium::DrawError),

    #[error(transparent)]
    SwapBuffers(#[from] glium::SwapBuffersError),
}
