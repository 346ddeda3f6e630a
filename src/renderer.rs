use std::time::Instant;

use glam::Vec3;
use glium::{glutin::surface::WindowSurface, Display};
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::{
    error::RenderError,
    input::{InputState, ScaledInput},
    simulation::Simulation,
};
use camera::Camera;
use draw::LatticeRenderer;

mod camera;
mod draw;

const WINDOW_SIZE: u32 = 800;

/// Opens a window, polls input and advances the simulation once per frame.
pub struct Renderer {
    simulation: Simulation,
    force_magnitude: f32,
}

impl Renderer {
    pub fn new(simulation: Simulation, force_magnitude: f32) -> Self {
        Self {
            simulation,
            force_magnitude,
        }
    }

    pub fn create_window(self) -> Result<(), RenderError> {
        let event_loop = EventLoop::new()?;

        let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
            .with_title("Mass Spring Softbody (2D)")
            .with_inner_size(WINDOW_SIZE, WINDOW_SIZE)
            .build(&event_loop);

        self.run_render_loop(event_loop, display, window)
    }

    fn run_render_loop(
        self,
        event_loop: EventLoop<()>,
        display: Display<WindowSurface>,
        window: Window,
    ) -> Result<(), RenderError> {
        let Self {
            mut simulation,
            force_magnitude,
        } = self;

        let mut lattice = LatticeRenderer::new(&display, simulation.softbody())?;

        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 2.0));
        camera.look_at(&Vec3::ZERO);

        let mut input = ScaledInput {
            state: InputState::new(),
            magnitude: force_magnitude,
        };

        ftlog::info!("Hold the left mouse button to push the bottom edge along +X, the right one along -X");
        ftlog::info!("Hold left shift to push along Y instead");

        // The simulation clock was started at 0.0
        let start = Instant::now();

        event_loop.run(move |event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested | WindowEvent::Destroyed => window_target.exit(),

                WindowEvent::Resized(size) => display.resize(size.into()),

                WindowEvent::MouseInput { state, button, .. } => {
                    let pressed = state == ElementState::Pressed;
                    match button {
                        MouseButton::Left => input.state.primary = pressed,
                        MouseButton::Right => input.state.secondary = pressed,
                        _ => (),
                    }
                }

                WindowEvent::KeyboardInput { event, .. } => {
                    if event.physical_key == PhysicalKey::Code(KeyCode::ShiftLeft) {
                        input.state.alternate_axis = event.state == ElementState::Pressed;
                    }
                }

                WindowEvent::RedrawRequested => {
                    simulation.advance(start.elapsed().as_secs_f64(), &input);

                    lattice.refresh(simulation.softbody());
                    if let Err(e) = lattice.draw(&display, &camera) {
                        ftlog::error!("Failed to draw frame: {e}");
                        window_target.exit();
                    }
                }

                _ => (),
            },

            Event::AboutToWait => window.request_redraw(),

            _ => (),
        })?;

        Ok(())
    }
}
