//! A mass-spring softbody sheet stepped at a fixed physics rate.
//!
//! The sheet is a grid of point masses, each tied to its row and column
//! neighbors by damped springs. Row 0 is driven by an external force.
//!
//! # Example
//! ```rust
//! use glam::Vec3;
//! use springsheet::{simulation::Simulation, softbody::SoftBody};
//!
//! let softbody = SoftBody::builder()
//!     .size(1.0, 1.0)
//!     .subdivisions(10, 10)
//!     .spring_coefficient(25.0)
//!     .damping_coefficient(0.5)
//!     .build()
//!     .unwrap();
//!
//! let mut simulation = Simulation::new(softbody, 0.012, 0.0).unwrap();
//! let steps = simulation.advance(0.1, &Vec3::new(2.0, 0.0, 0.0));
//! assert_eq!(steps, 8);
//! ```

pub mod clock;
pub mod error;
pub mod input;
pub mod mesh;
pub mod properties;
#[cfg(feature = "window")]
pub mod renderer;
pub mod simulation;
pub mod simulator;
pub mod softbody;
pub mod spring;
