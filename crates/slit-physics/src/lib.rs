//! # Double-Slit Physics
//!
//! Closed-form probability model for the double-slit experiment: two-slit
//! interference, single-slit diffraction, measurement collapse, and the samplers
//! that turn those densities into landing positions.

pub mod constants;
pub mod geometry;
pub mod kind;
pub mod probability;
pub mod sampler;

pub use constants::*;
pub use geometry::*;
pub use kind::*;
pub use probability::*;
pub use sampler::*;
