//! # Double-Slit Simulation Engine
//!
//! Tick-driven particle lifecycle for the double-slit experiment: emission,
//! which-slit resolution at the barrier, collapse toward the sampled landing
//! position, and hit accumulation on the detector screen.

pub mod emission;
pub mod error;
pub mod histogram;
pub mod lifecycle;
pub mod params;
pub mod particle;
pub mod simulation;

pub use emission::*;
pub use error::*;
pub use histogram::*;
pub use lifecycle::*;
pub use params::*;
pub use particle::*;
pub use simulation::*;
