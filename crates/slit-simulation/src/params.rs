//! Simulation parameters for runtime tuning

use slit_physics::{ParticleKind, SlitGeometry, DEFAULT_SAMPLE_MAX_Y, DEFAULT_WAVELENGTH};

use crate::error::{Result, SimulationError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    // Apparatus
    pub geometry: SlitGeometry,
    pub particle_kind: ParticleKind,
    /// Replaced by the kind's wavelength whenever the kind is set
    pub wavelength: f64,
    pub detector_on: bool,

    // Emission
    pub emission_rate: f64,
    pub ticks_per_second: f64,
    pub max_live_particles: usize,

    // Lifecycle
    pub max_age: u32,
    pub sample_max_y: f64,

    // Accumulation
    pub screen_height: f64,
    pub bucket_count: usize,
    pub hit_capacity: usize,
}

impl SimulationParams {
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(SimulationError::InvalidConfig(
                "bucket_count must be at least 1".into(),
            ));
        }
        if self.hit_capacity == 0 {
            return Err(SimulationError::InvalidConfig(
                "hit_capacity must be at least 1".into(),
            ));
        }
        if !(self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "ticks_per_second must be positive, got {}",
                self.ticks_per_second
            )));
        }
        if !(self.screen_height.is_finite() && self.screen_height > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "screen_height must be positive, got {}",
                self.screen_height
            )));
        }

        let finite = [
            ("slit_width", self.geometry.slit_width),
            ("slit_spacing", self.geometry.slit_spacing),
            ("screen_distance", self.geometry.screen_distance),
            ("wavelength", self.wavelength),
            ("emission_rate", self.emission_rate),
            ("sample_max_y", self.sample_max_y),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }
        if self.emission_rate < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "emission_rate",
                value: self.emission_rate,
            });
        }

        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            geometry: SlitGeometry::default(),
            particle_kind: ParticleKind::Electron,
            wavelength: DEFAULT_WAVELENGTH,
            detector_on: false,

            emission_rate: 10.0,
            ticks_per_second: 60.0,
            max_live_particles: 50,

            max_age: 500,
            sample_max_y: DEFAULT_SAMPLE_MAX_Y,

            screen_height: 16.0,
            bucket_count: 40,
            hit_capacity: 3000,
        }
    }
}
