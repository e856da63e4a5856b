//! Landing-position sampling
//!
//! Samplers never own a random source. The caller passes one in, so a seeded
//! generator reproduces the same landing positions.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::constants::MAX_REJECTION_ATTEMPTS;
use crate::geometry::{SlitGeometry, SlitIndex};
use crate::probability::{density, lobe_spread};

/// Draws a landing y-coordinate on the detector screen
pub trait PositionSampler {
    fn sample<R: Rng + ?Sized>(
        &mut self,
        geometry: &SlitGeometry,
        wavelength: f64,
        detector_on: bool,
        max_y: f64,
        rng: &mut R,
    ) -> f64;
}

/// Default sampler: direct Gaussian draw with the detector on, rejection
/// sampling against the interference density with it off.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterferenceSampler;

impl PositionSampler for InterferenceSampler {
    fn sample<R: Rng + ?Sized>(
        &mut self,
        geometry: &SlitGeometry,
        wavelength: f64,
        detector_on: bool,
        max_y: f64,
        rng: &mut R,
    ) -> f64 {
        if detector_on {
            sample_collapsed(geometry, rng)
        } else {
            sample_interference(geometry, wavelength, max_y, rng)
        }
    }
}

/// Measured particle: pick a slit 50/50, then scatter around its centre
pub fn sample_collapsed<R: Rng + ?Sized>(geometry: &SlitGeometry, rng: &mut R) -> f64 {
    let slit = if rng.random::<bool>() {
        SlitIndex::Top
    } else {
        SlitIndex::Bottom
    };

    let noise: f64 = rng.sample(StandardNormal);
    geometry.slit_center(slit) + noise * lobe_spread(geometry)
}

/// Unmeasured particle: rejection sampling over `[-max_y, max_y]`.
///
/// Gives up after `MAX_REJECTION_ATTEMPTS` and returns a uniform draw in
/// `[-spacing, spacing]`. That fallback does not follow the interference density.
pub fn sample_interference<R: Rng + ?Sized>(
    geometry: &SlitGeometry,
    wavelength: f64,
    max_y: f64,
    rng: &mut R,
) -> f64 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let y = (rng.random::<f64>() - 0.5) * 2.0 * max_y;
        let weight = density(y, geometry, wavelength, false);

        if rng.random::<f64>() < weight {
            return y;
        }
    }

    log::warn!(
        "Rejection sampling exhausted {} attempts (width={}, spacing={}, λ={}), using uniform fallback",
        MAX_REJECTION_ATTEMPTS,
        geometry.slit_width,
        geometry.slit_spacing,
        wavelength
    );
    (rng.random::<f64>() - 0.5) * geometry.slit_spacing * 2.0
}
