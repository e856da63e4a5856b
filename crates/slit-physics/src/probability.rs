//! Closed-form landing densities for the double slit
//!
//! NOTE: `density` is an unnormalized weight. It is fit for rejection sampling and
//! relative comparisons, not for integrating to a probability.

use std::f64::consts::PI;

use crate::constants::{DETECTOR_SPREAD_FACTOR, ENVELOPE_EPSILON};
use crate::geometry::{SlitGeometry, SlitIndex};

/// Two-slit interference term at screen position `y`
/// r₁,₂ = √(L² + (y ∓ d/2)²),  δ = 2π (r₂ − r₁) / λ,  I = cos²(δ/2)
///
/// Path lengths are exact Euclidean distances, not the small-angle form.
pub fn interference_amplitude(y: f64, spacing: f64, wavelength: f64, distance: f64) -> f64 {
    let half_spacing = spacing / 2.0;

    let r1 = (distance * distance + (y - half_spacing).powi(2)).sqrt();
    let r2 = (distance * distance + (y + half_spacing).powi(2)).sqrt();
    let path_diff = r2 - r1;

    let phase = 2.0 * PI * path_diff / wavelength;
    (phase / 2.0).cos().powi(2)
}

/// Single-slit diffraction envelope
/// β = π a y / (λ L),  E = (sin β / β)²
pub fn diffraction_envelope(y: f64, slit_width: f64, wavelength: f64, distance: f64) -> f64 {
    if y.abs() < ENVELOPE_EPSILON {
        return 1.0;
    }

    let beta = PI * slit_width * y / (wavelength * distance);
    if beta == 0.0 {
        return 1.0;
    }

    (beta.sin() / beta).powi(2)
}

/// Width of each classical lobe when the detector is on
pub fn lobe_spread(geometry: &SlitGeometry) -> f64 {
    geometry.slit_width * DETECTOR_SPREAD_FACTOR
}

/// Classical two-lobe density: one unit-height Gaussian per slit centre
fn classical_density(y: f64, geometry: &SlitGeometry) -> f64 {
    let sigma = lobe_spread(geometry);
    let two_sigma_sq = 2.0 * sigma * sigma;

    SlitIndex::BOTH
        .into_iter()
        .map(|slit| {
            let offset = y - geometry.slit_center(slit);
            (-(offset * offset) / two_sigma_sq).exp()
        })
        .sum()
}

/// Landing density at screen position `y`.
///
/// Undetected particles interfere: interference × diffraction envelope.
/// Detected particles have collapsed onto one slit, which leaves two Gaussian
/// lobes centred on ±spacing/2 and no fringes.
pub fn density(y: f64, geometry: &SlitGeometry, wavelength: f64, detector_on: bool) -> f64 {
    if detector_on {
        return classical_density(y, geometry);
    }

    let interference = interference_amplitude(
        y,
        geometry.slit_spacing,
        wavelength,
        geometry.screen_distance,
    );
    let envelope = diffraction_envelope(
        y,
        geometry.slit_width,
        wavelength,
        geometry.screen_distance,
    );

    interference * envelope
}

/// Expected-pattern curve across the screen: `samples + 1` evenly spaced
/// `(y, density)` points from `-screen_height/2` to `+screen_height/2`.
pub fn density_profile(
    geometry: &SlitGeometry,
    wavelength: f64,
    detector_on: bool,
    screen_height: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let half_height = screen_height / 2.0;
    let steps = samples.max(1);

    (0..=steps)
        .map(|i| {
            let y = -half_height + (i as f64 / steps as f64) * screen_height;
            (y, density(y, geometry, wavelength, detector_on))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (SlitGeometry, f64) {
        (SlitGeometry::new(1.0, 2.8, 8.0), 0.6)
    }

    #[test]
    fn test_interference_bounded_and_symmetric() {
        let (geometry, wavelength) = scenario();
        for i in -400..=400 {
            let y = i as f64 * 0.02;
            let a = interference_amplitude(y, geometry.slit_spacing, wavelength, 8.0);
            let b = interference_amplitude(-y, geometry.slit_spacing, wavelength, 8.0);
            assert!((0.0..=1.0).contains(&a), "y={y} a={a}");
            assert!((a - b).abs() < 1e-12, "y={y}");
        }
    }

    #[test]
    fn test_central_maximum() {
        // Equal path lengths at y = 0
        assert_eq!(interference_amplitude(0.0, 2.8, 0.6, 8.0), 1.0);
    }

    #[test]
    fn test_envelope_limit_at_center() {
        assert_eq!(diffraction_envelope(0.0, 1.0, 0.6, 8.0), 1.0);
        assert_eq!(diffraction_envelope(-0.0, 0.3, 0.05, 8.0), 1.0);
    }

    #[test]
    fn test_envelope_first_zero() {
        // β = π at y = λL/a
        let y = 0.6 * 8.0 / 1.0;
        assert!(diffraction_envelope(y, 1.0, 0.6, 8.0) < 1e-20);
    }

    #[test]
    fn test_envelope_bounded() {
        for i in -400..=400 {
            let e = diffraction_envelope(i as f64 * 0.02, 1.0, 0.6, 8.0);
            assert!((0.0..=1.0).contains(&e));
        }
    }

    #[test]
    fn test_density_is_pure() {
        let (geometry, wavelength) = scenario();
        let at_slit = density(1.4, &geometry, wavelength, false);
        let near_center = density(0.1, &geometry, wavelength, false);

        assert!(at_slit.is_finite() && at_slit >= 0.0);
        assert!(near_center.is_finite() && near_center >= 0.0);
        assert_eq!(
            at_slit.to_bits(),
            density(1.4, &geometry, wavelength, false).to_bits()
        );
        assert_eq!(
            near_center.to_bits(),
            density(0.1, &geometry, wavelength, false).to_bits()
        );
    }

    #[test]
    fn test_detector_density_two_lobes() {
        let (geometry, wavelength) = scenario();
        let peak = density(1.4, &geometry, wavelength, true);
        let center = density(0.0, &geometry, wavelength, true);

        assert!(peak > 0.99);
        assert!(center < 0.05);
        assert!(
            (density(-1.4, &geometry, wavelength, true) - peak).abs() < 1e-12,
            "lobes are symmetric"
        );
    }

    #[test]
    fn test_detector_density_ignores_wavelength() {
        let (geometry, _) = scenario();
        assert_eq!(
            density(0.7, &geometry, 0.05, true),
            density(0.7, &geometry, 0.5, true)
        );
    }

    #[test]
    fn test_density_profile_spans_screen() {
        let (geometry, wavelength) = scenario();
        let profile = density_profile(&geometry, wavelength, false, 16.0, 200);

        assert_eq!(profile.len(), 201);
        assert_eq!(profile[0].0, -8.0);
        assert_eq!(profile[200].0, 8.0);
        assert!(profile.iter().all(|&(_, p)| p.is_finite() && p >= 0.0));
    }
}
