//! Constants for the double-slit apparatus
//!
//! Distances are in scene units: the source sits left of the barrier, the barrier
//! is centred on x = 0 and the detector screen lies at `screen_distance`.

/// x coordinate where particles are emitted
pub const SOURCE_X: f64 = -7.5;

/// Lower bound (inclusive) of the barrier crossing band
pub const BARRIER_BAND_MIN: f64 = -0.5;

/// Upper bound (exclusive) of the barrier crossing band
pub const BARRIER_BAND_MAX: f64 = 0.5;

/// Default slit width
pub const DEFAULT_SLIT_WIDTH: f64 = 1.0;

/// Default centre-to-centre slit spacing
pub const DEFAULT_SLIT_SPACING: f64 = 2.8;

/// Default barrier-to-screen distance
pub const DEFAULT_SCREEN_DISTANCE: f64 = 8.0;

/// Wavelength used before any particle kind is selected
pub const DEFAULT_WAVELENGTH: f64 = 0.6;

// de Broglie-inspired wavelengths (arbitrary visualization units).
// Heavier particles have shorter wavelengths and tighter fringes.
pub const PHOTON_WAVELENGTH: f64 = 0.5;
pub const ELECTRON_WAVELENGTH: f64 = 0.3;
pub const BUCKYBALL_WAVELENGTH: f64 = 0.05;

// Flight speeds in scene units per tick
pub const PHOTON_SPEED: f64 = 0.2;
pub const ELECTRON_SPEED: f64 = 0.15;
pub const BUCKYBALL_SPEED: f64 = 0.12;

/// Gaussian lobe width as a fraction of the slit width (detector on)
pub const DETECTOR_SPREAD_FACTOR: f64 = 0.5;

/// Attempts before rejection sampling gives up and falls back
pub const MAX_REJECTION_ATTEMPTS: usize = 1000;

/// Half-range of screen positions considered by rejection sampling
pub const DEFAULT_SAMPLE_MAX_Y: f64 = 8.0;

/// |y| below which the diffraction envelope takes its limit value
pub const ENVELOPE_EPSILON: f64 = 1e-9;

/// Number of intervals in the analytic preview curve
pub const PREVIEW_SAMPLES: usize = 200;
