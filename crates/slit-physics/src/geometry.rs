//! Barrier geometry and slit bands

use crate::constants::{DEFAULT_SCREEN_DISTANCE, DEFAULT_SLIT_SPACING, DEFAULT_SLIT_WIDTH};

/// The two slits in the barrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlitIndex {
    /// Slit centred at `+spacing / 2`
    Top,
    /// Slit centred at `-spacing / 2`
    Bottom,
}

impl SlitIndex {
    pub const BOTH: [SlitIndex; 2] = [SlitIndex::Top, SlitIndex::Bottom];

    /// Sign of the slit centre on the y axis
    pub fn sign(self) -> f64 {
        match self {
            SlitIndex::Top => 1.0,
            SlitIndex::Bottom => -1.0,
        }
    }
}

/// Slit width, slit spacing and screen distance.
///
/// All three are expected to be positive. Nothing here validates that: degenerate
/// geometry produces degenerate densities rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlitGeometry {
    pub slit_width: f64,
    pub slit_spacing: f64,
    pub screen_distance: f64,
}

impl SlitGeometry {
    pub fn new(slit_width: f64, slit_spacing: f64, screen_distance: f64) -> Self {
        Self {
            slit_width,
            slit_spacing,
            screen_distance,
        }
    }

    /// y coordinate of a slit's centre
    pub fn slit_center(&self, slit: SlitIndex) -> f64 {
        slit.sign() * self.slit_spacing / 2.0
    }

    /// Closed interval `[center - width/2, center + width/2]` of a slit
    pub fn slit_band(&self, slit: SlitIndex) -> (f64, f64) {
        let center = self.slit_center(slit);
        let half_width = self.slit_width / 2.0;
        (center - half_width, center + half_width)
    }

    /// Which slit band contains `y`, if any. The top slit is checked first.
    pub fn slit_at(&self, y: f64) -> Option<SlitIndex> {
        SlitIndex::BOTH.into_iter().find(|&slit| {
            let (min, max) = self.slit_band(slit);
            y >= min && y <= max
        })
    }
}

impl Default for SlitGeometry {
    fn default() -> Self {
        Self::new(
            DEFAULT_SLIT_WIDTH,
            DEFAULT_SLIT_SPACING,
            DEFAULT_SCREEN_DISTANCE,
        )
    }
}
