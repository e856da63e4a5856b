//! Particle kinds that can be fired at the slits

use crate::constants::*;

/// Particle kinds, each with a fixed wavelength and flight speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticleKind {
    #[default]
    Electron,
    Photon,
    Buckyball,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [
        ParticleKind::Electron,
        ParticleKind::Photon,
        ParticleKind::Buckyball,
    ];

    /// de Broglie-style wavelength λ = h/p, in visualization units
    pub fn wavelength(self) -> f64 {
        match self {
            ParticleKind::Photon => PHOTON_WAVELENGTH,
            ParticleKind::Electron => ELECTRON_WAVELENGTH,
            ParticleKind::Buckyball => BUCKYBALL_WAVELENGTH, // Much smaller due to higher mass
        }
    }

    /// Distance travelled along x per tick
    pub fn speed(self) -> f64 {
        match self {
            ParticleKind::Photon => PHOTON_SPEED,
            ParticleKind::Electron => ELECTRON_SPEED,
            ParticleKind::Buckyball => BUCKYBALL_SPEED,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ParticleKind::Electron => "electron",
            ParticleKind::Photon => "photon",
            ParticleKind::Buckyball => "buckyball",
        }
    }
}
