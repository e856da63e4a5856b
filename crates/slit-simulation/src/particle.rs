//! Physics-only particle record and lifecycle events
//!
//! Presentation state (meshes, trails, colours) belongs to the host and is keyed
//! by `ParticleId`.

use glam::DVec3;
use slit_physics::{SlitIndex, BARRIER_BAND_MAX, BARRIER_BAND_MIN};

/// Stable identifier, never reused within one simulation
pub type ParticleId = u64;

/// Where a live particle is in its flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticlePhase {
    /// Left of the barrier band
    Traveling,
    /// Inside the barrier band with no landing position yet
    AtBarrier,
    /// Landing position chosen, heading for the screen
    Resolved,
}

/// How a particle left the live set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Stopped by the barrier between or outside the slits
    Absorbed,
    /// Reached the screen plane
    Arrived(HitEvent),
    /// Exceeded the maximum age
    Expired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    id: ParticleId,
    pub(crate) position: DVec3,
    pub(crate) velocity: DVec3,
    pub(crate) age: u32,
    pub(crate) final_y: Option<f64>,
    pub(crate) which_slit: Option<SlitIndex>,
}

impl Particle {
    pub fn new(id: ParticleId, position: DVec3, velocity: DVec3) -> Self {
        Self {
            id,
            position,
            velocity,
            age: 0,
            final_y: None,
            which_slit: None,
        }
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn velocity(&self) -> DVec3 {
        self.velocity
    }

    /// Ticks lived so far
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Sampled landing position, set once at the barrier
    pub fn final_y(&self) -> Option<f64> {
        self.final_y
    }

    pub fn which_slit(&self) -> Option<SlitIndex> {
        self.which_slit
    }

    pub fn in_barrier_band(&self) -> bool {
        self.position.x >= BARRIER_BAND_MIN && self.position.x < BARRIER_BAND_MAX
    }

    pub fn phase(&self) -> ParticlePhase {
        if self.final_y.is_some() {
            ParticlePhase::Resolved
        } else if self.in_barrier_band() {
            ParticlePhase::AtBarrier
        } else {
            ParticlePhase::Traveling
        }
    }
}

/// A particle hitting the detector screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    pub particle_id: ParticleId,
    pub x: f64,
    pub y: f64,
    pub which_slit: Option<SlitIndex>,
    pub detector_on_at_hit: bool,
}

/// A slit passage observed by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlitDetection {
    pub particle_id: ParticleId,
    pub slit: SlitIndex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        let mut particle = Particle::new(0, DVec3::new(-1.0, 1.4, 0.0), DVec3::X * 0.15);
        assert_eq!(particle.phase(), ParticlePhase::Traveling);

        particle.position.x = -0.5;
        assert_eq!(particle.phase(), ParticlePhase::AtBarrier);

        particle.position.x = 0.5; // Band upper bound is exclusive
        assert_eq!(particle.phase(), ParticlePhase::Traveling);

        particle.final_y = Some(0.0);
        assert_eq!(particle.phase(), ParticlePhase::Resolved);
    }
}
