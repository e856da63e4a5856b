//! Per-particle state machine: source → barrier → screen
//!
//! Each tick a particle is resolved at the barrier (once), moved, eased toward
//! its landing position and aged, then checked for arrival or expiry.
//! Which-slit resolution draws from the sampler at most once per particle.

use glam::DVec3;
use rand::Rng;
use slit_physics::{ParticleKind, PositionSampler, SlitGeometry, SOURCE_X};

use crate::particle::{HitEvent, Outcome, Particle, ParticleId, SlitDetection};

/// Start of the easing ramp (the barrier band's far edge)
const EASING_START_X: f64 = 0.5;

/// Inputs frozen for the duration of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub geometry: SlitGeometry,
    pub wavelength: f64,
    /// Read once per tick, shared by every particle in it
    pub detector_on: bool,
    pub sample_max_y: f64,
    pub max_age: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    /// The detector saw a particle pass a slit
    Detected(SlitDetection),
    /// A particle left the live set
    Finished { id: ParticleId, outcome: Outcome },
}

/// Running totals since the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleStats {
    pub spawned: u64,
    pub resolved: u64,
    pub absorbed: u64,
    pub arrived: u64,
    pub expired: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ParticleLifecycle {
    particles: Vec<Particle>,
    next_id: ParticleId,
    stats: LifecycleStats,
}

impl ParticleLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn stats(&self) -> LifecycleStats {
        self.stats
    }

    /// Add a particle at an arbitrary position
    pub fn spawn(&mut self, position: DVec3, velocity: DVec3) -> ParticleId {
        let id = self.next_id;
        self.next_id += 1;
        self.stats.spawned += 1;
        self.particles.push(Particle::new(id, position, velocity));
        id
    }

    /// Emit from the source plane, aimed at the slits with some vertical scatter
    pub fn emit<R: Rng + ?Sized>(
        &mut self,
        geometry: &SlitGeometry,
        kind: ParticleKind,
        rng: &mut R,
    ) -> ParticleId {
        let y = (rng.random::<f64>() - 0.5) * geometry.slit_spacing * 1.2;
        self.spawn(DVec3::new(SOURCE_X, y, 0.0), DVec3::X * kind.speed())
    }

    /// Advance every live particle by one tick.
    ///
    /// Particles that finish are removed in place; the rest keep their order.
    pub fn step<S, R>(
        &mut self,
        ctx: &TickContext,
        sampler: &mut S,
        rng: &mut R,
        events: &mut Vec<LifecycleEvent>,
    ) where
        S: PositionSampler,
        R: Rng + ?Sized,
    {
        let Self {
            particles, stats, ..
        } = self;

        particles.retain_mut(|particle| {
            let Some(outcome) = advance_particle(particle, ctx, sampler, rng, stats, events)
            else {
                return true;
            };

            match outcome {
                Outcome::Absorbed => stats.absorbed += 1,
                Outcome::Arrived(_) => stats.arrived += 1,
                Outcome::Expired => stats.expired += 1,
            }
            log::trace!("Particle {} finished: {:?}", particle.id(), outcome);
            events.push(LifecycleEvent::Finished {
                id: particle.id(),
                outcome,
            });
            false
        });
    }

    /// Drop all live particles and zero the statistics. Ids keep counting up.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.stats = LifecycleStats::default();
    }
}

/// One tick for one particle; `Some` when it leaves the live set
fn advance_particle<S, R>(
    particle: &mut Particle,
    ctx: &TickContext,
    sampler: &mut S,
    rng: &mut R,
    stats: &mut LifecycleStats,
    events: &mut Vec<LifecycleEvent>,
) -> Option<Outcome>
where
    S: PositionSampler,
    R: Rng + ?Sized,
{
    // Which-slit resolution, exactly once
    if particle.in_barrier_band() && particle.final_y.is_none() {
        let Some(slit) = ctx.geometry.slit_at(particle.position.y) else {
            return Some(Outcome::Absorbed);
        };

        particle.which_slit = Some(slit);
        particle.final_y = Some(sampler.sample(
            &ctx.geometry,
            ctx.wavelength,
            ctx.detector_on,
            ctx.sample_max_y,
            rng,
        ));
        stats.resolved += 1;

        if ctx.detector_on {
            events.push(LifecycleEvent::Detected(SlitDetection {
                particle_id: particle.id(),
                slit,
            }));
        }
    }

    particle.position += particle.velocity;

    // Ease toward the landing position; lands exactly on it at the screen
    if let Some(final_y) = particle.final_y {
        if particle.position.x > 0.0 {
            let progress = (particle.position.x - EASING_START_X)
                / (ctx.geometry.screen_distance - EASING_START_X);
            let smooth = progress * progress;
            if smooth >= 1.0 {
                particle.position.y = final_y;
            } else {
                particle.position.y += (final_y - particle.position.y) * smooth;
            }
        }
    }

    particle.age += 1;

    if particle.position.x >= ctx.geometry.screen_distance {
        return Some(Outcome::Arrived(HitEvent {
            particle_id: particle.id(),
            x: ctx.geometry.screen_distance,
            y: particle.position.y,
            which_slit: particle.which_slit,
            detector_on_at_hit: ctx.detector_on,
        }));
    }

    if particle.age > ctx.max_age {
        return Some(Outcome::Expired);
    }

    None
}
