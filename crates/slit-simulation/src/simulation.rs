//! Tick-driven double-slit simulation
//!
//! The host owns rendering. It pushes parameter changes through the setters,
//! calls `advance` once per frame and draws whatever `advance`,
//! `live_particles` and the histogram queries return.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slit_physics::{
    density_profile, InterferenceSampler, ParticleKind, PositionSampler, SlitGeometry,
    PREVIEW_SAMPLES,
};

use crate::emission::EmissionScheduler;
use crate::error::{ensure_finite, Result, SimulationError};
use crate::histogram::{HitAccumulator, HitLog, HitRecord};
use crate::lifecycle::{LifecycleEvent, LifecycleStats, ParticleLifecycle, TickContext};
use crate::particle::{HitEvent, Outcome, Particle, SlitDetection};
use crate::params::SimulationParams;

/// Double-slit experiment driven one tick at a time
pub struct DoubleSlitSimulation<R = StdRng, S = InterferenceSampler> {
    params: SimulationParams,

    lifecycle: ParticleLifecycle,
    scheduler: EmissionScheduler,
    histogram: HitAccumulator,
    hit_log: HitLog,
    detections: Vec<SlitDetection>,

    sampler: S,
    rng: R,

    // Scratch buffer reused across ticks
    events: Vec<LifecycleEvent>,
}

impl DoubleSlitSimulation {
    /// Seeded from the operating system
    pub fn new(params: SimulationParams) -> Result<Self> {
        Self::with_parts(params, StdRng::from_os_rng(), InterferenceSampler)
    }

    /// Reproducible run
    pub fn with_seed(params: SimulationParams, seed: u64) -> Result<Self> {
        Self::with_parts(params, StdRng::seed_from_u64(seed), InterferenceSampler)
    }
}

impl<R: Rng, S: PositionSampler> DoubleSlitSimulation<R, S> {
    pub fn with_parts(params: SimulationParams, rng: R, sampler: S) -> Result<Self> {
        params.validate()?;
        log::info!(
            "Initializing DoubleSlitSimulation: {} λ={} width={} spacing={} rate={}/s",
            params.particle_kind.name(),
            params.wavelength,
            params.geometry.slit_width,
            params.geometry.slit_spacing,
            params.emission_rate
        );

        Ok(Self {
            lifecycle: ParticleLifecycle::new(),
            scheduler: EmissionScheduler::new(
                params.emission_rate,
                params.ticks_per_second,
                params.max_live_particles,
            ),
            histogram: HitAccumulator::new(params.bucket_count, params.screen_height),
            hit_log: HitLog::new(params.hit_capacity),
            detections: Vec::new(),
            sampler,
            rng,
            events: Vec::new(),
            params,
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn geometry(&self) -> SlitGeometry {
        self.params.geometry
    }

    pub fn particle_kind(&self) -> ParticleKind {
        self.params.particle_kind
    }

    pub fn wavelength(&self) -> f64 {
        self.params.wavelength
    }

    pub fn detector_on(&self) -> bool {
        self.params.detector_on
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Switches kind and adopts its wavelength. Particles already past the
    /// barrier keep their landing positions; in-flight speeds are unchanged.
    pub fn set_particle_kind(&mut self, kind: ParticleKind) {
        self.params.particle_kind = kind;
        self.params.wavelength = kind.wavelength();
        log::debug!(
            "Particle kind set to {} (λ={})",
            kind.name(),
            self.params.wavelength
        );
    }

    pub fn set_emission_rate(&mut self, per_second: f64) -> Result<()> {
        let rate = ensure_finite("emission_rate", per_second)?;
        if rate < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "emission_rate",
                value: rate,
            });
        }
        self.params.emission_rate = rate;
        self.scheduler.set_rate(rate);
        log::debug!("Emission rate set to {}/s", rate);
        Ok(())
    }

    /// Expected positive; non-positive widths give degenerate densities
    pub fn set_slit_width(&mut self, width: f64) -> Result<()> {
        self.params.geometry.slit_width = ensure_finite("slit_width", width)?;
        log::debug!("Slit width set to {}", width);
        Ok(())
    }

    /// Expected positive and larger than the slit width
    pub fn set_slit_spacing(&mut self, spacing: f64) -> Result<()> {
        self.params.geometry.slit_spacing = ensure_finite("slit_spacing", spacing)?;
        log::debug!("Slit spacing set to {}", spacing);
        Ok(())
    }

    /// Takes effect from the next tick; particles already resolved are unaffected
    pub fn set_detector_on(&mut self, on: bool) {
        self.params.detector_on = on;
        log::debug!("Detector {}", if on { "on" } else { "off" });
    }

    /// Run `delta_ticks` ticks and return the screen hits they produced, in order.
    ///
    /// The detector flag is read once at the start of each tick.
    pub fn advance(&mut self, delta_ticks: u32) -> Vec<HitEvent> {
        let mut hits = Vec::new();
        for _ in 0..delta_ticks {
            self.tick(&mut hits);
        }
        hits
    }

    fn tick(&mut self, hits: &mut Vec<HitEvent>) {
        let ctx = TickContext {
            geometry: self.params.geometry,
            wavelength: self.params.wavelength,
            detector_on: self.params.detector_on,
            sample_max_y: self.params.sample_max_y,
            max_age: self.params.max_age,
        };

        let spawn = self.scheduler.tick(self.lifecycle.live_count());
        for _ in 0..spawn {
            self.lifecycle
                .emit(&ctx.geometry, self.params.particle_kind, &mut self.rng);
        }

        self.events.clear();
        self.lifecycle
            .step(&ctx, &mut self.sampler, &mut self.rng, &mut self.events);

        for event in self.events.drain(..) {
            match event {
                LifecycleEvent::Detected(detection) => self.detections.push(detection),
                LifecycleEvent::Finished {
                    outcome: Outcome::Arrived(hit),
                    ..
                } => {
                    self.histogram.add_hit(hit.y);
                    self.hit_log.push(HitRecord {
                        x: hit.x,
                        y: hit.y,
                        detector_on_at_hit: hit.detector_on_at_hit,
                    });
                    hits.push(hit);
                }
                LifecycleEvent::Finished { .. } => {}
            }
        }
    }

    /// Read-only view of particles in flight
    pub fn live_particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.lifecycle.particles().iter()
    }

    pub fn live_count(&self) -> usize {
        self.lifecycle.live_count()
    }

    pub fn lifecycle_stats(&self) -> LifecycleStats {
        self.lifecycle.stats()
    }

    /// Slit passages seen by the detector since the last call
    pub fn take_detections(&mut self) -> Vec<SlitDetection> {
        std::mem::take(&mut self.detections)
    }

    pub fn histogram(&self) -> &HitAccumulator {
        &self.histogram
    }

    pub fn buckets(&self) -> &[u64] {
        self.histogram.buckets()
    }

    pub fn total_hits(&self) -> u64 {
        self.histogram.total_hits()
    }

    /// Most recent hits, oldest first
    pub fn recent_hits(&self) -> impl Iterator<Item = &HitRecord> + '_ {
        self.hit_log.iter()
    }

    pub fn hit_count(&self) -> usize {
        self.hit_log.len()
    }

    /// Analytic density across the screen for the current settings
    pub fn probability_profile(&self) -> Vec<(f64, f64)> {
        density_profile(
            &self.params.geometry,
            self.params.wavelength,
            self.params.detector_on,
            self.params.screen_height,
            PREVIEW_SAMPLES,
        )
    }

    /// Clear particles, hits, histogram and emission debt. Call between ticks.
    pub fn reset(&mut self) {
        self.lifecycle.clear();
        self.scheduler.reset();
        self.histogram.reset();
        self.hit_log.clear();
        self.detections.clear();
        log::info!("Simulation reset");
    }
}
