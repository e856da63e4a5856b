use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slit_physics::{InterferenceSampler, PositionSampler, SlitGeometry};
use slit_simulation::{DoubleSlitSimulation, SimulationParams};

/// Counts calls and remembers the detector flag of each one
#[derive(Default)]
struct RecordingSampler {
    flags: Vec<bool>,
}

impl PositionSampler for RecordingSampler {
    fn sample<R: Rng + ?Sized>(
        &mut self,
        geometry: &SlitGeometry,
        wavelength: f64,
        detector_on: bool,
        max_y: f64,
        rng: &mut R,
    ) -> f64 {
        self.flags.push(detector_on);
        InterferenceSampler.sample(geometry, wavelength, detector_on, max_y, rng)
    }
}

fn busy_params() -> SimulationParams {
    SimulationParams {
        emission_rate: 240.0,
        max_live_particles: 400,
        ..Default::default()
    }
}

fn recording_simulation(seed: u64) -> DoubleSlitSimulation<StdRng, RecordingSampler> {
    DoubleSlitSimulation::with_parts(
        busy_params(),
        StdRng::seed_from_u64(seed),
        RecordingSampler::default(),
    )
    .unwrap()
}

#[test]
fn test_seeded_runs_are_identical() {
    let mut a = DoubleSlitSimulation::with_seed(busy_params(), 2024).unwrap();
    let mut b = DoubleSlitSimulation::with_seed(busy_params(), 2024).unwrap();

    assert_eq!(a.advance(900), b.advance(900));
    assert_eq!(a.buckets(), b.buckets());
}

#[test]
fn test_one_sample_per_resolved_particle() {
    let mut sim = recording_simulation(1);
    sim.advance(1200);

    let stats = sim.lifecycle_stats();
    assert_eq!(sim.sampler().flags.len() as u64, stats.resolved);
    assert!(stats.resolved > 0);
}

#[test]
fn test_detector_flag_is_snapshotted_per_tick() {
    let mut sim = recording_simulation(2);

    // Every resolution in a tick must see the flag as it was at the tick's start
    let mut expected = Vec::new();
    for tick in 0..600 {
        let on = (tick / 7) % 2 == 0;
        sim.set_detector_on(on);

        let before = sim.sampler().flags.len();
        sim.advance(1);
        let after = sim.sampler().flags.len();
        expected.extend(std::iter::repeat(on).take(after - before));
    }

    assert_eq!(sim.sampler().flags, expected);
}

#[test]
fn test_hits_carry_detector_state() {
    let mut sim = DoubleSlitSimulation::with_seed(busy_params(), 3).unwrap();
    sim.set_detector_on(true);
    let hits = sim.advance(300);

    assert!(!hits.is_empty());
    assert!(hits.iter().all(|h| h.detector_on_at_hit));
    assert!(hits.iter().all(|h| h.which_slit.is_some()));

    let detections = sim.take_detections();
    assert!(!detections.is_empty());
    assert!(sim.take_detections().is_empty());
}

#[test]
fn test_detector_on_empties_the_center() {
    let mut sim = DoubleSlitSimulation::with_seed(busy_params(), 4).unwrap();
    sim.set_detector_on(true);
    sim.advance(6000);

    let histogram = sim.histogram();
    let total = histogram.total_hits() as f64;
    assert!(total > 2000.0);

    // Buckets 19 and 20 straddle y = 0
    let center = (histogram.buckets()[19] + histogram.buckets()[20]) as f64;
    let top = histogram.buckets()[histogram.bucket_index(1.4)] as f64;
    // Lobe tails put ~2% of hits within ±0.4 of the axis
    assert!(center / total < 0.04, "center share {}", center / total);
    assert!(top > 4.0 * center.max(1.0));
}

#[test]
fn test_detector_off_fills_the_center() {
    let mut sim = DoubleSlitSimulation::with_seed(busy_params(), 5).unwrap();
    sim.advance(6000);

    let histogram = sim.histogram();
    let total = histogram.total_hits() as f64;
    let center = (histogram.buckets()[19] + histogram.buckets()[20]) as f64;

    // Central bright fringe, ~0.18 of hits land within ±0.4 of y = 0
    assert!(center / total > 0.08, "center share {}", center / total);
}

#[test]
fn test_rejects_invalid_params() {
    let params = SimulationParams {
        hit_capacity: 0,
        ..Default::default()
    };
    assert!(DoubleSlitSimulation::with_seed(params, 0).is_err());
}
