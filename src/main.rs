//! Double-Slit Experiment
//!
//! Headless host: fires particles at the slits with the detector off and then on,
//! and prints the accumulated screen histogram beside the analytic expectation.

use slit_physics::ParticleKind;
use slit_simulation::{DoubleSlitSimulation, SimulationError, SimulationParams};

const SEED: u64 = 0x5117;
const RUN_TICKS: u32 = 60 * 120; // Two minutes at 60 ticks per second
const FRAME_TICKS: u32 = 60;
const BAR_WIDTH: usize = 50;

fn main() -> Result<(), SimulationError> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting double-slit experiment...");

    let params = SimulationParams {
        emission_rate: 120.0,
        max_live_particles: 300,
        ..Default::default()
    };
    let mut sim = DoubleSlitSimulation::with_seed(params, SEED)?;
    sim.set_particle_kind(ParticleKind::Electron);

    for detector_on in [false, true] {
        sim.reset();
        sim.set_detector_on(detector_on);
        run(&mut sim);
        print_histogram(&sim);
    }

    Ok(())
}

/// Advance in frame-sized steps, logging progress the way a render loop would
fn run(sim: &mut DoubleSlitSimulation) {
    let mut frame = 0u32;
    let mut flashes = 0usize;

    while frame * FRAME_TICKS < RUN_TICKS {
        let hits = sim.advance(FRAME_TICKS);
        flashes += sim.take_detections().len();
        frame += 1;

        if frame % 30 == 0 {
            log::debug!(
                "frame {}: {} hits this frame, {} live, {} total",
                frame,
                hits.len(),
                sim.live_count(),
                sim.total_hits()
            );
        }
    }

    let stats = sim.lifecycle_stats();
    log::info!(
        "✓ Detector {}: {} spawned, {} absorbed, {} arrived, {} expired, {} slit flashes",
        if sim.detector_on() { "on" } else { "off" },
        stats.spawned,
        stats.absorbed,
        stats.arrived,
        stats.expired,
        flashes
    );
}

/// One row per bucket, top of the screen first: observed bar, then expected bar
fn print_histogram(sim: &DoubleSlitSimulation) {
    let histogram = sim.histogram();
    let normalized = histogram.normalized();

    let profile = sim.probability_profile();
    let expected_at = |y: f64| {
        profile
            .iter()
            .min_by(|a, b| (a.0 - y).abs().total_cmp(&(b.0 - y).abs()))
            .map_or(0.0, |&(_, p)| p)
    };
    let peak = profile.iter().map(|&(_, p)| p).fold(0.0, f64::max).max(f64::MIN_POSITIVE);

    println!(
        "\n{} | detector {} | {} hits",
        sim.particle_kind().name(),
        if sim.detector_on() { "ON" } else { "OFF" },
        sim.total_hits()
    );

    for index in (0..histogram.bucket_count()).rev() {
        let y = histogram.bucket_center(index);
        let observed = (normalized[index] * BAR_WIDTH as f64).round() as usize;
        let expected = (expected_at(y) / peak * BAR_WIDTH as f64).round() as usize;

        println!(
            "{:>6.2} {:>6} |{:<width$}| {}",
            y,
            histogram.buckets()[index],
            "#".repeat(observed),
            "·".repeat(expected),
            width = BAR_WIDTH
        );
    }
}
