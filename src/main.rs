use std::time::{Duration, Instant};

use clap::Parser;
use ftlog::{LevelFilter, LoggerGuard};
use glam::Vec3;

use springsheet::{
    clock::SimulationClock, input::DEFAULT_FORCE, simulation::Simulation, softbody::SoftBody,
};

/// Mass-spring softbody sheet driven along its bottom edge.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Width of the undeformed sheet.
    #[arg(long, default_value_t = 1.0)]
    width: f32,

    /// Height of the undeformed sheet.
    #[arg(long, default_value_t = 1.0)]
    height: f32,

    /// Number of point masses along X.
    #[arg(short('x'), long, default_value_t = 10)]
    subdivisions_x: usize,

    /// Number of point masses along Y.
    #[arg(short('y'), long, default_value_t = 10)]
    subdivisions_y: usize,

    /// Spring coefficient shared by every connection.
    #[arg(short('k'), long, default_value_t = 25.0)]
    spring: f32,

    /// Damping coefficient shared by every connection.
    #[arg(short('c'), long, default_value_t = 0.5)]
    damping: f32,

    /// Fixed physics step in seconds.
    #[arg(long, default_value_t = SimulationClock::DEFAULT_PHYSICS_STEP)]
    physics_step: f64,

    /// Strength of the push on the driven edge.
    #[arg(short('f'), long, default_value_t = DEFAULT_FORCE)]
    force: f32,

    /// Run without a window, pushing along +X for `duration` seconds.
    #[arg(long)]
    headless: bool,

    /// Length of a headless run in seconds.
    #[arg(short('d'), long, default_value_t = 5.0)]
    duration: f64,

    /// Maximum log level (off, error, warn, info, debug, trace).
    #[arg(short('l'), long, default_value = "info")]
    log_level: String,
}

fn configure_logger(level: LevelFilter) -> Result<LoggerGuard, String> {
    ftlog::Builder::new()
        // pass no root appender so logs go to stderr
        .max_log_level(level)
        .try_init()
        .map_err(|e| e.to_string())
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let level = args
        .log_level
        .parse::<LevelFilter>()
        .map_err(|e| e.to_string())?;
    let _guard = configure_logger(level)?;

    let softbody = SoftBody::builder()
        .size(args.width, args.height)
        .subdivisions(args.subdivisions_x, args.subdivisions_y)
        .spring_coefficient(args.spring)
        .damping_coefficient(args.damping)
        .build()
        .map_err(|e| e.to_string())?;

    let simulation =
        Simulation::new(softbody, args.physics_step, 0.0).map_err(|e| e.to_string())?;

    if args.headless || cfg!(not(feature = "window")) {
        run_headless(simulation, args.force, args.duration);
        return Ok(());
    }

    run_window(simulation, args.force)
}

fn run_headless(mut simulation: Simulation, force: f32, duration: f64) {
    let push = Vec3::new(force, 0.0, 0.0);
    let start = Instant::now();
    let mut last_report = 0.0;

    loop {
        let now = start.elapsed().as_secs_f64();
        if now >= duration {
            break;
        }

        simulation.advance(now, &push);

        if now - last_report >= 1.0 {
            last_report = now;
            ftlog::info!(
                "t={now:.2}s steps={} kinetic energy={:.6}",
                simulation.steps(),
                simulation.softbody().kinetic_energy()
            );
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    ftlog::info!(
        "Finished after {} steps, kinetic energy {:.6}",
        simulation.steps(),
        simulation.softbody().kinetic_energy()
    );
}

#[cfg(feature = "window")]
fn run_window(simulation: Simulation, force: f32) -> Result<(), String> {
    springsheet::renderer::Renderer::new(simulation, force)
        .create_window()
        .map_err(|e| e.to_string())
}

#[cfg(not(feature = "window"))]
fn run_window(_simulation: Simulation, _force: f32) -> Result<(), String> {
    Err("built without the `window` feature, use --headless".to_string())
}
