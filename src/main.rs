//! Spawn Cadence entry point
//!
//! Runs a spawner headless against a recording factory and prints the spawn
//! timeline.

use clap::Parser;

use spawn_cadence::platform::FixedStep;
use spawn_cadence::{SelectionMode, SpawnLog, SpawnSettings, Spawner, ring_of_poses};

#[derive(Parser)]
#[command(
    name = "spawn-cadence",
    about = "Simulate a periodic spawner and print when and where it spawns",
    version
)]
struct Cli {
    /// Spawner settings JSON (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,
    /// Simulated seconds to run
    #[arg(short, long, default_value_t = 60.0)]
    seconds: f32,
    /// Frames per second fed to the fixed-step driver
    #[arg(short, long, default_value_t = 60.0)]
    fps: f32,
    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the selection mode (in-order, random)
    #[arg(short, long)]
    mode: Option<String>,
    /// Spawn points placed on a ring when the settings have none
    #[arg(long, default_value_t = 4)]
    ring: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Spawn Cadence v{} starting...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => SpawnSettings::load(path)?,
        None => SpawnSettings::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    if let Some(mode) = &cli.mode {
        settings.selection_mode = SelectionMode::parse(mode)?;
    }
    if settings.spawn_points.is_empty() {
        settings.spawn_points = ring_of_poses(cli.ring, 10.0);
    }
    if settings.template.is_none() {
        settings.template = Some("entity".to_string());
    }

    let mut spawner = Spawner::new(settings);
    let mut factory = SpawnLog::new();
    let mut clock = FixedStep::default();

    let frame_dt = 1.0 / cli.fps.max(1.0);
    let frames = (cli.seconds.max(0.0) / frame_dt).round() as u64;
    for _ in 0..frames {
        if clock.drive(frame_dt, &mut spawner, &mut factory) > 0 {
            if let Some(entity) = factory.last() {
                println!(
                    "t={:>7.2}s  #{:<4} point {:?}  at {:?}  next in {:.2}s",
                    clock.elapsed(),
                    entity.id,
                    spawner.last_point().unwrap_or_default(),
                    entity.pose.position,
                    spawner.current_interval()
                );
            }
        }
    }

    println!(
        "\n{} spawned in {:.1}s ({} mode, interval now {:.2}s)",
        spawner.total_spawned(),
        clock.elapsed(),
        spawner.selection_mode().as_str(),
        spawner.current_interval()
    );
    if let Some(err) = spawner.last_failure() {
        log::warn!("Spawner is stalled: {err}");
    }

    Ok(())
}
