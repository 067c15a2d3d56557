//! Arena FPS entry point
//!
//! Runs a headless session under the demo autopilot and logs progress.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use arena_fps::consts::SIM_DT;
use arena_fps::{Autopilot, Session, Settings};
use clap::Parser;

/// Ticks between progress lines
const REPORT_INTERVAL: u64 = 600;

/// Headless arena survival demo driven by the autopilot
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings JSON file
    settings: Option<PathBuf>,

    /// RNG seed; overrides the settings file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks (default is 5 minutes at 60 Hz)
    #[arg(short, long, default_value_t = 5 * 60 * 60)]
    ticks: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Arena FPS (headless demo) starting...");

    let settings = match &args.settings {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = args.seed.or(settings.seed).unwrap_or_else(time_seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut session = Session::with_settings(seed, settings);
    let mut pilot = Autopilot::new();

    while session.is_running() && session.state().time_ticks < args.ticks {
        session.autopilot(&mut pilot);
        session.frame(SIM_DT);

        let ticks = session.state().time_ticks;
        if ticks % REPORT_INTERVAL == 0 {
            let hud = session.hud();
            log::info!(
                "tick {}: health {}%, score {}, hostiles {}",
                ticks,
                hud.health_percent,
                hud.score,
                hud.hostile_count
            );
        }
    }

    let hud = session.end();
    match serde_json::to_string(&hud) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final snapshot: {}", e),
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
