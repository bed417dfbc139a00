//! turret-demo: run a turret against a seeded enemy wave and print frame reports.
//!
//! Usage:
//!   turret-demo [--config turret.json] [--seed N] [--enemies N] [--seconds N] [--all-frames]
//!
//! The config file holds a `turret` object (any subset of TurretConfig fields)
//! and an optional `policy` decision tree. Set RUST_LOG=debug to see turret
//! decisions as they happen.

use std::path::PathBuf;
use std::process;

use glam::Vec3;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use turret_core::config::TurretConfig;
use turret_core::constants::{DT, ENEMY_SPEED, TICK_RATE};
use turret_core::events::TurretEvent;
use turret_decision::DecisionNode;
use turret_sim::{SimConfig, SimulationEngine};

/// Contents of a `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoFile {
    turret: TurretConfig,
    policy: Option<DecisionNode>,
}

struct Options {
    config: Option<PathBuf>,
    seed: u64,
    enemies: usize,
    ticks: u32,
    all_frames: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(message) = run(&options) {
        eprintln!("Error: {message}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "turret-demo: run a static turret against an inbound enemy ring\n\
         \n\
           --config <path>   JSON file with `turret` settings and optional `policy`\n\
           --seed <N>        RNG seed for enemy placement (default: 42)\n\
           --enemies <N>     Number of enemies in the ring (default: 8)\n\
           --seconds <N>     Simulated seconds to run (default: 20)\n\
           --all-frames      Print every frame, not only frames with events\n"
    );
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config: None,
        seed: 42,
        enemies: 8,
        ticks: 20 * TICK_RATE,
        all_frames: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(value(&mut iter, arg)?)),
            "--seed" => options.seed = parse_number(&mut iter, arg)?,
            "--enemies" => options.enemies = parse_number(&mut iter, arg)?,
            "--seconds" => {
                let seconds: u32 = parse_number(&mut iter, arg)?;
                options.ticks = seconds
                    .checked_mul(TICK_RATE)
                    .ok_or_else(|| format!("{arg}: {seconds} seconds is too long to simulate"))?;
            }
            "--all-frames" => options.all_frames = true,
            "help" | "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    Ok(options)
}

fn value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a String, String> {
    iter.next().ok_or_else(|| format!("{flag} needs a value"))
}

fn parse_number<'a, T: std::str::FromStr>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<T, String> {
    let raw = value(iter, flag)?;
    raw.parse()
        .map_err(|_| format!("{flag}: invalid number '{raw}'"))
}

fn load_demo_file(path: &PathBuf) -> Result<DemoFile, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("reading {}: {e}", path.display()))?;
    let file: DemoFile =
        serde_json::from_str(&text).map_err(|e| format!("parsing {}: {e}", path.display()))?;
    file.turret
        .validate()
        .map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(file)
}

fn run(options: &Options) -> Result<(), String> {
    let file = match &options.config {
        Some(path) => load_demo_file(path)?,
        None => DemoFile::default(),
    };
    let tag = file.turret.engagement_tag.clone();

    let mut engine = SimulationEngine::new(SimConfig { seed: options.seed });
    let turret = match file.policy {
        Some(policy) => engine.add_turret_with_policy(Vec3::ZERO, file.turret, policy),
        None => engine.add_turret(Vec3::ZERO, file.turret),
    }
    .map_err(|e| e.to_string())?;
    let range = engine
        .turret(turret)
        .map(|t| t.controller.config().range)
        .unwrap_or_default();

    // Start the ring well outside engagement range.
    let radius = (range * 2.5).max(10.0);
    engine.spawn_enemy_ring(&tag, Vec3::ZERO, options.enemies, radius, ENEMY_SPEED);
    info!(seed = options.seed, enemies = options.enemies, radius, "scenario ready");

    let mut shots = 0usize;
    for _ in 0..options.ticks {
        let report = engine.tick(DT);
        shots += report
            .events
            .iter()
            .filter(|e| matches!(e, TurretEvent::ProjectileFired { .. }))
            .count();
        if options.all_frames || !report.events.is_empty() {
            let line = serde_json::to_string(&report).map_err(|e| e.to_string())?;
            println!("{line}");
        }
    }

    eprintln!(
        "Ran {} ticks ({:.1} s): {} shots fired, {} projectiles in flight",
        engine.time().tick,
        engine.time().elapsed_secs,
        shots,
        engine
            .world()
            .query::<&turret_core::components::Projectile>()
            .iter()
            .count(),
    );
    Ok(())
}
