//! voidrush-soak: headless soak runner for the VOIDRUSH simulation.
//!
//! Flies a scripted pilot for a fixed number of frames, taking the first
//! draft option and buying whatever the hangar offers that it can afford.
//!
//! Usage:
//!   voidrush-soak --frames 36000 --seed 7
//!   voidrush-soak --config soak.json

use std::path::PathBuf;
use std::process;

use voidrush_core::commands::{FrameInput, PlayerCommand};
use voidrush_core::enums::Intermission;
use voidrush_core::state::GameStateSnapshot;
use voidrush_sim::{SimConfig, SimulationEngine};

const FRAME_DT: f64 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut config = match parse_path(&args, "--config") {
        Some(path) => load_config(&path),
        None => SimConfig::default(),
    };
    if let Some(seed) = parse_number(&args, "--seed") {
        config.seed = seed;
    }
    let frames = parse_number(&args, "--frames").unwrap_or(36_000);

    run(config, frames);
}

fn print_usage() {
    eprintln!(
        "voidrush-soak: scripted headless run of the VOIDRUSH simulation\n\
         \n\
           --frames <N>      Frames to simulate at 60 fps (default: 36000)\n\
           --seed <N>        RNG seed (overrides the config file)\n\
           --config <path>   JSON SimConfig file (optional)\n"
    );
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_number(args: &[String], flag: &str) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn load_config(path: &PathBuf) -> SimConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    match SimConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Soak run ---

fn run(config: SimConfig, frames: u64) {
    log::info!("soaking {frames} frames with seed {}", config.seed);
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::Start);

    let mut input = FrameInput::default();
    let mut runs = 1u32;
    let mut best_wave = 1u32;
    let mut best_score = 0u64;

    for frame in 0..frames {
        let snap = engine.frame(FRAME_DT, &input);
        best_wave = best_wave.max(snap.hud.wave);
        best_score = best_score.max(snap.hud.score);

        if let Some(summary) = snap.game_over {
            log::info!(
                "run {runs} over at frame {frame}: wave {}, score {}",
                summary.wave,
                summary.score
            );
            runs += 1;
            engine.queue_command(PlayerCommand::Reset);
            continue;
        }

        match snap.intermission {
            Intermission::Draft => {
                log::debug!("frame {frame}: taking {:?}", snap.draft.first().map(|o| o.upgrade));
                engine.queue_command(PlayerCommand::SelectUpgrade { index: 0 });
            }
            Intermission::Hangar => shop(&mut engine, &snap),
            Intermission::None => {}
        }
        input = pilot(&snap, frame);
    }

    let wallet = engine.state().wallet;
    println!(
        "frames={frames} runs={runs} best_wave={best_wave} best_score={best_score} \
         salvage={} gold={} platinum={} adamantium={}",
        wallet.salvage, wallet.gold, wallet.platinum, wallet.adamantium
    );
}

/// Buy every affordable offer, then leave.
fn shop(engine: &mut SimulationEngine, snap: &GameStateSnapshot) {
    if let Some(shop) = &snap.shop {
        for (index, offer) in shop.offers.iter().enumerate() {
            if offer.affordable {
                engine.queue_command(PlayerCommand::PurchaseShopItem { index });
            }
        }
    }
    engine.queue_command(PlayerCommand::LeaveHangar);
}

/// Aim at the nearest asteroid, hold the trigger, and pulse the engine.
fn pilot(snap: &GameStateSnapshot, frame: u64) -> FrameInput {
    let ship = snap.ship.position;
    let aim = snap
        .asteroids
        .iter()
        .map(|a| a.transform.position)
        .min_by(|a, b| a.distance_squared(ship).total_cmp(&b.distance_squared(ship)));
    FrameInput {
        turn_left: aim.is_none(),
        turn_right: false,
        thrust: frame % 120 < 20,
        fire: true,
        aim,
    }
}
