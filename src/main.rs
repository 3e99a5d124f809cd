//! Mob Shooter entry point
//!
//! Runs one headless episode with a scripted pilot and prints the result.
//!
//! Usage: `mob-shooter [settings.json]`

use mob_shooter::consts::PLAYER_1;
use mob_shooter::sim::{Commands, TickOutcome, World};
use mob_shooter::{ConfigError, Settings};

fn main() {
    env_logger::init();
    log::info!("Mob Shooter (headless) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading settings from {path}");
            Settings::from_json(&std::fs::read_to_string(path)?)?
        }
        None => Settings::default(),
    };

    let mut world = World::new(settings)?;
    log::debug!("Scene init: {:?}", world.scene_init());

    while world.update(&pilot(&world)) == TickOutcome::Continue {
        log::trace!("Frame {}: score {}", world.used_frame(), world.score());
    }

    if let Some(result) = world.result() {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("Failed to serialize result: {err}"),
        }
    }
    Ok(())
}

/// Chase the lowest mob horizontally and keep shooting
fn pilot(world: &World) -> Commands {
    let player_x = world.player().body.center().x;
    let target = world
        .mobs()
        .iter()
        .max_by(|a, b| a.body.bottom().total_cmp(&b.body.bottom()))
        .map(|m| m.body.center().x);

    let mut actions = vec!["SHOOT".to_string()];
    if let Some(x) = target {
        let dx = x - player_x;
        if dx.abs() > world.settings().player_speed {
            actions.push(if dx < 0.0 { "LEFT" } else { "RIGHT" }.to_string());
        }
    }

    Commands::from([(PLAYER_1.to_string(), actions)])
}
