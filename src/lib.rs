//! Mob Shooter - a single-level arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic frame-stepped simulation (entities, collisions, game state)
//! - `view`: Render-ready records handed to an external drawing sink
//! - `settings`: Per-world configuration with documented defaults
//! - `error`: Construction errors

pub mod error;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::ConfigError;
pub use settings::Settings;
pub use sim::{Action, GameResult, GameStatus, TickOutcome, World};

/// Default configuration constants
///
/// Only used to seed `Settings::default()`; the simulation itself reads
/// everything from the `Settings` a world was built with.
pub mod consts {
    /// Play area dimensions (pixels)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    /// Height of the off-screen band mobs spawn in
    pub const SPAWN_BAND_HEIGHT: f32 = 100.0;

    /// Episode defaults
    pub const FRAME_LIMIT: u32 = 300;
    pub const TARGET_SCORE: u64 = 3000;
    pub const MOB_COUNT: u32 = 8;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Distance of the player's starting center from the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const PLAYER_LIVES: u32 = 3;
    pub const PLAYER_SHIELD: u32 = 100;
    pub const SHIELD_MAX: u32 = 100;
    pub const SHIELD_HIT_COST: u32 = 25;
    pub const PLAYER_FIRE_INTERVAL: u32 = 10;

    /// Mob defaults
    pub const MOB_SIZE: f32 = 40.0;
    pub const MOB_SPEED_MIN: f32 = 1.0;
    pub const MOB_SPEED_MAX: f32 = 4.0;
    /// 1 = every mob fires every frame
    pub const MOB_FIRE_INTERVAL: u32 = 1;

    /// Bullet constants
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 8.0;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const PLAYER_BULLET_COLOR: &str = "#21A1F1";
    pub const ENEMY_BULLET_COLOR: &str = "#FFA500";

    /// Fraction of each rectangle used for player/mob overlap tests
    pub const COLLIDE_RATIO: f32 = 0.8;

    /// Scoring
    pub const SCORE_PER_KILL: u64 = 400;
    pub const SURVIVAL_SCORE_PER_FRAME: u64 = 0;

    /// Name of the single controlled agent in command/observation maps
    pub const PLAYER_1: &str = "1P";
}
