//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-indexed time only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod bullet;
pub mod collision;
pub mod entity;
pub mod mob;
pub mod observation;
pub mod player;
pub mod rect;
pub mod scene;
pub mod state;
pub mod status;
pub mod tick;

pub use bullet::{Bullet, BulletOwner};
pub use collision::{BounceResult, bounce_inside, collide_rect_ratio};
pub use entity::{Action, Entity};
pub use mob::Mob;
pub use observation::{MobPosition, Observation};
pub use player::Player;
pub use rect::Rect;
pub use state::World;
pub use status::{GameResult, GameStatus, ResultState, derive_status};
pub use tick::{Commands, TickInput, TickOutcome, tick};
