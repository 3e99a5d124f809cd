//! Per-agent data feed
//!
//! What the controlling agent gets to see after each frame.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::state::World;
use super::status::GameStatus;
use crate::consts::PLAYER_1;

/// Top-left corner of a mob
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobPosition {
    pub x: f32,
    pub y: f32,
}

/// One agent's view of the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub used_frame: u32,
    pub player_x: f32,
    pub player_y: f32,
    pub mobs: Vec<MobPosition>,
    pub score: u64,
    pub status: GameStatus,
}

impl World {
    /// Observations keyed by agent name
    pub fn observations(&self) -> HashMap<String, Observation> {
        let xy = self.player.xy();
        let observation = Observation {
            used_frame: self.used_frame,
            player_x: xy.x,
            player_y: xy.y,
            mobs: self
                .mobs
                .iter()
                .map(|m| MobPosition {
                    x: m.body.pos.x,
                    y: m.body.pos.y,
                })
                .collect(),
            score: self.score,
            status: self.status(),
        };

        HashMap::from([(PLAYER_1.to_string(), observation)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_observation_for_player_one() {
        let world = World::new(Settings::default()).unwrap();
        let observations = world.observations();

        assert_eq!(observations.len(), 1);
        let obs = &observations[PLAYER_1];
        assert_eq!(obs.used_frame, 0);
        assert_eq!(obs.player_x, 375.0);
        assert_eq!(obs.player_y, 495.0);
        assert_eq!(obs.mobs.len(), 8);
        assert_eq!(obs.status, GameStatus::Alive);
    }

    #[test]
    fn test_observation_json_status() {
        let world = World::new(Settings::default()).unwrap();
        let json = serde_json::to_value(&world.observations()[PLAYER_1]).unwrap();
        assert_eq!(json["status"], "GAME_ALIVE");
        assert_eq!(json["score"], 0);
    }
}
