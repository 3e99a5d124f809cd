//! Game settings
//!
//! Everything a world needs to know at construction time. A world keeps its
//! settings for its whole lifetime and rebuilds from them on reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Rect;

/// World configuration
///
/// Missing JSON fields fall back to the values in `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Episode ===
    /// Frames before the episode times out
    pub frame_limit: u32,
    /// Score that ends the episode with a pass
    pub target_score: u64,
    /// Mobs created at world construction (never respawned)
    pub mob_count: u32,
    /// Optional background map selector
    pub map_no: Option<u32>,
    /// Whether the audio collaborator should play sound
    pub sound: bool,
    /// RNG seed for mob placement and velocity
    pub seed: u64,

    // === Geometry ===
    pub play_width: f32,
    pub play_height: f32,
    /// Off-screen band above the play area where mobs start
    pub spawn_band_height: f32,

    // === Player ===
    pub player_size: f32,
    /// Pixels moved per frame per directional action
    pub player_speed: f32,
    pub player_lives: u32,
    pub player_shield: u32,
    pub shield_max: u32,
    /// Shield points consumed by one absorbed hit
    pub shield_hit_cost: u32,
    /// Minimum frames between two player shots
    pub player_fire_interval: u32,

    // === Mobs ===
    pub mob_size: f32,
    pub mob_speed_min: f32,
    pub mob_speed_max: f32,
    /// Frames between two shots of the same mob
    pub mob_fire_interval: u32,

    // === Collision & scoring ===
    /// Fraction of each rectangle used for player/mob overlap
    pub collide_ratio: f32,
    pub score_per_kill: u64,
    pub survival_score_per_frame: u64,

    /// Root directory of image assets referenced by the scene-init data
    pub asset_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_limit: FRAME_LIMIT,
            target_score: TARGET_SCORE,
            mob_count: MOB_COUNT,
            map_no: None,
            sound: false,
            seed: 0,

            play_width: WIDTH,
            play_height: HEIGHT,
            spawn_band_height: SPAWN_BAND_HEIGHT,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_lives: PLAYER_LIVES,
            player_shield: PLAYER_SHIELD,
            shield_max: SHIELD_MAX,
            shield_hit_cost: SHIELD_HIT_COST,
            player_fire_interval: PLAYER_FIRE_INTERVAL,

            mob_size: MOB_SIZE,
            mob_speed_min: MOB_SPEED_MIN,
            mob_speed_max: MOB_SPEED_MAX,
            mob_fire_interval: MOB_FIRE_INTERVAL,

            collide_ratio: COLLIDE_RATIO,
            score_per_kill: SCORE_PER_KILL,
            survival_score_per_frame: SURVIVAL_SCORE_PER_FRAME,

            asset_path: "asset".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations that would produce empty, endless or
    /// geometrically impossible episodes
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_limit == 0 {
            return Err(ConfigError::InvalidFrameLimit);
        }
        if self.target_score == 0 {
            return Err(ConfigError::InvalidTargetScore);
        }

        positive("play width", self.play_width)?;
        positive("play height", self.play_height)?;
        positive("player size", self.player_size)?;
        positive("mob size", self.mob_size)?;
        non_negative("spawn band height", self.spawn_band_height)?;
        non_negative("player speed", self.player_speed)?;

        if self.player_size > self.play_width || self.player_size > self.play_height {
            return Err(ConfigError::InvalidDimension {
                what: "player size (larger than play area)",
                value: self.player_size,
            });
        }
        // Mobs must fit the arena horizontally and vertically
        if self.mob_size > self.play_width || self.mob_size > self.arena().size.y {
            return Err(ConfigError::InvalidDimension {
                what: "mob size (larger than arena)",
                value: self.mob_size,
            });
        }

        if !(self.collide_ratio > 0.0 && self.collide_ratio <= 1.0) {
            return Err(ConfigError::InvalidRatio(self.collide_ratio));
        }

        non_negative("mob minimum speed", self.mob_speed_min)?;
        non_negative("mob maximum speed", self.mob_speed_max)?;
        // A mob may cross the arena in one frame, no faster
        let arena = self.arena();
        if self.mob_speed_max > arena.size.x.min(arena.size.y) {
            return Err(ConfigError::InvalidDimension {
                what: "mob maximum speed (faster than the arena)",
                value: self.mob_speed_max,
            });
        }
        if self.mob_speed_min > self.mob_speed_max {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.mob_speed_min,
                max: self.mob_speed_max,
            });
        }

        if self.player_fire_interval == 0 {
            return Err(ConfigError::InvalidInterval {
                what: "player fire interval",
            });
        }
        if self.mob_fire_interval == 0 {
            return Err(ConfigError::InvalidInterval {
                what: "mob fire interval",
            });
        }

        if self.player_shield > self.shield_max {
            return Err(ConfigError::ShieldAboveCap {
                shield: self.player_shield,
                cap: self.shield_max,
            });
        }

        Ok(())
    }

    /// Visible play area; the player is clamped inside it
    pub fn play_area(&self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(self.play_width, self.play_height))
    }

    /// Play area extended upward by the spawn band; mobs bounce inside it
    /// and bullets leaving it are culled
    pub fn arena(&self) -> Rect {
        Rect::new(
            Vec2::new(0.0, -self.spawn_band_height),
            Vec2::new(self.play_width, self.play_height + self.spawn_band_height),
        )
    }

    /// Player's starting center: horizontally centered, near the bottom
    pub fn player_start(&self) -> Vec2 {
        let y = (self.play_height - PLAYER_BOTTOM_OFFSET).max(self.player_size / 2.0);
        Vec2::new(self.play_width / 2.0, y)
    }
}

fn positive(what: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { what, value })
    }
}

fn non_negative(what: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frame_limit, 300);
        assert_eq!(settings.target_score, 3000);
        assert_eq!(settings.mob_count, 8);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "frame_limit": 120, "sound": true }"#).unwrap();
        assert_eq!(settings.frame_limit, 120);
        assert!(settings.sound);
        assert_eq!(settings.target_score, TARGET_SCORE);
        assert_eq!(settings.mob_count, MOB_COUNT);
    }

    #[test]
    fn test_rejects_zero_frame_limit() {
        let settings = Settings {
            frame_limit: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidFrameLimit)));
    }

    #[test]
    fn test_rejects_zero_target_score() {
        let err = Settings::from_json(r#"{ "target_score": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTargetScore));
    }

    #[test]
    fn test_rejects_negative_frame_limit_as_parse_error() {
        let err = Settings::from_json(r#"{ "frame_limit": -5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_ratio_and_sizes() {
        let settings = Settings {
            collide_ratio: 1.5,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidRatio(_))));

        let settings = Settings {
            player_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidDimension { .. })
        ));

        let settings = Settings {
            mob_speed_min: 5.0,
            mob_speed_max: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidSpeedRange { .. })
        ));
    }

    #[test]
    fn test_rejects_unbounded_mob_speed() {
        let err = Settings::from_json(r#"{ "mob_speed_max": 2e38 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimension { .. }));

        let settings = Settings {
            mob_speed_max: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidDimension { .. })
        ));

        let settings = Settings {
            mob_speed_max: f32::INFINITY,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_shield_above_cap() {
        let settings = Settings {
            player_shield: 150,
            shield_max: 100,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ShieldAboveCap { .. })
        ));
    }

    #[test]
    fn test_arena_extends_above_play_area() {
        let settings = Settings::default();
        let arena = settings.arena();
        assert_eq!(arena.top(), -100.0);
        assert_eq!(arena.bottom(), 600.0);
        assert_eq!(arena.right(), 800.0);
    }
}
