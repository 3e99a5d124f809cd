//! World state and construction
//!
//! The world owns every entity, the frame counter and the RNG. Callers only
//! read from it and hand it the next frame's commands.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bullet::{Bullet, BulletOwner};
use super::mob::Mob;
use super::player::Player;
use super::status::{GameResult, GameStatus, StatusInputs, derive_status};
use crate::error::ConfigError;
use crate::settings::Settings;

/// Complete simulation state for one episode
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) settings: Settings,
    /// Seeded from `settings.seed`; only consumed while spawning mobs
    pub(crate) rng: Pcg32,
    /// Frames advanced since construction or reset
    pub(crate) used_frame: u32,
    /// Score mirrored from the player once per frame
    pub(crate) score: u64,
    pub(crate) player: Player,
    /// Live mobs (sorted by id)
    pub(crate) mobs: Vec<Mob>,
    /// Live bullets (sorted by id)
    pub(crate) bullets: Vec<Bullet>,
    /// Latched on the first terminal frame
    pub(crate) result: Option<GameResult>,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Build a world, rejecting configurations that could not produce a
    /// sensible episode
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let world = Self::build(settings);
        log::info!(
            "World created: {} mobs, frame limit {}, target score {}",
            world.mobs.len(),
            world.settings.frame_limit,
            world.settings.target_score
        );
        Ok(world)
    }

    /// Settings are already validated here
    fn build(settings: Settings) -> Self {
        let mut world = Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            used_frame: 0,
            score: 0,
            player: Player::from_settings(&settings),
            mobs: Vec::new(),
            bullets: Vec::new(),
            result: None,
            next_id: 1,
            settings,
        };
        world.create_mobs(world.settings.mob_count);
        world
    }

    /// Rebuild from scratch with the same settings
    pub fn reset(&mut self) {
        log::info!("Resetting world after {} frames", self.used_frame);
        *self = Self::build(self.settings.clone());
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn create_mobs(&mut self, count: u32) {
        for _ in 0..count {
            let id = self.next_entity_id();
            let mob = Mob::spawn(id, &self.settings, &mut self.rng);
            self.mobs.push(mob);
        }
    }

    pub(crate) fn spawn_bullet(&mut self, owner: BulletOwner, center: Vec2) {
        let id = self.next_entity_id();
        self.bullets.push(Bullet::new(id, owner, center));
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub(crate) fn normalize_order(&mut self) {
        self.mobs.sort_by_key(|m| m.id);
        self.bullets.sort_by_key(|b| b.id);
    }

    /// Current status; once terminal it stays latched until `reset`
    pub fn status(&self) -> GameStatus {
        match self.result {
            Some(result) => result.status,
            None => self.derive_status(),
        }
    }

    pub(crate) fn derive_status(&self) -> GameStatus {
        derive_status(&StatusInputs {
            score: self.score,
            target_score: self.settings.target_score,
            player_alive: self.player.alive,
            used_frame: self.used_frame,
            frame_limit: self.settings.frame_limit,
        })
    }

    /// End-of-episode record, available from the first terminal frame on
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_running(&self) -> bool {
        !self.status().is_terminal()
    }

    pub fn used_frame(&self) -> u32 {
        self.used_frame
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Frames left before timeout
    pub fn frames_remaining(&self) -> u32 {
        self.settings.frame_limit.saturating_sub(self.used_frame)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn mobs(&self) -> &[Mob] {
        &self.mobs
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }
}
