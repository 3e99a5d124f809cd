//! The controlled player ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Action, Entity};
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;
use crate::view::ViewObject;

pub const PLAYER_IMAGE_ID: &str = "player";

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Rect,
    /// Movement is clamped to this rectangle
    pub bounds: Rect,
    /// Pixels per frame per directional action
    pub speed: f32,
    pub lives: u32,
    pub shield: u32,
    pub shield_max: u32,
    /// Shield consumed by one absorbed hit
    pub shield_hit_cost: u32,
    pub score: u64,
    /// Score earned every frame while alive
    pub survival_score: u64,
    pub alive: bool,
    pub fire_interval: u32,
    /// Frames until the next shot is allowed
    pub fire_cooldown: u32,
    /// Raised by `update` when a shot was taken this frame
    fire_request: bool,
}

impl Player {
    /// Create a player centered on `center` with default tuning
    pub fn new(center: Vec2, size: Vec2, bounds: Rect) -> Self {
        let mut body = Rect::from_center(center, size);
        body.clamp_inside(&bounds);
        Self {
            body,
            bounds,
            speed: PLAYER_SPEED,
            lives: PLAYER_LIVES,
            shield: PLAYER_SHIELD,
            shield_max: SHIELD_MAX,
            shield_hit_cost: SHIELD_HIT_COST,
            score: 0,
            survival_score: SURVIVAL_SCORE_PER_FRAME,
            alive: true,
            fire_interval: PLAYER_FIRE_INTERVAL,
            fire_cooldown: 0,
            fire_request: false,
        }
    }

    /// Create the player a world starts with
    pub fn from_settings(settings: &Settings) -> Self {
        let mut player = Self::new(
            settings.player_start(),
            Vec2::splat(settings.player_size),
            settings.play_area(),
        );
        player.speed = settings.player_speed;
        player.lives = settings.player_lives;
        player.shield_max = settings.shield_max;
        player.shield = settings.player_shield.min(settings.shield_max);
        player.shield_hit_cost = settings.shield_hit_cost;
        player.survival_score = settings.survival_score_per_frame;
        player.fire_interval = settings.player_fire_interval.max(1);
        player
    }

    /// Top-left corner, as reported to agents
    pub fn xy(&self) -> Vec2 {
        self.body.pos
    }

    /// Where player bullets appear: horizontally centered, at the top edge
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.body.center().x, self.body.top())
    }

    /// Consume the shot taken this frame
    pub fn take_fire_request(&mut self) -> bool {
        std::mem::take(&mut self.fire_request)
    }

    /// Apply one mob hit: the shield absorbs it if it has any charge left,
    /// otherwise a life is lost
    pub fn collide_with_mobs(&mut self) {
        if self.shield > 0 {
            self.shield = self.shield.saturating_sub(self.shield_hit_cost);
            log::debug!("Shield absorbed hit, shield now {}", self.shield);
            return;
        }

        self.lives = self.lives.saturating_sub(1);
        log::debug!("Player hit, {} lives left", self.lives);
        if self.lives == 0 {
            self.alive = false;
        }
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

impl Entity for Player {
    type Input = [Action];

    fn update(&mut self, actions: &[Action]) {
        if !self.alive {
            return;
        }

        // A repeated action still moves one step
        let step: Vec2 = actions
            .iter()
            .enumerate()
            .filter(|&(i, a)| !actions[..i].contains(a))
            .map(|(_, a)| a.direction())
            .sum();
        self.body.pos += step * self.speed;
        self.body.clamp_inside(&self.bounds);

        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
        if self.fire_cooldown == 0 && actions.contains(&Action::Shoot) {
            self.fire_request = true;
            self.fire_cooldown = self.fire_interval;
        }

        self.add_score(self.survival_score);
    }

    fn rect(&self) -> Rect {
        self.body
    }

    fn snapshot(&self) -> ViewObject {
        ViewObject::image(PLAYER_IMAGE_ID, &self.body)
    }
}
