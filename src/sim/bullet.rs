//! Straight-line projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::rect::Rect;
use crate::consts::*;
use crate::view::ViewObject;

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl BulletOwner {
    pub fn color(&self) -> &'static str {
        match self {
            BulletOwner::Player => PLAYER_BULLET_COLOR,
            BulletOwner::Enemy => ENEMY_BULLET_COLOR,
        }
    }

    /// Screen-space travel direction: player shots go up, enemy shots down
    pub fn direction(&self) -> f32 {
        match self {
            BulletOwner::Player => -1.0,
            BulletOwner::Enemy => 1.0,
        }
    }
}

/// A bullet entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub owner: BulletOwner,
    pub body: Rect,
    /// Vertical speed magnitude (pixels per frame)
    pub speed: f32,
    /// Cleared when the bullet hits something or leaves the arena
    pub alive: bool,
}

impl Bullet {
    /// Create a bullet whose body is centered on `center`
    pub fn new(id: u32, owner: BulletOwner, center: Vec2) -> Self {
        Self {
            id,
            owner,
            body: Rect::from_center(center, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT)),
            speed: BULLET_SPEED,
            alive: true,
        }
    }

    pub fn is_player(&self) -> bool {
        self.owner == BulletOwner::Player
    }
}

impl Entity for Bullet {
    type Input = ();

    fn update(&mut self, _input: &()) {
        self.body.pos.y += self.owner.direction() * self.speed;
    }

    fn rect(&self) -> Rect {
        self.body
    }

    fn snapshot(&self) -> ViewObject {
        ViewObject::rect("bullet", &self.body, self.owner.color())
    }
}
