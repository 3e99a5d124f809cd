//! Enemy mobs: wandering bounce motion plus periodic fire

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::bounce_inside;
use super::entity::Entity;
use super::rect::Rect;
use crate::settings::Settings;
use crate::view::ViewObject;

pub const MOB_IMAGE_ID: &str = "mob";

/// A mob entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mob {
    pub id: u32,
    pub body: Rect,
    /// Pixels per frame
    pub vel: Vec2,
    /// Region the mob bounces inside
    pub containment: Rect,
    /// Frames between two shots
    pub fire_interval: u32,
    /// Frames left until the next shot
    pub fire_cooldown: u32,
    /// Raised by `update` on the frame the cooldown expires
    pub fire_ready: bool,
    /// Cleared when the mob is destroyed
    pub alive: bool,
}

impl Mob {
    pub fn new(id: u32, body: Rect, vel: Vec2, containment: Rect, fire_interval: u32) -> Self {
        let fire_interval = fire_interval.max(1);
        Self {
            id,
            body,
            vel,
            containment,
            fire_interval,
            fire_cooldown: fire_interval,
            fire_ready: false,
            alive: true,
        }
    }

    /// Spawn at a random spot in the band above the play area, heading
    /// down at a random speed with random sideways drift
    pub fn spawn(id: u32, settings: &Settings, rng: &mut impl Rng) -> Self {
        let arena = settings.arena();
        let size = Vec2::splat(settings.mob_size);

        let max_x = (arena.right() - size.x).max(arena.left());
        let max_y = (arena.top() + settings.spawn_band_height - size.y).max(arena.top());
        let pos = Vec2::new(
            rng.random_range(arena.left()..=max_x),
            rng.random_range(arena.top()..=max_y),
        );

        let speed_max = settings.mob_speed_max;
        let vel = Vec2::new(
            rng.random_range(-speed_max..=speed_max),
            rng.random_range(settings.mob_speed_min..=speed_max),
        );

        Self::new(id, Rect::new(pos, size), vel, arena, settings.mob_fire_interval)
    }

    /// Consume the fire request raised this frame
    pub fn take_fire_request(&mut self) -> bool {
        std::mem::take(&mut self.fire_ready)
    }
}

impl Entity for Mob {
    type Input = ();

    fn update(&mut self, _input: &()) {
        self.body.pos += self.vel;
        bounce_inside(&mut self.body, &mut self.vel, &self.containment);

        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
        if self.fire_cooldown == 0 {
            self.fire_cooldown = self.fire_interval;
            self.fire_ready = true;
        }
    }

    fn rect(&self) -> Rect {
        self.body
    }

    fn snapshot(&self) -> ViewObject {
        ViewObject::image(MOB_IMAGE_ID, &self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn arena() -> Rect {
        Rect::new(Vec2::new(0.0, -100.0), Vec2::new(800.0, 700.0))
    }

    #[test]
    fn test_spawn_inside_band() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for id in 0..50 {
            let mob = Mob::spawn(id, &settings, &mut rng);
            assert!(mob.body.top() >= -100.0);
            assert!(mob.body.bottom() <= 0.0);
            assert!(settings.arena().contains_rect(&mob.body));
            assert!(mob.vel.y >= settings.mob_speed_min && mob.vel.y <= settings.mob_speed_max);
            assert!(mob.vel.x.abs() <= settings.mob_speed_max);
        }
    }

    #[test]
    fn test_spawn_is_seed_deterministic() {
        let settings = Settings::default();
        let a = Mob::spawn(1, &settings, &mut Pcg32::seed_from_u64(42));
        let b = Mob::spawn(1, &settings, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a.body, b.body);
        assert_eq!(a.vel, b.vel);
    }

    #[test]
    fn test_bounce_at_right_wall_never_overshoots() {
        let body = Rect::new(Vec2::new(758.0, 100.0), Vec2::splat(40.0));
        let mut mob = Mob::new(1, body, Vec2::new(4.0, 2.0), arena(), 1);

        mob.update(&());

        assert_eq!(mob.body.right(), 800.0);
        assert_eq!(mob.vel.x, -4.0);
        assert_eq!(mob.vel.y, 2.0);
        assert!(mob.containment.contains_rect(&mob.body));
    }

    #[test]
    fn test_bounce_at_bottom_wall() {
        let body = Rect::new(Vec2::new(100.0, 558.0), Vec2::splat(40.0));
        let mut mob = Mob::new(1, body, Vec2::new(0.0, 3.0), arena(), 1);

        mob.update(&());

        assert_eq!(mob.body.bottom(), 600.0);
        assert_eq!(mob.vel.y, -3.0);
    }

    #[test]
    fn test_fire_cooldown() {
        let body = Rect::new(Vec2::new(100.0, 100.0), Vec2::splat(40.0));
        let mut mob = Mob::new(1, body, Vec2::ZERO, arena(), 3);

        let mut shots = Vec::new();
        for _ in 0..6 {
            mob.update(&());
            shots.push(mob.take_fire_request());
        }
        assert_eq!(shots, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_interval_one_fires_every_frame() {
        let body = Rect::new(Vec2::new(100.0, 100.0), Vec2::splat(40.0));
        let mut mob = Mob::new(1, body, Vec2::ZERO, arena(), 1);
        for _ in 0..4 {
            mob.update(&());
            assert!(mob.take_fire_request());
        }
    }
}
