//! Frame-stepped simulation tick
//!
//! Core game loop that advances the world by exactly one frame.

use std::collections::HashMap;

use glam::Vec2;

use super::bullet::{Bullet, BulletOwner};
use super::collision::collide_rect_ratio;
use super::entity::{Action, Entity};
use super::mob::Mob;
use super::player::Player;
use super::rect::Rect;
use super::state::World;
use super::status::GameResult;
use crate::consts::PLAYER_1;

/// Raw per-frame commands: agent name to command strings
pub type Commands = HashMap<String, Vec<String>>;

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Actions for the controlled player (empty means NONE)
    pub actions: Vec<Action>,
}

impl TickInput {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Read the controlled agent's commands; missing or unknown commands
    /// become NONE
    pub fn from_commands(commands: &Commands) -> Self {
        let actions = commands
            .get(PLAYER_1)
            .map(|cmds| {
                cmds.iter()
                    .map(|s| Action::parse(s))
                    .filter(|a| *a != Action::None)
                    .collect()
            })
            .unwrap_or_default();
        Self { actions }
    }
}

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep calling `update`
    Continue,
    /// The episode is over; the caller should call `reset`
    Reset,
}

impl World {
    /// Advance one frame from raw commands
    pub fn update(&mut self, commands: &Commands) -> TickOutcome {
        tick(self, &TickInput::from_commands(commands))
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) -> TickOutcome {
    world.used_frame += 1;

    // Terminal: only time moves until the caller resets
    if world.result.is_some() {
        return TickOutcome::Reset;
    }

    let actions: &[Action] = if input.actions.is_empty() {
        &[Action::None]
    } else {
        &input.actions
    };
    world.player.update(actions);
    let player_fired = world.player.take_fire_request();

    for mob in &mut world.mobs {
        mob.update(&());
    }
    for bullet in &mut world.bullets {
        bullet.update(&());
    }
    cull_bullets(&mut world.bullets, &world.settings.arena());

    // Fire requests are held until collisions are resolved so that a mob
    // destroyed this frame never fires
    let fire_requests: Vec<usize> = world
        .mobs
        .iter_mut()
        .enumerate()
        .filter_map(|(i, mob)| mob.take_fire_request().then_some(i))
        .collect();

    let kills = resolve_bullet_hits(&mut world.bullets, &mut world.mobs);
    if kills > 0 {
        let points = kills as u64 * world.settings.score_per_kill;
        world.player.add_score(points);
        log::debug!("Frame {}: {} mob(s) shot down", world.used_frame, kills);
    }

    let ratio = world.settings.collide_ratio;
    if resolve_player_hits(&world.player, &mut world.mobs, ratio) {
        world.player.collide_with_mobs();
    }

    let muzzles: Vec<Vec2> = fire_requests
        .into_iter()
        .filter(|&i| world.mobs[i].alive)
        .map(|i| world.mobs[i].body.center())
        .collect();
    for center in muzzles {
        world.spawn_bullet(BulletOwner::Enemy, center);
    }
    if player_fired {
        let muzzle = world.player.muzzle();
        world.spawn_bullet(BulletOwner::Player, muzzle);
    }

    world.mobs.retain(|m| m.alive);
    world.bullets.retain(|b| b.alive);
    world.normalize_order();

    world.score = world.player.score;

    let status = world.derive_status();
    match GameResult::for_status(status, world.used_frame, world.score) {
        Some(result) => {
            log::info!(
                "Episode ended: {:?} after {} frames with score {}",
                result.status,
                result.frames_used,
                result.score
            );
            world.result = Some(result);
            TickOutcome::Reset
        }
        None => TickOutcome::Continue,
    }
}

/// Mark bullets that left the arena
fn cull_bullets(bullets: &mut [Bullet], arena: &Rect) {
    let mut culled = 0;
    for bullet in bullets.iter_mut().filter(|b| b.alive) {
        if !bullet.body.intersects(arena) {
            bullet.alive = false;
            culled += 1;
        }
    }
    if culled > 0 {
        log::trace!("Culled {} bullet(s) outside the arena", culled);
    }
}

/// Player bullets destroy the first live mob they overlap; returns the
/// number of mobs destroyed
fn resolve_bullet_hits(bullets: &mut [Bullet], mobs: &mut [Mob]) -> u32 {
    let mut kills = 0;
    for bullet in bullets.iter_mut().filter(|b| b.alive && b.is_player()) {
        if let Some(mob) = mobs
            .iter_mut()
            .find(|m| m.alive && m.body.intersects(&bullet.body))
        {
            mob.alive = false;
            bullet.alive = false;
            kills += 1;
        }
    }
    kills
}

/// Mark every live mob touching the player; true if any did
fn resolve_player_hits(player: &Player, mobs: &mut [Mob], ratio: f32) -> bool {
    let mut hit = false;
    for mob in mobs.iter_mut().filter(|m| m.alive) {
        if collide_rect_ratio(&player.body, &mob.body, ratio) {
            mob.alive = false;
            hit = true;
        }
    }
    hit
}
