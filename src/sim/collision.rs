//! Collision detection and response for rectangle bodies
//!
//! Two things live here: the overlap-ratio test used between the player
//! and mobs, and the wall bounce that keeps mobs inside their arena.

use glam::Vec2;

use super::rect::Rect;

/// Which arena walls a body touched during one bounce step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceResult {
    /// Left or right wall
    pub hit_x: bool,
    /// Top or bottom wall
    pub hit_y: bool,
}

impl BounceResult {
    pub fn any(&self) -> bool {
        self.hit_x || self.hit_y
    }
}

/// Overlap test on rectangles shrunk to `ratio` of their size around their
/// centers, so bodies that merely graze each other don't count as a hit
pub fn collide_rect_ratio(a: &Rect, b: &Rect, ratio: f32) -> bool {
    a.scaled(ratio).intersects(&b.scaled(ratio))
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Keep `rect` inside `bounds` after a move
///
/// For every wall the rectangle crossed, it is put back flush against that
/// wall and the velocity is reflected off it (only if still heading out,
/// so a body already turning back is not flipped twice).
pub fn bounce_inside(rect: &mut Rect, velocity: &mut Vec2, bounds: &Rect) -> BounceResult {
    let mut result = BounceResult::default();

    // (crossed, inward normal)
    let walls = [
        (rect.left() < bounds.left(), Vec2::X),
        (rect.right() > bounds.right(), Vec2::NEG_X),
        (rect.top() < bounds.top(), Vec2::Y),
        (rect.bottom() > bounds.bottom(), Vec2::NEG_Y),
    ];

    for (crossed, normal) in walls {
        if !crossed {
            continue;
        }
        if velocity.dot(normal) < 0.0 {
            *velocity = reflect_velocity(*velocity, normal);
        }
        if normal.x != 0.0 {
            result.hit_x = true;
        } else {
            result.hit_y = true;
        }
    }

    if result.any() {
        rect.clamp_inside(bounds);
    }

    result
}
