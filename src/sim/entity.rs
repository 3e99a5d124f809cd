//! Entity contract shared by the player, mobs and bullets

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::view::ViewObject;

/// A rectangular body advanced one frame at a time
///
/// `Input` is whatever the entity consumes per frame: the player takes the
/// frame's actions, mobs and bullets take nothing.
pub trait Entity {
    type Input: ?Sized;

    /// Advance exactly one frame
    fn update(&mut self, input: &Self::Input);

    /// Current body
    fn rect(&self) -> Rect;

    /// Render-ready description of the current visual state
    fn snapshot(&self) -> ViewObject;
}

/// One command from the controlling agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
    Shoot,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::None => "NONE",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
            Action::Up => "UP",
            Action::Down => "DOWN",
            Action::Shoot => "SHOOT",
        }
    }

    /// Parse a command string; anything unrecognised is `None`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "LEFT" | "MOVE_LEFT" => Action::Left,
            "RIGHT" | "MOVE_RIGHT" => Action::Right,
            "UP" | "MOVE_UP" => Action::Up,
            "DOWN" | "MOVE_DOWN" => Action::Down,
            "SHOOT" | "FIRE" => Action::Shoot,
            _ => Action::None,
        }
    }

    /// Unit step in screen space for directional actions
    pub fn direction(&self) -> Vec2 {
        match self {
            Action::Left => Vec2::NEG_X,
            Action::Right => Vec2::X,
            Action::Up => Vec2::NEG_Y,
            Action::Down => Vec2::Y,
            Action::None | Action::Shoot => Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocabulary() {
        assert_eq!(Action::parse("LEFT"), Action::Left);
        assert_eq!(Action::parse("move_right"), Action::Right);
        assert_eq!(Action::parse(" up "), Action::Up);
        assert_eq!(Action::parse("SHOOT"), Action::Shoot);
        assert_eq!(Action::parse("NONE"), Action::None);
    }

    #[test]
    fn test_unknown_is_none() {
        assert_eq!(Action::parse("JUMP"), Action::None);
        assert_eq!(Action::parse(""), Action::None);
    }
}
