//! Scene data handed to the render sink
//!
//! `scene_init` is sent once per world, `scene_progress` every frame.

use glam::Vec2;

use super::entity::Entity;
use super::mob::MOB_IMAGE_ID;
use super::player::PLAYER_IMAGE_ID;
use super::rect::Rect;
use super::state::World;
use crate::view::{AssetInit, SceneInfo, SceneInit, SceneProgress, ViewObject};

pub const BACKGROUND_IMAGE_ID: &str = "background";
const BACKGROUND_URL: &str =
    "https://raw.githubusercontent.com/Jesse-Jumbo/GameFramework/main/MyGame/asset/image/background.png";
/// Background is inset by this much in total on each axis
const BACKGROUND_INSET: i32 = 50;

const HUD_FONT: &str = "24px Arial";
const SCORE_COLOR: &str = "#21A1F1";
const LIVES_COLOR: &str = "#22390A";
const SHIELD_COLOR: &str = "#ff0000";
const TIMER_COLOR: &str = "#FFA500";
/// One HUD bar per this many shield points
const SHIELD_PER_BAR: u32 = 10;

impl World {
    fn background_size(&self) -> (i32, i32) {
        (
            self.settings.play_width.round() as i32 - BACKGROUND_INSET,
            self.settings.play_height.round() as i32 - BACKGROUND_INSET,
        )
    }

    fn image_asset(&self, image_id: &str, size: f32) -> AssetInit {
        let size = size.round() as i32;
        AssetInit {
            image_id: image_id.to_string(),
            width: size,
            height: size,
            file_path: format!("{}/image/{}.png", self.settings.asset_path, image_id),
            github_raw_url: None,
        }
    }

    /// Static scene description: canvas, background and entity images
    pub fn scene_init(&self) -> SceneInit {
        let (bg_width, bg_height) = self.background_size();
        let mut assets = vec![AssetInit {
            image_id: BACKGROUND_IMAGE_ID.to_string(),
            width: bg_width,
            height: bg_height,
            file_path: format!("{}/image/background.png", self.settings.asset_path),
            github_raw_url: Some(BACKGROUND_URL.to_string()),
        }];
        if !self.mobs.is_empty() {
            assets.push(self.image_asset(MOB_IMAGE_ID, self.settings.mob_size));
        }
        assets.push(self.image_asset(PLAYER_IMAGE_ID, self.settings.player_size));

        SceneInit {
            scene: SceneInfo {
                width: self.settings.play_width.round() as i32,
                height: self.settings.play_height.round() as i32,
                color: "#ffffff".to_string(),
                bias_x: 0,
                bias_y: 0,
            },
            assets,
            map_no: self.settings.map_no,
        }
    }

    /// Everything the sink needs to draw the current frame
    pub fn scene_progress(&self) -> SceneProgress {
        let width = self.settings.play_width.round() as i32;
        let height = self.settings.play_height.round() as i32;
        let (bg_width, bg_height) = self.background_size();

        let mut object_list = Vec::with_capacity(self.bullets.len() + self.mobs.len() + 1);
        object_list.extend(self.bullets.iter().map(Entity::snapshot));
        object_list.extend(self.mobs.iter().map(Entity::snapshot));
        object_list.push(self.player.snapshot());

        let background = vec![ViewObject::Image {
            image_id: BACKGROUND_IMAGE_ID.to_string(),
            x: BACKGROUND_INSET / 2,
            y: BACKGROUND_INSET,
            width: bg_width,
            height: bg_height,
            angle: 0.0,
        }];

        let mut foreground = vec![
            ViewObject::text(
                format!("Score: {}", self.score),
                width / 2 - 50,
                5,
                SCORE_COLOR,
                HUD_FONT,
            ),
            ViewObject::text(
                format!("Lives: {}", self.player.lives),
                5,
                5,
                LIVES_COLOR,
                HUD_FONT,
            ),
            ViewObject::text(
                format!("Shield: {}", self.player.shield),
                5,
                height - 30,
                SHIELD_COLOR,
                HUD_FONT,
            ),
        ];
        for i in 0..self.player.shield / SHIELD_PER_BAR {
            let bar = Rect::new(
                Vec2::new(110.0 + 7.0 * i as f32, (height - 25) as f32),
                Vec2::new(5.0, 20.0),
            );
            foreground.push(ViewObject::rect("Shield", &bar, SHIELD_COLOR));
        }

        let toggle = vec![ViewObject::text(
            format!("Timer: {} s", self.frames_remaining()),
            width - 150,
            5,
            TIMER_COLOR,
            "24px Arial BOLD",
        )];

        SceneProgress {
            frame: self.used_frame,
            background,
            object_list,
            foreground,
            toggle,
        }
    }
}
