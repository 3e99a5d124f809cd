//! Render-ready records
//!
//! The simulation never draws anything. Each frame it hands these plain
//! records to whatever sink renders or forwards them; nothing flows back.

use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// One drawable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewObject {
    /// Filled rectangle
    Rect {
        name: String,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: String,
        angle: f32,
    },
    /// Reference to an image asset declared in the scene-init data
    Image {
        image_id: String,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        angle: f32,
    },
    Text {
        content: String,
        x: i32,
        y: i32,
        color: String,
        font_style: String,
    },
}

impl ViewObject {
    pub fn rect(name: &str, body: &Rect, color: &str) -> Self {
        let (x, y, width, height) = pixels(body);
        ViewObject::Rect {
            name: name.to_string(),
            x,
            y,
            width,
            height,
            color: color.to_string(),
            angle: 0.0,
        }
    }

    pub fn image(image_id: &str, body: &Rect) -> Self {
        let (x, y, width, height) = pixels(body);
        ViewObject::Image {
            image_id: image_id.to_string(),
            x,
            y,
            width,
            height,
            angle: 0.0,
        }
    }

    pub fn text(content: impl Into<String>, x: i32, y: i32, color: &str, font_style: &str) -> Self {
        ViewObject::Text {
            content: content.into(),
            x,
            y,
            color: color.to_string(),
            font_style: font_style.to_string(),
        }
    }
}

/// Round a body to whole pixels
fn pixels(body: &Rect) -> (i32, i32, i32, i32) {
    (
        body.pos.x.round() as i32,
        body.pos.y.round() as i32,
        body.size.x.round() as i32,
        body.size.y.round() as i32,
    )
}

/// Image asset declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInit {
    pub image_id: String,
    pub width: i32,
    pub height: i32,
    pub file_path: String,
    /// Public mirror of the image, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_raw_url: Option<String>,
}

/// Scene canvas description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneInfo {
    pub width: i32,
    pub height: i32,
    pub color: String,
    pub bias_x: i32,
    pub bias_y: i32,
}

/// Emitted once per world construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneInit {
    pub scene: SceneInfo,
    pub assets: Vec<AssetInit>,
    /// Map selector passed through to the sink
    pub map_no: Option<u32>,
}

/// Emitted every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneProgress {
    pub frame: u32,
    pub background: Vec<ViewObject>,
    /// Bullets, then mobs, then the player
    pub object_list: Vec<ViewObject>,
    /// HUD
    pub foreground: Vec<ViewObject>,
    /// Countdown
    pub toggle: Vec<ViewObject>,
}
