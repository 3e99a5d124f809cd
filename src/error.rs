//! Construction errors
//!
//! A world either starts from a valid configuration or not at all. Nothing
//! inside a frame can fail.

use thiserror::Error;

/// Reasons a `Settings` value is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Episodes would end before the first frame
    #[error("frame limit must be positive")]
    InvalidFrameLimit,

    /// A zero target would pass on the first frame
    #[error("target score must be positive")]
    InvalidTargetScore,

    /// A size or speed that must be strictly positive (or fit the play area)
    #[error("invalid {what}: {value}")]
    InvalidDimension { what: &'static str, value: f32 },

    /// Collision overlap ratio outside (0, 1]
    #[error("collide ratio must be in (0, 1], got {0}")]
    InvalidRatio(f32),

    #[error("mob speed range is inverted: min {min} > max {max}")]
    InvalidSpeedRange { min: f32, max: f32 },

    /// A cooldown interval of zero frames
    #[error("{what} must be at least one frame")]
    InvalidInterval { what: &'static str },

    #[error("initial shield {shield} exceeds cap {cap}")]
    ShieldAboveCap { shield: u32, cap: u32 },

    /// Malformed JSON configuration
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}
