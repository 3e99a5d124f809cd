//! Game status and end-of-episode result

use serde::{Deserialize, Serialize};

/// Externally visible game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Simulation continues
    #[serde(rename = "GAME_ALIVE")]
    Alive,
    /// Target score reached
    #[serde(rename = "GAME_PASS")]
    Pass,
    /// Player dead or frames exhausted
    #[serde(rename = "GAME_OVER")]
    Over,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Alive)
    }
}

/// Outcome class reported alongside the status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultState {
    Finish,
    Fail,
}

/// Everything `derive_status` looks at
#[derive(Debug, Clone, Copy)]
pub struct StatusInputs {
    pub score: u64,
    pub target_score: u64,
    pub player_alive: bool,
    pub used_frame: u32,
    pub frame_limit: u32,
}

/// Status by priority: pass, then death, then timeout
pub fn derive_status(inputs: &StatusInputs) -> GameStatus {
    if inputs.score >= inputs.target_score {
        GameStatus::Pass
    } else if !inputs.player_alive {
        GameStatus::Over
    } else if inputs.used_frame >= inputs.frame_limit {
        GameStatus::Over
    } else {
        GameStatus::Alive
    }
}

/// Record emitted once when an episode ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub frames_used: u32,
    pub status: GameStatus,
    pub score: u64,
    pub state: ResultState,
}

impl GameResult {
    /// Build the result for a terminal status; `None` while still alive
    pub fn for_status(status: GameStatus, frames_used: u32, score: u64) -> Option<Self> {
        let state = match status {
            GameStatus::Alive => return None,
            GameStatus::Pass => ResultState::Finish,
            GameStatus::Over => ResultState::Fail,
        };
        Some(Self {
            frames_used,
            status,
            score,
            state,
        })
    }
}
