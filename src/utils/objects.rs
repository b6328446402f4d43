//! This file defines the various objects, resources, and components used in the game.
use bevy::prelude::*;
use std::time::Duration;

use crate::utils::constants::cube_constants::{
    CUBE_INITIAL_ROTATION_X, CUBE_INITIAL_ROTATION_Y, CUBE_INITIAL_SPEED, CUBE_X_SPEED_RATIO,
};
use crate::utils::constants::scoring_constants::STATUS_READY;

/// Orientation and spin speed of the cube. Angles are unbounded and only wrapped when scoring or drawing.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CubeTransform {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub speed: f64,
}

impl Default for CubeTransform {
    fn default() -> Self {
        Self {
            rotation_x: CUBE_INITIAL_ROTATION_X,
            rotation_y: CUBE_INITIAL_ROTATION_Y,
            speed: CUBE_INITIAL_SPEED,
        }
    }
}

impl CubeTransform {
    /// Advances both angles by one tick.
    pub fn advance(&mut self) {
        self.rotation_y += self.speed;
        self.rotation_x += self.speed * CUBE_X_SPEED_RATIO;
    }
}

/// A resource that holds the session state shown on the HUD.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GameState {
    pub score: u32,
    // Highest score seen this session, never lowered.
    pub best: u32,
    // Starts at 1, one more per capture.
    pub round: u32,
    // False only during the post capture cool-down.
    pub running: bool,
    // Text of the status region.
    pub status: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            best: 0,
            round: 1,
            running: true,
            status: STATUS_READY.to_string(),
        }
    }
}

/// Start of the running cool-down, if any. Captures re-arm once it has lasted long enough.
#[derive(Resource, Default, Debug)]
pub struct CaptureCooldown {
    pub started_at: Option<Duration>,
}

/// Whether the debug alignment gauge is drawn.
#[derive(Resource, Default)]
pub struct AlignmentGauge(pub bool);

/// Request to score the current rotation.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct CaptureRequest;

/// Request to start a new session, keeping the best score.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetRequest;

/// A filled dot drawn at one projected cube vertex.
#[derive(Component)]
pub struct VertexDot {
    pub vertex_index: usize,
}

/// HUD text regions, one entity each.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudText {
    Score,
    Best,
    Round,
    Status,
}

impl HudText {
    /// Current content of this region.
    pub fn render(self, state: &GameState) -> String {
        match self {
            HudText::Score => format!("Score: {}", state.score),
            HudText::Best => format!("Best: {}", state.best),
            HudText::Round => format!("Round: {}", state.round),
            HudText::Status => state.status.clone(),
        }
    }
}

/// The HUD buttons
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudButton {
    Capture,
    Reset,
}
