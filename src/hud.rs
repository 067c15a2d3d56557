//! Read-only numbers for the on-screen HUD

use serde::Serialize;

use crate::consts::PLAYER_MAX_HEALTH;
use crate::sim::GameState;

/// What the presentation layer shows each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    /// Health floored and clamped to 0..=100
    pub health_percent: u32,
    pub score: u64,
    pub hostile_count: usize,
    pub running: bool,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let health = (state.health / PLAYER_MAX_HEALTH * 100.0).clamp(0.0, 100.0);
        Self {
            health_percent: health.floor() as u32,
            score: state.score,
            hostile_count: state.hostiles.len(),
            running: state.is_running(),
        }
    }
}
