//! Simulation tick
//!
//! One tick runs, in this order: player look/move (and fire), projectile
//! flight, hostile pursuit, collision resolution. Movement always precedes
//! collision so contacts are judged on this tick's positions.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::{self, CollisionReport};
use super::state::{GameEvent, GamePhase, GameState};

/// Direction keys held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    /// Camera-space movement vector (unnormalized)
    pub fn local_vector(&self) -> Vec3 {
        let mut v = Vec3::ZERO;
        if self.forward {
            v.z -= 1.0;
        }
        if self.back {
            v.z += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub movement: MoveKeys,
    /// Pointer movement since the previous tick
    pub look_delta: Vec2,
    /// Fire key went down since the previous tick
    pub fire: bool,
}

/// Advance the game state by one tick. A terminated session is left untouched.
pub fn tick(state: &mut GameState, input: &TickInput) -> CollisionReport {
    if state.phase == GamePhase::Terminated {
        return CollisionReport::default();
    }

    state.events.clear();
    state.time_ticks += 1;

    let controller = state.controller;
    controller.update(&mut state.player, input, &state.arena);
    if input.fire {
        state.fire();
    }

    for id in state.projectiles.update() {
        state.events.push(GameEvent::ProjectileExpired { id });
    }

    state.hostiles.update(state.player.pos);

    collision::resolve(state)
}
