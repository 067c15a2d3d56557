//! Demo mode: a simple bot that plays the game
//!
//! Feeds the same [`InputState`] a human would, so the whole input path is
//! exercised. It turns toward the nearest hostile, taps fire when lined up and
//! backs off when something gets close.

use glam::Vec3;

use crate::input::InputState;
use crate::normalize_angle;
use crate::settings::KeyBindings;
use crate::sim::{GameState, Hostile};

/// Largest view correction per tick (radians)
const MAX_TURN: f32 = 0.2;
/// Aim error under which the bot fires (radians)
const AIM_TOLERANCE: f32 = 0.05;
/// Horizontal distance under which the bot walks backwards
const RETREAT_DISTANCE: f32 = 4.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    fire_held: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write this tick's key and pointer events into `input`
    pub fn drive(&mut self, state: &GameState, input: &mut InputState, bindings: &KeyBindings) {
        let eye = state.player.eye_position();
        let Some(target) = nearest_hostile(state, eye) else {
            input.release_all();
            self.fire_held = false;
            return;
        };

        let to_target = target.pos - eye;
        let desired_yaw = (-to_target.x).atan2(-to_target.z);
        let desired_pitch = (to_target.y / to_target.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .asin();

        let yaw_err = normalize_angle(desired_yaw - state.player.yaw);
        let pitch_err = desired_pitch - state.player.pitch;

        // The controller subtracts delta * sensitivity, so steer with the negated error
        let controller = &state.controller;
        let sensitivity = controller.sensitivity.max(f32::EPSILON);
        let dx = -yaw_err.clamp(-MAX_TURN, MAX_TURN) / sensitivity;
        let mut dy = -pitch_err.clamp(-MAX_TURN, MAX_TURN) / sensitivity;
        if controller.invert_y {
            dy = -dy;
        }
        input.pointer_moved(dx, dy);

        let aimed = yaw_err.abs() < AIM_TOLERANCE && pitch_err.abs() < AIM_TOLERANCE;
        if aimed && !self.fire_held {
            input.key_down(&bindings.fire);
            self.fire_held = true;
        } else if self.fire_held {
            input.key_up(&bindings.fire);
            self.fire_held = false;
        }

        let flat = Vec3::new(to_target.x, 0.0, to_target.z);
        if flat.length() < RETREAT_DISTANCE {
            input.key_down(&bindings.back);
        } else {
            input.key_up(&bindings.back);
        }
    }
}

fn nearest_hostile(state: &GameState, from: Vec3) -> Option<&Hostile> {
    state
        .hostiles
        .iter()
        .min_by(|a, b| a.pos.distance(from).total_cmp(&b.pos.distance(from)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_turns_toward_nearest_hostile() {
        let bindings = KeyBindings::default();
        let mut state = GameState::empty(3);
        state.hostiles.spawn_at(Vec3::new(-10.0, 1.6, 0.0));
        state.hostiles.spawn_at(Vec3::new(30.0, 1.6, 30.0));

        let mut pilot = Autopilot::new();
        let mut input = InputState::new();
        for _ in 0..20 {
            pilot.drive(&state, &mut input, &bindings);
            let sampled: TickInput = input.sample(&bindings);
            state.controller.look(&mut state.player, sampled.look_delta);
        }

        // Facing -X means yaw of +π/2
        assert!((state.player.yaw - std::f32::consts::FRAC_PI_2).abs() < AIM_TOLERANCE);
    }

    #[test]
    fn test_fires_when_aimed() {
        let bindings = KeyBindings::default();
        let mut state = GameState::empty(3);
        state.hostiles.spawn_at(Vec3::new(0.0, 1.6, -10.0));

        let mut pilot = Autopilot::new();
        let mut input = InputState::new();
        pilot.drive(&state, &mut input, &bindings);
        assert!(input.sample(&bindings).fire);

        // Released on the next tick so the following press registers again
        pilot.drive(&state, &mut input, &bindings);
        assert!(!input.is_down(&bindings.fire));
        assert!(!input.sample(&bindings).fire);
        pilot.drive(&state, &mut input, &bindings);
        assert!(input.sample(&bindings).fire);
    }

    #[test]
    fn test_backs_off_when_close() {
        let bindings = KeyBindings::default();
        let mut state = GameState::empty(3);
        state.hostiles.spawn_at(Vec3::new(0.0, 1.0, -2.0));

        let mut pilot = Autopilot::new();
        let mut input = InputState::new();
        pilot.drive(&state, &mut input, &bindings);
        assert!(input.is_down(&bindings.back));

        let tick_input = input.sample(&bindings);
        tick(&mut state, &tick_input);
        assert!(state.player.pos.z > 0.0);
    }
}
