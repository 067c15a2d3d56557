//! Input capture state
//!
//! The windowing layer reports key transitions and pointer motion as they
//! arrive; the session samples this once per tick into a [`TickInput`].

use std::collections::HashMap;

use glam::Vec2;

use crate::settings::KeyBindings;
use crate::sim::{MoveKeys, TickInput};

/// Latest key states and accumulated pointer motion
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Key identifier (lowercased) -> held
    keys: HashMap<String, bool>,
    /// Pointer motion since the last sample
    pointer_delta: Vec2,
    /// Fire key state at the last sample, for edge detection
    fire_was_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase(), true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase(), false);
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys.get(&key.to_lowercase()).copied().unwrap_or(false)
    }

    /// Accumulate relative pointer motion
    pub fn pointer_moved(&mut self, dx: f32, dy: f32) {
        self.pointer_delta += Vec2::new(dx, dy);
    }

    /// Release every key (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    /// Snapshot input for one tick
    ///
    /// Pointer motion is consumed. Fire is reported only on the tick the fire
    /// key is first seen held, so holding it does not auto-repeat.
    pub fn sample(&mut self, bindings: &KeyBindings) -> TickInput {
        let fire_down = self.is_down(&bindings.fire);
        let fire = fire_down && !self.fire_was_down;
        self.fire_was_down = fire_down;

        TickInput {
            movement: MoveKeys {
                forward: self.is_down(&bindings.forward),
                back: self.is_down(&bindings.back),
                left: self.is_down(&bindings.left),
                right: self.is_down(&bindings.right),
            },
            look_delta: std::mem::take(&mut self.pointer_delta),
            fire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive() {
        let mut input = InputState::new();
        input.key_down("W");
        assert!(input.is_down("w"));
        input.key_up("w");
        assert!(!input.is_down("W"));
    }

    #[test]
    fn test_sample_maps_bindings() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        input.key_down("w");
        input.key_down("d");

        let sampled = input.sample(&bindings);
        assert!(sampled.movement.forward && sampled.movement.right);
        assert!(!sampled.movement.back && !sampled.movement.left);
        // Held keys persist across samples
        assert!(input.sample(&bindings).movement.forward);
    }

    #[test]
    fn test_pointer_delta_resets_on_sample() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        input.pointer_moved(3.0, -1.0);
        input.pointer_moved(2.0, 4.0);

        assert_eq!(input.sample(&bindings).look_delta, Vec2::new(5.0, 3.0));
        assert_eq!(input.sample(&bindings).look_delta, Vec2::ZERO);
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();

        input.key_down(&bindings.fire);
        assert!(input.sample(&bindings).fire);
        // Still held: no repeat
        assert!(!input.sample(&bindings).fire);
        assert!(!input.sample(&bindings).fire);

        input.key_up(&bindings.fire);
        assert!(!input.sample(&bindings).fire);
        input.key_down(&bindings.fire);
        assert!(input.sample(&bindings).fire);
    }
}
