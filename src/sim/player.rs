//! First-person player controller
//!
//! Turns a [`TickInput`] into view rotation and movement. Movement is built
//! in camera space (forward is -Z, right is +X) and rotated by the full view
//! orientation, so looking up while walking forward also climbs.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::state::Player;
use super::tick::{MoveKeys, TickInput};
use crate::consts::*;

/// Look and movement tuning for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerController {
    /// Radians of rotation per pointer unit
    pub sensitivity: f32,
    /// Flip the vertical look axis
    pub invert_y: bool,
    /// Displacement per tick at full input
    pub move_speed: f32,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            sensitivity: MOUSE_SENSITIVITY,
            invert_y: false,
            move_speed: PLAYER_MOVE_SPEED,
        }
    }
}

impl PlayerController {
    /// Apply view rotation then movement for one tick
    pub fn update(&self, player: &mut Player, input: &TickInput, arena: &Arena) {
        self.look(player, input.look_delta);
        self.walk(player, input.movement, arena);
    }

    /// Rotate the view by a pointer delta
    pub fn look(&self, player: &mut Player, delta: Vec2) {
        let dy = if self.invert_y { -delta.y } else { delta.y };
        player.yaw -= delta.x * self.sensitivity;
        player.pitch = (player.pitch - dy * self.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Move along the held direction keys, staying on the arena floor
    pub fn walk(&self, player: &mut Player, keys: MoveKeys, arena: &Arena) {
        let local = keys.local_vector();
        if local == Vec3::ZERO {
            return;
        }
        let displacement = player.rotation() * (local.normalize() * self.move_speed);
        player.pos = arena.clamp_to_floor(player.pos + displacement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn arena() -> Arena {
        Arena::generate(&mut Pcg32::seed_from_u64(5))
    }

    #[test]
    fn test_look_decrements_angles() {
        let controller = PlayerController::default();
        let mut player = Player::default();
        controller.look(&mut player, Vec2::new(100.0, 50.0));
        assert!((player.yaw + 0.2).abs() < 1e-6);
        assert!((player.pitch + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let controller = PlayerController::default();
        let mut player = Player::default();
        controller.look(&mut player, Vec2::new(0.0, -10_000.0));
        assert_eq!(player.pitch, MAX_PITCH);
        controller.look(&mut player, Vec2::new(0.0, 20_000.0));
        assert_eq!(player.pitch, -MAX_PITCH);
    }

    #[test]
    fn test_invert_y() {
        let controller = PlayerController {
            invert_y: true,
            ..Default::default()
        };
        let mut player = Player::default();
        controller.look(&mut player, Vec2::new(0.0, 50.0));
        assert!(player.pitch > 0.0);
    }

    #[test]
    fn test_forward_moves_along_view() {
        let controller = PlayerController::default();
        let mut player = Player::default();
        let keys = MoveKeys {
            forward: true,
            ..Default::default()
        };
        controller.walk(&mut player, keys, &arena());
        assert!(player.pos.abs_diff_eq(Vec3::new(0.0, 0.0, -PLAYER_MOVE_SPEED), 1e-6));

        player.yaw = std::f32::consts::FRAC_PI_2;
        controller.walk(&mut player, keys, &arena());
        assert!(
            player
                .pos
                .abs_diff_eq(Vec3::new(-PLAYER_MOVE_SPEED, 0.0, -PLAYER_MOVE_SPEED), 1e-6)
        );
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let controller = PlayerController::default();
        let mut player = Player::default();
        let keys = MoveKeys {
            forward: true,
            right: true,
            ..Default::default()
        };
        controller.walk(&mut player, keys, &arena());
        assert!((player.pos.length() - PLAYER_MOVE_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let controller = PlayerController::default();
        let mut player = Player::default();
        let keys = MoveKeys {
            forward: true,
            back: true,
            ..Default::default()
        };
        controller.walk(&mut player, keys, &arena());
        assert_eq!(player.pos, Vec3::ZERO);
    }

    #[test]
    fn test_walk_stops_at_floor_edge() {
        let controller = PlayerController::default();
        let mut player = Player {
            pos: Vec3::new(0.0, 0.0, -ARENA_HALF_EXTENT),
            ..Default::default()
        };
        let keys = MoveKeys {
            forward: true,
            ..Default::default()
        };
        controller.walk(&mut player, keys, &arena());
        assert_eq!(player.pos.z, -ARENA_HALF_EXTENT);

        // Looking down cannot push below the ground
        player.pitch = -MAX_PITCH;
        controller.walk(&mut player, keys, &arena());
        assert_eq!(player.pos.y, 0.0);
    }
}
