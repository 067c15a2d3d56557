//! Arena FPS - a first-person arena survival game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, pursuit, collisions, game state)
//! - `session`: Frame clock that drives the simulation from host frames
//! - `input`: Key and pointer state sampled once per tick
//! - `renderer`: Scene description handed to the rendering backend
//! - `hud`: Read-only numbers for the on-screen display
//! - `settings`: Key bindings and look preferences
//! - `autopilot`: Demo mode bot

pub mod autopilot;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use hud::HudSnapshot;
pub use input::InputState;
pub use session::Session;
pub use settings::{KeyBindings, Settings};

/// Game configuration constants
///
/// Speeds and damage are per tick.
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Arena floor half-size
    pub const ARENA_HALF_EXTENT: f32 = 50.0;
    pub const OBSTACLE_COUNT: usize = 20;
    /// Obstacle centres fall within ±this on X and Z
    pub const OBSTACLE_SPREAD: f32 = 40.0;
    pub const OBSTACLE_SIZE: Vec3 = Vec3::new(2.0, 4.0, 2.0);

    /// Player defaults
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    pub const PLAYER_MOVE_SPEED: f32 = 0.1;
    pub const PLAYER_EYE_HEIGHT: f32 = 1.6;
    /// Radians per pointer unit
    pub const MOUSE_SENSITIVITY: f32 = 0.002;
    pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2;

    /// Hostile defaults
    pub const INITIAL_HOSTILE_COUNT: usize = 10;
    pub const HOSTILE_SPAWN_HALF_EXTENT: f32 = 30.0;
    pub const HOSTILE_SPAWN_HEIGHT: f32 = 1.0;
    pub const HOSTILE_MAX_HEALTH: i32 = 100;
    pub const HOSTILE_HIT_DAMAGE: i32 = 25;
    pub const HOSTILE_SPEED: f32 = 0.02;
    pub const HOSTILE_DEFEAT_SCORE: u64 = 10;
    pub const HOSTILE_SIZE: Vec3 = Vec3::new(1.0, 2.0, 1.0);

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 2.0;
    pub const PROJECTILE_LIFETIME: u32 = 100;
    pub const PROJECTILE_RADIUS: f32 = 0.05;

    /// Contact thresholds (strictly-less-than) and damage
    pub const PROJECTILE_HIT_DISTANCE: f32 = 0.5;
    pub const PLAYER_CONTACT_DISTANCE: f32 = 1.5;
    pub const CONTACT_DAMAGE: f32 = 0.5;

    /// Camera and atmosphere
    pub const CAMERA_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
    pub const CAMERA_NEAR: f32 = 0.1;
    pub const CAMERA_FAR: f32 = 1000.0;
    pub const FOG_RANGE: (f32, f32) = (10.0, 100.0);
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
