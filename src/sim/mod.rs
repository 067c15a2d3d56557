//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, fixed per-tick speeds
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod hostiles;
pub mod player;
pub mod projectiles;
pub mod state;
pub mod tick;

pub use arena::{Arena, Obstacle};
pub use collision::{CollisionReport, resolve, within};
pub use hostiles::HostilePool;
pub use player::PlayerController;
pub use projectiles::ProjectilePool;
pub use state::{GameEvent, GamePhase, GameState, Hostile, Player, Projectile, Spatial};
pub use tick::{MoveKeys, TickInput, tick};
