//! Game state and core simulation types
//!
//! Everything one session mutates lives in [`GameState`]; the simulation
//! loop owns it and hands `&mut` access to each component in turn.

use glam::{EulerRot, Quat, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::arena::Arena;
use super::hostiles::HostilePool;
use super::player::PlayerController;
use super::projectiles::ProjectilePool;
use crate::consts::*;

/// Anything with a place in the arena
pub trait Spatial {
    fn position(&self) -> Vec3;

    /// World rotation, for entities that have one
    fn orientation(&self) -> Option<Quat> {
        None
    }
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Ticks are being simulated
    Running,
    /// Player health reached zero; terminal
    Terminated,
}

/// The player's body and view angles
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Feet position
    pub pos: Vec3,
    /// Rotation about +Y (radians)
    pub yaw: f32,
    /// Rotation about the camera's X axis, clamped to ±π/2
    pub pitch: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl Player {
    /// Camera rotation (yaw first, then pitch)
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera position
    pub fn eye_position(&self) -> Vec3 {
        self.pos + Vec3::Y * PLAYER_EYE_HEIGHT
    }

    /// Unit vector the camera looks along
    pub fn look_direction(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }
}

impl Spatial for Player {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn orientation(&self) -> Option<Quat> {
        Some(self.rotation())
    }
}

/// A hostile that chases the player
#[derive(Debug, Clone, PartialEq)]
pub struct Hostile {
    pub id: u32,
    pub pos: Vec3,
    pub health: i32,
    /// Displacement per tick
    pub speed: f32,
}

impl Hostile {
    pub fn new(id: u32, pos: Vec3) -> Self {
        Self {
            id,
            pos,
            health: HOSTILE_MAX_HEALTH,
            speed: HOSTILE_SPEED,
        }
    }

    /// Step toward `target` by `speed`, stopping on it rather than overshooting
    pub fn pursue(&mut self, target: Vec3) {
        let to_target = target - self.pos;
        let distance = to_target.length();
        if distance <= f32::EPSILON {
            return;
        }
        self.pos += to_target / distance * self.speed.min(distance);
    }

    /// Apply one projectile hit. Returns true if this hit defeated the hostile.
    pub fn take_hit(&mut self) -> bool {
        self.health = (self.health - HOSTILE_HIT_DAMAGE).max(0);
        self.is_defeated()
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

impl Spatial for Hostile {
    fn position(&self) -> Vec3 {
        self.pos
    }
}

/// A fired projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec3,
    /// Displacement per tick
    pub vel: Vec3,
    /// Ticks left before expiry
    pub lifetime: u32,
}

impl Projectile {
    /// Advance one tick. Returns false once the projectile has expired.
    pub fn advance(&mut self) -> bool {
        self.pos += self.vel;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime > 0
    }
}

impl Spatial for Projectile {
    fn position(&self) -> Vec3 {
        self.pos
    }
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    ProjectileFired { id: u32 },
    ProjectileExpired { id: u32 },
    HostileSpawned { id: u32, pos: Vec3 },
    HostileHit { hostile_id: u32, projectile_id: u32, health: i32 },
    HostileDefeated { id: u32, score: u64 },
    PlayerDamaged { hostile_id: u32, health: f32 },
    /// Emitted once, on the tick health reached zero
    SessionEnded { score: u64, ticks: u64 },
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Player health; may dip below zero on the final tick
    pub health: f32,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub controller: PlayerController,
    pub arena: Arena,
    pub hostiles: HostilePool,
    pub projectiles: ProjectilePool,
    /// Events from the latest tick (cleared at its start)
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new session: arena, player at the origin, initial hostiles
    pub fn new(seed: u64) -> Self {
        let mut state = Self::empty(seed);
        for _ in 0..INITIAL_HOSTILE_COUNT {
            state.spawn_hostile();
        }
        log::info!(
            "Session started (seed {}, {} obstacles, {} hostiles)",
            seed,
            state.arena.obstacles.len(),
            state.hostiles.len()
        );
        state
    }

    /// A session with its arena generated but no hostiles yet
    pub fn empty(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let arena = Arena::generate(&mut rng);
        Self {
            seed,
            health: PLAYER_MAX_HEALTH,
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            player: Player::default(),
            controller: PlayerController::default(),
            arena,
            hostiles: HostilePool::new(),
            projectiles: ProjectilePool::new(),
            events: Vec::new(),
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Spawn one hostile at a random spot in the arena
    pub fn spawn_hostile(&mut self) -> u32 {
        let id = self.hostiles.spawn(&mut self.rng, &self.arena);
        if let Some(hostile) = self.hostiles.get(id) {
            self.events.push(GameEvent::HostileSpawned { id, pos: hostile.pos });
        }
        id
    }

    /// Fire from the player's eye along the view direction
    pub fn fire(&mut self) -> u32 {
        let id = self
            .projectiles
            .spawn(self.player.eye_position(), self.player.look_direction());
        self.events.push(GameEvent::ProjectileFired { id });
        id
    }
}
