//! Projectile pool: firing, ballistic flight and expiry

use glam::Vec3;

use super::state::Projectile;
use crate::consts::*;

/// Live projectiles, in firing order
#[derive(Debug, Clone)]
pub struct ProjectilePool {
    projectiles: Vec<Projectile>,
    next_id: u32,
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self {
            projectiles: Vec::new(),
            next_id: 1,
        }
    }

    /// Launch a projectile from `origin` along `direction`
    pub fn spawn(&mut self, origin: Vec3, direction: Vec3) -> u32 {
        let id = self.next_id;
        self.next_id = id + 1;
        self.projectiles.push(Projectile {
            id,
            pos: origin,
            vel: direction.normalize_or_zero() * PROJECTILE_SPEED,
            lifetime: PROJECTILE_LIFETIME,
        });
        id
    }

    /// Advance every projectile one tick and drop the expired ones.
    /// Returns the ids that expired.
    pub fn update(&mut self) -> Vec<u32> {
        let mut expired = Vec::new();
        self.projectiles.retain_mut(|p| {
            let alive = p.advance();
            if !alive {
                expired.push(p.id);
            }
            alive
        });
        expired
    }

    /// First projectile strictly closer than `radius` to `point`
    pub fn find_within(&self, point: Vec3, radius: f32) -> Option<u32> {
        self.projectiles
            .iter()
            .find(|p| p.pos.distance(point) < radius)
            .map(|p| p.id)
    }

    /// Remove a projectile by id
    pub fn remove(&mut self, id: u32) -> Option<Projectile> {
        let index = self.projectiles.iter().position(|p| p.id == id)?;
        Some(self.projectiles.remove(index))
    }

    pub fn get(&self, id: u32) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}
