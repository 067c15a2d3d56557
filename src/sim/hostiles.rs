//! Hostile pool: spawning, pursuit and removal

use glam::Vec3;
use rand::Rng;

use super::arena::Arena;
use super::state::Hostile;

/// Live hostiles, in spawn order
#[derive(Debug, Clone)]
pub struct HostilePool {
    hostiles: Vec<Hostile>,
    next_id: u32,
}

impl Default for HostilePool {
    fn default() -> Self {
        Self::new()
    }
}

impl HostilePool {
    pub fn new() -> Self {
        Self {
            hostiles: Vec::new(),
            next_id: 1,
        }
    }

    /// Spawn a full-health hostile at a random point of the arena
    pub fn spawn(&mut self, rng: &mut impl Rng, arena: &Arena) -> u32 {
        let pos = arena.random_spawn_point(rng);
        self.spawn_at(pos)
    }

    /// Spawn a full-health hostile at `pos`
    pub fn spawn_at(&mut self, pos: Vec3) -> u32 {
        let id = self.next_id;
        self.next_id = id + 1;
        self.hostiles.push(Hostile::new(id, pos));
        log::debug!("Hostile {} spawned at {:?}", id, pos);
        id
    }

    /// Move every hostile one step toward the player
    ///
    /// Speed is a per-tick displacement; the session runs ticks at a fixed
    /// rate so pursuit speed does not depend on the display frame rate.
    pub fn update(&mut self, player_pos: Vec3) {
        for hostile in &mut self.hostiles {
            hostile.pursue(player_pos);
        }
    }

    /// Remove a hostile by id
    pub fn remove(&mut self, id: u32) -> Option<Hostile> {
        let index = self.hostiles.iter().position(|h| h.id == id)?;
        Some(self.hostiles.remove(index))
    }

    pub fn get(&self, id: u32) -> Option<&Hostile> {
        self.hostiles.iter().find(|h| h.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Hostile> {
        self.hostiles.iter_mut().find(|h| h.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hostile> {
        self.hostiles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Hostile> {
        self.hostiles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.hostiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hostiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.hostiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_spawn_assigns_unique_ids() {
        let mut pool = HostilePool::new();
        let a = pool.spawn_at(Vec3::ZERO);
        let b = pool.spawn_at(Vec3::X);
        assert_ne!(a, b);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(b).map(|h| h.health), Some(HOSTILE_MAX_HEALTH));
    }

    #[test]
    fn test_update_moves_everyone_toward_player() {
        let mut pool = HostilePool::new();
        let near = pool.spawn_at(Vec3::new(3.0, 1.0, 0.0));
        let far = pool.spawn_at(Vec3::new(0.0, 1.0, -20.0));
        let player = Vec3::ZERO;

        let before: Vec<f32> = pool.iter().map(|h| h.pos.distance(player)).collect();
        pool.update(player);
        let after: Vec<f32> = pool.iter().map(|h| h.pos.distance(player)).collect();

        for (b, a) in before.iter().zip(&after) {
            assert!((b - a - HOSTILE_SPEED).abs() < 1e-5);
        }
        assert!(pool.get(near).is_some() && pool.get(far).is_some());
    }

    #[test]
    fn test_remove_by_id() {
        let mut pool = HostilePool::new();
        let a = pool.spawn_at(Vec3::ZERO);
        let b = pool.spawn_at(Vec3::X);
        assert_eq!(pool.remove(a).map(|h| h.id), Some(a));
        assert!(pool.remove(a).is_none());
        assert_eq!(pool.iter().map(|h| h.id).collect::<Vec<_>>(), vec![b]);
    }
}
