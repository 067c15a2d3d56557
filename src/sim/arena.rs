//! Static arena layout
//!
//! A square floor with a scatter of box obstacles. Obstacles are generated
//! once per session and are only drawn; nothing collides with them.

use glam::Vec3;
use rand::Rng;

use super::state::Spatial;
use crate::consts::*;

/// An axis-aligned box obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: Vec3,
    /// Full extents along each axis
    pub size: Vec3,
}

impl Spatial for Obstacle {
    fn position(&self) -> Vec3 {
        self.center
    }
}

/// Arena bounds and obstacle layout
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    /// Half the side length of the square floor
    pub half_extent: f32,
    /// Half the side length of the square hostiles spawn in
    pub spawn_half_extent: f32,
    pub obstacles: Vec<Obstacle>,
}

impl Arena {
    /// Lay out a fresh arena
    pub fn generate(rng: &mut impl Rng) -> Self {
        let obstacles = (0..OBSTACLE_COUNT)
            .map(|_| Obstacle {
                center: Vec3::new(
                    rng.random_range(-OBSTACLE_SPREAD..OBSTACLE_SPREAD),
                    OBSTACLE_SIZE.y / 2.0,
                    rng.random_range(-OBSTACLE_SPREAD..OBSTACLE_SPREAD),
                ),
                size: OBSTACLE_SIZE,
            })
            .collect();

        Self {
            half_extent: ARENA_HALF_EXTENT,
            spawn_half_extent: HOSTILE_SPAWN_HALF_EXTENT,
            obstacles,
        }
    }

    /// Uniformly random hostile spawn point at spawn height
    pub fn random_spawn_point(&self, rng: &mut impl Rng) -> Vec3 {
        let h = self.spawn_half_extent;
        Vec3::new(
            rng.random_range(-h..h),
            HOSTILE_SPAWN_HEIGHT,
            rng.random_range(-h..h),
        )
    }

    /// Keep a position on the floor: inside the square, not below ground
    pub fn clamp_to_floor(&self, pos: Vec3) -> Vec3 {
        let h = self.half_extent;
        Vec3::new(pos.x.clamp(-h, h), pos.y.max(0.0), pos.z.clamp(-h, h))
    }

    /// Whether a point lies over the floor
    pub fn contains(&self, pos: Vec3) -> bool {
        pos.x.abs() <= self.half_extent && pos.z.abs() <= self.half_extent
    }
}
