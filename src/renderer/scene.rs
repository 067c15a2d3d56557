//! Scene description built from the game state

use glam::{Mat4, Quat, Vec3};

use super::instance::{InstanceData, colors};
use crate::consts::*;
use crate::sim::{GameState, Spatial};

/// Which mesh an instance uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Unit plane in XZ
    Ground,
    /// Unit cube
    Obstacle,
    /// Unit cube
    Hostile,
    /// Unit sphere
    Projectile,
}

/// A positioned, coloured mesh instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneItem {
    pub mesh: MeshKind,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// `0xRRGGBB`
    pub color: u32,
}

impl SceneItem {
    fn of(entity: &impl Spatial, mesh: MeshKind, scale: Vec3, color: u32) -> Self {
        Self {
            mesh,
            position: entity.position(),
            rotation: entity.orientation().unwrap_or(Quat::IDENTITY),
            scale,
            color,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    pub fn instance(&self) -> InstanceData {
        InstanceData::new(self.model_matrix(), self.color)
    }
}

/// Perspective camera at the player's eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Quat,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, viewport.aspect(), self.near, self.far)
    }
}

/// Output surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Width over height; a zero-height surface reports 1.0
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub background: u32,
    /// Linear fog start and end distances
    pub fog: (f32, f32),
    pub items: Vec<SceneItem>,
}

impl Scene {
    pub fn instances(&self) -> Vec<InstanceData> {
        self.items.iter().map(SceneItem::instance).collect()
    }

    pub fn count(&self, mesh: MeshKind) -> usize {
        self.items.iter().filter(|item| item.mesh == mesh).count()
    }
}

/// Describe the current state for rendering
pub fn build_scene(state: &GameState) -> Scene {
    let arena = &state.arena;
    let mut items = Vec::with_capacity(
        1 + arena.obstacles.len() + state.hostiles.len() + state.projectiles.len(),
    );

    let floor = arena.half_extent * 2.0;
    items.push(SceneItem {
        mesh: MeshKind::Ground,
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::new(floor, 1.0, floor),
        color: colors::GROUND,
    });

    for obstacle in &arena.obstacles {
        items.push(SceneItem::of(
            obstacle,
            MeshKind::Obstacle,
            obstacle.size,
            colors::OBSTACLE,
        ));
    }
    for hostile in state.hostiles.iter() {
        items.push(SceneItem::of(
            hostile,
            MeshKind::Hostile,
            HOSTILE_SIZE,
            colors::HOSTILE,
        ));
    }
    for projectile in state.projectiles.iter() {
        items.push(SceneItem::of(
            projectile,
            MeshKind::Projectile,
            Vec3::splat(PROJECTILE_RADIUS * 2.0),
            colors::PROJECTILE,
        ));
    }

    let player = &state.player;
    Scene {
        camera: Camera {
            position: player.eye_position(),
            rotation: player.orientation().unwrap_or(Quat::IDENTITY),
            fov_y: CAMERA_FOV_Y,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        },
        background: colors::BACKGROUND,
        fog: FOG_RANGE,
        items,
    }
}
