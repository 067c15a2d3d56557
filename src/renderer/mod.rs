//! Render hand-off
//!
//! The simulation never draws. Once per tick it describes what is visible as
//! a flat list of mesh instances plus a camera; the rendering backend turns
//! that into draw calls.

pub mod instance;
pub mod scene;

pub use instance::{InstanceData, colors};
pub use scene::{Camera, MeshKind, Scene, SceneItem, Viewport, build_scene};
