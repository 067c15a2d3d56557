//! GPU-ready per-instance data

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// One mesh instance: model matrix and linear RGBA colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceData {
    pub fn new(model: Mat4, color: u32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: rgba(color),
        }
    }
}

/// `0xRRGGBB` to normalized RGBA
pub fn rgba(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0), 1.0]
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: u32 = 0x111111;
    pub const GROUND: u32 = 0x333333;
    pub const OBSTACLE: u32 = 0x666666;
    pub const HOSTILE: u32 = 0xff0000;
    pub const PROJECTILE: u32 = 0xffff00;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba() {
        assert_eq!(rgba(0xff0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgba(0x00ff00), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(rgba(colors::PROJECTILE), [1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_instance_bytes() {
        let instance = InstanceData::new(Mat4::IDENTITY, colors::HOSTILE);
        let bytes: &[u8] = bytemuck::bytes_of(&instance);
        assert_eq!(bytes.len(), 20 * std::mem::size_of::<f32>());
        assert_eq!(instance.model[3][3], 1.0);
    }
}
