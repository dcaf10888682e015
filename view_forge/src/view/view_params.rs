/// ViewParams - fixed-layout parameter block uploaded to the native handle.
///
/// `#[repr(C)]` and `Pod`: backends may copy it byte-for-byte
/// (`bytemuck::bytes_of`). Layout is 176 bytes with no implicit padding.

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3, Vec4};

/// Clip-space bounds covering the whole frustum
pub const DEFAULT_CLIP_SPACE_BOUNDS: Vec4 = Vec4::new(-1.0, -1.0, 1.0, 1.0);

bitflags! {
    /// Boolean view switches packed into `ViewParams::flags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewFlags: u32 {
        const ORTHO                   = 1 << 0;
        const HAS_OVERRIDE_PROJECTION = 1 << 1;
        const POST_PROCESSING         = 1 << 2;
        const ENGINE_OVERLAYS         = 1 << 3;
        const FLIP_X                  = 1 << 4;
        const FLIP_Y                  = 1 << 5;
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ViewParams {
    /// xyz = position, w = 1
    pub camera_position: [f32; 4],
    /// Quaternion (x, y, z, w)
    pub camera_rotation: [f32; 4],
    /// Column-major; identity when no override projection is set
    pub override_projection: [[f32; 4]; 4],
    /// Normalized (left, top, width, height)
    pub viewport: [f32; 4],
    /// Pixel rect (0, 0, width, height)
    pub rect: [f32; 4],
    /// (min x, min y, max x, max y) in clip space
    pub clip_space_bounds: [f32; 4],
    pub z_near: f32,
    pub z_far: f32,
    /// Degrees
    pub field_of_view: f32,
    /// World units per pixel when orthographic, 0 otherwise
    pub ortho_size: f32,
    pub view_unique_id: u64,
    pub flags: u32,
    pub _padding: u32,
}

impl ViewParams {
    pub fn position(&self) -> Vec3 {
        Vec4::from_array(self.camera_position).truncate()
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_array(self.camera_rotation)
    }

    pub fn viewport(&self) -> Vec4 {
        Vec4::from_array(self.viewport)
    }

    pub fn rect(&self) -> Vec4 {
        Vec4::from_array(self.rect)
    }

    pub fn clip_space_bounds(&self) -> Vec4 {
        Vec4::from_array(self.clip_space_bounds)
    }

    /// Override projection, if the flag says one is set
    pub fn override_projection(&self) -> Option<Mat4> {
        self.view_flags()
            .contains(ViewFlags::HAS_OVERRIDE_PROJECTION)
            .then(|| Mat4::from_cols_array_2d(&self.override_projection))
    }

    pub fn view_flags(&self) -> ViewFlags {
        ViewFlags::from_bits_truncate(self.flags)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
