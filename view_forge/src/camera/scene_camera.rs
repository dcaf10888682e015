/// SceneCamera - long-lived camera state, owned by the scene.
///
/// Holds every setting a render needs. Worlds are referenced by key; the
/// additional world list may contain `None` entries (detached slots), which
/// are skipped when the view is configured.

use bitflags::bitflags;
use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use crate::attributes::RenderAttributes;
use crate::color::Color;
use crate::fog::{CubemapFogSetup, VolumetricFogSetup};
use crate::tags::TagSet;
use crate::tonemap::TonemapSetup;
use crate::world::WorldKey;
use super::screen_rect::ScreenRect;

bitflags! {
    /// Which buffers get cleared before the view renders
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ClearFlags: u32 {
        const COLOR   = 1 << 0;
        const DEPTH   = 1 << 1;
        const STENCIL = 1 << 2;
        const ALL = Self::COLOR.bits() | Self::DEPTH.bits() | Self::STENCIL.bits();
    }
}

impl Default for ClearFlags {
    fn default() -> Self {
        ClearFlags::ALL
    }
}

#[derive(Debug, Clone)]
pub struct SceneCamera {
    pub name: String,

    pub position: Vec3,
    pub rotation: Quat,
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    pub z_near: f32,
    pub z_far: f32,

    pub background_color: Color,
    /// Added to the primary world's ambient; alpha is the IBL blend factor
    pub ambient_light_color: Color,
    pub clear_flags: ClearFlags,

    pub render_tags: TagSet,
    pub exclude_tags: TagSet,

    pub ortho: bool,
    /// World-space height of the orthographic view
    pub ortho_height: f32,
    pub custom_projection_matrix: Option<Mat4>,

    pub enable_post_processing: bool,
    pub enable_engine_overlays: bool,

    /// Normalized rectangle of the render target
    pub rect: ScreenRect,
    /// Output size in pixels
    pub size: Vec2,

    pub tonemap: TonemapSetup,
    pub volumetric_fog: VolumetricFogSetup,
    pub cubemap_fog: Option<CubemapFogSetup>,

    /// Camera-supplied attributes, merged in before anything else
    pub attributes: RenderAttributes,

    /// Primary world
    pub world: Option<WorldKey>,
    /// Additional worlds rendered after the primary one
    pub worlds: Vec<Option<WorldKey>>,
}

impl SceneCamera {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            field_of_view: 60.0,
            z_near: 1.0,
            z_far: 10_000.0,
            background_color: Color::BLACK,
            ambient_light_color: Color::TRANSPARENT,
            clear_flags: ClearFlags::ALL,
            render_tags: TagSet::new(),
            exclude_tags: TagSet::new(),
            ortho: false,
            ortho_height: 1024.0,
            custom_projection_matrix: None,
            enable_post_processing: true,
            enable_engine_overlays: false,
            rect: ScreenRect::FULL,
            size: Vec2::new(1920.0, 1080.0),
            tonemap: TonemapSetup::default(),
            volumetric_fog: VolumetricFogSetup::default(),
            cubemap_fog: None,
            attributes: RenderAttributes::new(),
            world: None,
            worlds: Vec::new(),
        }
    }

    /// Builder-style primary world assignment
    pub fn with_world(mut self, world: WorldKey) -> Self {
        self.world = Some(world);
        self
    }

    /// Attach an additional world slot (`None` keeps an empty slot)
    pub fn add_world(&mut self, world: Option<WorldKey>) {
        self.worlds.push(world);
    }

    /// Width / height of the pixel size, 1.0 when height is degenerate
    pub fn aspect_ratio(&self) -> f32 {
        if self.size.y > 0.0 {
            self.size.x / self.size.y
        } else {
            1.0
        }
    }

    pub fn gather_volumetric_fog(&self, attributes: &mut RenderAttributes) {
        self.volumetric_fog.apply(attributes);
    }

    pub fn gather_tonemapper(&self, attributes: &mut RenderAttributes) {
        self.tonemap.apply(attributes);
    }

    pub fn gather_cubemap_fog(&self, attributes: &mut RenderAttributes) {
        if let Some(fog) = &self.cubemap_fog {
            fog.write(attributes);
        }
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        SceneCamera::new("camera")
    }
}

#[cfg(test)]
#[path = "scene_camera_tests.rs"]
mod tests;
