/// ViewSetup - per-render overrides for a camera.
///
/// Built by the caller for a single render. Every field is optional: `None`
/// means "use the camera's value". The camera itself is never modified.

use glam::{Mat4, Vec4};
use crate::camera::Transform;
use crate::color::Color;
use crate::fog::GradientFogSetup;
use crate::tags::TagSet;

#[derive(Debug, Clone, Default)]
pub struct ViewSetup {
    /// Overrides position and rotation
    pub transform: Option<Transform>,
    pub field_of_view: Option<f32>,
    pub z_near: Option<f32>,
    pub z_far: Option<f32>,
    pub clear_color: Option<Color>,
    pub projection_matrix: Option<Mat4>,

    /// Replaces the primary world's gradient fog for this view
    pub gradient_fog: Option<GradientFogSetup>,
    /// Multiplies the accumulated ambient light
    pub ambient_light_tint: Option<Color>,
    /// Added to the ambient light after the tint
    pub ambient_light_add: Option<Color>,

    /// Replaces the camera's render tags wholesale
    pub render_tags: Option<TagSet>,
    /// Replaces the camera's exclude tags wholesale
    pub exclude_tags: Option<TagSet>,

    /// Sub-rectangle of clip space to render (poster / off-center rendering),
    /// as (min x, min y, max x, max y)
    pub clip_space_bounds: Option<Vec4>,
    pub flip_x: Option<bool>,
    pub flip_y: Option<bool>,
    pub enable_post_processing: Option<bool>,

    /// Lets the renderer recognise the same sub-view across frames.
    /// 0 for the camera's main view.
    pub view_hash: u32,
}

impl ViewSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_field_of_view(mut self, fov: f32) -> Self {
        self.field_of_view = Some(fov);
        self
    }

    pub fn with_gradient_fog(mut self, fog: GradientFogSetup) -> Self {
        self.gradient_fog = Some(fog);
        self
    }

    pub fn with_render_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.render_tags = Some(tags.into_iter().collect());
        self
    }

    pub fn with_exclude_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.exclude_tags = Some(tags.into_iter().collect());
        self
    }

    pub fn with_view_hash(mut self, view_hash: u32) -> Self {
        self.view_hash = view_hash;
        self
    }
}
