/// SceneWorld - ambient/fog defaults plus the objects a camera may draw.
///
/// Uses a SlotMap for O(1) insert/remove with stable object keys.
/// `update_objects_for_rendering` rebuilds the render list: every object
/// whose bounds come within `z_far` of the camera position.

use glam::Vec3;
use slotmap::{new_key_type, SlotMap};
use crate::color::Color;
use crate::fog::GradientFogSetup;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for an object within a SceneWorld.
    pub struct WorldObjectKey;
}

// ===== AABB =====

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min: min.min(max), max: min.max(max) }
    }

    /// Cube of half-size `half_extent` centered on `center`
    pub fn from_center(center: Vec3, half_extent: f32) -> Self {
        let h = Vec3::splat(half_extent.abs());
        Self { min: center - h, max: center + h }
    }

    /// Closest point of the box to `point` (the point itself if inside)
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Squared distance from `point` to the box surface, 0 inside.
    pub fn distance_squared(&self, point: Vec3) -> f32 {
        self.closest_point(point).distance_squared(point)
    }
}

/// An object placed in a world. Only its bounds matter here.
#[derive(Debug, Clone)]
pub struct WorldObject {
    pub name: String,
    pub bounds: AABB,
}

/// A render world: ambient light, gradient fog defaults, and objects.
#[derive(Debug)]
pub struct SceneWorld {
    name: String,
    ambient_light_color: Color,
    gradient_fog: GradientFogSetup,
    objects: SlotMap<WorldObjectKey, WorldObject>,
    /// Objects selected by the last refresh
    render_list: Vec<WorldObjectKey>,
    /// Number of refreshes performed
    refresh_count: u64,
}

impl SceneWorld {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ambient_light_color: Color::TRANSPARENT,
            gradient_fog: GradientFogSetup::default(),
            objects: SlotMap::with_key(),
            render_list: Vec::new(),
            refresh_count: 0,
        }
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ambient light added on top of each camera's own ambient color.
    /// Alpha is the image-based lighting blend factor.
    pub fn ambient_light_color(&self) -> Color {
        self.ambient_light_color
    }

    pub fn gradient_fog(&self) -> &GradientFogSetup {
        &self.gradient_fog
    }

    pub fn object(&self, key: WorldObjectKey) -> Option<&WorldObject> {
        self.objects.get(key)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Objects selected by the last `update_objects_for_rendering`
    pub fn render_list(&self) -> &[WorldObjectKey] {
        &self.render_list
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    // ===== SETTERS =====

    pub fn set_ambient_light_color(&mut self, color: Color) {
        self.ambient_light_color = color;
    }

    pub fn set_gradient_fog(&mut self, fog: GradientFogSetup) {
        self.gradient_fog = fog;
    }

    pub fn add_object(&mut self, name: &str, bounds: AABB) -> WorldObjectKey {
        self.objects.insert(WorldObject { name: name.to_string(), bounds })
    }

    /// Remove an object. Also drops it from the current render list.
    pub fn remove_object(&mut self, key: WorldObjectKey) -> Option<WorldObject> {
        let removed = self.objects.remove(key)?;
        self.render_list.retain(|k| *k != key);
        Some(removed)
    }

    // ===== SPATIAL REFRESH =====

    /// Rebuild the render list for a camera at `position` seeing up to `z_far`.
    ///
    /// A non-positive or non-finite `z_far` selects nothing.
    pub fn update_objects_for_rendering(&mut self, position: Vec3, z_far: f32) {
        self.refresh_count += 1;
        self.render_list.clear();

        if !(z_far.is_finite() && z_far > 0.0) {
            return;
        }

        let max_sq = z_far * z_far;
        self.render_list.extend(
            self.objects
                .iter()
                .filter(|(_, obj)| obj.bounds.distance_squared(position) <= max_sq)
                .map(|(key, _)| key),
        );
    }
}

#[cfg(test)]
#[path = "scene_world_tests.rs"]
mod tests;
