/// ViewConfigurationMerger - camera + override → native-ready view.
///
/// Precedence, field by field: override if present, else camera. World
/// defaults (ambient, gradient fog) come in between and an override fog
/// replaces the world fog outright. `resolve` is pure apart from the
/// primary world's spatial refresh and token creation; `apply` pushes the
/// result into a native handle.

use std::hash::{Hash, Hasher};
use glam::{Mat4, Vec4};
use rustc_hash::FxHasher;
use crate::attributes::RenderAttributes;
use crate::camera::SceneCamera;
use crate::color::Color;
use crate::native::NativeCameraRenderer;
use crate::tags::TagSet;
use crate::tokens::{StringToken, TokenRegistry};
use crate::world::{WorldKey, WorldRegistry};
use crate::{engine_trace, engine_warn};
use super::coalesce::coalesce;
use super::view_params::{ViewFlags, ViewParams, DEFAULT_CLIP_SPACE_BOUNDS};
use super::view_setup::ViewSetup;

pub const ATTR_AMBIENT_COLOR: &str = "ambientColor";
pub const ATTR_CLEAR_COLOR: &str = "clearColor";
pub const ATTR_CLEAR_FLAGS: &str = "clearFlags";

const SOURCE: &str = "view_forge::ViewConfigurationMerger";

/// Scene-side collaborators a configuration pass needs
pub struct ViewContext<'a> {
    pub worlds: &'a mut WorldRegistry,
    pub tokens: &'a mut dyn TokenRegistry,
    /// True while the caller is already inside an immediate-mode graphics
    /// pass; the primary world's spatial refresh is skipped then, since the
    /// renderer may be iterating that world.
    pub graphics_active: bool,
}

impl<'a> ViewContext<'a> {
    pub fn new(worlds: &'a mut WorldRegistry, tokens: &'a mut dyn TokenRegistry) -> Self {
        Self { worlds, tokens, graphics_active: false }
    }

    pub fn with_graphics_active(mut self, active: bool) -> Self {
        self.graphics_active = active;
        self
    }
}

/// Everything a native handle receives for one view
#[derive(Debug, Clone)]
pub struct ResolvedView {
    pub attributes: RenderAttributes,
    pub render_tags: Vec<StringToken>,
    pub exclude_tags: Vec<StringToken>,
    /// Primary world first, no duplicates
    pub worlds: Vec<WorldKey>,
    pub params: ViewParams,
}

/// Stateless merge of SceneCamera + ViewSetup
pub struct ViewConfigurationMerger;

impl ViewConfigurationMerger {
    /// Resolve a complete view description.
    ///
    /// Never fails: missing worlds, empty tag lists and absent overrides are
    /// all normal. Stale world keys are skipped.
    pub fn resolve(
        camera_id: u32,
        camera: &SceneCamera,
        setup: &ViewSetup,
        ctx: &mut ViewContext<'_>,
    ) -> ResolvedView {
        let mut attributes = RenderAttributes::new();
        camera.attributes.merge_to(&mut attributes);

        let primary = Self::live_primary_world(camera, &*ctx.worlds);

        if let Some(key) = primary {
            if ctx.graphics_active {
                engine_trace!(SOURCE, "'{}': graphics active, skipping spatial refresh", camera.name);
            } else if let Some(world) = ctx.worlds.get_mut(key) {
                world.update_objects_for_rendering(camera.position, camera.z_far);
            }
        }

        // ----- Ambient + fog -----
        let ambient = Self::resolve_ambient(camera, setup, primary, &*ctx.worlds, &mut attributes);
        attributes.set(ATTR_AMBIENT_COLOR, ambient);
        attributes.set(ATTR_CLEAR_COLOR, coalesce(setup.clear_color, camera.background_color));

        camera.gather_volumetric_fog(&mut attributes);
        camera.gather_tonemapper(&mut attributes);
        camera.gather_cubemap_fog(&mut attributes);

        attributes.set(ATTR_CLEAR_FLAGS, camera.clear_flags.bits() as i32);

        // ----- Tags -----
        let render_tags = Self::tokenize(
            coalesce(setup.render_tags.as_ref(), &camera.render_tags),
            &mut *ctx.tokens,
        );
        let exclude_tags = Self::tokenize(
            coalesce(setup.exclude_tags.as_ref(), &camera.exclude_tags),
            &mut *ctx.tokens,
        );

        let params = Self::resolve_params(camera_id, camera, setup);
        let worlds = Self::collect_worlds(camera, primary, &*ctx.worlds);

        engine_trace!(SOURCE,
            "'{}': {} attributes, {} render tags, {} exclude tags, {} worlds",
            camera.name, attributes.len(), render_tags.len(), exclude_tags.len(), worlds.len());

        ResolvedView {
            attributes,
            render_tags,
            exclude_tags,
            worlds,
            params,
        }
    }

    /// Push a resolved view into a native handle.
    ///
    /// Previously registered worlds and tags are cleared first, so repeated
    /// configuration of the same handle never accumulates.
    pub fn apply(resolved: &ResolvedView, native: &mut dyn NativeCameraRenderer) {
        native.clear_scene_worlds();
        native.set_render_attributes(&resolved.attributes);

        native.clear_render_tags();
        native.clear_exclude_tags();
        for token in &resolved.render_tags {
            native.add_render_tag(*token);
        }
        for token in &resolved.exclude_tags {
            native.add_exclude_tag(*token);
        }

        native.set_view_params(&resolved.params);

        for world in &resolved.worlds {
            native.add_scene_world(*world);
        }
    }

    /// Stable per-view identity from the camera id and the setup's view hash
    pub fn view_unique_id(camera_id: u32, view_hash: u32) -> u64 {
        let mut hasher = FxHasher::default();
        camera_id.hash(&mut hasher);
        view_hash.hash(&mut hasher);
        hasher.finish()
    }

    /// World units per pixel for an orthographic camera.
    ///
    /// Returns 0 for a degenerate pixel height.
    pub fn ortho_size(ortho_height: f32, pixel_height: f32) -> f32 {
        if pixel_height > 0.0 {
            ortho_height / pixel_height
        } else {
            0.0
        }
    }

    // ===== INTERNAL =====

    fn live_primary_world(camera: &SceneCamera, worlds: &WorldRegistry) -> Option<WorldKey> {
        let key = camera.world?;
        if worlds.contains(key) {
            Some(key)
        } else {
            engine_warn!(SOURCE, "'{}': primary world {:?} no longer exists", camera.name, key);
            None
        }
    }

    /// camera ambient (+ world ambient) (× tint) (+ add), alpha clamped to [0, 1].
    /// Also applies world fog then override fog, in that order.
    fn resolve_ambient(
        camera: &SceneCamera,
        setup: &ViewSetup,
        primary: Option<WorldKey>,
        worlds: &WorldRegistry,
        attributes: &mut RenderAttributes,
    ) -> Color {
        let mut ambient = camera.ambient_light_color;

        if let Some(world) = primary.and_then(|key| worlds.get(key)) {
            world.gradient_fog().apply(attributes);
            ambient += world.ambient_light_color();
        }

        if let Some(tint) = setup.ambient_light_tint {
            ambient *= tint;
        }

        if let Some(add) = setup.ambient_light_add {
            ambient += add;
        }

        if let Some(fog) = &setup.gradient_fog {
            fog.apply(attributes);
        }

        // Alpha is the IBL blend factor; the additions above can push it past 1
        ambient.with_alpha_clamped()
    }

    fn tokenize(tags: &TagSet, registry: &mut dyn TokenRegistry) -> Vec<StringToken> {
        tags.iter().map(|tag| registry.find_or_create(tag)).collect()
    }

    fn resolve_params(camera_id: u32, camera: &SceneCamera, setup: &ViewSetup) -> ViewParams {
        let position = coalesce(setup.transform.map(|t| t.position), camera.position);
        let rotation = coalesce(setup.transform.map(|t| t.rotation), camera.rotation);
        let projection = coalesce(setup.projection_matrix.map(Some), camera.custom_projection_matrix);

        let mut flags = ViewFlags::empty();
        flags.set(ViewFlags::ORTHO, camera.ortho);
        flags.set(ViewFlags::HAS_OVERRIDE_PROJECTION, projection.is_some());
        flags.set(
            ViewFlags::POST_PROCESSING,
            coalesce(setup.enable_post_processing, camera.enable_post_processing),
        );
        flags.set(ViewFlags::ENGINE_OVERLAYS, camera.enable_engine_overlays);
        flags.set(ViewFlags::FLIP_X, coalesce(setup.flip_x, false));
        flags.set(ViewFlags::FLIP_Y, coalesce(setup.flip_y, false));

        let ortho_size = if camera.ortho {
            if camera.size.y <= 0.0 {
                engine_warn!(SOURCE, "'{}': orthographic camera with pixel height {}", camera.name, camera.size.y);
            }
            Self::ortho_size(camera.ortho_height, camera.size.y)
        } else {
            0.0
        };

        ViewParams {
            camera_position: position.extend(1.0).to_array(),
            camera_rotation: rotation.to_array(),
            override_projection: projection.unwrap_or(Mat4::IDENTITY).to_cols_array_2d(),
            viewport: camera.rect.clamped_viewport().to_array(),
            rect: Vec4::new(0.0, 0.0, camera.size.x, camera.size.y).to_array(),
            clip_space_bounds: coalesce(setup.clip_space_bounds, DEFAULT_CLIP_SPACE_BOUNDS).to_array(),
            z_near: coalesce(setup.z_near, camera.z_near),
            z_far: coalesce(setup.z_far, camera.z_far),
            field_of_view: coalesce(setup.field_of_view, camera.field_of_view),
            ortho_size,
            view_unique_id: Self::view_unique_id(camera_id, setup.view_hash),
            flags: flags.bits(),
            _padding: 0,
        }
    }

    /// Primary world first, then additional worlds minus empty slots, stale
    /// keys, the primary world and repeats.
    fn collect_worlds(
        camera: &SceneCamera,
        primary: Option<WorldKey>,
        worlds: &WorldRegistry,
    ) -> Vec<WorldKey> {
        let mut out: Vec<WorldKey> = Vec::with_capacity(1 + camera.worlds.len());
        out.extend(primary);

        for key in camera.worlds.iter().flatten() {
            if Some(*key) == camera.world || out.contains(key) {
                continue;
            }
            if !worlds.contains(*key) {
                engine_trace!(SOURCE, "'{}': skipping stale world {:?}", camera.name, key);
                continue;
            }
            out.push(*key);
        }
        out
    }
}

#[cfg(test)]
#[path = "view_configuration_merger_tests.rs"]
mod tests;
