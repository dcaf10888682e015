/// TOML scene presets: worlds and cameras.
///
/// Every struct uses `#[serde(default)]` so partial files work: a camera
/// entry naming only `name` and `world` gets `SceneCamera` defaults for the
/// rest.

use std::path::Path;
use glam::{Quat, Vec2, Vec3};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use crate::camera::{ClearFlags, SceneCamera, ScreenRect};
use crate::color::Color;
use crate::error::{Error, Result};
use crate::fog::{CubemapFogSetup, GradientFogSetup, VolumetricFogSetup};
use crate::tags::TagSet;
use crate::tonemap::TonemapSetup;
use crate::world::{SceneWorld, WorldKey, WorldRegistry, AABB};
use crate::{engine_error, engine_info};

const SOURCE: &str = "view_forge::SceneConfig";

/// Top-level preset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub worlds: Vec<WorldConfig>,
    pub cameras: Vec<CameraConfig>,
}

/// One render world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub name: String,
    pub ambient_light_color: Color,
    pub gradient_fog: GradientFogSetup,
    pub objects: Vec<ObjectConfig>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            ambient_light_color: Color::TRANSPARENT,
            gradient_fog: GradientFogSetup::default(),
            objects: Vec::new(),
        }
    }
}

/// Object bounds placed in a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    pub name: String,
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }
    }
}

/// One camera. Worlds are referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub name: String,
    /// Camera id handed to the backend
    pub id: u32,

    pub position: Vec3,
    pub rotation: Quat,
    pub field_of_view: f32,
    pub z_near: f32,
    pub z_far: f32,

    pub background_color: Color,
    pub ambient_light_color: Color,
    pub clear_flags: ClearFlags,

    pub render_tags: TagSet,
    pub exclude_tags: TagSet,

    pub ortho: bool,
    pub ortho_height: f32,
    pub enable_post_processing: bool,
    pub enable_engine_overlays: bool,

    pub rect: ScreenRect,
    pub size: Vec2,

    pub tonemap: TonemapSetup,
    pub volumetric_fog: VolumetricFogSetup,
    pub cubemap_fog: Option<CubemapFogSetup>,

    /// Primary world name
    pub world: Option<String>,
    /// Additional world names, drawn after the primary world
    pub worlds: Vec<String>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = SceneCamera::default();
        Self {
            name: camera.name,
            id: 0,
            position: camera.position,
            rotation: camera.rotation,
            field_of_view: camera.field_of_view,
            z_near: camera.z_near,
            z_far: camera.z_far,
            background_color: camera.background_color,
            ambient_light_color: camera.ambient_light_color,
            clear_flags: camera.clear_flags,
            render_tags: camera.render_tags,
            exclude_tags: camera.exclude_tags,
            ortho: camera.ortho,
            ortho_height: camera.ortho_height,
            enable_post_processing: camera.enable_post_processing,
            enable_engine_overlays: camera.enable_engine_overlays,
            rect: camera.rect,
            size: camera.size,
            tonemap: camera.tonemap,
            volumetric_fog: camera.volumetric_fog,
            cubemap_fog: camera.cubemap_fog,
            world: None,
            worlds: Vec::new(),
        }
    }
}

impl CameraConfig {
    /// Capture a live camera. World keys are mapped back to names; keys
    /// missing from `worlds` are dropped.
    pub fn from_camera(id: u32, camera: &SceneCamera, worlds: &WorldRegistry) -> Self {
        let world_name = |key: WorldKey| worlds.get(key).map(|w| w.name().to_string());

        Self {
            name: camera.name.clone(),
            id,
            position: camera.position,
            rotation: camera.rotation,
            field_of_view: camera.field_of_view,
            z_near: camera.z_near,
            z_far: camera.z_far,
            background_color: camera.background_color,
            ambient_light_color: camera.ambient_light_color,
            clear_flags: camera.clear_flags,
            render_tags: camera.render_tags.clone(),
            exclude_tags: camera.exclude_tags.clone(),
            ortho: camera.ortho,
            ortho_height: camera.ortho_height,
            enable_post_processing: camera.enable_post_processing,
            enable_engine_overlays: camera.enable_engine_overlays,
            rect: camera.rect,
            size: camera.size,
            tonemap: camera.tonemap,
            volumetric_fog: camera.volumetric_fog,
            cubemap_fog: camera.cubemap_fog,
            world: camera.world.and_then(world_name),
            worlds: camera.worlds.iter().flatten().filter_map(|k| world_name(*k)).collect(),
        }
    }

    fn to_camera(&self, keys: &FxHashMap<&str, WorldKey>) -> SceneCamera {
        let mut camera = SceneCamera::new(&self.name);
        camera.position = self.position;
        camera.rotation = self.rotation;
        camera.field_of_view = self.field_of_view;
        camera.z_near = self.z_near;
        camera.z_far = self.z_far;
        camera.background_color = self.background_color;
        camera.ambient_light_color = self.ambient_light_color;
        camera.clear_flags = self.clear_flags;
        camera.render_tags = self.render_tags.clone();
        camera.exclude_tags = self.exclude_tags.clone();
        camera.ortho = self.ortho;
        camera.ortho_height = self.ortho_height;
        camera.enable_post_processing = self.enable_post_processing;
        camera.enable_engine_overlays = self.enable_engine_overlays;
        camera.rect = self.rect;
        camera.size = self.size;
        camera.tonemap = self.tonemap;
        camera.volumetric_fog = self.volumetric_fog;
        camera.cubemap_fog = self.cubemap_fog;
        camera.world = self.world.as_deref().and_then(|name| keys.get(name).copied());
        camera.worlds = self.worlds.iter().map(|name| keys.get(name.as_str()).copied()).collect();
        camera
    }
}

impl SceneConfig {
    /// Load a preset from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| log_and_return_error(Error::Io(format!("{}: {}", path.display(), e))))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| log_and_return_error(Error::ConfigError(e.to_string())))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| log_and_return_error(Error::ConfigError(e.to_string())))
    }

    /// Save the preset to a TOML file (pretty-printed)
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        let io_error = |e: std::io::Error| log_and_return_error(Error::Io(format!("{}: {}", path.display(), e)));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(path, content).map_err(io_error)?;
        Ok(())
    }

    /// Create the worlds in `registry` and return `(id, camera)` pairs in
    /// file order.
    ///
    /// Everything is validated before the registry is touched.
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` for duplicate world names, duplicate camera
    /// ids, or a camera naming a world the preset does not define.
    pub fn build(&self, registry: &mut WorldRegistry) -> Result<Vec<(u32, SceneCamera)>> {
        self.validate().map_err(log_and_return_error)?;

        let mut keys: FxHashMap<&str, WorldKey> = FxHashMap::default();
        for world_config in &self.worlds {
            let mut world = SceneWorld::new(&world_config.name);
            world.set_ambient_light_color(world_config.ambient_light_color);
            world.set_gradient_fog(world_config.gradient_fog);
            for object in &world_config.objects {
                world.add_object(&object.name, AABB::new(object.min, object.max));
            }
            keys.insert(world_config.name.as_str(), registry.insert(world));
        }

        let cameras: Vec<(u32, SceneCamera)> = self.cameras
            .iter()
            .map(|c| (c.id, c.to_camera(&keys)))
            .collect();

        engine_info!(SOURCE, "built {} worlds, {} cameras", keys.len(), cameras.len());
        Ok(cameras)
    }

    fn validate(&self) -> Result<()> {
        let mut world_names = FxHashSet::default();
        for world in &self.worlds {
            if !world_names.insert(world.name.as_str()) {
                return Err(Error::InvalidResource(format!("duplicate world '{}'", world.name)));
            }
        }

        let mut camera_ids = FxHashSet::default();
        for camera in &self.cameras {
            if !camera_ids.insert(camera.id) {
                return Err(Error::InvalidResource(format!(
                    "camera '{}': duplicate id {}", camera.name, camera.id
                )));
            }
            for name in camera.world.iter().chain(camera.worlds.iter()) {
                if !world_names.contains(name.as_str()) {
                    return Err(Error::InvalidResource(format!(
                        "camera '{}': unknown world '{}'", camera.name, name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Log a config error at ERROR level and hand it back
fn log_and_return_error(error: Error) -> Error {
    match &error {
        Error::ConfigError(msg) => engine_error!(SOURCE, "Invalid preset: {}", msg),
        Error::Io(msg) => engine_error!(SOURCE, "Preset I/O failed: {}", msg),
        _ => engine_error!(SOURCE, "Preset rejected: {}", error),
    }
    error
}

#[cfg(test)]
#[path = "scene_config_tests.rs"]
mod tests;
