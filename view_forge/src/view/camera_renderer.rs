/// CameraRenderer - scoped owner of one native camera renderer handle.
///
/// Created by name and camera id through a ViewBackend. The native handle is
/// destroyed when the CameraRenderer is dropped, on every exit path.

use crate::camera::SceneCamera;
use crate::error::Result;
use crate::engine_debug;
use crate::native::{NativeCameraRenderer, ViewBackend};
use super::view_configuration_merger::{ResolvedView, ViewConfigurationMerger, ViewContext};
use super::view_setup::ViewSetup;

pub struct CameraRenderer {
    name: String,
    camera_id: u32,
    native: Box<dyn NativeCameraRenderer>,
}

impl CameraRenderer {
    /// Create the native handle
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the handle cannot be created.
    pub fn new(backend: &mut dyn ViewBackend, name: &str, camera_id: u32) -> Result<Self> {
        let native = backend.create_camera_renderer(name, camera_id)?;
        engine_debug!("view_forge::CameraRenderer", "created '{}' (camera {})", name, camera_id);
        Ok(Self {
            name: name.to_string(),
            camera_id,
            native,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn camera_id(&self) -> u32 {
        self.camera_id
    }

    /// Resolve `camera` + `setup` and push the result into the native handle.
    ///
    /// Returns the resolved view for inspection.
    pub fn configure(
        &mut self,
        camera: &SceneCamera,
        setup: &ViewSetup,
        ctx: &mut ViewContext<'_>,
    ) -> ResolvedView {
        let resolved = ViewConfigurationMerger::resolve(self.camera_id, camera, setup, ctx);
        ViewConfigurationMerger::apply(&resolved, self.native.as_mut());
        resolved
    }

    pub fn render(&mut self) -> Result<()> {
        self.native.render()
    }
}

impl Drop for CameraRenderer {
    fn drop(&mut self) {
        self.native.destroy();
        engine_debug!("view_forge::CameraRenderer", "destroyed '{}' (camera {})", self.name, self.camera_id);
    }
}

/// Create a handle, configure it, render once, release it.
///
/// The handle is released even when rendering fails.
pub fn render_camera(
    backend: &mut dyn ViewBackend,
    name: &str,
    camera_id: u32,
    camera: &SceneCamera,
    setup: &ViewSetup,
    ctx: &mut ViewContext<'_>,
) -> Result<ResolvedView> {
    let mut renderer = CameraRenderer::new(backend, name, camera_id)?;
    let resolved = renderer.configure(camera, setup, ctx);
    renderer.render()?;
    Ok(resolved)
}

#[cfg(test)]
#[path = "camera_renderer_tests.rs"]
mod tests;
