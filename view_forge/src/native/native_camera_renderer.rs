/// Native camera renderer traits

use crate::attributes::RenderAttributes;
use crate::error::Result;
use crate::tokens::StringToken;
use crate::view::ViewParams;
use crate::world::WorldKey;

/// Opaque native view handle.
///
/// Configured through setters, rendered, then destroyed exactly once.
/// Callers never hold one directly: `crate::view::CameraRenderer` wraps it
/// and calls `destroy` on drop.
pub trait NativeCameraRenderer: Send {
    /// Forget every world registered by a previous configuration
    fn clear_scene_worlds(&mut self);

    /// Register a world to draw, in order
    fn add_scene_world(&mut self, world: WorldKey);

    /// Replace the attribute block
    fn set_render_attributes(&mut self, attributes: &RenderAttributes);

    fn clear_render_tags(&mut self);

    fn add_render_tag(&mut self, token: StringToken);

    fn clear_exclude_tags(&mut self);

    fn add_exclude_tag(&mut self, token: StringToken);

    /// Upload the fixed-layout parameter block
    fn set_view_params(&mut self, params: &ViewParams);

    /// Render with the current configuration
    fn render(&mut self) -> Result<()>;

    /// Release native resources. Called exactly once.
    fn destroy(&mut self);
}

/// Backend factory for native camera renderers
pub trait ViewBackend: Send + Sync {
    /// Create a camera renderer handle
    ///
    /// # Arguments
    ///
    /// * `name` - Debug name of the view
    /// * `camera_id` - Caller-supplied camera identifier
    fn create_camera_renderer(
        &mut self,
        name: &str,
        camera_id: u32,
    ) -> Result<Box<dyn NativeCameraRenderer>>;
}
