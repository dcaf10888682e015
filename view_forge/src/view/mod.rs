//! View module - per-render overrides and the camera/override merge.
//!
//! `ViewConfigurationMerger` flattens a `SceneCamera` plus a `ViewSetup`
//! into a `ResolvedView` (attribute set, tag tokens, world list and the
//! fixed-layout `ViewParams` block), then pushes it into a native handle.
//! `CameraRenderer` owns that handle for one render and releases it on drop.

mod coalesce;
mod view_setup;
mod view_params;
mod view_configuration_merger;
mod camera_renderer;

pub use coalesce::coalesce;
pub use view_setup::ViewSetup;
pub use view_params::{ViewParams, ViewFlags, DEFAULT_CLIP_SPACE_BOUNDS};
pub use view_configuration_merger::{
    ViewConfigurationMerger, ViewContext, ResolvedView,
    ATTR_AMBIENT_COLOR, ATTR_CLEAR_COLOR, ATTR_CLEAR_FLAGS,
};
pub use camera_renderer::{CameraRenderer, render_camera};
