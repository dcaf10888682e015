//! Camera module - long-lived camera state owned by the scene.
//!
//! `SceneCamera` is a passive description: it holds everything a render
//! needs but computes nothing. Per-render overrides live in
//! `crate::view::ViewSetup`; the merge happens in
//! `crate::view::ViewConfigurationMerger`.

mod scene_camera;
mod screen_rect;
mod transform;

pub use scene_camera::{SceneCamera, ClearFlags};
pub use screen_rect::ScreenRect;
pub use transform::Transform;
