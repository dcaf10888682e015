/*!
# view_forge

Per-render view configuration for a scene renderer.

A long-lived `SceneCamera` describes how a scene is viewed. A `ViewSetup`
carries optional per-render overrides (reflection probes, portals,
split-screen sub-views). `ViewConfigurationMerger` flattens the two, plus
the camera's primary world defaults, into everything a native camera
renderer needs: a named attribute set, tag tokens, an ordered world list
and a fixed-layout `ViewParams` block.

## Architecture

- **SceneCamera**: camera state owned by the scene
- **ViewSetup**: optional overrides for one render
- **ViewConfigurationMerger**: camera + override → `ResolvedView`, then native setters
- **CameraRenderer**: scoped owner of one native handle
- **ViewBackend / NativeCameraRenderer**: backend seam (GPU, headless, ...)
- **SceneConfig**: TOML scene presets (worlds + cameras)

Backend implementations provide concrete types behind the native traits;
`native::RecordingBackend` is a headless one that records every call.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod color;
pub mod attributes;
pub mod tokens;
pub mod tags;
pub mod fog;
pub mod tonemap;
pub mod world;
pub mod camera;
pub mod native;
pub mod view;
pub mod config;

// Main namespace module
pub mod forge {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // View sub-module with the merge entry points
    pub mod view {
        pub use crate::view::*;
        pub use crate::camera::{SceneCamera, ClearFlags, ScreenRect, Transform};
    }

    // Scene-side state
    pub mod scene {
        pub use crate::world::*;
        pub use crate::config::*;
    }
}

// Re-export math library at crate root
pub use glam;
