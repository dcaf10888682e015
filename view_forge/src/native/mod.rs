//! Native renderer seam.
//!
//! `ViewBackend` creates camera renderer handles by name and camera id;
//! `NativeCameraRenderer` is the setter surface the view merger drives.
//! Backend implementations (GPU, headless, ...) provide concrete types.

mod native_camera_renderer;
mod recording_backend;

pub use native_camera_renderer::{NativeCameraRenderer, ViewBackend};
pub use recording_backend::{
    RecordingBackend, RecordingCameraRenderer, RecordingState, NativeCall, ViewSnapshot,
};
