/// Recording backend - headless ViewBackend that stores every call.
///
/// No GPU required. Each handle keeps a snapshot of its current
/// configuration; renders and the final configuration at destroy time are
/// pushed into a shared `RecordingState` that outlives the handles, so tests
/// and debug dumps can inspect what the merger produced.

use std::sync::{Arc, Mutex};
use crate::attributes::RenderAttributes;
use crate::error::Result;
use crate::engine_bail;
use crate::tokens::StringToken;
use crate::view::ViewParams;
use crate::world::WorldKey;
use super::native_camera_renderer::{NativeCameraRenderer, ViewBackend};

/// One setter invocation on a native handle
#[derive(Debug, Clone, PartialEq)]
pub enum NativeCall {
    ClearSceneWorlds,
    AddSceneWorld(WorldKey),
    SetRenderAttributes,
    ClearRenderTags,
    AddRenderTag(StringToken),
    ClearExcludeTags,
    AddExcludeTag(StringToken),
    SetViewParams,
    Render,
    Destroy,
}

/// Configuration held by a handle at some point in time
#[derive(Debug, Clone, Default)]
pub struct ViewSnapshot {
    pub name: String,
    pub camera_id: u32,
    pub worlds: Vec<WorldKey>,
    pub attributes: RenderAttributes,
    pub render_tags: Vec<StringToken>,
    pub exclude_tags: Vec<StringToken>,
    pub params: Option<ViewParams>,
}

/// State shared between a RecordingBackend and all of its handles
#[derive(Debug, Default)]
pub struct RecordingState {
    /// Handles created so far
    pub created: usize,
    /// Handles destroyed so far
    pub destroyed: usize,
    /// Snapshot taken at every successful render
    pub renders: Vec<ViewSnapshot>,
    /// Configuration of the most recently destroyed handle
    pub last_configured: Option<ViewSnapshot>,
    /// Every call, across all handles, in order
    pub calls: Vec<NativeCall>,
}

impl RecordingState {
    pub fn live_handles(&self) -> usize {
        self.created - self.destroyed
    }
}

/// Headless backend recording every native call
#[derive(Debug, Default)]
pub struct RecordingBackend {
    state: Arc<Mutex<RecordingState>>,
    fail_create: bool,
    fail_render: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared state handle (stays valid after the backend is dropped)
    pub fn state(&self) -> Arc<Mutex<RecordingState>> {
        Arc::clone(&self.state)
    }

    /// Make `create_camera_renderer` fail
    pub fn set_fail_create(&mut self, fail: bool) {
        self.fail_create = fail;
    }

    /// Make `render` fail on handles created from now on
    pub fn set_fail_render(&mut self, fail: bool) {
        self.fail_render = fail;
    }
}

impl ViewBackend for RecordingBackend {
    fn create_camera_renderer(
        &mut self,
        name: &str,
        camera_id: u32,
    ) -> Result<Box<dyn NativeCameraRenderer>> {
        if self.fail_create {
            engine_bail!("view_forge::RecordingBackend",
                "create_camera_renderer('{}', {}): creation disabled", name, camera_id);
        }

        if let Ok(mut state) = self.state.lock() {
            state.created += 1;
        }

        Ok(Box::new(RecordingCameraRenderer {
            snapshot: ViewSnapshot {
                name: name.to_string(),
                camera_id,
                ..Default::default()
            },
            state: Arc::clone(&self.state),
            fail_render: self.fail_render,
            destroyed: false,
        }))
    }
}

/// Handle created by RecordingBackend
#[derive(Debug)]
pub struct RecordingCameraRenderer {
    snapshot: ViewSnapshot,
    state: Arc<Mutex<RecordingState>>,
    fail_render: bool,
    destroyed: bool,
}

impl RecordingCameraRenderer {
    /// Current configuration
    pub fn snapshot(&self) -> &ViewSnapshot {
        &self.snapshot
    }

    fn record(&self, call: NativeCall) {
        if let Ok(mut state) = self.state.lock() {
            state.calls.push(call);
        }
    }
}

impl NativeCameraRenderer for RecordingCameraRenderer {
    fn clear_scene_worlds(&mut self) {
        self.snapshot.worlds.clear();
        self.record(NativeCall::ClearSceneWorlds);
    }

    fn add_scene_world(&mut self, world: WorldKey) {
        self.snapshot.worlds.push(world);
        self.record(NativeCall::AddSceneWorld(world));
    }

    fn set_render_attributes(&mut self, attributes: &RenderAttributes) {
        self.snapshot.attributes = attributes.clone();
        self.record(NativeCall::SetRenderAttributes);
    }

    fn clear_render_tags(&mut self) {
        self.snapshot.render_tags.clear();
        self.record(NativeCall::ClearRenderTags);
    }

    fn add_render_tag(&mut self, token: StringToken) {
        self.snapshot.render_tags.push(token);
        self.record(NativeCall::AddRenderTag(token));
    }

    fn clear_exclude_tags(&mut self) {
        self.snapshot.exclude_tags.clear();
        self.record(NativeCall::ClearExcludeTags);
    }

    fn add_exclude_tag(&mut self, token: StringToken) {
        self.snapshot.exclude_tags.push(token);
        self.record(NativeCall::AddExcludeTag(token));
    }

    fn set_view_params(&mut self, params: &ViewParams) {
        self.snapshot.params = Some(*params);
        self.record(NativeCall::SetViewParams);
    }

    fn render(&mut self) -> Result<()> {
        if self.fail_render {
            engine_bail!("view_forge::RecordingBackend",
                "render of '{}' failed", self.snapshot.name);
        }
        self.record(NativeCall::Render);
        if let Ok(mut state) = self.state.lock() {
            state.renders.push(self.snapshot.clone());
        }
        Ok(())
    }

    fn destroy(&mut self) {
        debug_assert!(!self.destroyed, "native camera renderer destroyed twice");
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.record(NativeCall::Destroy);
        if let Ok(mut state) = self.state.lock() {
            state.destroyed += 1;
            state.last_configured = Some(self.snapshot.clone());
        }
    }
}

#[cfg(test)]
#[path = "recording_backend_tests.rs"]
mod tests;
