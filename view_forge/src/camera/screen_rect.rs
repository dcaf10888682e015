/// Normalized screen rectangle a camera renders into.
///
/// All values are fractions of the render target: (0, 0, 1, 1) is the full
/// target.

use glam::Vec4;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub const FULL: ScreenRect = ScreenRect { left: 0.0, top: 0.0, width: 1.0, height: 1.0 };

    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Viewport as (left, top, width, height) with the size clamped so the
    /// far edges never pass 1.0.
    pub fn clamped_viewport(&self) -> Vec4 {
        Vec4::new(
            self.left,
            self.top,
            self.width.min(1.0 - self.left),
            self.height.min(1.0 - self.top),
        )
    }
}

impl Default for ScreenRect {
    fn default() -> Self {
        ScreenRect::FULL
    }
}
