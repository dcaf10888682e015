/// Volumetric (froxel) fog settings gathered from a camera.

use glam::Vec4;
use serde::{Deserialize, Serialize};
use crate::attributes::RenderAttributes;

pub const COMBO_VOLUMETRIC_FOG: &str = "D_ENABLE_VOLUMETRIC_FOG";
pub const VOLUMETRIC_FOG_PARAMS: &str = "VolumetricFogParams";
pub const VOLUMETRIC_FOG_FADE: &str = "VolumetricFogFade";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumetricFogSetup {
    pub enabled: bool,
    /// Henyey-Greenstein anisotropy, [-1, 1]
    pub anisotropy: f32,
    pub scattering: f32,
    pub draw_distance: f32,
    pub fade_in_start: f32,
    pub fade_in_end: f32,
}

impl Default for VolumetricFogSetup {
    fn default() -> Self {
        Self {
            enabled: false,
            anisotropy: 0.5,
            scattering: 1.0,
            draw_distance: 2048.0,
            fade_in_start: 64.0,
            fade_in_end: 256.0,
        }
    }
}

impl VolumetricFogSetup {
    pub fn apply(&self, attributes: &mut RenderAttributes) {
        if !self.enabled {
            attributes.set_combo(COMBO_VOLUMETRIC_FOG, 0);
            attributes.remove(VOLUMETRIC_FOG_PARAMS);
            attributes.remove(VOLUMETRIC_FOG_FADE);
            return;
        }

        attributes.set_combo(COMBO_VOLUMETRIC_FOG, 1);
        attributes.set(
            VOLUMETRIC_FOG_PARAMS,
            Vec4::new(self.anisotropy.clamp(-1.0, 1.0), self.scattering, self.draw_distance, 0.0),
        );
        attributes.set(
            VOLUMETRIC_FOG_FADE,
            Vec4::new(self.fade_in_start, self.fade_in_end, 0.0, 0.0),
        );
    }
}
