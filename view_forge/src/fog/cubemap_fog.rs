/// Cubemap fog: distant geometry fades into a blurred sky cubemap.
///
/// Optional on the camera; when absent nothing is written.

use glam::Vec4;
use serde::{Deserialize, Serialize};
use crate::attributes::RenderAttributes;
use crate::color::Color;

pub const COMBO_CUBEMAP_FOG: &str = "D_ENABLE_CUBEMAP_FOG";
pub const CUBEMAP_FOG_PARAMS: &str = "CubemapFogParams";
pub const CUBEMAP_FOG_HEIGHT: &str = "CubemapFogHeight";
pub const CUBEMAP_FOG_TINT: &str = "CubemapFogTint";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubemapFogSetup {
    /// 0 = no fog, 1 = full cubemap
    pub blend: f32,
    pub start_distance: f32,
    pub end_distance: f32,
    pub falloff_exponent: f32,
    pub height_start: f32,
    pub height_width: f32,
    /// Mip bias used when sampling the cubemap
    pub lod_bias: f32,
    pub tint: Color,
}

impl Default for CubemapFogSetup {
    fn default() -> Self {
        Self {
            blend: 1.0,
            start_distance: 1000.0,
            end_distance: 8000.0,
            falloff_exponent: 1.0,
            height_start: 0.0,
            height_width: 0.0,
            lod_bias: 0.5,
            tint: Color::WHITE,
        }
    }
}

impl CubemapFogSetup {
    pub fn write(&self, attributes: &mut RenderAttributes) {
        attributes.set_combo(COMBO_CUBEMAP_FOG, 1);
        attributes.set(
            CUBEMAP_FOG_PARAMS,
            Vec4::new(
                self.start_distance,
                self.end_distance,
                self.falloff_exponent,
                self.blend.clamp(0.0, 1.0),
            ),
        );
        attributes.set(
            CUBEMAP_FOG_HEIGHT,
            Vec4::new(self.height_start, self.height_width, self.lod_bias, 0.0),
        );
        attributes.set(CUBEMAP_FOG_TINT, self.tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeValue;

    #[test]
    fn test_write_clamps_blend() {
        let fog = CubemapFogSetup { blend: 3.0, ..Default::default() };
        let mut attrs = RenderAttributes::new();
        fog.write(&mut attrs);

        assert_eq!(attrs.get_combo(COMBO_CUBEMAP_FOG), Some(1));
        assert_eq!(
            attrs.get(CUBEMAP_FOG_PARAMS),
            Some(&AttributeValue::Vec4(Vec4::new(1000.0, 8000.0, 1.0, 1.0)))
        );
        assert_eq!(attrs.get(CUBEMAP_FOG_TINT), Some(&AttributeValue::Color(Color::WHITE)));
    }
}
