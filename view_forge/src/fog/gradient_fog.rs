/// Gradient (distance + height) fog.

use glam::Vec4;
use serde::{Deserialize, Serialize};
use crate::attributes::RenderAttributes;
use crate::color::Color;

pub const COMBO_GRADIENT_FOG: &str = "D_ENABLE_GRADIENT_FOG";
pub const GRADIENT_FOG_PARAMS: &str = "GradientFogParams";
pub const GRADIENT_FOG_PARAMS2: &str = "GradientFogParams2";
pub const GRADIENT_FOG_PARAMS3: &str = "GradientFogParams3";

/// Gradient fog definition, owned by a world or supplied per view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientFogSetup {
    pub enabled: bool,
    pub start_distance: f32,
    pub end_distance: f32,
    pub start_height: f32,
    pub end_height: f32,
    pub maximum_opacity: f32,
    pub color: Color,
    /// Exponent of the distance-based falloff
    pub distance_falloff_exponent: f32,
    /// Exponent of the vertical falloff
    pub vertical_falloff_exponent: f32,
}

impl Default for GradientFogSetup {
    fn default() -> Self {
        Self {
            enabled: false,
            start_distance: 0.0,
            end_distance: 4000.0,
            start_height: 0.0,
            end_height: 200.0,
            maximum_opacity: 0.5,
            color: Color::WHITE,
            distance_falloff_exponent: 1.0,
            vertical_falloff_exponent: 1.0,
        }
    }
}

impl GradientFogSetup {
    /// Write the combo switch and the three parameter vectors.
    ///
    /// Params3 carries the color premultiplied by its alpha, w = 0.
    pub fn apply(&self, attributes: &mut RenderAttributes) {
        if !self.enabled {
            attributes.set_combo(COMBO_GRADIENT_FOG, 0);
            attributes.remove(GRADIENT_FOG_PARAMS);
            attributes.remove(GRADIENT_FOG_PARAMS2);
            attributes.remove(GRADIENT_FOG_PARAMS3);
            return;
        }

        attributes.set_combo(COMBO_GRADIENT_FOG, 1);
        attributes.set(
            GRADIENT_FOG_PARAMS,
            Vec4::new(self.start_distance, self.end_distance, self.start_height, self.end_height),
        );
        attributes.set(
            GRADIENT_FOG_PARAMS2,
            Vec4::new(
                self.maximum_opacity,
                self.distance_falloff_exponent,
                self.vertical_falloff_exponent,
                0.0,
            ),
        );
        attributes.set(GRADIENT_FOG_PARAMS3, self.color.rgb_with_w(0.0) * self.color.a);
    }

    /// Interpolate towards `desired` for fog transitions.
    ///
    /// Snaps to `desired` when the enabled state differs. With `clamp`,
    /// `delta` is limited to [0, 1] for the scalar fields; the color always
    /// uses the raw delta.
    pub fn lerp_to(&self, desired: &GradientFogSetup, delta: f32, clamp: bool) -> GradientFogSetup {
        if self.enabled != desired.enabled {
            return *desired;
        }

        let t = if clamp { delta.clamp(0.0, 1.0) } else { delta };
        let lerp = |a: f32, b: f32| a + (b - a) * t;

        GradientFogSetup {
            enabled: self.enabled,
            start_distance: lerp(self.start_distance, desired.start_distance),
            end_distance: lerp(self.end_distance, desired.end_distance),
            start_height: lerp(self.start_height, desired.start_height),
            end_height: lerp(self.end_height, desired.end_height),
            maximum_opacity: lerp(self.maximum_opacity, desired.maximum_opacity),
            color: self.color.lerp(desired.color, delta),
            distance_falloff_exponent: lerp(self.distance_falloff_exponent, desired.distance_falloff_exponent),
            vertical_falloff_exponent: lerp(self.vertical_falloff_exponent, desired.vertical_falloff_exponent),
        }
    }
}

#[cfg(test)]
#[path = "gradient_fog_tests.rs"]
mod tests;
