/// Tonemapping settings gathered from a camera into the attribute set.

use glam::Vec4;
use serde::{Deserialize, Serialize};
use crate::attributes::RenderAttributes;

pub const COMBO_TONEMAP: &str = "D_TONEMAPPING";
pub const TONEMAP_EXPOSURE: &str = "TonemapExposure";

/// Tonemapping operator. The discriminant is the combo value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TonemapMode {
    Linear = 1,
    Reinhard = 2,
    #[default]
    Aces = 3,
    #[serde(rename = "agx")]
    AgX = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TonemapSetup {
    pub enabled: bool,
    pub mode: TonemapMode,
    /// Exposure bias in stops
    pub exposure_compensation: f32,
    pub min_exposure: f32,
    pub max_exposure: f32,
    pub auto_exposure: bool,
}

impl Default for TonemapSetup {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: TonemapMode::Aces,
            exposure_compensation: 0.0,
            min_exposure: 1.0,
            max_exposure: 3.0,
            auto_exposure: true,
        }
    }
}

impl TonemapSetup {
    /// Combo 0 when disabled, otherwise the operator's discriminant.
    pub fn apply(&self, attributes: &mut RenderAttributes) {
        if !self.enabled {
            attributes.set_combo(COMBO_TONEMAP, 0);
            attributes.remove(TONEMAP_EXPOSURE);
            return;
        }

        // min/max may be authored swapped
        let (lo, hi) = if self.min_exposure <= self.max_exposure {
            (self.min_exposure, self.max_exposure)
        } else {
            (self.max_exposure, self.min_exposure)
        };

        attributes.set_combo(COMBO_TONEMAP, self.mode as i32);
        attributes.set(
            TONEMAP_EXPOSURE,
            Vec4::new(
                self.exposure_compensation,
                lo,
                hi,
                if self.auto_exposure { 1.0 } else { 0.0 },
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeValue;

    #[test]
    fn test_default_is_aces_with_auto_exposure() {
        let mut attrs = RenderAttributes::new();
        TonemapSetup::default().apply(&mut attrs);

        assert_eq!(attrs.get_combo(COMBO_TONEMAP), Some(3));
        assert_eq!(
            attrs.get(TONEMAP_EXPOSURE),
            Some(&AttributeValue::Vec4(Vec4::new(0.0, 1.0, 3.0, 1.0)))
        );
    }

    #[test]
    fn test_swapped_exposure_range_is_ordered() {
        let tonemap = TonemapSetup {
            mode: TonemapMode::Reinhard,
            min_exposure: 4.0,
            max_exposure: 2.0,
            auto_exposure: false,
            ..Default::default()
        };
        let mut attrs = RenderAttributes::new();
        tonemap.apply(&mut attrs);

        assert_eq!(attrs.get_combo(COMBO_TONEMAP), Some(2));
        assert_eq!(
            attrs.get(TONEMAP_EXPOSURE),
            Some(&AttributeValue::Vec4(Vec4::new(0.0, 2.0, 4.0, 0.0)))
        );
    }

    #[test]
    fn test_disabled() {
        let mut attrs = RenderAttributes::new();
        TonemapSetup { enabled: false, ..Default::default() }.apply(&mut attrs);
        assert_eq!(attrs.get_combo(COMBO_TONEMAP), Some(0));
        assert!(attrs.get(TONEMAP_EXPOSURE).is_none());
    }

    #[test]
    fn test_mode_from_toml() {
        let setup: TonemapSetup = toml::from_str("mode = \"agx\"").unwrap();
        assert_eq!(setup.mode, TonemapMode::AgX);
    }
}
