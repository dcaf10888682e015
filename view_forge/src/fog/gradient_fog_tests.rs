use glam::Vec4;
use crate::attributes::{AttributeValue, RenderAttributes};
use crate::color::Color;
use super::*;

fn enabled_fog() -> GradientFogSetup {
    GradientFogSetup {
        enabled: true,
        start_distance: 10.0,
        end_distance: 500.0,
        start_height: 0.0,
        end_height: 100.0,
        maximum_opacity: 0.8,
        color: Color::new(1.0, 0.5, 0.25, 0.5),
        distance_falloff_exponent: 2.0,
        vertical_falloff_exponent: 3.0,
    }
}

// ============================================================================
// apply
// ============================================================================

#[test]
fn test_apply_enabled_writes_combo_and_params() {
    let mut attrs = RenderAttributes::new();
    enabled_fog().apply(&mut attrs);

    assert_eq!(attrs.get_combo(COMBO_GRADIENT_FOG), Some(1));
    assert_eq!(
        attrs.get(GRADIENT_FOG_PARAMS),
        Some(&AttributeValue::Vec4(Vec4::new(10.0, 500.0, 0.0, 100.0)))
    );
    assert_eq!(
        attrs.get(GRADIENT_FOG_PARAMS2),
        Some(&AttributeValue::Vec4(Vec4::new(0.8, 2.0, 3.0, 0.0)))
    );
    // Color premultiplied by alpha, w = 0
    assert_eq!(
        attrs.get(GRADIENT_FOG_PARAMS3),
        Some(&AttributeValue::Vec4(Vec4::new(0.5, 0.25, 0.125, 0.0)))
    );
}

#[test]
fn test_apply_disabled_sets_combo_off_and_clears_params() {
    let mut attrs = RenderAttributes::new();
    enabled_fog().apply(&mut attrs);

    GradientFogSetup::default().apply(&mut attrs);

    assert_eq!(attrs.get_combo(COMBO_GRADIENT_FOG), Some(0));
    assert_eq!(attrs.get(GRADIENT_FOG_PARAMS), None);
    assert_eq!(attrs.get(GRADIENT_FOG_PARAMS2), None);
    assert_eq!(attrs.get(GRADIENT_FOG_PARAMS3), None);
}

#[test]
fn test_second_apply_overwrites_first() {
    let mut attrs = RenderAttributes::new();
    enabled_fog().apply(&mut attrs);

    let mut other = enabled_fog();
    other.start_distance = 1.0;
    other.apply(&mut attrs);

    let mut expected = RenderAttributes::new();
    other.apply(&mut expected);
    assert_eq!(attrs.get(GRADIENT_FOG_PARAMS), expected.get(GRADIENT_FOG_PARAMS));
}

// ============================================================================
// lerp_to
// ============================================================================

#[test]
fn test_lerp_snaps_when_enabled_differs() {
    let from = GradientFogSetup::default();
    let to = enabled_fog();
    assert_eq!(from.lerp_to(&to, 0.1, true), to);
}

#[test]
fn test_lerp_halfway() {
    let from = enabled_fog();
    let mut to = enabled_fog();
    to.start_distance = 20.0;
    to.maximum_opacity = 0.4;

    let mid = from.lerp_to(&to, 0.5, true);
    assert!(mid.enabled);
    assert!((mid.start_distance - 15.0).abs() < 1e-5);
    assert!((mid.maximum_opacity - 0.6).abs() < 1e-5);
    assert_eq!(mid.end_distance, 500.0);
}

#[test]
fn test_lerp_clamp() {
    let from = enabled_fog();
    let mut to = enabled_fog();
    to.end_height = 200.0;

    assert_eq!(from.lerp_to(&to, 2.0, true).end_height, 200.0);
    assert_eq!(from.lerp_to(&to, 2.0, false).end_height, 300.0);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let fog: GradientFogSetup = toml::from_str("enabled = true\nend_distance = 50.0").unwrap();
    assert!(fog.enabled);
    assert_eq!(fog.end_distance, 50.0);
    assert_eq!(fog.end_height, GradientFogSetup::default().end_height);
}
