/// Linear RGBA color used for clear, ambient and fog values.
///
/// Blending is component-wise: `+` adds, `*` multiplies. No clamping happens
/// implicitly; callers clamp what they need (see `with_alpha_clamped`).

use std::ops::{Add, AddAssign, Mul, MulAssign};
use glam::Vec4;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Copy with the alpha channel clamped to [0, 1]. RGB is left untouched.
    pub fn with_alpha_clamped(self) -> Self {
        Self { a: self.a.clamp(0.0, 1.0), ..self }
    }

    /// Linear interpolation towards `other` (t is not clamped)
    pub fn lerp(self, other: Color, t: f32) -> Self {
        Color::from(Vec4::from(self).lerp(Vec4::from(other), t))
    }

    /// RGB with an explicit w component
    pub fn rgb_with_w(self, w: f32) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, w)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<Color> for Vec4 {
    fn from(c: Color) -> Self {
        Vec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Color::new(v.x, v.y, v.z, v.w)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, rhs: Color) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
