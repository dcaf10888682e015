/// RenderAttributes - ordered attribute map consumed by the native renderer.
///
/// Values keep the order of their first insertion; re-setting a name
/// overwrites in place. Combo switches (shader permutation flags) live in a
/// separate ordered list because the backend binds them differently.

use glam::{Mat4, Vec2, Vec3, Vec4};
use rustc_hash::FxHashMap;
use crate::color::Color;

/// A typed attribute value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Color(Color),
    Mat4(Mat4),
}

impl From<f32> for AttributeValue {
    fn from(v: f32) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<Vec2> for AttributeValue {
    fn from(v: Vec2) -> Self {
        AttributeValue::Vec2(v)
    }
}

impl From<Vec3> for AttributeValue {
    fn from(v: Vec3) -> Self {
        AttributeValue::Vec3(v)
    }
}

impl From<Vec4> for AttributeValue {
    fn from(v: Vec4) -> Self {
        AttributeValue::Vec4(v)
    }
}

impl From<Color> for AttributeValue {
    fn from(v: Color) -> Self {
        AttributeValue::Color(v)
    }
}

impl From<Mat4> for AttributeValue {
    fn from(v: Mat4) -> Self {
        AttributeValue::Mat4(v)
    }
}

/// Ordered name → value map with O(1) lookup
#[derive(Debug, Clone)]
struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: FxHashMap<String, usize>,
}

// No `V: Default` bound: attribute values have no default
impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<V> OrderedMap<V> {
    fn set(&mut self, name: &str, value: V) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), value));
            }
        }
    }

    fn get(&self, name: &str) -> Option<&V> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    fn remove(&mut self, name: &str) -> Option<V> {
        let i = self.index.remove(name)?;
        let (_, value) = self.entries.remove(i);
        // Shift indices of everything after the removed slot
        for (_, idx) in self.index.iter_mut() {
            if *idx > i {
                *idx -= 1;
            }
        }
        Some(value)
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

/// Flattened attribute set: typed values plus combo switches.
#[derive(Debug, Clone, Default)]
pub struct RenderAttributes {
    values: OrderedMap<AttributeValue>,
    combos: OrderedMap<i32>,
}

impl RenderAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a typed value
    pub fn set(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.values.set(name, value.into());
    }

    /// Set (or overwrite) a combo switch
    pub fn set_combo(&mut self, name: &str, value: i32) {
        self.combos.set(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    pub fn get_combo(&self, name: &str) -> Option<i32> {
        self.combos.get(name).copied()
    }

    /// Remove a typed value, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.values.remove(name)
    }

    pub fn remove_combo(&mut self, name: &str) -> Option<i32> {
        self.combos.remove(name)
    }

    /// Copy every value and combo into `target`, overwriting on name clash.
    pub fn merge_to(&self, target: &mut RenderAttributes) {
        for (name, value) in &self.values.entries {
            target.values.set(name, *value);
        }
        for (name, value) in &self.combos.entries {
            target.combos.set(name, *value);
        }
    }

    /// Values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> + '_ {
        self.values.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Combo switches in insertion order
    pub fn combos(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.combos.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.entries.len()
    }

    pub fn combo_count(&self) -> usize {
        self.combos.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.entries.is_empty() && self.combos.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.combos.clear();
    }
}

#[cfg(test)]
#[path = "render_attributes_tests.rs"]
mod tests;
