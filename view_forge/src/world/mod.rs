//! Render worlds - the scene-side state a camera renders from.
//!
//! A world owns its ambient light and gradient fog defaults plus a flat set
//! of object bounds. Worlds live in a `WorldRegistry` and are referenced by
//! stable `WorldKey`s.

mod scene_world;
mod world_registry;

pub use scene_world::{SceneWorld, WorldObject, WorldObjectKey, AABB};
pub use world_registry::{WorldRegistry, WorldKey};
