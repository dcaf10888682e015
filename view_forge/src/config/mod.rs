//! Scene presets with TOML support.
//!
//! A preset lists render worlds (`[[worlds]]`) and cameras (`[[cameras]]`).
//! Cameras reference worlds by name; `SceneConfig::build` creates the worlds
//! in a `WorldRegistry` and returns ready-to-render `SceneCamera`s.

mod scene_config;

pub use scene_config::{SceneConfig, WorldConfig, ObjectConfig, CameraConfig};
