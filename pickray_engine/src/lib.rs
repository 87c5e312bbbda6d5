//! Engine for the pick-ray demo: geometry, the scene, click handling and a small preview ray-caster.
//!
//! Nothing in here knows about the UI; see the `pickray_ui` crate for that.

pub mod core;
pub mod mesh;
pub mod pick;
pub mod render;
pub mod scene;
pub mod shared;
