//! # Module [crate::render]
//!
//! A simple single-threaded ray-caster, used to preview the scene in the UI

pub mod preview;
pub mod render;
pub mod render_opts;
