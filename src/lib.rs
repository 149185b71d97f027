//! NEO Explorer
//!
//! Library crate holding the scene, camera, selection and quiz logic so the
//! binary and the integration tests share one set of plugins.

pub mod animation;
pub mod camera;
pub mod catalog;
pub mod focus;
pub mod input;
pub mod layers;
pub mod orbit;
pub mod picking;
pub mod quiz;
pub mod render;
pub mod settings;
pub mod types;
pub mod ui;

#[cfg(test)]
mod proptest_scene;
