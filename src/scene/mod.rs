//! Scene construction utilities
//!
//! This module provides a declarative API for building simulation scenes and
//! the interactive demo scene driven by the binary.

mod demo;
mod scene_builder;

pub use demo::DemoScene;
pub use scene_builder::{Scene, SceneBuilder, SceneError};
