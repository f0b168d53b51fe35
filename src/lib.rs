//! rigid2d - a small real-time 2D rigid body playground
//!
//! The simulation itself lives in `rigid2d_physics`; this crate adds layered
//! configuration, scene construction and the headless tick loop.

pub mod config;
pub mod scene;
pub mod systems;
