//! Application systems
//!
//! The tick loop and the headless surface it draws to.

mod render;
mod simulation;

pub use render::LogSurface;
pub use simulation::{SimulationResult, SimulationSystem};
