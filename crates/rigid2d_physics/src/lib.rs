//! 2D rigid body simulation for rigid2d
//!
//! This crate provides a small real-time simulation of rotatable rectangles
//! and circles, including:
//! - Shape geometry (point containment, rotated corners)
//! - Collision detection (SAT for rectangle pairs, approximate rectangle/circle)
//! - Bounce response with a 50/50 velocity split between movable bodies
//! - Per-body time integration with gravity and multiplicative friction
//! - A world that runs simulate-then-draw ticks against a render surface

pub mod body;
pub mod clock;
pub mod collision;
pub mod error;
pub mod material;
pub mod render;
pub mod response;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{Body, BodyDesc, BodyFlags, BodyKey};
pub use clock::{Clock, ManualClock, SystemClock};
pub use collision::{circle_vs_circle, colliders_overlap, rect_vs_circle, rect_vs_rect, Contact};
pub use error::BodyError;
pub use material::Material;
pub use render::{Color, RenderSurface};
pub use response::{RectangleResponse, Response};
pub use shapes::{Circle, Collider, OrientedRect, Shape, ShapeKind};
pub use world::{World, WorldConfig};
