//! 2D Mathematics Library
//!
//! This crate provides the vector type and the small geometry toolkit shared by
//! collision detection and rendering in rigid2d.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components (screen space, +y points down)
//!
//! ## Geometry
//!
//! - [`rotate_point`] - rotate a point about the origin
//! - [`rectangle_corners`] - corners of a rotated rectangle
//! - [`project_onto_axis`] - projection interval of a point set (SAT)

mod vec2;
pub mod geometry;

pub use vec2::Vec2;
pub use geometry::{
    interval_overlap_depth, intervals_overlap, normalize_degrees, project_onto_axis,
    rectangle_corners, rotate_point,
};
