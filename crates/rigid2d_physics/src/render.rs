//! Drawing surface abstraction
//!
//! The simulation does not know how pixels get on screen; it only issues
//! polygon and circle commands to whatever implements [`RenderSurface`].

use rigid2d_math::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, each component 0.0-1.0
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub rgba: [f32; 4],
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { rgba: [r, g, b, a] }
    }

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 0.5, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

/// A 2D drawing target with a fixed viewport
pub trait RenderSurface {
    /// Viewport width in pixels
    fn width(&self) -> f32;
    /// Viewport height in pixels
    fn height(&self) -> f32;
    /// Erase everything drawn so far
    fn clear(&mut self);
    /// Draw a filled polygon through `points` in order
    fn draw_polygon(&mut self, points: &[Vec2], fill: Color, outline: Color);
    /// Draw a filled circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color, outline: Color);
}
