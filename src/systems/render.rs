//! Headless render surface
//!
//! Stands in for a real drawing backend: it counts commands and can log each
//! one at trace level.

use rigid2d_math::Vec2;
use rigid2d_physics::{Color, RenderSurface};

/// Render surface that logs instead of drawing
pub struct LogSurface {
    width: f32,
    height: f32,
    log_draw_calls: bool,
    draw_calls: u64,
    clears: u64,
}

impl LogSurface {
    pub fn new(width: f32, height: f32, log_draw_calls: bool) -> Self {
        Self {
            width,
            height,
            log_draw_calls,
            draw_calls: 0,
            clears: 0,
        }
    }

    /// Polygons and circles drawn so far
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    /// Times the surface was cleared
    pub fn clears(&self) -> u64 {
        self.clears
    }
}

impl RenderSurface for LogSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn draw_polygon(&mut self, points: &[Vec2], fill: Color, _outline: Color) {
        self.draw_calls += 1;
        if self.log_draw_calls {
            log::trace!("polygon {:?} fill {:?}", Vec2::as_floats(points), fill.rgba);
        }
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color, _outline: Color) {
        self.draw_calls += 1;
        if self.log_draw_calls {
            log::trace!("circle at {:?} r {:.1} fill {:?}", center.to_array(), radius, fill.rgba);
        }
    }
}
