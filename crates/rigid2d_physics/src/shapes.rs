//! Body shapes and the collision primitives derived from them
//!
//! A [`Shape`] only describes extents. Combined with a body's position and
//! rotation it becomes a [`Collider`] that the collision routines operate on.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use rigid2d_math::{rectangle_corners, rotate_point, Vec2};

use crate::error::BodyError;

/// The two supported shape families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl FromStr for ShapeKind {
    type Err = BodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" | "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            other => Err(BodyError::UnknownShape(other.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => write!(f, "rect"),
            ShapeKind::Circle => write!(f, "circle"),
        }
    }
}

/// Extents of a body
///
/// Circles store only their diameter, so their height always equals their width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rectangle { width: f32, height: f32 },
    Circle { diameter: f32 },
}

impl Shape {
    /// Build a shape from a kind; `height` is ignored for circles
    pub fn from_kind(kind: ShapeKind, width: f32, height: f32) -> Self {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle { width, height },
            ShapeKind::Circle => Shape::Circle { diameter: width },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Width (diameter for circles)
    pub fn width(&self) -> f32 {
        match *self {
            Shape::Rectangle { width, .. } => width,
            Shape::Circle { diameter } => diameter,
        }
    }

    /// Height (diameter for circles)
    pub fn height(&self) -> f32 {
        match *self {
            Shape::Rectangle { height, .. } => height,
            Shape::Circle { diameter } => diameter,
        }
    }

    /// Area, used as the default mass
    pub fn area(&self) -> f32 {
        match *self {
            Shape::Rectangle { width, height } => width * height,
            Shape::Circle { diameter } => {
                let radius = diameter / 2.0;
                PI * radius * radius
            }
        }
    }

    /// Check that both extents are finite and strictly positive
    pub fn validate(&self) -> Result<(), BodyError> {
        let (width, height) = (self.width(), self.height());
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            Err(BodyError::NonPositiveSize { width, height })
        }
    }

    /// Place the shape in the world
    pub fn collider(&self, center: Vec2, rotation: f32) -> Collider {
        match *self {
            Shape::Rectangle { width, height } => Collider::Rect(OrientedRect {
                center,
                width,
                height,
                rotation,
            }),
            Shape::Circle { diameter } => Collider::Circle(Circle {
                center,
                radius: diameter / 2.0,
            }),
        }
    }
}

/// A rectangle rotated by `rotation` degrees about its center
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedRect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees
    pub rotation: f32,
}

impl OrientedRect {
    /// Corners in top-left, top-right, bottom-right, bottom-left order
    pub fn corners(&self) -> [Vec2; 4] {
        rectangle_corners(self.center, self.width, self.height, self.rotation)
    }

    /// The rectangle's local x axis and local y axis in world space
    pub fn axes(&self) -> [Vec2; 2] {
        let x_axis = Vec2::from_angle(self.rotation.to_radians());
        [x_axis, x_axis.perp()]
    }

    /// Express a world point in the rectangle's unrotated frame
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        rotate_point(point - self.center, -self.rotation.to_radians())
    }

    /// Check if a point is inside or on the rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        let local = self.to_local(point);
        local.x.abs() <= self.width / 2.0 && local.y.abs() <= self.height / 2.0
    }

    /// Same rectangle grown by `amount` in width and in height
    pub fn inflated(&self, amount: f32) -> Self {
        Self {
            width: self.width + amount,
            height: self.height + amount,
            ..*self
        }
    }
}

/// A circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Check if a point is inside or on the circle
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

/// A shape placed in the world
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Rect(OrientedRect),
    Circle(Circle),
}

impl Collider {
    pub fn center(&self) -> Vec2 {
        match self {
            Collider::Rect(rect) => rect.center,
            Collider::Circle(circle) => circle.center,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Collider::Rect(rect) => rect.contains(point),
            Collider::Circle(circle) => circle.contains(point),
        }
    }
}
