//! Collision response
//!
//! Responses are computed from immutable views of both bodies and applied by
//! the world afterwards. Only the reacting body (the mover) changes heading;
//! a movable partner receives half of the mover's new velocity, sign-inverted,
//! and the mover keeps the other half. The split ignores mass.

use std::f32::consts::{FRAC_PI_2, PI};

use rigid2d_math::{rotate_point, Vec2};
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::collision::rect_vs_rect_contact;
use crate::shapes::{Collider, OrientedRect};

/// Below this speed a collision has no heading to reflect
const MIN_REFLECT_SPEED: f32 = 1e-6;

/// Policy for colliding rectangle pairs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RectangleResponse {
    /// Detect the overlap but change nothing; rectangles pass through each other
    #[default]
    PassThrough,
    /// Mirror the mover's velocity about the least-overlap axis
    Reflect,
}

/// Velocity changes produced by one collision
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Response {
    /// The mover's new velocity
    pub velocity: Vec2,
    /// Added to the other body's velocity, present when it is movable
    pub transfer: Option<Vec2>,
}

impl Response {
    fn split(velocity: Vec2, other_movable: bool) -> Self {
        if other_movable {
            Self {
                velocity: velocity / 2.0,
                transfer: Some(-velocity / 2.0),
            }
        } else {
            Self {
                velocity,
                transfer: None,
            }
        }
    }
}

/// Compute how `mover` reacts to colliding with `other`
///
/// Assumes the bodies overlap. The reflected heading and speed are always the
/// mover's own, whichever shape it is. Returns `None` when nothing changes:
/// rectangle pairs under [`RectangleResponse::PassThrough`], or a mover with no
/// speed.
pub fn resolve(mover: &Body, other: &Body, rectangles: RectangleResponse) -> Option<Response> {
    let new_velocity = match (mover.collider(), other.collider()) {
        (Collider::Rect(a), Collider::Rect(b)) => match rectangles {
            RectangleResponse::PassThrough => return None,
            RectangleResponse::Reflect => reflect_rectangles(mover, other, &a, &b)?,
        },
        (Collider::Rect(rect), Collider::Circle(circle)) => {
            let axis = struck_axis(&rect, circle.center, circle.diameter());
            let bounce = mover.material.combined_bounce(&other.material);
            reflect_heading(mover.velocity, axis, bounce)?
        }
        (Collider::Circle(circle), Collider::Rect(rect)) => {
            let axis = struck_axis(&rect, circle.center, circle.diameter());
            let bounce = mover.material.combined_bounce(&other.material);
            reflect_heading(mover.velocity, axis, bounce)?
        }
        (Collider::Circle(a), Collider::Circle(b)) => {
            // Bounce coefficients are not applied between circles
            let axis = (a.center - b.center).angle();
            reflect_heading(mover.velocity, axis, 1.0)?
        }
    };

    Some(Response::split(new_velocity, other.is_movable()))
}

/// Axis angle (radians) used to reflect a circle off a rectangle
///
/// A circle beyond the rectangle's short ends, measured along its local x, hits
/// an end face and reflects about the x axis; otherwise it hits a long face and
/// reflects about the y axis.
fn struck_axis(rect: &OrientedRect, circle_center: Vec2, circle_width: f32) -> f32 {
    let local = rotate_point(circle_center - rect.center, -rect.rotation.to_radians());
    let rotation = rect.rotation.to_radians();
    if local.x.abs() > rect.width / 2.0 - circle_width / 4.0 {
        rotation
    } else {
        rotation + FRAC_PI_2
    }
}

/// Reflect a velocity's heading about `axis`, keeping `speed * scale`
///
/// The outgoing heading is `2 * axis - heading + PI`.
fn reflect_heading(velocity: Vec2, axis: f32, scale: f32) -> Option<Vec2> {
    let speed = velocity.length();
    if speed < MIN_REFLECT_SPEED {
        return None;
    }
    let heading = velocity.angle();
    let outgoing = 2.0 * axis - heading + PI;
    Some(Vec2::from_angle(outgoing) * (speed * scale))
}

fn reflect_rectangles(
    mover: &Body,
    other: &Body,
    a: &OrientedRect,
    b: &OrientedRect,
) -> Option<Vec2> {
    let contact = rect_vs_rect_contact(a, b)?;
    let approach = mover.velocity.dot(contact.normal);
    if approach >= 0.0 {
        // Already separating
        return None;
    }
    let mirrored = mover.velocity - contact.normal * (2.0 * approach);
    Some(mirrored * mover.material.combined_bounce(&other.material))
}
