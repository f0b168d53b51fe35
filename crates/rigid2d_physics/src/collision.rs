//! Collision detection for rotated rectangles and circles
//!
//! - rectangle vs rectangle: Separating Axis Theorem over both rectangles'
//!   face axes, exact for these convex shapes
//! - rectangle vs circle: containment of the circle center in the rectangle
//!   grown by the circle's diameter; cheap and slightly generous near corners
//! - circle vs circle: center distance against the radius sum
//!
//! All tests are boundary-inclusive: shapes that exactly touch collide.

use rigid2d_math::{interval_overlap_depth, intervals_overlap, project_onto_axis, Vec2};

use crate::shapes::{Circle, Collider, OrientedRect};

/// Contact information from a rectangle pair
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// Unit normal pointing from the second shape toward the first
    pub normal: Vec2,
    /// Overlap along the normal (zero when exactly touching)
    pub penetration: f32,
}

/// Test two placed shapes for overlap
///
/// The result does not depend on argument order.
pub fn colliders_overlap(a: &Collider, b: &Collider) -> bool {
    match (a, b) {
        (Collider::Rect(a), Collider::Rect(b)) => rect_vs_rect(a, b),
        (Collider::Rect(rect), Collider::Circle(circle)) => rect_vs_circle(rect, circle),
        (Collider::Circle(circle), Collider::Rect(rect)) => rect_vs_circle(rect, circle),
        (Collider::Circle(a), Collider::Circle(b)) => circle_vs_circle(a, b),
    }
}

/// Candidate separating axes: the local x and y axes of both rectangles
fn separating_axes(a: &OrientedRect, b: &OrientedRect) -> [Vec2; 4] {
    let [a_x, a_y] = a.axes();
    let [b_x, b_y] = b.axes();
    [a_x, a_y, b_x, b_y]
}

/// Separating Axis Theorem test for two rotated rectangles
pub fn rect_vs_rect(a: &OrientedRect, b: &OrientedRect) -> bool {
    let corners_a = a.corners();
    let corners_b = b.corners();

    separating_axes(a, b).iter().all(|&axis| {
        intervals_overlap(
            project_onto_axis(&corners_a, axis),
            project_onto_axis(&corners_b, axis),
        )
    })
}

/// Rectangle pair contact along the axis of least overlap
///
/// Returns `None` if some axis separates the rectangles.
pub fn rect_vs_rect_contact(a: &OrientedRect, b: &OrientedRect) -> Option<Contact> {
    let corners_a = a.corners();
    let corners_b = b.corners();

    let mut best: Option<Contact> = None;
    for axis in separating_axes(a, b) {
        let proj_a = project_onto_axis(&corners_a, axis);
        let proj_b = project_onto_axis(&corners_b, axis);
        let depth = interval_overlap_depth(proj_a, proj_b);
        if depth < 0.0 {
            return None;
        }
        if best.map_or(true, |c| depth < c.penetration) {
            // Orient the axis so it points from b toward a
            let toward_a = (a.center - b.center).dot(axis);
            let normal = if toward_a < 0.0 { -axis } else { axis };
            best = Some(Contact { normal, penetration: depth });
        }
    }
    best
}

/// Approximate rectangle vs circle test
///
/// Grows the rectangle by the circle's diameter in both width and height (so
/// each half-extent grows by the radius) and checks whether the circle's
/// center lies inside. Near the corners this reports contact slightly early.
pub fn rect_vs_circle(rect: &OrientedRect, circle: &Circle) -> bool {
    rect.inflated(circle.diameter()).contains(circle.center)
}

/// Exact circle vs circle test
pub fn circle_vs_circle(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}
