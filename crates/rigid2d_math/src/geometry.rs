//! Rotation and Separating Axis Theorem helpers
//!
//! Shared by collision detection (rotated rectangle tests) and by rendering,
//! which draws rectangles as the polygon returned by [`rectangle_corners`].

use crate::Vec2;

/// Rotate a point about the origin by `radians`
///
/// Positive angles rotate from +x toward +y, which is clockwise on screen
/// because +y points down.
#[inline]
pub fn rotate_point(point: Vec2, radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    Vec2::new(point.x * cos - point.y * sin, point.x * sin + point.y * cos)
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Corners of a `width` x `height` rectangle centered at `center` and rotated
/// by `degrees`
///
/// Winding is fixed: top-left, top-right, bottom-right, bottom-left in the
/// rectangle's unrotated frame.
pub fn rectangle_corners(center: Vec2, width: f32, height: f32, degrees: f32) -> [Vec2; 4] {
    let radians = degrees.to_radians();
    let hw = width / 2.0;
    let hh = height / 2.0;
    [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
    .map(|corner| center + rotate_point(corner, radians))
}

/// Project a point set onto `axis` and return the `(min, max)` interval
///
/// The axis does not need to be normalized as long as every interval that
/// gets compared was computed with the same axis.
pub fn project_onto_axis(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    points.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), p| {
        let projection = p.dot(axis);
        (min.min(projection), max.max(projection))
    })
}

/// Whether two closed intervals share at least one point
#[inline]
pub fn intervals_overlap(a: (f32, f32), b: (f32, f32)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

/// Length of the shared part of two intervals (negative when separated)
#[inline]
pub fn interval_overlap_depth(a: (f32, f32), b: (f32, f32)) -> f32 {
    a.1.min(b.1) - a.0.max(b.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-4;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate_point(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert!(approx(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_rotate_half_turn() {
        let p = rotate_point(Vec2::new(2.0, 3.0), PI);
        assert!(approx(p, Vec2::new(-2.0, -3.0)));
    }

    #[test]
    fn test_rotate_preserves_length() {
        let p = Vec2::new(3.0, 4.0);
        for step in 0..16 {
            let rotated = rotate_point(p, step as f32 * 0.4);
            assert!((rotated.length() - 5.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-1e-7), 0.0);
    }

    #[test]
    fn test_unrotated_corners_winding() {
        let corners = rectangle_corners(Vec2::new(10.0, 20.0), 4.0, 2.0, 0.0);
        assert!(approx(corners[0], Vec2::new(8.0, 19.0)));
        assert!(approx(corners[1], Vec2::new(12.0, 19.0)));
        assert!(approx(corners[2], Vec2::new(12.0, 21.0)));
        assert!(approx(corners[3], Vec2::new(8.0, 21.0)));
    }

    #[test]
    fn test_rotated_corners() {
        // A 90 degree turn swaps the extents
        let corners = rectangle_corners(Vec2::ZERO, 4.0, 2.0, 90.0);
        assert!(approx(corners[0], Vec2::new(1.0, -2.0)));
        assert!(approx(corners[2], Vec2::new(-1.0, 2.0)));
    }

    #[test]
    fn test_project_onto_axis() {
        let corners = rectangle_corners(Vec2::new(5.0, 0.0), 2.0, 2.0, 0.0);
        assert_eq!(project_onto_axis(&corners, Vec2::X), (4.0, 6.0));
        assert_eq!(project_onto_axis(&corners, Vec2::Y), (-1.0, 1.0));
        // Scaled axis scales the interval
        assert_eq!(project_onto_axis(&corners, Vec2::X * 2.0), (8.0, 12.0));
    }

    #[test]
    fn test_intervals_overlap() {
        assert!(intervals_overlap((0.0, 2.0), (1.0, 3.0)));
        assert!(intervals_overlap((1.0, 3.0), (0.0, 2.0)));
        // Containment in either direction
        assert!(intervals_overlap((0.0, 10.0), (4.0, 5.0)));
        assert!(intervals_overlap((4.0, 5.0), (0.0, 10.0)));
        // Touching endpoints count
        assert!(intervals_overlap((0.0, 1.0), (1.0, 2.0)));
        assert!(!intervals_overlap((0.0, 1.0), (1.5, 2.0)));
    }

    #[test]
    fn test_overlap_depth() {
        assert_eq!(interval_overlap_depth((0.0, 2.0), (1.0, 3.0)), 1.0);
        assert_eq!(interval_overlap_depth((0.0, 10.0), (4.0, 5.0)), 1.0);
        assert!(interval_overlap_depth((0.0, 1.0), (2.0, 3.0)) < 0.0);
    }
}
