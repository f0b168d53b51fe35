//! Rigid body types for 2D simulation

use std::collections::HashSet;

use bitflags::bitflags;
use rigid2d_math::{normalize_degrees, Vec2};
use slotmap::new_key_type;

use crate::collision::colliders_overlap;
use crate::error::BodyError;
use crate::material::Material;
use crate::render::{Color, RenderSurface};
use crate::shapes::{Collider, Shape, ShapeKind};
use crate::world::WorldConfig;

new_key_type! {
    /// Key to a body in the world
    ///
    /// Generational: once a body is removed its key never resolves again, so
    /// stale keys left in exclusion sets are harmless.
    pub struct BodyKey;
}

bitflags! {
    /// Per-body behaviour switches
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BodyFlags: u8 {
        /// Takes part in collision detection
        const HITBOX = 1 << 0;
        /// Scans for collisions and receives collision impulses
        const MOVABLE = 1 << 1;
        /// Drawn by `World::render_tick`
        const DRAW = 1 << 2;
    }
}

impl Default for BodyFlags {
    fn default() -> Self {
        BodyFlags::all()
    }
}

/// Description of a body before it joins a world
///
/// Optional fields inherit from the world (friction) or the shape (mass) when
/// the body is added, once.
#[derive(Clone, Debug)]
pub struct BodyDesc {
    pub shape: Shape,
    pub position: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    pub velocity: Vec2,
    /// Angular velocity in degrees per second
    pub angular_velocity: f32,
    /// Multiplier on world gravity (0.0 = floats)
    pub gravity_scale: f32,
    pub flags: BodyFlags,
    pub bounce: f32,
    /// Damping rate, `None` inherits the world default
    pub friction: Option<f32>,
    /// Mass, `None` derives it from the shape's area
    pub mass: Option<f32>,
    /// Bodies this one never collides with
    pub exclusions: Vec<BodyKey>,
    pub fill: Color,
    pub outline: Color,
}

impl BodyDesc {
    /// Describe a body of the given shape at `position`
    pub fn new(shape: Shape, position: Vec2) -> Self {
        Self {
            shape,
            position,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            gravity_scale: 1.0,
            flags: BodyFlags::default(),
            bounce: 1.0,
            friction: None,
            mass: None,
            exclusions: Vec::new(),
            fill: Color::RED,
            outline: Color::BLACK,
        }
    }

    /// Describe a rectangle centered at `position`
    pub fn rectangle(position: Vec2, width: f32, height: f32) -> Self {
        Self::new(Shape::Rectangle { width, height }, position)
    }

    /// Describe a circle centered at `position`
    pub fn circle(position: Vec2, diameter: f32) -> Self {
        Self::new(Shape::Circle { diameter }, position)
    }

    /// Describe a body from a shape kind name such as `"rect"` or `"circle"`
    pub fn from_kind(
        kind: &str,
        position: Vec2,
        width: f32,
        height: f32,
    ) -> Result<Self, BodyError> {
        let kind: ShapeKind = kind.parse()?;
        Ok(Self::new(Shape::from_kind(kind, width, height), position))
    }

    /// Set the rotation in degrees
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the angular velocity in degrees per second
    pub fn with_angular_velocity(mut self, degrees_per_second: f32) -> Self {
        self.angular_velocity = degrees_per_second;
        self
    }

    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.gravity_scale = scale;
        self
    }

    pub fn with_hitbox(mut self, hitbox: bool) -> Self {
        self.flags.set(BodyFlags::HITBOX, hitbox);
        self
    }

    /// Set whether this body reacts to collisions
    ///
    /// Integration still runs for immovable bodies; pair with
    /// `with_gravity_scale(0.0)` to keep one in place.
    pub fn with_movable(mut self, movable: bool) -> Self {
        self.flags.set(BodyFlags::MOVABLE, movable);
        self
    }

    pub fn with_draw(mut self, draw: bool) -> Self {
        self.flags.set(BodyFlags::DRAW, draw);
        self
    }

    pub fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Never collide with `other`
    pub fn with_exclusion(mut self, other: BodyKey) -> Self {
        self.exclusions.push(other);
        self
    }

    pub fn with_colors(mut self, fill: Color, outline: Color) -> Self {
        self.fill = fill;
        self.outline = outline;
        self
    }
}

/// A rectangle or circle body living in a world
#[derive(Clone, Debug)]
pub struct Body {
    pub shape: Shape,
    /// Center position in pixels
    pub position: Vec2,
    /// Rotation in degrees, kept in [0, 360)
    pub rotation: f32,
    /// Velocity in pixels per second
    pub velocity: Vec2,
    /// Angular velocity in degrees per second
    pub angular_velocity: f32,
    pub gravity_scale: f32,
    pub flags: BodyFlags,
    pub material: Material,
    pub mass: f32,
    pub fill: Color,
    pub outline: Color,
    exclusions: HashSet<BodyKey>,
    key: BodyKey,
    rank: u64,
    last_update: f64,
}

impl Body {
    /// Validate a description and resolve its inherited fields
    pub fn new(desc: BodyDesc, defaults: &WorldConfig) -> Result<Self, BodyError> {
        desc.shape.validate()?;
        if !desc.position.is_finite() {
            return Err(BodyError::NonFinite("position"));
        }
        if !desc.velocity.is_finite() {
            return Err(BodyError::NonFinite("velocity"));
        }
        if !desc.rotation.is_finite() || !desc.angular_velocity.is_finite() {
            return Err(BodyError::NonFinite("rotation"));
        }
        if !desc.bounce.is_finite() || !desc.gravity_scale.is_finite() {
            return Err(BodyError::NonFinite("material"));
        }

        let friction = desc.friction.unwrap_or(defaults.friction);
        if !friction.is_finite() {
            return Err(BodyError::NonFinite("friction"));
        }

        let mass = desc.mass.unwrap_or_else(|| desc.shape.area());
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BodyError::NonPositiveMass(mass));
        }

        Ok(Self {
            shape: desc.shape,
            position: desc.position,
            rotation: normalize_degrees(desc.rotation),
            velocity: desc.velocity,
            angular_velocity: desc.angular_velocity,
            gravity_scale: desc.gravity_scale,
            flags: desc.flags,
            material: Material::new(desc.bounce, friction),
            mass,
            fill: desc.fill,
            outline: desc.outline,
            exclusions: desc.exclusions.into_iter().collect(),
            key: BodyKey::default(),
            rank: 0,
            last_update: 0.0,
        })
    }

    /// Called by the world once the body has a slot
    pub(crate) fn attach(&mut self, key: BodyKey, rank: u64, now: f64) {
        self.key = key;
        self.rank = rank;
        self.last_update = now;
    }

    pub fn key(&self) -> BodyKey {
        self.key
    }

    /// Creation order within the world; earlier bodies have lower ranks
    pub fn rank(&self) -> u64 {
        self.rank
    }

    /// Timestamp of the last integration step
    pub fn last_update(&self) -> f64 {
        self.last_update
    }

    pub fn has_hitbox(&self) -> bool {
        self.flags.contains(BodyFlags::HITBOX)
    }

    pub fn is_movable(&self) -> bool {
        self.flags.contains(BodyFlags::MOVABLE)
    }

    pub fn is_drawn(&self) -> bool {
        self.flags.contains(BodyFlags::DRAW)
    }

    pub fn width(&self) -> f32 {
        self.shape.width()
    }

    pub fn height(&self) -> f32 {
        self.shape.height()
    }

    /// Never collide with `other`
    pub fn exclude(&mut self, other: BodyKey) {
        self.exclusions.insert(other);
    }

    /// Allow collisions with `other` again (from this side)
    pub fn include(&mut self, other: BodyKey) {
        self.exclusions.remove(&other);
    }

    /// Whether either body excludes the other
    pub fn excludes(&self, other: &Body) -> bool {
        self.exclusions.contains(&other.key) || other.exclusions.contains(&self.key)
    }

    /// The body's shape placed at its current position and rotation
    pub fn collider(&self) -> Collider {
        self.shape.collider(self.position, self.rotation)
    }

    /// Outline points: the four rotated corners of a rectangle, or a circle's center
    pub fn points(&self) -> Vec<Vec2> {
        match self.collider() {
            Collider::Rect(rect) => rect.corners().to_vec(),
            Collider::Circle(circle) => vec![circle.center],
        }
    }

    /// Check if a point is inside or on the body
    pub fn is_inside(&self, point: Vec2) -> bool {
        self.collider().contains(point)
    }

    /// Check if this body overlaps another
    ///
    /// Ignores hitbox flags and exclusions; the world applies those.
    pub fn collides(&self, other: &Body) -> bool {
        colliders_overlap(&self.collider(), &other.collider())
    }

    /// Advance gravity, position, rotation and damping to `now`
    pub fn integrate(&mut self, now: f64, gravity: f32) {
        let elapsed = (now - self.last_update).max(0.0) as f32;
        let friction = self.material.friction;

        self.velocity.y += gravity * self.gravity_scale * elapsed;
        self.position += self.velocity * elapsed;
        self.rotation = normalize_degrees(self.rotation + self.angular_velocity * elapsed);

        self.velocity.x -= self.velocity.x * friction * elapsed;
        self.velocity.y -= self.velocity.y * friction * elapsed;
        self.angular_velocity -= self.angular_velocity * friction * elapsed;

        self.last_update = now;
    }

    /// Issue this body's draw command
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        match self.collider() {
            Collider::Rect(rect) => surface.draw_polygon(&rect.corners(), self.fill, self.outline),
            Collider::Circle(circle) => {
                surface.draw_circle(circle.center, circle.radius, self.fill, self.outline)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WorldConfig {
        WorldConfig::default()
    }

    #[test]
    fn test_friction_inherits_world_default() {
        let cfg = WorldConfig { friction: 0.25, ..config() };
        let body = Body::new(BodyDesc::circle(Vec2::ZERO, 10.0), &cfg).unwrap();
        assert_eq!(body.material.friction, 0.25);

        let body = Body::new(BodyDesc::circle(Vec2::ZERO, 10.0).with_friction(0.0), &cfg).unwrap();
        assert_eq!(body.material.friction, 0.0);
    }

    #[test]
    fn test_mass_defaults_to_area() {
        let rect = Body::new(BodyDesc::rectangle(Vec2::ZERO, 4.0, 5.0), &config()).unwrap();
        assert_eq!(rect.mass, 20.0);

        let circle = Body::new(BodyDesc::circle(Vec2::ZERO, 2.0), &config()).unwrap();
        assert!((circle.mass - std::f32::consts::PI).abs() < 1e-6);

        let heavy_desc = BodyDesc::circle(Vec2::ZERO, 2.0).with_mass(50.0);
        let heavy = Body::new(heavy_desc, &config()).unwrap();
        assert_eq!(heavy.mass, 50.0);
    }

    #[test]
    fn test_rejects_bad_descriptions() {
        let cfg = config();
        assert!(matches!(
            Body::new(BodyDesc::rectangle(Vec2::ZERO, 0.0, 5.0), &cfg),
            Err(BodyError::NonPositiveSize { .. })
        ));
        assert!(matches!(
            Body::new(BodyDesc::circle(Vec2::ZERO, 5.0).with_mass(0.0), &cfg),
            Err(BodyError::NonPositiveMass(_))
        ));
        assert!(matches!(
            Body::new(BodyDesc::circle(Vec2::new(f32::NAN, 0.0), 5.0), &cfg),
            Err(BodyError::NonFinite("position"))
        ));
    }

    #[test]
    fn test_from_kind() {
        let desc = BodyDesc::from_kind("circle", Vec2::ZERO, 12.0, 0.0).unwrap();
        assert_eq!(desc.shape, Shape::Circle { diameter: 12.0 });
        assert_eq!(
            BodyDesc::from_kind("oval", Vec2::ZERO, 12.0, 0.0).unwrap_err(),
            BodyError::UnknownShape("oval".to_string())
        );
    }

    #[test]
    fn test_movable_flag_leaves_gravity_alone() {
        let desc = BodyDesc::rectangle(Vec2::ZERO, 10.0, 10.0).with_movable(false);
        assert_eq!(desc.gravity_scale, 1.0);
        assert!(!desc.flags.contains(BodyFlags::MOVABLE));
        assert!(desc.flags.contains(BodyFlags::HITBOX));
    }

    #[test]
    fn test_builder_order_does_not_matter() {
        let circle = BodyDesc::circle(Vec2::ZERO, 10.0).with_friction(0.0);
        let gravity_first = circle.clone().with_gravity_scale(1.0).with_movable(false);
        let movable_first = circle.with_movable(false).with_gravity_scale(1.0);
        let mut a = Body::new(gravity_first, &config()).unwrap();
        let mut b = Body::new(movable_first, &config()).unwrap();

        a.integrate(1.0, 300.0);
        b.integrate(1.0, 300.0);

        // Immovable bodies still integrate under their own gravity scale
        assert_eq!(a.position.y, 300.0);
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.flags, b.flags);
    }

    #[test]
    fn test_rotation_normalized_on_creation() {
        let desc = BodyDesc::rectangle(Vec2::ZERO, 1.0, 1.0).with_rotation(-45.0);
        let body = Body::new(desc, &config()).unwrap();
        assert_eq!(body.rotation, 315.0);
    }

    #[test]
    fn test_rect_points_and_is_inside() {
        let body = Body::new(
            BodyDesc::rectangle(Vec2::new(50.0, 50.0), 20.0, 10.0),
            &config(),
        )
        .unwrap();
        let points = body.points();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Vec2::new(40.0, 45.0));
        assert!(body.is_inside(Vec2::new(59.0, 54.0)));
        assert!(!body.is_inside(Vec2::new(61.0, 50.0)));
    }

    #[test]
    fn test_circle_points_is_center() {
        let body = Body::new(BodyDesc::circle(Vec2::new(3.0, 4.0), 2.0), &config()).unwrap();
        assert_eq!(body.points(), vec![Vec2::new(3.0, 4.0)]);
        assert!(body.is_inside(Vec2::new(4.0, 4.0)));
        assert!(!body.is_inside(Vec2::new(4.1, 4.0)));
    }

    #[test]
    fn test_integration_without_motion_is_identity() {
        let mut body = Body::new(
            BodyDesc::rectangle(Vec2::new(10.0, 20.0), 5.0, 5.0)
                .with_rotation(30.0)
                .with_gravity_scale(0.0)
                .with_friction(0.0),
            &config(),
        )
        .unwrap();

        body.integrate(12.5, 100.0);

        assert_eq!(body.position, Vec2::new(10.0, 20.0));
        assert_eq!(body.rotation, 30.0);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.last_update(), 12.5);
    }

    #[test]
    fn test_friction_is_multiplicative_damping() {
        let dt = 0.016_f64;
        let mut body = Body::new(
            BodyDesc::circle(Vec2::ZERO, 10.0)
                .with_velocity(Vec2::new(100.0, 0.0))
                .with_gravity_scale(0.0)
                .with_friction(1.0),
            &config(),
        )
        .unwrap();

        body.integrate(dt, 100.0);

        let elapsed = dt as f32;
        assert_eq!(body.velocity.x, 100.0 - 100.0 * 1.0 * elapsed);
        assert_eq!(body.position.x, 100.0 * elapsed);
    }

    #[test]
    fn test_large_friction_step_is_not_clamped() {
        let mut body = Body::new(
            BodyDesc::circle(Vec2::ZERO, 10.0)
                .with_velocity(Vec2::new(10.0, 0.0))
                .with_gravity_scale(0.0)
                .with_friction(3.0),
            &config(),
        )
        .unwrap();

        body.integrate(1.0, 0.0);

        // 10 - 10 * 3 * 1 overshoots past zero
        assert_eq!(body.velocity.x, -20.0);
    }

    #[test]
    fn test_gravity_integration() {
        let mut body = Body::new(
            BodyDesc::circle(Vec2::ZERO, 10.0).with_friction(0.0).with_gravity_scale(2.0),
            &config(),
        )
        .unwrap();

        body.integrate(0.5, 100.0);

        // dy = 100 * 2 * 0.5 = 100, applied before the position update
        assert_eq!(body.velocity.y, 100.0);
        assert_eq!(body.position.y, 50.0);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut body = Body::new(
            BodyDesc::rectangle(Vec2::ZERO, 5.0, 5.0)
                .with_rotation(350.0)
                .with_angular_velocity(20.0)
                .with_gravity_scale(0.0)
                .with_friction(0.0),
            &config(),
        )
        .unwrap();

        body.integrate(1.0, 0.0);
        assert!((body.rotation - 10.0).abs() < 1e-4);

        body.angular_velocity = -30.0;
        body.integrate(2.0, 0.0);
        assert!((body.rotation - 340.0).abs() < 1e-4);
    }

    #[test]
    fn test_exclusion_is_symmetric() {
        let cfg = config();
        let mut a = Body::new(BodyDesc::circle(Vec2::ZERO, 1.0), &cfg).unwrap();
        let mut b = Body::new(BodyDesc::circle(Vec2::ZERO, 1.0), &cfg).unwrap();
        let mut keys: slotmap::SlotMap<BodyKey, ()> = slotmap::SlotMap::with_key();
        a.attach(keys.insert(()), 0, 0.0);
        b.attach(keys.insert(()), 1, 0.0);

        assert!(!a.excludes(&b));
        a.exclude(b.key());
        assert!(a.excludes(&b));
        assert!(b.excludes(&a));
        a.include(b.key());
        assert!(!b.excludes(&a));
    }
}
