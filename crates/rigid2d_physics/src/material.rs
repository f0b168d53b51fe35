//! Physical material properties for collision response and damping

/// Physical material properties of a body
///
/// `bounce` scales the reflected speed after a rectangle/circle collision and
/// `friction` is a damping rate: each tick removes `friction * elapsed` of the
/// current linear and angular velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Bounce coefficient (0.0 = no bounce, 1.0 = keep full speed)
    pub bounce: f32,
    /// Velocity damping per second
    pub friction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            bounce: 1.0,
            friction: 0.1,
        }
    }
}

impl Material {
    pub fn new(bounce: f32, friction: f32) -> Self {
        Self { bounce, friction }
    }

    /// Bounce factor for a collision between two materials
    ///
    /// The coefficients multiply, so either body can absorb the impact.
    pub fn combined_bounce(&self, other: &Self) -> f32 {
        self.bounce * other.bounce
    }
}
