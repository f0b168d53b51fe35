//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for populating a world with named bodies.

use std::collections::HashMap;
use std::fmt;

use rigid2d_math::Vec2;
use rigid2d_physics::{BodyDesc, BodyError, BodyKey, Clock, Color, World, WorldConfig};

/// Error type for scene construction
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A body description was rejected by the world
    Body { name: String, source: BodyError },
    /// A body name that was never added
    UnknownBody(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Body { name, source } => write!(f, "Invalid body '{}': {}", name, source),
            SceneError::UnknownBody(name) => write!(f, "No body named '{}' in scene", name),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Body { source, .. } => Some(source),
            SceneError::UnknownBody(_) => None,
        }
    }
}

/// A populated world plus the names given to its bodies
pub struct Scene {
    pub world: World,
    names: HashMap<String, BodyKey>,
}

impl Scene {
    /// Look up a body key by name
    pub fn key(&self, name: &str) -> Option<BodyKey> {
        self.names.get(name).copied()
    }

    /// Look up a body key that must exist
    pub fn require(&self, name: &str) -> Result<BodyKey, SceneError> {
        self.key(name).ok_or_else(|| SceneError::UnknownBody(name.to_string()))
    }
}

/// Builder for constructing scenes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new(WorldConfig::new(300.0, 0.0), 640.0, 480.0)
///     .add_floor("floor", 460.0, 600.0)
///     .add_ball("ball", Vec2::new(320.0, 100.0), 20.0)
///     .build()?;
/// ```
///
/// The first error is remembered and reported by [`SceneBuilder::build`].
pub struct SceneBuilder {
    world: World,
    names: HashMap<String, BodyKey>,
    error: Option<SceneError>,
}

impl SceneBuilder {
    /// Create a builder for a world using the system clock
    pub fn new(config: WorldConfig, width: f32, height: f32) -> Self {
        Self::from_world(World::new(config, width, height))
    }

    /// Create a builder for a world driven by `clock`
    pub fn with_clock(config: WorldConfig, width: f32, height: f32, clock: Box<dyn Clock>) -> Self {
        Self::from_world(World::with_clock(config, width, height, clock))
    }

    fn from_world(world: World) -> Self {
        Self {
            world,
            names: HashMap::new(),
            error: None,
        }
    }

    /// Add any body under a name
    pub fn add_body(mut self, name: &str, desc: BodyDesc) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.world.add_body(desc) {
            Ok(key) => {
                self.names.insert(name.to_string(), key);
            }
            Err(source) => {
                log::warn!("Rejected body '{}': {}", name, source);
                self.error = Some(SceneError::Body {
                    name: name.to_string(),
                    source,
                });
            }
        }
        self
    }

    /// Add a static horizontal floor whose top surface sits at `top_y`
    ///
    /// The floor is centered horizontally in the viewport and 20px thick.
    pub fn add_floor(self, name: &str, top_y: f32, width: f32) -> Self {
        let thickness = 20.0;
        let center = Vec2::new(self.world.width() / 2.0, top_y + thickness / 2.0);
        self.add_body(
            name,
            BodyDesc::rectangle(center, width, thickness)
                .with_movable(false)
                .with_gravity_scale(0.0)
                .with_colors(Color::GRAY, Color::BLACK),
        )
    }

    /// Add a static tilted rectangle
    pub fn add_ramp(self, name: &str, center: Vec2, width: f32, height: f32, degrees: f32) -> Self {
        self.add_body(
            name,
            BodyDesc::rectangle(center, width, height)
                .with_rotation(degrees)
                .with_movable(false)
                .with_gravity_scale(0.0)
                .with_colors(Color::GREEN, Color::BLACK),
        )
    }

    /// Add a falling circle
    pub fn add_ball(self, name: &str, center: Vec2, diameter: f32) -> Self {
        self.add_body(name, BodyDesc::circle(center, diameter))
    }

    /// Stop two named bodies from colliding
    pub fn exclude(mut self, a: &str, b: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        match (self.names.get(a).copied(), self.names.get(b).copied()) {
            (Some(key_a), Some(key_b)) => {
                self.world.exclude_pair(key_a, key_b);
            }
            (None, _) => self.error = Some(SceneError::UnknownBody(a.to_string())),
            (_, None) => self.error = Some(SceneError::UnknownBody(b.to_string())),
        }
        self
    }

    /// Finish building
    pub fn build(self) -> Result<Scene, SceneError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Scene {
                world: self.world,
                names: self.names,
            }),
        }
    }
}
