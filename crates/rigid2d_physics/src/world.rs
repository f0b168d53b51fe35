//! Simulation world and per-tick orchestration

use rigid2d_math::Vec2;
use slotmap::SlotMap;

use crate::body::{Body, BodyDesc, BodyKey};
use crate::clock::{Clock, SystemClock};
use crate::error::BodyError;
use crate::render::RenderSurface;
use crate::response::{resolve, RectangleResponse};

/// Configuration for the simulation
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Gravity acceleration in px/s² (positive = down the screen)
    pub gravity: f32,
    /// Default damping rate for bodies that do not set their own
    pub friction: f32,
    /// What happens when two rectangles collide
    pub rectangle_response: RectangleResponse,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: 100.0,
            friction: 0.1,
            rectangle_response: RectangleResponse::PassThrough,
        }
    }
}

impl WorldConfig {
    /// Create a config with the given gravity and default friction
    pub fn new(gravity: f32, friction: f32) -> Self {
        Self {
            gravity,
            friction,
            ..Self::default()
        }
    }

    pub fn with_rectangle_response(mut self, response: RectangleResponse) -> Self {
        self.rectangle_response = response;
        self
    }
}

/// The world owning every body
///
/// Bodies are processed in creation order. When two movable bodies collide,
/// only the later one reacts, so each pair is resolved once per tick.
pub struct World {
    bodies: SlotMap<BodyKey, Body>,
    /// Keys sorted by body rank
    order: Vec<BodyKey>,
    next_rank: u64,
    clock: Box<dyn Clock>,
    width: f32,
    height: f32,
    pub config: WorldConfig,
}

impl World {
    /// Create a world for a `width` x `height` viewport driven by the system clock
    pub fn new(config: WorldConfig, width: f32, height: f32) -> Self {
        Self::with_clock(config, width, height, Box::new(SystemClock::new()))
    }

    /// Create a world sized to a render surface
    pub fn for_surface(config: WorldConfig, surface: &dyn RenderSurface) -> Self {
        Self::new(config, surface.width(), surface.height())
    }

    /// Create a world with a custom time source
    pub fn with_clock(config: WorldConfig, width: f32, height: f32, clock: Box<dyn Clock>) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            order: Vec::new(),
            next_rank: 0,
            clock,
            width,
            height,
            config,
        }
    }

    /// Viewport width in pixels
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Viewport height in pixels
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current time according to the world's clock
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Add a body and return its key
    ///
    /// Inherited fields are resolved against this world's config here. The
    /// body's integration starts from the current clock time.
    pub fn add_body(&mut self, desc: BodyDesc) -> Result<BodyKey, BodyError> {
        let body = Body::new(desc, &self.config)?;
        let rank = self.next_rank;
        let now = self.clock.now();
        self.next_rank += 1;

        let key = self.bodies.insert_with_key(|key| {
            let mut body = body;
            body.attach(key, rank, now);
            body
        });
        self.order.push(key);

        log::debug!(
            "Added {} body {:?} (rank {}) at ({:.1}, {:.1})",
            self.bodies[key].shape.kind(),
            key,
            rank,
            self.bodies[key].position.x,
            self.bodies[key].position.y
        );
        Ok(key)
    }

    /// Remove a body and return it
    ///
    /// The remaining bodies keep their relative order.
    pub fn remove_body(&mut self, key: BodyKey) -> Option<Body> {
        let body = self.bodies.remove(key)?;
        self.order.retain(|&k| k != key);
        log::debug!("Removed body {:?}", key);
        Some(body)
    }

    /// Get an immutable reference to a body by key
    pub fn get_body(&self, key: BodyKey) -> Option<&Body> {
        self.bodies.get(key)
    }

    /// Get a mutable reference to a body by key
    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut Body> {
        self.bodies.get_mut(key)
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Iterate over body keys in creation order
    pub fn body_keys(&self) -> impl Iterator<Item = BodyKey> + '_ {
        self.order.iter().copied()
    }

    /// Iterate over bodies in creation order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.order.iter().map(move |&key| &self.bodies[key])
    }

    /// Stop two bodies from ever colliding with each other
    ///
    /// Returns false if either key is stale.
    pub fn exclude_pair(&mut self, a: BodyKey, b: BodyKey) -> bool {
        if !self.bodies.contains_key(a) || !self.bodies.contains_key(b) {
            return false;
        }
        self.bodies[a].exclude(b);
        log::debug!("Excluded collisions between {:?} and {:?}", a, b);
        true
    }

    /// Simulate every body up to the clock's current time
    pub fn simulate_tick(&mut self) {
        let now = self.clock.now();
        self.simulate_tick_at(now);
    }

    /// Simulate every body up to `now`
    ///
    /// Each body in turn resolves its collisions and then integrates, so later
    /// bodies see earlier bodies already moved this tick.
    pub fn simulate_tick_at(&mut self, now: f64) {
        for index in 0..self.order.len() {
            let key = self.order[index];
            self.simulate_body(key, now);
        }
    }

    /// Draw every body with its draw flag set
    ///
    /// When `clear` is true the surface is erased first.
    pub fn render_tick(&self, surface: &mut dyn RenderSurface, clear: bool) {
        if clear {
            surface.clear();
        }
        for body in self.bodies().filter(|b| b.is_drawn()) {
            body.draw(surface);
        }
    }

    /// Simulate to the clock's current time, then redraw everything
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) {
        self.simulate_tick();
        self.render_tick(surface, true);
    }

    /// Simulate and draw a single body
    ///
    /// Returns false if the key is stale.
    pub fn tick_body(&mut self, key: BodyKey, surface: &mut dyn RenderSurface) -> bool {
        if !self.bodies.contains_key(key) {
            return false;
        }
        let now = self.clock.now();
        self.simulate_body(key, now);
        let body = &self.bodies[key];
        if body.is_drawn() {
            body.draw(surface);
        }
        true
    }

    /// Resolve collisions for one body, then integrate it to `now`
    fn simulate_body(&mut self, key: BodyKey, now: f64) {
        let reacts = {
            let body = &self.bodies[key];
            body.has_hitbox() && body.is_movable()
        };

        if reacts {
            for index in 0..self.order.len() {
                let other_key = self.order[index];
                let response = {
                    let mover = &self.bodies[key];
                    let other = &self.bodies[other_key];
                    if !Self::reacts_to(mover, other) {
                        continue;
                    }
                    resolve(mover, other, self.config.rectangle_response)
                };

                if let Some(response) = response {
                    log::trace!(
                        "Body {:?} bounced off {:?}: velocity ({:.2}, {:.2})",
                        key,
                        other_key,
                        response.velocity.x,
                        response.velocity.y
                    );
                    self.bodies[key].velocity = response.velocity;
                    if let Some(transfer) = response.transfer {
                        self.bodies[other_key].velocity += transfer;
                    }
                }
            }
        }

        let gravity = self.config.gravity;
        self.bodies[key].integrate(now, gravity);
    }

    /// Whether `mover` should react to `other` this tick
    ///
    /// Movable partners are only reacted to by the later-ranked body of the pair.
    fn reacts_to(mover: &Body, other: &Body) -> bool {
        other.has_hitbox()
            && other.key() != mover.key()
            && !mover.excludes(other)
            && (!other.is_movable() || other.rank() < mover.rank())
            && mover.collides(other)
    }

    /// Bodies whose shape contains `point`, in creation order
    pub fn bodies_at(&self, point: Vec2) -> impl Iterator<Item = BodyKey> + '_ {
        self.bodies()
            .filter(move |body| body.is_inside(point))
            .map(|body| body.key())
    }
}
