//! The playground scene: a swinging paddle, a ramp with a falling ball and two
//! sliding blocks
//!
//! Besides building the bodies, the demo plays the part of game logic: between
//! ticks it steers the paddle, bounces a block back and forth, recolors bodies
//! that touch and respawns the ball once it falls off the ramp.

use rigid2d_math::{rotate_point, Vec2};
use rigid2d_physics::{BodyDesc, BodyKey, Clock, Color, World, WorldConfig};

use super::scene_builder::{SceneBuilder, SceneError};

const PIVOT: Vec2 = Vec2::new(320.0, 320.0);
const BALL_SPAWN: Vec2 = Vec2::new(200.0, 220.0);
const BALL_RESET_Y: f32 = 400.0;
const PADDLE_MIN_ANGLE: f32 = 271.0;
const PADDLE_MAX_ANGLE: f32 = 359.0;
const SLIDER_MIN_X: f32 = 350.0;
const SLIDER_MAX_X: f32 = 420.0;

/// Keys of the demo's bodies
pub struct DemoScene {
    pub world: World,
    paddle: BodyKey,
    marker: BodyKey,
    block: BodyKey,
    slider: BodyKey,
    ball: BodyKey,
    respawns: u32,
}

impl DemoScene {
    /// Build the demo into a new world
    pub fn build(
        config: WorldConfig,
        width: f32,
        height: f32,
        clock: Box<dyn Clock>,
    ) -> Result<Self, SceneError> {
        let floating = |desc: BodyDesc| desc.with_gravity_scale(0.0);

        let scene = SceneBuilder::with_clock(config, width, height, clock)
            .add_body(
                "paddle",
                floating(BodyDesc::rectangle(PIVOT, 100.0, 20.0))
                    .with_movable(false)
                    .with_angular_velocity(-20.0),
            )
            .add_body(
                "marker",
                floating(BodyDesc::circle(Vec2::new(370.0, 320.0), 20.0)).with_movable(false),
            )
            .add_body("block", floating(BodyDesc::rectangle(Vec2::new(320.0, 420.0), 50.0, 25.0)))
            .add_body(
                "slider",
                floating(BodyDesc::rectangle(Vec2::new(420.0, 420.0), 50.0, 25.0))
                    .with_rotation(45.0)
                    .with_velocity(Vec2::new(20.0, 0.0)),
            )
            .exclude("paddle", "marker")
            .exclude("block", "slider")
            .add_ramp("ramp", Vec2::new(200.0, 320.0), 100.0, 20.0, -45.0)
            .add_ball("ball", BALL_SPAWN, 20.0)
            .build()?;

        let paddle = scene.require("paddle")?;
        let marker = scene.require("marker")?;
        let block = scene.require("block")?;
        let slider = scene.require("slider")?;
        let ball = scene.require("ball")?;

        log::info!("Demo scene ready with {} bodies", scene.world.body_count());

        Ok(Self {
            world: scene.world,
            paddle,
            marker,
            block,
            slider,
            ball,
            respawns: 0,
        })
    }

    /// How many times the ball has been put back on the ramp
    pub fn respawns(&self) -> u32 {
        self.respawns
    }

    /// Apply the demo's game logic between ticks
    pub fn update(&mut self) {
        self.swing_paddle();
        self.highlight_contact(self.paddle, self.marker);
        self.highlight_contact(self.slider, self.block);
        self.bounce_slider();
        self.respawn_ball();
    }

    /// Keep the paddle's end pinned to the pivot and reverse it at the limits
    fn swing_paddle(&mut self) {
        if let Some(paddle) = self.world.get_body_mut(self.paddle) {
            let offset = rotate_point(
                Vec2::new(paddle.width() / 2.0 - 10.0, 0.0),
                paddle.rotation.to_radians(),
            );
            paddle.position = PIVOT + offset;
            if paddle.rotation.clamp(PADDLE_MIN_ANGLE, PADDLE_MAX_ANGLE) != paddle.rotation {
                paddle.angular_velocity = -paddle.angular_velocity;
            }
        }
    }

    /// Paint both bodies green while they overlap, red otherwise
    fn highlight_contact(&mut self, a: BodyKey, b: BodyKey) {
        let touching = match (self.world.get_body(a), self.world.get_body(b)) {
            (Some(body_a), Some(body_b)) => body_a.collides(body_b),
            _ => return,
        };
        let fill = if touching { Color::GREEN } else { Color::RED };
        for key in [a, b] {
            if let Some(body) = self.world.get_body_mut(key) {
                body.fill = fill;
            }
        }
    }

    fn bounce_slider(&mut self) {
        if let Some(slider) = self.world.get_body_mut(self.slider) {
            if slider.position.x < SLIDER_MIN_X || slider.position.x > SLIDER_MAX_X {
                slider.velocity.x = -slider.velocity.x;
            }
        }
    }

    fn respawn_ball(&mut self) {
        if let Some(ball) = self.world.get_body_mut(self.ball) {
            if ball.position.y > BALL_RESET_Y {
                ball.position = BALL_SPAWN;
                ball.velocity = Vec2::ZERO;
                self.respawns += 1;
                log::debug!("Ball respawned ({} so far)", self.respawns);
            }
        }
    }
}
