//! Tick loop system
//!
//! Runs the demo's game logic and the world's simulate-then-draw tick at a
//! fixed rate, either on a manual clock (deterministic, as fast as possible) or
//! against the wall clock (sleeping between ticks).

use std::time::{Duration, Instant};

use rigid2d_physics::{Clock, ManualClock, RenderSurface, SystemClock};

use crate::config::SimulationConfig;
use crate::scene::DemoScene;

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Ticks executed
    pub ticks: u64,
    /// Simulated seconds covered
    pub simulated_secs: f64,
    /// Wall-clock seconds spent
    pub wall_secs: f64,
}

/// Drives the tick loop
pub struct SimulationSystem {
    tick_rate: f64,
    duration_secs: f64,
    /// Present when running on a fixed timestep
    manual_clock: Option<ManualClock>,
}

impl SimulationSystem {
    /// Create a simulation system from config
    ///
    /// Non-positive tick rates fall back to 60 ticks per second.
    pub fn new(config: &SimulationConfig) -> Self {
        let tick_rate = if config.tick_rate > 0.0 { config.tick_rate } else { 60.0 };
        Self {
            tick_rate,
            duration_secs: config.duration_secs.max(0.0),
            manual_clock: config.fixed_timestep.then(|| ManualClock::new(0.0)),
        }
    }

    /// Seconds per tick
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.tick_rate
    }

    /// Number of ticks a full run performs
    pub fn total_ticks(&self) -> u64 {
        (self.duration_secs * self.tick_rate).round() as u64
    }

    /// Clock the world should read
    ///
    /// On a fixed timestep this is a handle to the clock the system advances.
    pub fn clock(&self) -> Box<dyn Clock> {
        match &self.manual_clock {
            Some(clock) => Box::new(clock.clone()),
            None => Box::new(SystemClock::new()),
        }
    }

    /// Run the whole configured duration
    pub fn run(
        &mut self,
        demo: &mut DemoScene,
        surface: &mut dyn RenderSurface,
    ) -> SimulationResult {
        let started = Instant::now();
        let total = self.total_ticks();
        let interval = self.tick_interval();

        for tick in 0..total {
            match &self.manual_clock {
                Some(clock) => clock.advance(interval),
                None => std::thread::sleep(Duration::from_secs_f64(interval)),
            }

            demo.update();
            demo.world.tick(surface);

            if tick > 0 && tick % (self.tick_rate.round() as u64).max(1) == 0 {
                log::debug!("Tick {}/{}, ball respawns: {}", tick, total, demo.respawns());
            }
        }

        SimulationResult {
            ticks: total,
            simulated_secs: total as f64 * interval,
            wall_secs: started.elapsed().as_secs_f64(),
        }
    }
}
