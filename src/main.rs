//! rigid2d - headless demo runner
//!
//! Builds the playground scene and runs it for the configured duration,
//! drawing to a logging surface.

use rigid2d::config::AppConfig;
use rigid2d::scene::DemoScene;
use rigid2d::systems::{LogSurface, SimulationSystem};

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging; RUST_LOG still takes precedence
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting rigid2d");

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let width = config.viewport.width as f32;
    let height = config.viewport.height as f32;
    let mut surface = LogSurface::new(width, height, config.debug.log_draw_calls);
    let mut simulation = SimulationSystem::new(&config.simulation);

    let mut demo = match DemoScene::build(
        config.physics.to_world_config(),
        width,
        height,
        simulation.clock(),
    ) {
        Ok(demo) => demo,
        Err(e) => {
            log::error!("Failed to build demo scene: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Running {} ticks at {} Hz (gravity {}, friction {})",
        simulation.total_ticks(),
        config.simulation.tick_rate,
        config.physics.gravity,
        config.physics.friction
    );

    let result = simulation.run(&mut demo, &mut surface);

    log::info!(
        "Simulated {:.2}s in {} ticks ({:.3}s wall), {} draw calls, {} ball respawns",
        result.simulated_secs,
        result.ticks,
        result.wall_secs,
        surface.draw_calls(),
        demo.respawns()
    );
    for body in demo.world.bodies() {
        log::info!(
            "{} at ({:.1}, {:.1}) rotation {:.1} velocity ({:.1}, {:.1})",
            body.shape.kind(),
            body.position.x,
            body.position.y,
            body.rotation,
            body.velocity.x,
            body.velocity.y
        );
    }
}
