use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use winit::event_loop::EventLoop;

use scene_demos::app::App;
use scene_demos::cli::Cli;
use scene_demos::clock::{Clock, FixedStep};
use scene_demos::config::DemoConfig;
use scene_demos::driver::FrameDriver;
use scene_demos::renderer::TraceRenderer;
use scene_demos::scene::SceneContext;
use scene_demos::window::Viewport;

fn load_config(cli: &Cli) -> Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(assets) = &cli.assets {
        config.asset_root = Some(assets.clone());
    }
    Ok(config)
}

fn report_missing_assets(scene: &SceneContext, config: &DemoConfig) {
    let Some(root) = &config.asset_root else {
        return;
    };

    let missing = scene.missing_assets(root);
    for path in &missing {
        log::warn!("Missing asset: {:?}", path);
    }
    if missing.is_empty() {
        log::info!("All {} assets found under {:?}", scene.texture_paths().len(), root);
    }
}

fn run_headless(cli: &Cli, mut scene: SceneContext) -> Result<()> {
    let mut driver = FrameDriver::new(FixedStep::starting_at(cli.fps, cli.start_time));
    if let Some(limit) = cli.frame_limit() {
        driver = driver.with_frame_limit(limit);
    }

    let stdout = io::stdout();
    let mut renderer = TraceRenderer::new(stdout.lock(), cli.trace_every);

    let rendered = driver.run(&mut scene, &mut renderer)?;

    let mut out = renderer.into_inner();
    out.flush().context("Failed to flush trace output")?;
    log::info!("Rendered {} frames headless", rendered);
    Ok(())
}

fn run_windowed(cli: &Cli, scene: SceneContext) -> Result<()> {
    let mut driver = FrameDriver::new(Clock::new());
    if let Some(limit) = cli.frame_limit() {
        driver = driver.with_frame_limit(limit);
    }

    let event_loop =
        EventLoop::new().map_err(|e| anyhow::anyhow!("Failed to create event loop: {}", e))?;
    let mut app = App::new(cli.scene.title(), scene, driver);

    log::info!("{} - Escape to quit", cli.scene.title());
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow::anyhow!("Event loop failed: {}", e))?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let viewport = Viewport::new(cli.width, cli.height, cli.pixel_ratio);
    let scene = cli.scene.build(viewport, &config);
    report_missing_assets(&scene, &config);

    if cli.headless {
        run_headless(&cli, scene)
    } else {
        run_windowed(&cli, scene)
    }
}
