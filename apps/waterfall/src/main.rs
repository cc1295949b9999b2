mod config;
mod demo;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use waterfall::{Rect, Scene, Size, WaterfallLayout};

use crate::config::Config;
use crate::demo::{demo_scene, DemoReport};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the JSON report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting waterfall demo v{}", env!("CARGO_PKG_VERSION"));

    let scene = match &config.scene_path {
        Some(path) => Scene::load(path)
            .with_context(|| format!("Failed to load scene from {}", path.display()))?,
        None => demo_scene(config.column_count, config.demo_items, config.demo_seed),
    };
    if scene.sections.is_empty() {
        warn!("Scene has no sections; content will be empty");
    }

    let mut layout = WaterfallLayout::new(scene.layout.clone()).with_overrides(scene.overrides());
    layout.set_viewport(Size::new(config.viewport_width, config.viewport_height));
    layout.prepare(&scene).context("Layout pass failed")?;

    let content_size = layout.content_size();
    info!(
        sections = scene.sections.len(),
        items = scene.total_items(),
        width = content_size.width,
        height = content_size.height,
        "Layout prepared"
    );

    let viewport = Rect::new(0.0, 0.0, config.viewport_width, config.viewport_height);
    let visible = layout.elements_in_rect(&viewport);
    info!(visible = visible.len(), "First screen queried");

    let elements = layout
        .result()
        .map(|r| r.elements.as_slice())
        .unwrap_or_default();
    let report = DemoReport {
        content_size,
        total_elements: elements.len(),
        visible,
        elements,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
