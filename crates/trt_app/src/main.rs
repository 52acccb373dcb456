//! Renders the reference scene to `out.png`.

use anyhow::{Context, Result};
use trt_core::Scene;
use trt_renderer::{render, RenderConfig};

const OUTPUT_PATH: &str = "out.png";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting tinyraytracer");

    let scene = Scene::classic();
    let config = RenderConfig::default();

    let image = render(&scene, &config);
    image
        .save_png(OUTPUT_PATH)
        .with_context(|| format!("Failed to write {}", OUTPUT_PATH))?;

    Ok(())
}
