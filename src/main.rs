use std::path::PathBuf;

use anyhow::{Context, Result};

use texraster::{config::Scene, render};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("scene.toml"));

    log::info!("loading scene {scene_path:?}");
    let scene = Scene::load_toml(&scene_path)?;
    let texture = scene.texture.load()?;
    log::debug!("texture is {}x{}", texture.width(), texture.height());

    let image = render::render_scene(&scene, &texture);

    let out = &scene.output.path;
    image
        .save(out)
        .with_context(|| format!("failed to write image {out:?}"))?;
    log::info!("wrote {out:?}");

    Ok(())
}
