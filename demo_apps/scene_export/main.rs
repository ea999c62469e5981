//! Exports a small sample scene into a directory.
//!
//! ```text
//! cargo run -p scene_export -- [OUT_DIR] [SETTINGS_JSON]
//! ```
//!
//! Writes `game.zip` (page plus models) and the single-file `game.html`.
//! Set `RUST_LOG=debug` to see what the emitter and packager are doing.

use std::f32::consts::FRAC_PI_4;
use std::sync::Arc;

use anyhow::Context;
use glam::Vec3;
use stagecraft::prelude::*;

fn build_scene() -> anyhow::Result<SceneState> {
    let mut scene = SceneState::new();

    scene.add(
        SceneObject::primitive(PrimitiveType::Box, Color::from_hex(0xff0000))
            .named("Crate")
            .at(Vec3::new(1.0, 0.0, -2.0))
            .rotated(Vec3::new(0.0, FRAC_PI_4, 0.0)),
    )?;
    scene.add(
        SceneObject::primitive(PrimitiveType::Sphere, Color::from_hex(0x3399ff))
            .at(Vec3::new(-1.5, 0.5, -3.0))
            .scaled(Vec3::splat(0.5)),
    )?;
    scene.add(SceneObject::primitive(PrimitiveType::Cone, Color::from_hex(0xffcc00)).at(Vec3::new(0.0, 0.0, -5.0)))?;
    scene.add(SceneObject::point_light(Color::WHITE, 1.5, 20.0, Vec3::new(0.0, 4.0, 0.0)))?;

    // Not a real glTF file; enough to show the archive layout.
    scene.add(SceneObject::model("chair.glb", b"glTF placeholder".to_vec()).at(Vec3::new(2.0, -2.0, -4.0)))?;

    Ok(scene)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let out_dir = args.next().unwrap_or_else(|| "export".to_string());
    let settings = match args.next() {
        Some(path) => ExportSettings::from_json_file(&path).with_context(|| format!("reading settings from {path}"))?,
        None => ExportSettings::default(),
    };

    let scene = build_scene()?;
    log::info!("Sample scene has {} objects", scene.len());

    let mut trigger = ExportTrigger::new(settings, Arc::new(DirectorySink::new(&out_dir)), TextSurface::new());

    trigger.toggle_code_view(&scene);
    log::info!("Code view holds {} lines", trigger.surface().code().lines().count());

    let task = trigger.export_game(&scene);
    let html = trigger.export_html(&scene)?;
    let archive = task.wait()?;

    println!("{} ({} bytes): {}", archive.file_name, archive.size, archive.entries.join(", "));
    println!("{} ({} bytes)", html.file_name, html.size);
    Ok(())
}
