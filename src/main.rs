use std::{fs::File, io::BufWriter, time::Instant};

use anyhow::Context;
use log::info;

mod camera;
mod hit;
mod image;
mod interval;
mod material;
mod ppm;
mod ray;
mod rng;
mod scene;
mod scene_parser;
mod sphere;
mod trace;
mod types;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(output_file_name) = args.next() else {
        anyhow::bail!("usage: one-weekend-rt <output.ppm> [scene.json]");
    };

    let setup = match args.next() {
        Some(scene_file_name) => {
            let text = std::fs::read_to_string(&scene_file_name)
                .with_context(|| format!("cannot read scene file {scene_file_name}"))?;
            scene_parser::from_json(&text)
                .with_context(|| format!("invalid scene file {scene_file_name}"))?
        }
        None => {
            info!("no scene file given, rendering the built-in demo scene");
            scene_parser::demo()?
        }
    };

    info!(
        "rendering {}x{} ({} spheres, {} materials, seed {})",
        setup.camera.image_width(),
        setup.camera.image_height(),
        setup.scene.sphere_count(),
        setup.scene.material_count(),
        setup.seed,
    );

    let started = Instant::now();
    let image = setup.camera.render(&setup.scene, setup.seed);
    info!("render finished in {:.2?}", started.elapsed());

    let file = File::create(&output_file_name)
        .with_context(|| format!("cannot create output file {output_file_name}"))?;
    ppm::write_ppm(&image, BufWriter::new(file))
        .with_context(|| format!("cannot write {output_file_name}"))?;

    Ok(())
}
