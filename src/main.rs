mod cli;
mod error;
mod framepace;
mod particle;
mod physics;
mod render;
mod utils;

use std::{io, time::Duration};

use clap::Parser;
use framepace::Framepacer;
use log::{info, trace};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    physics::{Field, Simulation},
    render::TextRenderer,
};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Collect Arguments
    let args = cli::Args::parse();

    // Setup
    let field = Field::new(args.width, args.height)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let particles =
        particle::generate_particles(&mut rng, args.particles, &field, args.radius, args.mass)?;

    let mut sim = Simulation::new(field, particles)?;
    let mut renderer = TextRenderer::new(sim.field());
    let mut framepace = Framepacer::new();
    let frame_delay = Duration::from_millis(args.frame_delay);

    info!(
        "{} particles in a {}x{} field, {} ms per tick",
        sim.particles().len(),
        field.width(),
        field.height(),
        args.frame_delay
    );
    if let Some(first) = sim.particles().first() {
        info!("radius {}, mass {}", first.radius(), first.mass());
    }
    info!(
        "kinetic energy {:.3}, momentum {}",
        sim.kinetic_energy(),
        sim.momentum()
    );

    let mut stdout = io::stdout().lock();
    while args.frames.map_or(true, |frames| sim.tick() < frames) {
        framepace.begin_frame();

        sim.step();
        renderer.draw(sim.particles());
        renderer.present(&mut stdout)?;

        framepace.end_frame(frame_delay);
        trace!(
            "tick {} in {:.2} ms ({:.1} fps)",
            sim.tick(),
            framepace.frametime() * 1000.0,
            framepace.framerate()
        );
    }

    info!(
        "stopped after {} ticks, kinetic energy {:.3}, momentum {}",
        sim.tick(),
        sim.kinetic_energy(),
        sim.momentum()
    );

    Ok(())
}
