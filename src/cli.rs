use clap::Parser;

/// Elastic collisions of circular particles, drawn as text in the terminal
#[derive(Parser, Debug)]
#[command()]
pub struct Args {
    /// Total Particles
    #[arg(short, long, default_value_t = 10)]
    pub particles: usize,

    /// Field width in character cells
    #[arg(long, default_value_t = 80)]
    pub width: u32,

    /// Field height in character cells
    #[arg(long, default_value_t = 25)]
    pub height: u32,

    /// Radius of every particle
    #[arg(short, long, default_value_t = 1.0)]
    pub radius: f64,

    /// Mass of every particle
    #[arg(short, long, default_value_t = 1.0)]
    pub mass: f64,

    /// Milliseconds between ticks
    ///
    /// `0` runs as fast as possible
    #[arg(short = 'd', long, default_value_t = 50)]
    pub frame_delay: u64,

    /// Seed for the initial particle layout, random if not given
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Stop after this many ticks instead of running until interrupted
    #[arg(short, long)]
    pub frames: Option<u64>,
}
