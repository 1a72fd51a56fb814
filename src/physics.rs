use glam::DVec2;

use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::utils::pair_mut;

/// Coefficient of restitution, collisions are perfectly elastic.
pub const RESTITUTION: f64 = 1.0;

/// Extra separation added when pushing overlapping particles apart.
pub const SEPARATION_BIAS: f64 = 0.01;

/// The rectangular area particles move in, `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    width: u32,
    height: u32,
}

impl Field {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidField(format!(
                "field must be at least 1x1, got {width}x{height}"
            )));
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as floating point values.
    pub fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    /// Checks that a particle of `radius` has room to be clamped into.
    ///
    /// Wall clamping keeps centers inside `[radius, dim - radius - 1]`, which is
    /// empty once `2 * radius + 1 > dim`.
    pub fn check_radius(&self, radius: f64) -> Result<()> {
        let (width, height) = self.size();
        let needed = 2.0 * radius + 1.0;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParticle(format!(
                "radius must be finite and > 0, got {radius}"
            )));
        }
        if needed > width || needed > height {
            return Err(Error::InvalidField(format!(
                "radius {radius} does not fit in a {}x{} field",
                self.width, self.height
            )));
        }

        Ok(())
    }

    pub fn contains(&self, position: DVec2) -> bool {
        let (width, height) = self.size();
        (0.0..width).contains(&position.x) && (0.0..height).contains(&position.y)
    }
}

/// Resolves a perfectly elastic collision between two overlapping particles.
///
/// Nothing happens when the centers coincide, when the circles merely touch or
/// are apart, or when the pair is already separating along the center line.
/// Otherwise the normal impulse is applied to both velocities and the pair is
/// pushed apart by half the overlap each, plus [`SEPARATION_BIAS`].
pub fn collide(a: &mut Particle, b: &mut Particle) {
    let delta = b.position - a.position;
    let distance = delta.length();
    if distance == 0.0 {
        return;
    }

    let reach = a.radius() + b.radius();
    if distance >= reach {
        return;
    }

    let normal = delta / distance;

    // Positive when b moves away from a along the normal.
    let vn = (b.velocity - a.velocity).dot(normal);
    if vn > 0.0 {
        return;
    }

    let impulse = -(1.0 + RESTITUTION) * vn / (a.inverse_mass() + b.inverse_mass());
    a.velocity -= normal * (impulse * a.inverse_mass());
    b.velocity += normal * (impulse * b.inverse_mass());

    let overlap = 0.5 * (reach - distance + SEPARATION_BIAS);
    a.position -= normal * overlap;
    b.position += normal * overlap;
}

/// Owns every particle and advances them one tick at a time.
#[derive(Debug, Clone)]
pub struct Simulation {
    field: Field,
    particles: Vec<Particle>,
    tick: u64,
}

impl Simulation {
    /// Every particle must fit the field and start inside it.
    pub fn new(field: Field, particles: Vec<Particle>) -> Result<Self> {
        for (i, particle) in particles.iter().enumerate() {
            field.check_radius(particle.radius())?;
            if !field.contains(particle.position) {
                return Err(Error::OutOfBounds(format!(
                    "particle {i} starts at {} outside the {}x{} field",
                    particle.position, field.width, field.height
                )));
            }
        }

        Ok(Self {
            field,
            particles,
            tick: 0,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Moves all particles, then resolves each unordered pair once in index
    /// order. Chained collisions within a tick depend on that order.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.move_within(&self.field);
        }

        let n = self.particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = pair_mut(&mut self.particles, i, j);
                collide(a, b);
            }
        }

        self.tick += 1;
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub fn momentum(&self) -> DVec2 {
        self.particles.iter().map(Particle::momentum).sum()
    }
}
