use glam::DVec2;
use rand::Rng;

use crate::error::{Error, Result};
use crate::physics::Field;

/// A circular particle. Radius and mass are fixed at creation, only the
/// position and velocity change while the simulation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    radius: f64,
    mass: f64,
}

impl Particle {
    /// Errors with `Error::InvalidParticle` if `radius` is not a finite positive
    /// number, `mass` is not a finite normal positive number, or a
    /// position/velocity component is NaN/inf.
    pub fn new(position: DVec2, velocity: DVec2, radius: f64, mass: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParticle(format!(
                "radius must be finite and > 0, got {radius}"
            )));
        }
        // subnormal masses have an infinite inverse
        if !mass.is_finite() || mass < f64::MIN_POSITIVE {
            return Err(Error::InvalidParticle(format!(
                "mass must be finite and at least {}, got {mass}",
                f64::MIN_POSITIVE
            )));
        }
        if !position.is_finite() {
            return Err(Error::InvalidParticle(format!(
                "position must be finite, got {position}"
            )));
        }
        if !velocity.is_finite() {
            return Err(Error::InvalidParticle(format!(
                "velocity must be finite, got {velocity}"
            )));
        }

        Ok(Self {
            position,
            velocity,
            radius,
            mass,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn inverse_mass(&self) -> f64 {
        1.0 / self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Advances the particle by one unit of time and bounces it off the walls.
    ///
    /// A particle that crosses a wall is snapped back to the boundary rather
    /// than reflected by the overshoot, and the velocity component along that
    /// axis is negated. Axes are handled independently, x before y.
    pub fn move_within(&mut self, field: &Field) {
        self.position += self.velocity;

        let (width, height) = field.size();

        if self.position.x - self.radius < 0.0 {
            self.position.x = self.radius;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.x + self.radius >= width {
            self.position.x = width - self.radius - 1.0;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y - self.radius < 0.0 {
            self.position.y = self.radius;
            self.velocity.y = -self.velocity.y;
        }
        if self.position.y + self.radius >= height {
            self.position.y = height - self.radius - 1.0;
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Scatters `num_particles` particles over whole cells of the field.
///
/// Every particle starts at the integer cell `trunc(radius + k)` on each axis,
/// so a fractional radius can start up to one cell closer than `radius` to the
/// low walls. Each velocity component has a magnitude of 1, 2 or 3 cells per
/// tick with a random sign.
pub fn generate_particles<R: Rng + ?Sized>(
    rng: &mut R,
    num_particles: usize,
    field: &Field,
    radius: f64,
    mass: f64,
) -> Result<Vec<Particle>> {
    field.check_radius(radius)?;

    let (width, height) = field.size();
    // check_radius guarantees both spans are at least 1
    let span_x = (width - (2.0 * radius).floor()) as u32;
    let span_y = (height - (2.0 * radius).floor()) as u32;

    let mut particles = Vec::with_capacity(num_particles);
    for _ in 0..num_particles {
        let position = DVec2::new(
            (radius + rng.gen_range(0..span_x) as f64).trunc(),
            (radius + rng.gen_range(0..span_y) as f64).trunc(),
        );
        let velocity = DVec2::new(random_speed(rng), random_speed(rng));

        particles.push(Particle::new(position, velocity, radius, mass)?);
    }

    Ok(particles)
}

fn random_speed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let magnitude = rng.gen_range(1..=3) as f64;
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
