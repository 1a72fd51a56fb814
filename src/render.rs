use std::io::Write;

use crate::error::Result;
use crate::particle::Particle;
use crate::physics::Field;

/// Clears the terminal and moves the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

const EMPTY_CELL: u8 = b' ';
const PARTICLE_CELL: u8 = b'O';

/// Draws particles as characters on a fixed size text grid.
pub struct TextRenderer {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl TextRenderer {
    pub fn new(field: &Field) -> Self {
        let width = field.width() as usize;
        let height = field.height() as usize;

        Self {
            width,
            height,
            cells: vec![EMPTY_CELL; width * height],
        }
    }

    /// Redraws the grid, one cell per particle center. Centers outside the
    /// grid are skipped.
    pub fn draw(&mut self, particles: &[Particle]) {
        self.cells.fill(EMPTY_CELL);

        for particle in particles {
            let px = particle.position.x.floor();
            let py = particle.position.y.floor();
            if px < 0.0 || py < 0.0 || px >= self.width as f64 || py >= self.height as f64 {
                continue;
            }

            self.cells[py as usize * self.width + px as usize] = PARTICLE_CELL;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    /// Writes the last drawn grid to `out`, replacing whatever was on screen.
    pub fn present<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
        for row in self.rows() {
            out.write_all(row)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;

    fn at(x: f64, y: f64) -> Particle {
        Particle::new(DVec2::new(x, y), DVec2::ZERO, 1.0, 1.0).unwrap()
    }

    #[test]
    fn particles_land_on_truncated_cells() -> Result<()> {
        let mut renderer = TextRenderer::new(&Field::new(5, 3)?);
        renderer.draw(&[at(1.9, 0.2), at(4.0, 2.99)]);

        let rows: Vec<&[u8]> = renderer.rows().collect();
        assert_eq!(rows, vec![&b" O   "[..], b"     ", b"    O"]);
        Ok(())
    }

    #[test]
    fn out_of_grid_positions_are_skipped() -> Result<()> {
        let mut renderer = TextRenderer::new(&Field::new(4, 2)?);
        renderer.draw(&[at(-0.5, 1.0), at(4.0, 0.0), at(1.0, 2.0), at(3.5, 1.5)]);

        let rows: Vec<&[u8]> = renderer.rows().collect();
        assert_eq!(rows, vec![&b"    "[..], b"   O"]);
        Ok(())
    }

    #[test]
    fn redraw_clears_previous_frame() -> Result<()> {
        let mut renderer = TextRenderer::new(&Field::new(3, 1)?);
        renderer.draw(&[at(0.0, 0.0)]);
        renderer.draw(&[at(2.0, 0.0)]);

        let rows: Vec<&[u8]> = renderer.rows().collect();
        assert_eq!(rows, vec![&b"  O"[..]]);
        Ok(())
    }

    #[test]
    fn present_clears_screen_then_writes_rows() -> Result<()> {
        let mut renderer = TextRenderer::new(&Field::new(3, 2)?);
        renderer.draw(&[at(1.0, 1.0)]);

        let mut out = Vec::new();
        renderer.present(&mut out)?;
        assert_eq!(out, b"\x1B[2J\x1B[H   \n O \n");
        Ok(())
    }
}
