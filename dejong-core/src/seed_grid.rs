// dejong-core/src/seed_grid.rs

use crate::SketchError;
use rand::Rng;

/// Approximately square grid of seed points over `[-1, 1] × [-1, 1]`.
///
/// Seed `i` sits in column `i mod s` and row `floor(i / s)` where
/// `s = ceil(sqrt(count))`. The last row is only partially filled when
/// `count` is not a perfect square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedGrid {
    count: u32,
    side: u32,
}

impl SeedGrid {
    pub fn new(count: u32) -> Result<Self, SketchError> {
        if count == 0 {
            return Err(SketchError::InvalidConfiguration(
                "seed point count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            count,
            side: grid_side(count),
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Grid side length `s`.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// `(column, row)` of seed `index`.
    #[inline]
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index % self.side, index / self.side)
    }

    /// Unjittered position of seed `index`: the lower corner of its cell.
    pub fn base_point(&self, index: u32) -> (f64, f64) {
        let (col, row) = self.cell(index);
        let s = self.side as f64;
        (2.0 * col as f64 / s - 1.0, 2.0 * row as f64 / s - 1.0)
    }

    /// Width of one cell in normalized space (`2 / s`), the jitter span.
    pub fn jitter_span(&self) -> f64 {
        2.0 / self.side as f64
    }

    /// Position of seed `index` with independent jitter from `[0, 2/s)` on each axis.
    ///
    /// Draws the x jitter first, then the y jitter.
    pub fn jittered_point<R: Rng + ?Sized>(&self, index: u32, rng: &mut R) -> (f64, f64) {
        let (x, y) = self.base_point(index);
        let span = self.jitter_span();
        let jx = rng.gen_range(0.0..span);
        let jy = rng.gen_range(0.0..span);
        (x + jx, y + jy)
    }

    /// All seed points of one sweep, jittered fresh from `rng`.
    pub fn points<'a, R: Rng + ?Sized>(
        &'a self,
        rng: &'a mut R,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        (0..self.count).map(move |i| self.jittered_point(i, &mut *rng))
    }
}

/// `ceil(sqrt(count))`, computed without trusting float rounding at perfect squares.
pub fn grid_side(count: u32) -> u32 {
    let mut side = (count as f64).sqrt().ceil() as u32;
    while side > 0 && (side - 1) as u64 * (side - 1) as u64 >= count as u64 {
        side -= 1;
    }
    while (side as u64) * (side as u64) < count as u64 {
        side += 1;
    }
    side
}
