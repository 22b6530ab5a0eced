// dejong-core/src/coefficients.rs

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The four parameters of the trigonometric map.
///
/// Drawn wholesale on each activation and held constant for a whole sweep.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coefficients {
    pub pa: f64,
    pub pb: f64,
    pub pc: f64,
    pub pd: f64,
}

impl Coefficients {
    pub fn new(pa: f64, pb: f64, pc: f64, pd: f64) -> Self {
        Self { pa, pb, pc, pd }
    }

    /// Draw all four coefficients independently and uniformly from `[-range, range)`.
    ///
    /// `range` must be finite and positive; `SketchConfig::validate` guarantees
    /// this for configured ranges.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, range: f64) -> Self {
        Self {
            pa: rng.gen_range(-range..range),
            pb: rng.gen_range(-range..range),
            pc: rng.gen_range(-range..range),
            pd: rng.gen_range(-range..range),
        }
    }

    /// Evaluate the map at `(x, y)`:
    /// `xp = sin(pa·x) + sin(pb·y)`, `yp = sin(pc·x) + sin(pd·y)`.
    #[inline]
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        let xp = (self.pa * x).sin() + (self.pb * y).sin();
        let yp = (self.pc * x).sin() + (self.pd * y).sin();
        (xp, yp)
    }
}
