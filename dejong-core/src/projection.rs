// dejong-core/src/projection.rs

use crate::Origin;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Maps map output `(xp, yp)` into surface-local plot coordinates.
///
/// The scale is fixed at `width / 2π` and the center depends on where the
/// surface puts its local origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
}

impl Projection {
    /// Build the projection for a viewport of `width × height` pixels.
    pub fn new(width: u32, height: u32, origin: Origin) -> Self {
        let (center_x, center_y) = match origin {
            Origin::Center => (0.0, 0.0),
            Origin::TopLeft => (width as f64 / 2.0, height as f64 / 2.0),
        };
        Self {
            center_x,
            center_y,
            scale: width as f64 / TAU,
        }
    }

    #[inline]
    pub fn to_canvas(&self, xp: f64, yp: f64) -> (f64, f64) {
        (
            self.center_x + xp * self.scale,
            self.center_y + yp * self.scale,
        )
    }
}
