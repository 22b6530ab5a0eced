// dejong-compute/src/sweep.rs

use crate::PlotTarget;
use dejong_core::{
    gradient_color, iteration_fraction, Coefficients, MapMode, Projection, SeedGrid,
    SketchConfig, SketchError,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything a sweep reads besides the config: fixed for the whole sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepParams {
    pub coefficients: Coefficients,
    pub projection: Projection,
}

/// One plotted point: position in target-local coordinates plus its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationSample {
    pub index: u32,
    pub x: f64,
    pub y: f64,
    pub color: [u8; 4],
}

/// Summary of a completed sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepStats {
    pub seed_points: u32,
    pub points_plotted: u64,
    pub coefficients: Coefficients,
}

/// Samples for one seed at `(x, y)`, one per iteration.
///
/// With `MapMode::Fixed` every sample maps the same seed position, so all
/// positions coincide and only the color moves along the gradient.
pub fn samples<'a>(
    params: &'a SweepParams,
    config: &'a SketchConfig,
    x: f64,
    y: f64,
) -> impl Iterator<Item = IterationSample> + 'a {
    let alpha = config.effective_alpha();
    let n = config.iteration_count;
    let mut pos = (x, y);

    (0..n).map(move |j| {
        let t = iteration_fraction(j, n);
        let (xp, yp) = params.coefficients.map(pos.0, pos.1);
        if config.map_mode == MapMode::Iterated {
            pos = (xp, yp);
        }
        let (px, py) = params.projection.to_canvas(xp, yp);
        IterationSample {
            index: j,
            x: px,
            y: py,
            color: gradient_color(t, alpha),
        }
    })
}

/// Run one complete sweep: every seed of the jittered grid, every iteration.
///
/// Does not clear the target; the caller decides when a fresh frame starts.
pub fn render_sweep<T, R>(
    config: &SketchConfig,
    params: &SweepParams,
    target: &mut T,
    rng: &mut R,
) -> Result<SweepStats, SketchError>
where
    T: PlotTarget + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;
    let grid = SeedGrid::new(config.seed_point_count)?;
    let mut points_plotted = 0u64;

    for (x, y) in grid.points(rng) {
        for sample in samples(params, config, x, y) {
            target.plot(sample.x, sample.y, sample.color);
            points_plotted += 1;
        }
    }

    Ok(SweepStats {
        seed_points: grid.count(),
        points_plotted,
        coefficients: params.coefficients,
    })
}
