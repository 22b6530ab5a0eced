//! Activation-driven render state machine.
//!
//! A host event loop drives the sketch through two entry points:
//! `on_activate` (mouse press, and once at construction for the first frame)
//! and `on_tick` (every frame the host loop is running). A tick runs at most
//! one full sweep and then the sketch halts until the next activation.

use crate::sweep::{render_sweep, SweepParams, SweepStats};
use crate::PlotTarget;
use dejong_core::{Coefficients, Projection, SketchConfig, SketchError};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchState {
    /// Last frame is on screen; ticks do nothing.
    Idle,
    /// Coefficients drawn and target cleared; the next tick sweeps.
    SweepPending,
}

/// Result of one host frame tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// A sweep ran to completion; the target holds a new frame to composite.
    Rendered(SweepStats),
    /// Nothing to do; the host loop should stop.
    Halted,
}

pub struct Sketch<T: PlotTarget, R: Rng> {
    config: SketchConfig,
    target: T,
    rng: R,
    projection: Projection,
    coefficients: Coefficients,
    state: SketchState,
    sweeps_completed: u64,
}

impl<T: PlotTarget, R: Rng> Sketch<T, R> {
    /// Build a sketch over `target` and arm the first sweep.
    pub fn new(config: SketchConfig, target: T, rng: R) -> Result<Self, SketchError> {
        config.validate()?;
        let (width, height) = target.size();
        let projection = Projection::new(width, height, target.origin());

        let mut sketch = Self {
            config,
            target,
            rng,
            projection,
            coefficients: Coefficients::default(),
            state: SketchState::Idle,
            sweeps_completed: 0,
        };
        sketch.on_activate();
        Ok(sketch)
    }

    /// Draw fresh coefficients, clear the target, and arm one sweep.
    pub fn on_activate(&mut self) -> Coefficients {
        self.coefficients = Coefficients::random(&mut self.rng, self.config.coefficient_range);
        self.target.clear(self.config.background);
        self.state = SketchState::SweepPending;

        log::debug!(
            "[Sketch] activated: pa={:.4} pb={:.4} pc={:.4} pd={:.4}",
            self.coefficients.pa,
            self.coefficients.pb,
            self.coefficients.pc,
            self.coefficients.pd
        );
        self.coefficients
    }

    /// Run the armed sweep, if any, then return to Idle.
    pub fn on_tick(&mut self) -> Result<TickOutcome, SketchError> {
        if self.state == SketchState::Idle {
            return Ok(TickOutcome::Halted);
        }

        let params = SweepParams {
            coefficients: self.coefficients,
            projection: self.projection,
        };
        let stats = render_sweep(&self.config, &params, &mut self.target, &mut self.rng)?;

        self.state = SketchState::Idle;
        self.sweeps_completed += 1;
        log::debug!(
            "[Sketch] sweep {} done: {} points from {} seeds",
            self.sweeps_completed,
            stats.points_plotted,
            stats.seed_points
        );
        Ok(TickOutcome::Rendered(stats))
    }

    pub fn state(&self) -> SketchState {
        self.state
    }

    /// True while the host frame loop should keep ticking.
    pub fn is_looping(&self) -> bool {
        self.state == SketchState::SweepPending
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn sweeps_completed(&self) -> u64 {
        self.sweeps_completed
    }
}

/// Top-left offset that centers a `surface` sized image on a `canvas` sized one.
pub fn composite_offset(canvas: (u32, u32), surface: (u32, u32)) -> (f64, f64) {
    (
        (canvas.0 as f64 - surface.0 as f64) / 2.0,
        (canvas.1 as f64 - surface.1 as f64) / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Surface;
    use dejong_core::{default_config, Origin};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn surface_sketch(seed: u64) -> Sketch<Surface, StdRng> {
        let surface = Surface::new(320, 240, Origin::Center).unwrap();
        Sketch::new(*default_config(), surface, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn new_arms_the_first_sweep() {
        let sketch = surface_sketch(1);
        assert_eq!(sketch.state(), SketchState::SweepPending);
        assert!(sketch.is_looping());
        assert_eq!(sketch.sweeps_completed(), 0);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let surface = Surface::new(8, 8, Origin::Center).unwrap();
        let config = SketchConfig {
            iteration_count: 0,
            ..*default_config()
        };
        let result = Sketch::new(config, surface, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(SketchError::InvalidConfiguration(_))));
    }

    #[test]
    fn tick_renders_once_then_halts() {
        let mut sketch = surface_sketch(2);

        let first = sketch.on_tick().unwrap();
        assert!(matches!(first, TickOutcome::Rendered(s) if s.points_plotted == 80_000));
        assert_eq!(sketch.state(), SketchState::Idle);
        assert!(!sketch.is_looping());

        assert_eq!(sketch.on_tick().unwrap(), TickOutcome::Halted);
        assert_eq!(sketch.sweeps_completed(), 1);
    }

    #[test]
    fn projection_comes_from_target_size() {
        let sketch = surface_sketch(3);
        let p = sketch.projection();
        assert_eq!((p.center_x, p.center_y), (0.0, 0.0));
        assert!((p.scale - 320.0 / std::f64::consts::TAU).abs() < 1e-12);
    }

    #[test]
    fn composite_offset_centers_the_surface() {
        assert_eq!(composite_offset((800, 600), (800, 600)), (0.0, 0.0));
        assert_eq!(composite_offset((800, 600), (400, 300)), (200.0, 150.0));
        assert_eq!(composite_offset((100, 100), (200, 50)), (-50.0, 25.0));
    }
}
