pub mod sketch;
pub mod surface;
pub mod sweep;
pub mod target;

pub use sketch::{composite_offset, Sketch, SketchState, TickOutcome};
pub use surface::Surface;
pub use sweep::{render_sweep, samples, IterationSample, SweepParams, SweepStats};
pub use target::PlotTarget;

// Re-export core types for convenience
pub use dejong_core::*;
