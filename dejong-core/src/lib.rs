pub mod coefficients;
pub mod color;
pub mod config;
pub mod error;
pub mod projection;
pub mod seed_grid;

pub use coefficients::Coefficients;
pub use color::{gradient_color, iteration_fraction, BLACK};
pub use config::{default_config, get_config, MapMode, Origin, SketchConfig, SKETCH_CONFIGS};
pub use error::SketchError;
pub use projection::Projection;
pub use seed_grid::{grid_side, SeedGrid};
