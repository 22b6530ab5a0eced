//! Sketch error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SketchError {
    #[error("Failed to allocate a {width}x{height} surface")]
    SurfaceAllocationFailed { width: u32, height: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
