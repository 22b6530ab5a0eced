//! Sketch configuration registry.
//!
//! Defines the available sketch variants and the constants that govern a sweep.
//! Two variants are registered; they differ only in
//! the coordinate convention of the surface and in how alpha is handled.

use crate::{SketchError, BLACK};
use serde::{Deserialize, Serialize};

/// Where a surface puts its local `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Origin {
    /// `(0, 0)` is the middle of the buffer (WebGL-style graphics).
    #[default]
    Center,
    /// `(0, 0)` is the top-left pixel.
    TopLeft,
}

/// How the map is applied across the iterations of one seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapMode {
    /// Every iteration maps the unchanged seed position; only the color varies.
    #[default]
    Fixed,
    /// Each iteration maps the previous output (the textbook de Jong attractor).
    Iterated,
}

/// Configuration for a sketch variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name for UI display
    pub display_name: &'static str,
    /// Number of jittered grid seeds per sweep.
    pub seed_point_count: u32,
    /// Iterations (plotted points) per seed.
    pub iteration_count: u32,
    /// Coefficients are drawn from `[-coefficient_range, coefficient_range)`.
    pub coefficient_range: f64,
    /// None: always opaque. Some(a): every plotted point carries alpha `a`.
    pub alpha: Option<u8>,
    /// Local coordinate convention of the surface.
    pub origin: Origin,
    pub map_mode: MapMode,
    /// Clear color at the start of each sweep.
    pub background: [u8; 4],
}

impl SketchConfig {
    /// Check the constants before anything is allocated.
    pub fn validate(&self) -> Result<(), SketchError> {
        if self.seed_point_count == 0 {
            return Err(SketchError::InvalidConfiguration(format!(
                "{}: seed_point_count must be at least 1",
                self.id
            )));
        }
        if self.iteration_count == 0 {
            return Err(SketchError::InvalidConfiguration(format!(
                "{}: iteration_count must be at least 1",
                self.id
            )));
        }
        if !self.coefficient_range.is_finite() || self.coefficient_range <= 0.0 {
            return Err(SketchError::InvalidConfiguration(format!(
                "{}: coefficient_range must be finite and positive, got {}",
                self.id, self.coefficient_range
            )));
        }
        Ok(())
    }

    /// Alpha applied to every plotted point.
    pub fn effective_alpha(&self) -> u8 {
        self.alpha.unwrap_or(255)
    }

    /// Total plot calls in one sweep.
    pub fn points_per_sweep(&self) -> u64 {
        self.seed_point_count as u64 * self.iteration_count as u64
    }
}

/// Registry of available sketch configurations.
pub static SKETCH_CONFIGS: &[SketchConfig] = &[
    SketchConfig {
        id: "webgl",
        display_name: "de Jong (centered origin)",
        seed_point_count: 5000,
        iteration_count: 16,
        coefficient_range: 2.5,
        alpha: None,
        origin: Origin::Center,
        map_mode: MapMode::Fixed,
        background: BLACK,
    },
    SketchConfig {
        id: "alpha",
        display_name: "de Jong (alpha-aware)",
        seed_point_count: 5000,
        iteration_count: 16,
        coefficient_range: 2.5,
        alpha: Some(255),
        origin: Origin::TopLeft,
        map_mode: MapMode::Fixed,
        background: BLACK,
    },
];

/// Look up a sketch configuration by ID.
pub fn get_config(id: &str) -> Option<&'static SketchConfig> {
    SKETCH_CONFIGS.iter().find(|c| c.id == id)
}

/// Get the default sketch configuration.
pub fn default_config() -> &'static SketchConfig {
    &SKETCH_CONFIGS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_config_finds_both_variants() {
        assert_eq!(get_config("webgl").unwrap().origin, Origin::Center);
        assert_eq!(get_config("alpha").unwrap().alpha, Some(255));
    }

    #[test]
    fn get_config_returns_none_for_unknown() {
        assert!(get_config("clifford").is_none());
    }

    #[test]
    fn default_config_uses_documented_constants() {
        let config = default_config();
        assert_eq!(config.id, "webgl");
        assert_eq!(config.seed_point_count, 5000);
        assert_eq!(config.iteration_count, 16);
        assert_eq!(config.coefficient_range, 2.5);
        assert_eq!(config.map_mode, MapMode::Fixed);
        assert_eq!(config.background, [0, 0, 0, 255]);
        assert_eq!(config.points_per_sweep(), 80_000);
    }

    #[test]
    fn registered_configs_are_valid() {
        for config in SKETCH_CONFIGS {
            assert!(config.validate().is_ok(), "{} failed validation", config.id);
        }
    }

    #[test]
    fn both_variants_are_opaque() {
        for config in SKETCH_CONFIGS {
            assert_eq!(config.effective_alpha(), 255);
        }
    }

    #[test]
    fn validate_rejects_zero_seed_points() {
        let config = SketchConfig {
            seed_point_count: 0,
            ..*default_config()
        };
        assert!(matches!(
            config.validate(),
            Err(SketchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_iterations() {
        let config = SketchConfig {
            iteration_count: 0,
            ..*default_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        for range in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SketchConfig {
                coefficient_range: range,
                ..*default_config()
            };
            assert!(config.validate().is_err(), "range {} accepted", range);
        }
    }
}
