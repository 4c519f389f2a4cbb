//! Rock configuration and builder
//!
//! This module provides configuration types for deterministic hull rock generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{HullError, Result};
use crate::hull::HullOptions;

/// Largest point budget accepted by the builder
///
/// The hull builder is quadratic in the point count; callers generate a few
/// dozen points at most.
pub const MAX_POINT_COUNT: usize = 64;

/// Smallest accepted base size
///
/// Hull edges are keyed on a 1e-6 grid (`EDGE_KEY_SCALE`). A rock this size
/// keeps its vertices hundreds of grid cells apart, so distinct edges never
/// share a key.
pub const MIN_SIZE: f64 = 1e-3;

/// Silhouette parameters applied to the sampled sphere
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOptions {
    /// Scale applied to the Y axis
    ///
    /// - < 1.0: slab-like (typical 0.25)
    /// - 1.0: no flattening
    /// - > 1.0: column-like (typical up to 3.0)
    pub flatness: f64,

    /// Strength of the periodic bump perturbation (typically 0.0 to 1.0)
    ///
    /// Values outside that range are accepted and give more extreme shapes.
    pub irregularity: f64,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            flatness: 1.0,
            irregularity: 0.3,
        }
    }
}

/// Shape presets used by the rock-formation and reef-piece generators
///
/// Each preset maps to a point budget and default shape options.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ShapePreset {
    /// Rounded boulder: 12 points, no flattening
    #[default]
    Boulder,
    /// Flat slab: 10 points, strongly flattened
    Slab,
    /// Upright column: 14 points, elongated
    Column,
    /// Small smooth pebble: 8 points, slightly flattened
    Pebble,
    /// Low, lumpy reef mound: 16 points
    ReefMound,
    /// Tall, knobbly reef branch: 21 points
    ReefBranch,
    /// Custom point budget and shape
    Custom {
        /// Number of points to sample
        point_count: usize,
        /// Y-axis scale
        flatness: f64,
        /// Bump strength
        irregularity: f64,
    },
}

impl ShapePreset {
    /// Number of points sampled for this preset
    pub fn point_count(self) -> usize {
        match self {
            ShapePreset::Boulder => 12,
            ShapePreset::Slab => 10,
            ShapePreset::Column => 14,
            ShapePreset::Pebble => 8,
            ShapePreset::ReefMound => 16,
            ShapePreset::ReefBranch => 21,
            ShapePreset::Custom { point_count, .. } => point_count,
        }
    }

    /// Shape options for this preset
    pub fn shape_options(self) -> ShapeOptions {
        let (flatness, irregularity) = match self {
            ShapePreset::Boulder => (1.0, 0.3),
            ShapePreset::Slab => (0.35, 0.2),
            ShapePreset::Column => (2.5, 0.15),
            ShapePreset::Pebble => (0.8, 0.1),
            ShapePreset::ReefMound => (0.6, 0.5),
            ShapePreset::ReefBranch => (1.8, 0.7),
            ShapePreset::Custom {
                flatness,
                irregularity,
                ..
            } => (flatness, irregularity),
        };
        ShapeOptions {
            flatness,
            irregularity,
        }
    }

    /// Get a human-readable name for this preset
    pub fn name(self) -> &'static str {
        match self {
            ShapePreset::Boulder => "Boulder",
            ShapePreset::Slab => "Slab",
            ShapePreset::Column => "Column",
            ShapePreset::Pebble => "Pebble",
            ShapePreset::ReefMound => "ReefMound",
            ShapePreset::ReefBranch => "ReefBranch",
            ShapePreset::Custom { .. } => "Custom",
        }
    }
}

/// Configuration for deterministic hull rock generation
///
/// The same configuration always produces the identical mesh, so only the
/// configuration needs to be stored or sent over the network.
///
/// # Example
///
/// ```rust
/// use rust_rock_hull::*;
///
/// let config = RockConfigBuilder::new()
///     .seed(42)
///     .preset(ShapePreset::Slab)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.point_count, 10);
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: RockConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RockConfig {
    /// Random seed for point sampling
    pub seed: u32,

    /// Preset the point budget and shape were resolved from
    pub preset: ShapePreset,

    /// Base scale of the rock in world units
    pub size: f64,

    /// Number of points sampled before hulling
    pub point_count: usize,

    /// Silhouette parameters
    pub shape: ShapeOptions,

    /// Hull construction tolerances
    pub hull: HullOptions,
}

impl Default for RockConfig {
    fn default() -> Self {
        let preset = ShapePreset::Boulder;
        Self {
            seed: 0,
            preset,
            size: 1.0,
            point_count: preset.point_count(),
            shape: preset.shape_options(),
            hull: HullOptions::default(),
        }
    }
}

/// Builder for creating RockConfig with validation
///
/// Preset values apply unless an explicit override is given.
///
/// # Example
///
/// ```rust
/// use rust_rock_hull::*;
///
/// let config = RockConfigBuilder::new()
///     .seed(7)
///     .preset(ShapePreset::ReefMound)
///     .size(2.5)
///     .unwrap()
///     .irregularity(0.8)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.point_count, 16);
/// assert_eq!(config.shape.flatness, 0.6);
/// assert_eq!(config.shape.irregularity, 0.8);
/// ```
#[derive(Debug, Clone)]
pub struct RockConfigBuilder {
    seed: Option<u32>,
    preset: ShapePreset,
    size: f64,
    point_count: Option<usize>,
    flatness: Option<f64>,
    irregularity: Option<f64>,
    hull: HullOptions,
}

impl RockConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - preset: Boulder
    /// - size: 1.0
    /// - epsilon: `DEFAULT_EPSILON`
    pub fn new() -> Self {
        Self {
            seed: None,
            preset: ShapePreset::default(),
            size: 1.0,
            point_count: None,
            flatness: None,
            irregularity: None,
            hull: HullOptions::default(),
        }
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the shape preset
    pub fn preset(mut self, preset: ShapePreset) -> Self {
        self.preset = preset;
        self
    }

    /// Set the base size
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if size is below `MIN_SIZE` or not finite
    pub fn size(mut self, size: f64) -> Result<Self> {
        if !(size.is_finite() && size >= MIN_SIZE) {
            return Err(HullError::InvalidConfig(format!(
                "size must be >= {} (got {})",
                MIN_SIZE, size
            )));
        }
        self.size = size;
        Ok(self)
    }

    /// Override the preset's point budget
    ///
    /// Counts below 4 are accepted here. They enclose no volume, so
    /// `HullRock::generate` then returns `GenerationFailed`, while
    /// `generate_hull_mesh` with the same count returns an empty mesh.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if count > `MAX_POINT_COUNT`
    pub fn point_count(mut self, count: usize) -> Result<Self> {
        if count > MAX_POINT_COUNT {
            return Err(HullError::InvalidConfig(format!(
                "point count must be <= {} (got {})",
                MAX_POINT_COUNT, count
            )));
        }
        self.point_count = Some(count);
        Ok(self)
    }

    /// Override the preset's flatness
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if flatness is not a positive finite number
    pub fn flatness(mut self, flatness: f64) -> Result<Self> {
        if !(flatness.is_finite() && flatness > 0.0) {
            return Err(HullError::InvalidConfig(format!(
                "flatness must be positive (got {})",
                flatness
            )));
        }
        self.flatness = Some(flatness);
        Ok(self)
    }

    /// Override the preset's irregularity
    ///
    /// Values outside `[0, 1]` are allowed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if irregularity is NaN or infinite
    pub fn irregularity(mut self, irregularity: f64) -> Result<Self> {
        if !irregularity.is_finite() {
            return Err(HullError::InvalidConfig(format!(
                "irregularity must be finite (got {})",
                irregularity
            )));
        }
        self.irregularity = Some(irregularity);
        Ok(self)
    }

    /// Set the visibility tolerance used by the hull builder
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if epsilon is negative or not finite
    pub fn epsilon(mut self, epsilon: f64) -> Result<Self> {
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            return Err(HullError::InvalidConfig(format!(
                "epsilon must be >= 0 (got {})",
                epsilon
            )));
        }
        self.hull.epsilon = epsilon;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<RockConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let preset_shape = self.preset.shape_options();
        let point_count = self.point_count.unwrap_or_else(|| self.preset.point_count());

        // Custom presets bypass the setters, so check them here
        if point_count > MAX_POINT_COUNT {
            return Err(HullError::InvalidConfig(format!(
                "point count must be <= {} (got {})",
                MAX_POINT_COUNT, point_count
            )));
        }

        let shape = ShapeOptions {
            flatness: self.flatness.unwrap_or(preset_shape.flatness),
            irregularity: self.irregularity.unwrap_or(preset_shape.irregularity),
        };
        if !(shape.flatness.is_finite() && shape.flatness > 0.0) {
            return Err(HullError::InvalidConfig(format!(
                "flatness must be positive (got {})",
                shape.flatness
            )));
        }

        Ok(RockConfig {
            seed,
            preset: self.preset,
            size: self.size,
            point_count,
            shape,
            hull: self.hull,
        })
    }
}

impl Default for RockConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::DEFAULT_EPSILON;

    #[test]
    fn test_preset_point_counts() {
        assert_eq!(ShapePreset::Boulder.point_count(), 12);
        assert_eq!(ShapePreset::Slab.point_count(), 10);
        assert_eq!(ShapePreset::Column.point_count(), 14);
        assert_eq!(ShapePreset::Pebble.point_count(), 8);
        assert_eq!(ShapePreset::ReefMound.point_count(), 16);
        assert_eq!(ShapePreset::ReefBranch.point_count(), 21);
    }

    #[test]
    fn test_presets_within_collaborator_band() {
        for preset in [
            ShapePreset::Boulder,
            ShapePreset::Slab,
            ShapePreset::Column,
            ShapePreset::Pebble,
            ShapePreset::ReefMound,
            ShapePreset::ReefBranch,
        ] {
            let count = preset.point_count();
            assert!((8..=21).contains(&count), "{} has {} points", preset.name(), count);

            let shape = preset.shape_options();
            assert!(shape.flatness >= 0.25 && shape.flatness <= 3.0);
            assert!(shape.irregularity >= 0.0 && shape.irregularity <= 1.0);
        }
    }

    #[test]
    fn test_preset_custom() {
        let custom = ShapePreset::Custom {
            point_count: 30,
            flatness: 0.5,
            irregularity: 0.9,
        };
        assert_eq!(custom.point_count(), 30);
        assert_eq!(custom.shape_options().flatness, 0.5);
        assert_eq!(custom.shape_options().irregularity, 0.9);
        assert_eq!(custom.name(), "Custom");
    }

    #[test]
    fn test_builder_defaults() {
        let config = RockConfigBuilder::new().build().unwrap();
        assert_eq!(config.preset, ShapePreset::Boulder);
        assert_eq!(config.size, 1.0);
        assert_eq!(config.point_count, 12);
        assert_eq!(config.shape, ShapeOptions::default());
        assert_eq!(config.hull.epsilon, DEFAULT_EPSILON);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RockConfigBuilder::new()
            .seed(42)
            .preset(ShapePreset::Column)
            .size(3.0)
            .unwrap()
            .point_count(20)
            .unwrap()
            .flatness(1.5)
            .unwrap()
            .epsilon(1e-9)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.size, 3.0);
        assert_eq!(config.point_count, 20);
        assert_eq!(config.shape.flatness, 1.5);
        // Not overridden, so the preset value stays
        assert_eq!(config.shape.irregularity, 0.15);
        assert_eq!(config.hull.epsilon, 1e-9);
    }

    #[test]
    fn test_builder_invalid_size() {
        assert!(RockConfigBuilder::new().size(0.0).is_err());
        assert!(RockConfigBuilder::new().size(-1.0).is_err());
        assert!(RockConfigBuilder::new().size(f64::NAN).is_err());
    }

    #[test]
    fn test_builder_tiny_size_rejected() {
        assert!(RockConfigBuilder::new().size(1e-6).is_err());
        assert!(RockConfigBuilder::new().size(MIN_SIZE / 2.0).is_err());
        assert!(RockConfigBuilder::new().size(MIN_SIZE).is_ok());
    }

    #[test]
    fn test_default_config_is_boulder() {
        let config = RockConfig::default();
        assert_eq!(config.seed, 0);
        assert_eq!(config.preset, ShapePreset::Boulder);
        assert_eq!(config.point_count, 12);
        assert_eq!(config.shape, ShapePreset::Boulder.shape_options());
        assert_eq!(config.hull.epsilon, DEFAULT_EPSILON);
    }

    #[test]
    fn test_builder_invalid_flatness() {
        assert!(RockConfigBuilder::new().flatness(0.0).is_err());
        assert!(RockConfigBuilder::new().flatness(-0.5).is_err());
    }

    #[test]
    fn test_builder_irregularity_out_of_range_allowed() {
        assert!(RockConfigBuilder::new().irregularity(1.5).is_ok());
        assert!(RockConfigBuilder::new().irregularity(-0.2).is_ok());
        assert!(RockConfigBuilder::new().irregularity(f64::INFINITY).is_err());
    }

    #[test]
    fn test_builder_too_many_points() {
        assert!(RockConfigBuilder::new().point_count(MAX_POINT_COUNT + 1).is_err());
        assert!(RockConfigBuilder::new().point_count(3).is_ok());

        let result = RockConfigBuilder::new()
            .preset(ShapePreset::Custom {
                point_count: 1000,
                flatness: 1.0,
                irregularity: 0.3,
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_invalid_custom_flatness() {
        let result = RockConfigBuilder::new()
            .preset(ShapePreset::Custom {
                point_count: 10,
                flatness: 0.0,
                irregularity: 0.3,
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_invalid_epsilon() {
        assert!(RockConfigBuilder::new().epsilon(-1e-10).is_err());
        assert!(RockConfigBuilder::new().epsilon(0.0).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = RockConfigBuilder::new()
            .seed(12345)
            .preset(ShapePreset::ReefBranch)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: RockConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
