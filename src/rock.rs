//! HullRock main structure and one-shot mesh generation

use glam::DVec3;
use tracing::{debug, warn};

use crate::config::{RockConfig, ShapeOptions, MIN_SIZE};
use crate::error::{HullError, Result};
use crate::generation::{generate_point_cloud, sample_point_cloud, SequenceGenerator};
use crate::hull::{ConvexHull, HullOptions};
use crate::mesh::{emit_mesh, MeshData};

/// A generated rock or reef piece
///
/// Keeps the configuration, the sampled point cloud and its hull so callers
/// can derive collision shapes or debug views alongside the render mesh.
///
/// # Examples
///
/// ```
/// use rust_rock_hull::*;
///
/// let config = RockConfigBuilder::new()
///     .seed(42)
///     .preset(ShapePreset::Boulder)
///     .build()
///     .unwrap();
///
/// let rock = HullRock::generate(config).unwrap();
/// let mesh = rock.mesh();
/// println!("{} triangles", mesh.triangle_count());
/// ```
#[derive(Debug, Clone)]
pub struct HullRock {
    config: RockConfig,
    hull: ConvexHull,
}

impl HullRock {
    /// Generate a rock from a configuration
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` if the point budget is below four or the
    /// sampled cloud is planar, since neither encloses a volume. Use
    /// [`generate_hull_mesh`] for the lenient behavior.
    pub fn generate(config: RockConfig) -> Result<Self> {
        let points = generate_point_cloud(&config);
        let hull = ConvexHull::build_with_options(&points, config.hull);

        if hull.is_empty() || hull.is_degenerate() {
            return Err(HullError::GenerationFailed(format!(
                "{} points (seed {}) do not enclose a volume",
                config.point_count, config.seed
            )));
        }

        debug!(
            seed = config.seed,
            preset = config.preset.name(),
            faces = hull.face_count(),
            "rock generated"
        );

        Ok(Self { config, hull })
    }

    /// Configuration used to generate this rock
    #[inline]
    pub fn config(&self) -> &RockConfig {
        &self.config
    }

    /// Sampled point cloud, including points inside the hull
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        self.hull.points()
    }

    /// Convex hull of the point cloud
    #[inline]
    pub fn hull(&self) -> &ConvexHull {
        &self.hull
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.hull.face_count()
    }

    /// Flat-shaded render mesh
    pub fn mesh(&self) -> MeshData {
        emit_mesh(&self.hull)
    }
}

/// Generate a flat-shaded hull mesh in one call
///
/// Never fails. Degenerate input follows fixed fallbacks:
/// - `point_count < 4`: empty mesh
/// - coplanar sample: a single triangle
/// - `size` below `MIN_SIZE` or not finite: empty mesh (logged at warn level)
///
/// Identical arguments always give identical buffers.
///
/// # Example
///
/// ```rust
/// use rust_rock_hull::{generate_hull_mesh, ShapeOptions};
///
/// let options = ShapeOptions { flatness: 1.0, irregularity: 0.3 };
/// let mesh = generate_hull_mesh(42, 1.0, 12, &options);
/// assert_eq!(mesh.positions.len(), mesh.normals.len());
/// assert!(!mesh.is_empty());
/// ```
pub fn generate_hull_mesh(
    seed: u32,
    size: f64,
    point_count: usize,
    options: &ShapeOptions,
) -> MeshData {
    if !(size.is_finite() && size >= MIN_SIZE) {
        warn!(size, min = MIN_SIZE, "generate_hull_mesh: size below minimum, returning empty mesh");
        return MeshData::default();
    }

    let mut rng = SequenceGenerator::new(seed);
    let points = sample_point_cloud(size, point_count, &mut rng, options);
    emit_mesh(&ConvexHull::build_with_options(&points, HullOptions::default()))
}
