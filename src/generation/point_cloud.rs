//! Deformed-sphere point sampling
//!
//! Draws points around a sphere and perturbs their radii so the convex hull
//! reads as a rock or coral silhouette instead of a ball.
//!
//! # Algorithm
//!
//! For each point:
//! - Azimuth `θ` uniform in `[0, 2π)`
//! - Polar angle `φ = acos(u)` with `u` uniform in `[-1, 1)`, which is uniform
//!   over the sphere surface instead of clustering at the poles
//! - Base radius uniform in `[0.7, 1.3) × size`
//! - Bump frequency `f` uniform integer in `[2, 5]`, radius multiplied by
//!   `1 + irregularity · sin(f·θ) · cos(f·φ)`
//! - Y scaled by `flatness`

use glam::DVec3;
use std::f64::consts::PI;

use super::sequence::SequenceGenerator;
use crate::config::ShapeOptions;

/// Lower bound of the base radius as a fraction of size
const MIN_RADIUS_FACTOR: f64 = 0.7;
/// Upper bound of the base radius as a fraction of size
const MAX_RADIUS_FACTOR: f64 = 1.3;
/// Bump frequency range (inclusive)
const MIN_BUMP_FREQUENCY: u32 = 2;
const MAX_BUMP_FREQUENCY: u32 = 5;

/// Sample `count` points of a deformed sphere
///
/// Draws exactly four values from `rng` per point, in the order azimuth,
/// polar, radius, bump frequency. Points are not guaranteed distinct.
///
/// # Arguments
///
/// * `size` - Base scale
/// * `count` - Number of points to generate
/// * `rng` - Sequence generator, advanced in place
/// * `shape` - Flatness and irregularity
///
/// # Example
///
/// ```rust
/// use rust_rock_hull::{sample_point_cloud, SequenceGenerator, ShapeOptions};
///
/// let mut rng = SequenceGenerator::new(42);
/// let points = sample_point_cloud(1.0, 12, &mut rng, &ShapeOptions::default());
/// assert_eq!(points.len(), 12);
/// ```
pub fn sample_point_cloud(
    size: f64,
    count: usize,
    rng: &mut SequenceGenerator,
    shape: &ShapeOptions,
) -> Vec<DVec3> {
    (0..count)
        .map(|_| {
            let theta = rng.next_f64() * 2.0 * PI;
            let phi = (2.0 * rng.next_f64() - 1.0).acos();

            let mut radius = rng.range(MIN_RADIUS_FACTOR, MAX_RADIUS_FACTOR) * size;
            let freq = rng.int_inclusive(MIN_BUMP_FREQUENCY, MAX_BUMP_FREQUENCY) as f64;
            radius *= 1.0 + shape.irregularity * (freq * theta).sin() * (freq * phi).cos();

            DVec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos() * shape.flatness,
                radius * phi.sin() * theta.sin(),
            )
        })
        .collect()
}
