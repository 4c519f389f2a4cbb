//! Seeded point cloud generation
//!
//! Produces the raw points a rock is hulled from.

mod point_cloud;
mod sequence;

pub use point_cloud::sample_point_cloud;
pub use sequence::SequenceGenerator;

use glam::DVec3;

use crate::config::RockConfig;

/// Generate the point cloud for a configuration
///
/// Seeds a fresh `SequenceGenerator` from `config.seed`, so the result only
/// depends on the configuration.
pub fn generate_point_cloud(config: &RockConfig) -> Vec<DVec3> {
    let mut rng = SequenceGenerator::new(config.seed);
    sample_point_cloud(config.size, config.point_count, &mut rng, &config.shape)
}
