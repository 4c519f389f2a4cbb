//! Convex-hull rock mesh generation
//!
//! A standalone library for turning seeded, deformed-sphere point clouds into
//! closed, flat-shaded convex meshes (rocks, boulders, reef pieces), suitable
//! for use with any game engine.
//!
//! # Quick Start
//!
//! ```rust
//! use rust_rock_hull::*;
//!
//! // One-shot: seed, size, point count, shape
//! let mesh = generate_hull_mesh(42, 1.0, 12, &ShapeOptions::default());
//! println!("Generated {} triangles", mesh.triangle_count());
//!
//! // Or keep the point cloud and hull around
//! let config = RockConfigBuilder::new()
//!     .seed(42)
//!     .preset(ShapePreset::ReefMound)
//!     .build()
//!     .unwrap();
//! let rock = HullRock::generate(config).unwrap();
//! assert!(rock.hull().is_closed());
//! ```
//!
//! # Pipeline
//!
//! seed → [`SequenceGenerator`] → [`sample_point_cloud`] → [`ConvexHull`] →
//! [`emit_mesh`] → [`MeshData`]
//!
//! Every stage is pure and local to one call, so rocks can be generated on
//! as many threads as needed.
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration types

// Modules
pub mod error;
pub mod config;
pub mod generation;
pub mod hull;
pub mod mesh;
pub mod rock;

// Re-export core types for convenience
pub use error::{HullError, Result};
pub use config::{
    RockConfig, RockConfigBuilder, ShapeOptions, ShapePreset, MAX_POINT_COUNT, MIN_SIZE,
};
pub use generation::{generate_point_cloud, sample_point_cloud, SequenceGenerator};
pub use hull::{
    quantize, ConvexHull, EdgeKey, Face, HullOptions, QuantizedPoint, DEFAULT_EPSILON,
    EDGE_KEY_SCALE,
};
pub use mesh::{emit_mesh, MeshData};
pub use rock::{generate_hull_mesh, HullRock};

// Re-export glam vector types for convenience
pub use glam::{DVec3, Vec3};
