//! # Convex Hull
//!
//! Incremental convex hull construction for small point clouds.
//!
//! ## Algorithm
//!
//! 1. Pick a seed tetrahedron from extreme points (see `seed`)
//! 2. Orient its four faces away from the tetrahedron centroid
//! 3. For every other point, in cloud order:
//!    - Collect the faces the point can see
//!    - Skip the point if it sees none (it is inside the hull)
//!    - Find horizon edges: edges used by exactly one visible face
//!    - Replace the visible faces with a fan from the horizon to the point
//!
//! The centroid of the seed tetrahedron is the orientation reference for the
//! whole build. It stays strictly inside the hull because the hull only grows,
//! so it must never be recomputed mid-build.
//!
//! Cost is O(n·f); callers hull a few dozen points at most.
//!
//! ## Degenerate input
//!
//! - Fewer than 4 points: empty hull
//! - Collinear or coplanar cloud: a single triangle through the seed points
//! - Points inside or on the hull (within `epsilon`): dropped

mod edge_key;
mod seed;

pub use edge_key::{quantize, EdgeKey, QuantizedPoint, EDGE_KEY_SCALE};

use std::collections::{BTreeSet, HashMap};

use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use seed::{select_seed, SeedSelection};

/// Default visibility tolerance
///
/// A point must be more than this distance in front of a face plane to see
/// it. Points closer than that are treated as lying on the face, which keeps
/// near-zero-area slivers out of the hull.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Options for hull construction
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullOptions {
    /// Minimum signed distance for a point to count as in front of a face
    pub epsilon: f64,
}

impl Default for HullOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Oriented triangle of the hull
///
/// Vertices index into the hull's point list. Faces are never edited in
/// place; construction only removes and adds whole faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    vertices: [usize; 3],
    /// Unit normal, zero for degenerate triangles
    normal: DVec3,
}

impl Face {
    fn new(points: &[DVec3], vertices: [usize; 3]) -> Self {
        let [a, b, c] = vertices.map(|i| points[i]);
        Self {
            vertices,
            normal: (b - a).cross(c - a).normalize_or_zero(),
        }
    }

    /// Build a face whose normal points away from `interior`
    fn oriented(points: &[DVec3], a: usize, b: usize, c: usize, interior: DVec3) -> Self {
        let face = Self::new(points, [a, b, c]);
        if face.normal.dot(interior - points[a]) > 0.0 {
            Self {
                vertices: [a, c, b],
                normal: -face.normal,
            }
        } else {
            face
        }
    }

    /// Vertex indices in winding order
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        self.vertices
    }

    /// Unit outward normal
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Distance of `p` in front of this face's plane (negative behind it)
    #[inline]
    pub fn signed_distance(&self, points: &[DVec3], p: DVec3) -> f64 {
        (p - points[self.vertices[0]]).dot(self.normal)
    }

    #[inline]
    fn is_visible_from(&self, points: &[DVec3], p: DVec3, epsilon: f64) -> bool {
        self.signed_distance(points, p) > epsilon
    }

    /// Directed edges in winding order
    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}

/// Convex hull of a point cloud
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use rust_rock_hull::ConvexHull;
///
/// let points = vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
///     DVec3::new(0.1, 0.1, 0.1), // inside
/// ];
///
/// let hull = ConvexHull::build(&points);
/// assert_eq!(hull.face_count(), 4);
/// assert!(hull.is_closed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvexHull {
    points: Vec<DVec3>,
    faces: Vec<Face>,
    /// Seed tetrahedron centroid, absent for empty and planar hulls
    interior: Option<DVec3>,
}

impl ConvexHull {
    /// Build the hull with default options
    pub fn build(points: &[DVec3]) -> Self {
        Self::build_with_options(points, HullOptions::default())
    }

    /// Build the hull with a custom visibility tolerance
    pub fn build_with_options(points: &[DVec3], options: HullOptions) -> Self {
        let epsilon = options.epsilon;

        if points.len() < 4 {
            debug!(points = points.len(), "fewer than 4 points, empty hull");
            return Self {
                points: points.to_vec(),
                ..Default::default()
            };
        }

        let seeds = match select_seed(points, epsilon) {
            SeedSelection::Tetrahedron(seeds) => seeds,
            SeedSelection::Planar(tri) => {
                return Self {
                    points: points.to_vec(),
                    faces: vec![Face::new(points, tri)],
                    interior: None,
                };
            }
        };

        let interior = seeds.iter().map(|&i| points[i]).sum::<DVec3>() / 4.0;
        let [p0, p1, p2, p3] = seeds;
        let mut faces: Vec<Face> = [[p0, p1, p2], [p0, p1, p3], [p0, p2, p3], [p1, p2, p3]]
            .into_iter()
            .map(|[a, b, c]| Face::oriented(points, a, b, c, interior))
            .collect();

        for index in 0..points.len() {
            if seeds.contains(&index) {
                continue;
            }
            faces = insert_point(points, faces, index, interior, epsilon);
        }

        debug!(
            points = points.len(),
            faces = faces.len(),
            "convex hull built"
        );

        Self {
            points: points.to_vec(),
            faces,
            interior: Some(interior),
        }
    }

    /// Input points, in original order
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Hull faces
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// True when the cloud was coplanar and the hull is a single triangle
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.interior.is_none() && !self.faces.is_empty()
    }

    /// Orientation reference (the seed tetrahedron centroid)
    #[inline]
    pub fn interior_reference(&self) -> Option<DVec3> {
        self.interior
    }

    /// Corner positions of a face
    #[inline]
    pub fn triangle(&self, face: &Face) -> [DVec3; 3] {
        face.vertices.map(|i| self.points[i])
    }

    /// Indices of the points used by at least one face, ascending
    pub fn vertex_indices(&self) -> Vec<usize> {
        self.faces
            .iter()
            .flat_map(|f| f.vertices)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// How many faces use each undirected edge
    pub fn edge_counts(&self) -> HashMap<EdgeKey, usize> {
        count_edges(&self.points, &self.faces)
    }

    /// True when every edge is shared by exactly two faces
    pub fn is_closed(&self) -> bool {
        !self.faces.is_empty() && self.edge_counts().values().all(|&count| count == 2)
    }

    /// Enclosed volume (zero for empty and planar hulls)
    pub fn volume(&self) -> f64 {
        let Some(origin) = self.interior else {
            return 0.0;
        };
        self.faces
            .iter()
            .map(|face| {
                let [a, b, c] = self.triangle(face).map(|p| p - origin);
                a.dot(b.cross(c)) / 6.0
            })
            .sum()
    }

    /// True when `p` is inside or within `tolerance` of a closed hull
    pub fn contains_point(&self, p: DVec3, tolerance: f64) -> bool {
        self.interior.is_some()
            && self
                .faces
                .iter()
                .all(|face| face.signed_distance(&self.points, p) <= tolerance)
    }
}

/// Insert one point, returning the updated face set
fn insert_point(
    points: &[DVec3],
    faces: Vec<Face>,
    index: usize,
    interior: DVec3,
    epsilon: f64,
) -> Vec<Face> {
    let p = points[index];
    let (visible, mut kept): (Vec<Face>, Vec<Face>) = faces
        .into_iter()
        .partition(|face| face.is_visible_from(points, p, epsilon));

    if visible.is_empty() {
        trace!(index, "point inside hull, skipped");
        return kept;
    }

    let horizon = horizon_edges(points, &visible);
    trace!(
        index,
        visible = visible.len(),
        horizon = horizon.len(),
        "point added to hull"
    );

    kept.extend(
        horizon
            .into_iter()
            .map(|(a, b)| Face::oriented(points, a, b, index, interior)),
    );
    kept
}

/// Edges that appear exactly once among the visible faces
///
/// Returned in face order so the output does not depend on hash iteration.
fn horizon_edges(points: &[DVec3], visible: &[Face]) -> Vec<(usize, usize)> {
    let counts = count_edges(points, visible);
    visible
        .iter()
        .flat_map(|face| face.edges())
        .filter(|&(a, b)| counts.get(&EdgeKey::new(points[a], points[b])) == Some(&1))
        .collect()
}

fn count_edges(points: &[DVec3], faces: &[Face]) -> HashMap<EdgeKey, usize> {
    let mut counts = HashMap::new();
    for face in faces {
        for (a, b) in face.edges() {
            *counts.entry(EdgeKey::new(points[a], points[b])).or_insert(0) += 1;
        }
    }
    counts
}
