//! Quantized undirected edge keys
//!
//! Horizon detection counts how often each undirected edge appears among the
//! faces visible from a new point. Edges are keyed on quantized endpoint
//! coordinates so that `(a, b)` and `(b, a)` compare equal and coincident
//! points that differ only by float noise collapse to the same key.
//!
//! # Precision
//!
//! Coordinates are rounded to the nearest multiple of `1 / EDGE_KEY_SCALE`
//! (1e-6 world units). Points closer than that are treated as the same
//! vertex; points further apart always produce distinct keys. Callers keep
//! rocks at or above `MIN_SIZE` (1e-3), far above that resolution.

use glam::DVec3;

/// Quantization factor applied to each coordinate
pub const EDGE_KEY_SCALE: f64 = 1e6;

/// A point snapped to the edge-key grid
pub type QuantizedPoint = [i64; 3];

/// Snap a point to the edge-key grid
#[inline]
pub fn quantize(p: DVec3) -> QuantizedPoint {
    [
        (p.x * EDGE_KEY_SCALE).round() as i64,
        (p.y * EDGE_KEY_SCALE).round() as i64,
        (p.z * EDGE_KEY_SCALE).round() as i64,
    ]
}

/// Canonical identifier for an undirected edge
///
/// The smaller quantized endpoint is always stored first.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use rust_rock_hull::EdgeKey;
///
/// let a = DVec3::new(0.0, 1.0, 2.0);
/// let b = DVec3::new(3.0, -1.0, 0.5);
/// assert_eq!(EdgeKey::new(a, b), EdgeKey::new(b, a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    lo: QuantizedPoint,
    hi: QuantizedPoint,
}

impl EdgeKey {
    /// Build the key for the edge between `a` and `b`
    pub fn new(a: DVec3, b: DVec3) -> Self {
        let qa = quantize(a);
        let qb = quantize(b);
        if qa <= qb {
            Self { lo: qa, hi: qb }
        } else {
            Self { lo: qb, hi: qa }
        }
    }

    /// Quantized endpoints in canonical order
    pub fn endpoints(&self) -> (QuantizedPoint, QuantizedPoint) {
        (self.lo, self.hi)
    }
}
