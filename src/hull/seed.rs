//! Seed tetrahedron selection

use glam::DVec3;
use tracing::debug;

/// Starting configuration for incremental construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SeedSelection {
    /// Four affinely independent points
    Tetrahedron([usize; 4]),
    /// Every point lies within tolerance of the plane through these three
    Planar([usize; 3]),
}

/// Pick the seed points for a cloud of at least four points
///
/// - `p0`, `p1`: minimum and maximum X (any other point if they coincide)
/// - `p2`: farthest from the line `p0`-`p1`, or the next index after `p1`
///   when the cloud is collinear
/// - `p3`: farthest from the plane `p0`-`p1`-`p2`; none means planar
pub(super) fn select_seed(points: &[DVec3], epsilon: f64) -> SeedSelection {
    debug_assert!(points.len() >= 4);

    let mut p0 = 0;
    let mut p1 = 0;
    for (i, p) in points.iter().enumerate() {
        if p.x < points[p0].x {
            p0 = i;
        }
        if p.x > points[p1].x {
            p1 = i;
        }
    }
    if p0 == p1 {
        p1 = if p0 == 0 { 1 } else { 0 };
    }

    let p2 = farthest_from_line(points, p0, p1, epsilon).unwrap_or_else(|| {
        let fallback = next_index(points.len(), p1, &[p0, p1]);
        debug!(p0, p1, fallback, "collinear seed points, using neighbouring index");
        fallback
    });

    match farthest_from_plane(points, [p0, p1, p2], epsilon) {
        Some(p3) => SeedSelection::Tetrahedron([p0, p1, p2, p3]),
        None => {
            debug!(p0, p1, p2, "coplanar point cloud, emitting single triangle");
            SeedSelection::Planar([p0, p1, p2])
        }
    }
}

/// First index after `start` (wrapping) that is not in `exclude`
fn next_index(len: usize, start: usize, exclude: &[usize]) -> usize {
    (1..len)
        .map(|offset| (start + offset) % len)
        .find(|i| !exclude.contains(i))
        .unwrap_or(start)
}

fn farthest_from_line(points: &[DVec3], a: usize, b: usize, epsilon: f64) -> Option<usize> {
    let origin = points[a];
    let dir = points[b] - origin;
    let dir_len = dir.length();

    let mut best = None;
    let mut best_dist = epsilon;
    for (i, p) in points.iter().enumerate() {
        if i == a || i == b {
            continue;
        }
        let offset = *p - origin;
        let dist = if dir_len > 0.0 {
            offset.cross(dir).length() / dir_len
        } else {
            offset.length()
        };
        if dist > best_dist {
            best_dist = dist;
            best = Some(i);
        }
    }
    best
}

fn farthest_from_plane(points: &[DVec3], tri: [usize; 3], epsilon: f64) -> Option<usize> {
    let origin = points[tri[0]];
    let normal = (points[tri[1]] - origin).cross(points[tri[2]] - origin);
    let normal_len = normal.length();
    if normal_len <= 0.0 {
        return None;
    }

    let mut best = None;
    let mut best_dist = epsilon;
    for (i, p) in points.iter().enumerate() {
        if tri.contains(&i) {
            continue;
        }
        let dist = (*p - origin).dot(normal).abs() / normal_len;
        if dist > best_dist {
            best_dist = dist;
            best = Some(i);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn test_tetrahedron_from_extremes() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.2, 0.1, 0.1),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.5, 1.0, 0.0),
            DVec3::new(0.5, 0.3, 2.0),
        ];
        match select_seed(&points, EPS) {
            SeedSelection::Tetrahedron(seeds) => assert_eq!(seeds, [0, 2, 4, 3]),
            other => panic!("expected tetrahedron, got {:?}", other),
        }
    }

    #[test]
    fn test_coplanar_is_planar() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        assert_eq!(select_seed(&points, EPS), SeedSelection::Planar([0, 1, 2]));
    }

    #[test]
    fn test_collinear_falls_back_to_neighbour() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
        ];
        assert_eq!(select_seed(&points, EPS), SeedSelection::Planar([0, 1, 2]));
    }

    #[test]
    fn test_identical_x_substitutes_second_point() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
        ];
        // All points share x, so p0 == p1 == 0 and index 1 is substituted
        assert_eq!(select_seed(&points, EPS), SeedSelection::Planar([0, 1, 2]));
    }

    #[test]
    fn test_all_points_identical() {
        let points = vec![DVec3::splat(1.0); 5];
        assert_eq!(select_seed(&points, EPS), SeedSelection::Planar([0, 1, 2]));
    }

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(4, 3, &[0, 3]), 1);
        assert_eq!(next_index(4, 1, &[0, 1]), 2);
    }
}
