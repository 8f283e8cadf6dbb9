use std::cmp::Ordering;

use crate::error::{DecomposeError, Result, Warning, WarningCategory};
use crate::geometry::Path;
use crate::math::intersect_2d::proper_crossing;
use crate::math::orient_2d::{turn, Turn};
use crate::math::{points_equal, Point2, EPSILON};

/// One path edge, endpoints in lexicographic order. Unlike the trapezoid
/// events, the pre-pass keeps vertical edges: they cross things too.
#[derive(Debug, Clone, Copy)]
struct Edge {
    a: Point2,
    b: Point2,
    path: usize,
}

/// Sweeps all path edges once, before any trapezoid is attempted, looking
/// for geometry the decomposition cannot survive: properly crossing edges,
/// collinear overlaps, and points where more than two edges meet.
///
/// Crossings and overlaps abort the decomposition: a self-crossing path is
/// not self-consistent, and crossings between paths make the nesting
/// topology unknowable. A multi-edge meeting point is fatal only when its
/// edges span more than one path; within a single path it is reported and
/// tolerated.
///
/// # Errors
///
/// Returns `DecomposeError::CrossingPaths` describing the first degeneracy
/// found; the caller falls back to an alternate decomposition strategy.
pub(super) fn check_crossings(paths: &[Path]) -> Result<Vec<Warning>> {
    let mut edges = Vec::new();
    for (path_idx, path) in paths.iter().enumerate() {
        let pts = path.points();
        let mut prev = &pts[pts.len() - 1];
        for p in pts {
            let (a, b) = if (prev.x, prev.y) <= (p.x, p.y) {
                (*prev, *p)
            } else {
                (*p, *prev)
            };
            edges.push(Edge {
                a,
                b,
                path: path_idx,
            });
            prev = p;
        }
    }

    // Sweep by x: an edge is checked against every edge whose x-interval
    // overlaps its own.
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&i, &j| {
        edges[i]
            .a
            .x
            .partial_cmp(&edges[j].a.x)
            .unwrap_or(Ordering::Equal)
    });
    let mut active: Vec<usize> = Vec::new();
    for &i in &order {
        let e = &edges[i];
        active.retain(|&j| edges[j].b.x >= e.a.x - EPSILON);
        for &j in &active {
            let o = &edges[j];
            if proper_crossing(&e.a, &e.b, &o.a, &o.b) {
                return Err(DecomposeError::CrossingPaths(format!(
                    "edges of path {} and path {} cross near ({}, {})",
                    e.path, o.path, e.a.x, e.a.y
                ))
                .into());
            }
            if collinear_overlap(e, o) {
                return Err(DecomposeError::CrossingPaths(format!(
                    "edges of path {} and path {} overlap",
                    e.path, o.path
                ))
                .into());
            }
        }
        active.push(i);
    }

    meeting_points(&edges)
}

/// The two edges lie on one supporting line and share more than a point.
fn collinear_overlap(e: &Edge, o: &Edge) -> bool {
    if turn(&e.a, &e.b, &o.a) != Turn::Straight || turn(&e.a, &e.b, &o.b) != Turn::Straight {
        return false;
    }
    // Overlap extent along the dominant axis of e.
    let horizontal = (e.b.x - e.a.x).abs() >= (e.b.y - e.a.y).abs();
    let span = |p: &Point2| if horizontal { p.x } else { p.y };
    let (e_lo, e_hi) = (span(&e.a).min(span(&e.b)), span(&e.a).max(span(&e.b)));
    let (o_lo, o_hi) = (span(&o.a).min(span(&o.b)), span(&o.a).max(span(&o.b)));
    e_lo.max(o_lo) < e_hi.min(o_hi) - EPSILON
}

/// Census of edge endpoints: a point with more than two incident edges is
/// fatal across paths, a warning within one path.
fn meeting_points(edges: &[Edge]) -> Result<Vec<Warning>> {
    let mut endpoints: Vec<(Point2, usize)> = Vec::with_capacity(edges.len() * 2);
    for e in edges {
        endpoints.push((e.a, e.path));
        endpoints.push((e.b, e.path));
    }
    endpoints.sort_by(|a, b| {
        a.0.x
            .partial_cmp(&b.0.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.y.partial_cmp(&b.0.y).unwrap_or(Ordering::Equal))
    });

    let mut warnings = Vec::new();
    let mut i = 0;
    while i < endpoints.len() {
        let mut j = i + 1;
        while j < endpoints.len() && points_equal(&endpoints[j].0, &endpoints[i].0) {
            j += 1;
        }
        let count = j - i;
        if count > 2 {
            let p = endpoints[i].0;
            let first_path = endpoints[i].1;
            if endpoints[i..j].iter().any(|(_, path)| *path != first_path) {
                return Err(DecomposeError::CrossingPaths(format!(
                    "{count} edges meet at ({}, {}) across multiple paths",
                    p.x, p.y
                ))
                .into());
            }
            warnings.push(Warning::new(
                WarningCategory::MultiEdgePoint,
                format!("{count} edges of path {first_path} meet at ({}, {})", p.x, p.y),
            ));
        }
        i = j;
    }
    Ok(warnings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Color, ColorRegistry, Path};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn colors() -> (ColorRegistry, Color) {
        let mut reg = ColorRegistry::new();
        let c = reg.intern("#808080");
        (reg, c)
    }

    fn path(pts: Vec<Point2>) -> Path {
        let (_reg, c) = colors();
        Path::new(pts, c).unwrap()
    }

    #[test]
    fn disjoint_squares_pass() {
        let a = path(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]);
        let b = path(vec![p(10.0, 0.0), p(14.0, 0.0), p(14.0, 4.0), p(10.0, 4.0)]);
        assert!(check_crossings(&[a, b]).unwrap().is_empty());
    }

    #[test]
    fn nested_squares_pass() {
        let outer = path(vec![p(0.0, 0.0), p(20.0, 0.0), p(20.0, 20.0), p(0.0, 20.0)]);
        let inner = path(vec![p(5.0, 5.0), p(15.0, 5.0), p(15.0, 15.0), p(5.0, 15.0)]);
        assert!(check_crossings(&[outer, inner]).unwrap().is_empty());
    }

    #[test]
    fn overlapping_squares_fail() {
        let a = path(vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]);
        let b = path(vec![p(5.0, 5.0), p(15.0, 5.0), p(15.0, 15.0), p(5.0, 15.0)]);
        assert!(check_crossings(&[a, b]).is_err());
    }

    #[test]
    fn crossing_through_vertical_edges_is_caught() {
        // The second path's horizontal edges cross only the first path's
        // vertical edges.
        let a = path(vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]);
        let b = path(vec![p(8.0, 2.0), p(12.0, 2.0), p(12.0, 8.0), p(8.0, 8.0)]);
        assert!(check_crossings(&[a, b]).is_err());
    }

    #[test]
    fn duplicated_edge_is_an_overlap() {
        let a = path(vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]);
        let b = path(vec![p(0.0, 0.0), p(10.0, 0.0), p(5.0, -5.0)]);
        assert!(check_crossings(&[a, b]).is_err());
    }

    #[test]
    fn paths_touching_at_a_vertex_are_rejected() {
        // Two triangles meet at one point, four edges in total. Nesting
        // cannot be inferred there, so the census aborts the attempt.
        let a = path(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0)]);
        let b = path(vec![p(4.0, 4.0), p(8.0, 4.0), p(8.0, 8.0)]);
        assert!(check_crossings(&[a, b]).is_err());
    }

    #[test]
    fn self_touching_path_warns_but_passes() {
        // Bow-tie style vertex shared within a single path (figure-eight
        // traced without edge crossings).
        let a = path(vec![
            p(0.0, 0.0),
            p(4.0, 4.0),
            p(8.0, 0.0),
            p(8.0, 8.0),
            p(4.0, 4.0),
            p(0.0, 8.0),
        ]);
        let warnings = check_crossings(&[a]).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category.key(), "multi-edge-point");
    }
}
