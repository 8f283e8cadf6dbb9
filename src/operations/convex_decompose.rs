use log::debug;

use crate::error::{Warning, WarningCategory};
use crate::geometry::{Color, ConvexHull, Path};
use crate::math::orient_2d::{turn, Turn};
use crate::math::polygon_2d::{dedup_points, remove_collinear, rotate_to_canonical_start};
use crate::math::{points_equal, Point2};

use super::Decomposition;

/// Greedy convex-hull decomposition of general polygons.
///
/// Takes repeated convex "bites" off each path: the first convex vertex
/// triple whose triangle contains no other vertex seeds a hull, the bite is
/// extended forward while the hull stays convex and consumes nothing, and
/// the covered range is spliced out of the polygon. Paths are processed
/// independently; a path with no valid bite is dropped with a warning while
/// the rest still decompose.
pub struct ConvexHullDecomposition {
    paths: Vec<Path>,
}

impl ConvexHullDecomposition {
    #[must_use]
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    /// Executes the decomposition.
    #[must_use]
    pub fn execute(&self) -> Decomposition {
        let mut out = Decomposition::default();
        for (idx, path) in self.paths.iter().enumerate() {
            let clockwise = path.oriented_clockwise();
            decompose_path(idx, clockwise.normalized(), clockwise.color(), &mut out);
        }
        out
    }
}

fn decompose_path(idx: usize, mut pts: Vec<Point2>, color: Color, out: &mut Decomposition) {
    debug!("path {idx}: decomposing {} vertices into hulls", pts.len());
    loop {
        pts = rotate_to_canonical_start(&remove_collinear(&dedup_points(&pts)));
        let n = pts.len();
        if n < 3 {
            // Zero-area residue left behind by the final bite.
            if n > 0 {
                debug!("path {idx}: {n} residual points after final bite");
            }
            return;
        }

        let Some(i0) = (0..n).find(|&i| bite_ok(&pts, i)) else {
            out.warnings.push(Warning::new(
                WarningCategory::NoConvexBite,
                format!("path {idx}: no convex triple with an empty triangle"),
            ));
            return;
        };

        // Extend the bite forward while the hull stays convex and consumes
        // no other vertex. Stopping before the wrap keeps the starting edge
        // out of the hull.
        let mut len = 3;
        while len < n && can_extend(&pts, i0, len) {
            len += 1;
        }

        if len == n {
            // The whole remaining polygon is convex.
            emit(idx, pts, color, out);
            return;
        }

        let hull_pts: Vec<Point2> = (0..len).map(|k| pts[(i0 + k) % n]).collect();
        emit(idx, hull_pts, color, out);

        // Splice the bite's interior out; the bite's first and last vertex
        // stay on the boundary of the leftover polygon.
        let last = (i0 + len - 1) % n;
        let mut rest = Vec::with_capacity(n + 2 - len);
        let mut k = last;
        loop {
            rest.push(pts[k]);
            if k == i0 {
                break;
            }
            k = (k + 1) % n;
        }
        pts = rest;
    }
}

/// The triple at `i` turns left and its triangle holds no other vertex.
fn bite_ok(pts: &[Point2], i: usize) -> bool {
    let n = pts.len();
    let a = &pts[i];
    let b = &pts[(i + 1) % n];
    let c = &pts[(i + 2) % n];
    turn(a, b, c) == Turn::Left && triangle_is_empty(pts, a, b, c)
}

/// Extending the bite at `i0` from `len` to `len + 1` vertices keeps the
/// hull convex and consumes no other vertex. Only the three turns the
/// candidate introduces need checking; earlier turns are unchanged.
fn can_extend(pts: &[Point2], i0: usize, len: usize) -> bool {
    let n = pts.len();
    let prev = &pts[(i0 + len - 2) % n];
    let last = &pts[(i0 + len - 1) % n];
    let cand = &pts[(i0 + len) % n];
    let anchor = &pts[i0];
    let second = &pts[(i0 + 1) % n];
    turn(prev, last, cand) == Turn::Left
        && turn(last, cand, anchor) == Turn::Left
        && turn(cand, anchor, second) == Turn::Left
        && triangle_is_empty(pts, last, cand, anchor)
}

/// No vertex other than the corners lies inside or on the left-wound
/// triangle (a, b, c). A vertex sitting on the triangle boundary would be
/// consumed by the bite without becoming a hull vertex, so it blocks the
/// bite too.
fn triangle_is_empty(pts: &[Point2], a: &Point2, b: &Point2, c: &Point2) -> bool {
    pts.iter().all(|p| {
        points_equal(p, a)
            || points_equal(p, b)
            || points_equal(p, c)
            || turn(a, b, p) == Turn::Right
            || turn(b, c, p) == Turn::Right
            || turn(c, a, p) == Turn::Right
    })
}

fn emit(idx: usize, points: Vec<Point2>, color: Color, out: &mut Decomposition) {
    match ConvexHull::new(points, color) {
        Ok(hull) => out.hulls.push(hull),
        Err(e) => out.warnings.push(Warning::new(
            WarningCategory::DegenerateHull,
            format!("path {idx}: {e}"),
        )),
    }
}
