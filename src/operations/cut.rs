use crate::error::{DecomposeError, Result, Warning, WarningCategory};
use crate::geometry::{ConvexHull, Segment};
use crate::math::intersect_2d::proper_crossing;
use crate::math::orient_2d::{turn, Turn};
use crate::math::{Point2, EPSILON};

use super::Decomposition;

/// Boolean difference of convex-hull sets.
///
/// Removes from the subtractee every region covered by the subtractor:
/// each subtractee hull is split along the supporting lines of the
/// subtractor segments that touch it, and fragments whose interior falls
/// inside the subtractor are discarded. The survivors are the set
/// difference B \ A.
pub struct Cut {
    subtractor: Vec<ConvexHull>,
    subtractee: Vec<ConvexHull>,
}

impl Cut {
    #[must_use]
    pub fn new(subtractor: Vec<ConvexHull>, subtractee: Vec<ConvexHull>) -> Self {
        Self {
            subtractor,
            subtractee,
        }
    }

    /// Executes the subtraction.
    ///
    /// # Errors
    ///
    /// Returns `DecomposeError::SplitInconsistent` when a splitting line
    /// meets a hull in a configuration that cannot bisect it — a geometry
    /// consistency failure that must not be guessed around.
    pub fn execute(&self) -> Result<Decomposition> {
        let mut out = Decomposition::default();

        let mut cutters: Vec<Segment> = Vec::new();
        for hull in &self.subtractor {
            cutters.extend(hull.segments()?);
        }

        let mut fragments: Vec<ConvexHull> = Vec::new();
        for hull in &self.subtractee {
            let mut pieces = vec![hull.clone()];
            for seg in &cutters {
                let mut next = Vec::with_capacity(pieces.len());
                for piece in pieces {
                    if segment_touches_hull(seg, &piece) {
                        next.extend(split_by_line(seg, &piece, &mut out.warnings)?);
                    } else {
                        next.push(piece);
                    }
                }
                pieces = next;
            }
            fragments.extend(pieces);
        }

        out.hulls = fragments
            .into_iter()
            .filter(|f| {
                let interior = f.interior_point();
                !self.subtractor.iter().any(|a| a.contains(&interior))
            })
            .collect();
        Ok(out)
    }
}

/// Whether `seg` reaches `hull` at all: a proper edge crossing, an endpoint
/// inside the hull, or a hull vertex on the segment interior.
fn segment_touches_hull(seg: &Segment, hull: &ConvexHull) -> bool {
    let pts = hull.points();
    let n = pts.len();
    if (0..n).any(|i| proper_crossing(seg.p1(), seg.p2(), &pts[i], &pts[(i + 1) % n])) {
        return true;
    }
    if hull.contains(seg.p1()) || hull.contains(seg.p2()) {
        return true;
    }
    pts.iter().any(|v| {
        seg.point_param(v)
            .is_some_and(|t| t > EPSILON && t < 1.0 - EPSILON)
    })
}

/// A position where the splitting line meets the hull boundary.
enum CutPoint {
    Vertex(usize),
    Edge(usize, Point2),
}

/// Splits `hull` along the supporting line of `seg`.
///
/// Classifies the hull vertices by side and handles exactly three
/// configurations: the line through two (non-adjacent) vertices, through
/// one vertex and one edge, or through two edges. Grazing contact leaves
/// the hull intact. Anything else means the line cannot bisect the hull:
/// that is a consistency error, not something to guess around.
fn split_by_line(
    seg: &Segment,
    hull: &ConvexHull,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<ConvexHull>> {
    let pts = hull.points();
    let n = pts.len();
    let sides: Vec<Turn> = pts.iter().map(|p| turn(seg.p1(), seg.p2(), p)).collect();

    let ons: Vec<usize> = (0..n).filter(|&i| sides[i] == Turn::Straight).collect();
    let crossed: Vec<usize> = (0..n)
        .filter(|&i| {
            let j = (i + 1) % n;
            sides[i] != Turn::Straight && sides[j] != Turn::Straight && sides[i] != sides[j]
        })
        .collect();

    let (first, second) = match (ons.as_slice(), crossed.as_slice()) {
        ([], []) | ([_], []) => return Ok(vec![hull.clone()]),
        ([i, j], []) => {
            if (j - i) == 1 || (*i == 0 && *j == n - 1) {
                // The line runs along an existing edge.
                return Ok(vec![hull.clone()]);
            }
            (CutPoint::Vertex(*i), CutPoint::Vertex(*j))
        }
        ([v], [e]) => {
            let q = edge_intersection(seg, pts, *e)?;
            (CutPoint::Vertex(*v), CutPoint::Edge(*e, q))
        }
        ([], [e1, e2]) => {
            let q1 = edge_intersection(seg, pts, *e1)?;
            let q2 = edge_intersection(seg, pts, *e2)?;
            (CutPoint::Edge(*e1, q1), CutPoint::Edge(*e2, q2))
        }
        _ => {
            return Err(DecomposeError::SplitInconsistent {
                on_vertices: ons.len(),
                crossed_edges: crossed.len(),
            }
            .into())
        }
    };

    let mut pieces = Vec::with_capacity(2);
    for ring in [arc(pts, &first, &second), arc(pts, &second, &first)] {
        match ConvexHull::new(ring, hull.color()) {
            Ok(piece) => pieces.push(piece),
            Err(e) => warnings.push(Warning::new(
                WarningCategory::DegenerateHull,
                format!("split produced a degenerate piece: {e}"),
            )),
        }
    }
    Ok(pieces)
}

/// Intersection of the splitting line with hull edge `e`.
fn edge_intersection(seg: &Segment, pts: &[Point2], e: usize) -> Result<Point2> {
    let n = pts.len();
    crate::math::intersect_2d::line_intersection(seg.p1(), seg.p2(), &pts[e], &pts[(e + 1) % n])
        .ok_or_else(|| {
            DecomposeError::Failed("splitting line is parallel to a straddled edge".to_owned())
                .into()
        })
}

/// The boundary walk from one cut point forward to the other, including
/// both cut points.
fn arc(pts: &[Point2], from: &CutPoint, to: &CutPoint) -> Vec<Point2> {
    let n = pts.len();
    let mut out = Vec::new();
    let mut i = match from {
        CutPoint::Vertex(v) => {
            out.push(pts[*v]);
            (v + 1) % n
        }
        CutPoint::Edge(e, q) => {
            out.push(*q);
            (e + 1) % n
        }
    };
    let stop = match to {
        CutPoint::Vertex(v) => *v,
        CutPoint::Edge(e, _) => *e,
    };
    loop {
        out.push(pts[i]);
        if i == stop {
            break;
        }
        i = (i + 1) % n;
    }
    if let CutPoint::Edge(_, q) = to {
        out.push(*q);
    }
    out
}
