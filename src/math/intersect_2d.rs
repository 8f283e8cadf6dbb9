use super::orient_2d::{turn, Turn};
use super::{points_equal, Point2, EPSILON};

/// Proper interior crossing test for segments (a0, a1) and (b0, b1).
///
/// Shared endpoints (within epsilon) and parallel or collinear
/// configurations do not count as crossings: adjacent polygon edges
/// routinely share endpoints and must not register against each other.
#[must_use]
pub fn proper_crossing(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    if points_equal(a0, b0)
        || points_equal(a0, b1)
        || points_equal(a1, b0)
        || points_equal(a1, b1)
    {
        return false;
    }
    let sb0 = turn(a0, a1, b0);
    let sb1 = turn(a0, a1, b1);
    if sb0 == Turn::Straight || sb1 == Turn::Straight || sb0 == sb1 {
        return false;
    }
    let sa0 = turn(b0, b1, a0);
    let sa1 = turn(b0, b1, a1);
    sa0 != Turn::Straight && sa1 != Turn::Straight && sa0 != sa1
}

/// Intersection of the infinite lines through (a0, a1) and (b0, b1).
///
/// Standard two-line parametric solution. Returns `None` for parallel
/// lines; callers are expected to have established a crossing first.
#[must_use]
pub fn line_intersection(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<Point2> {
    let dax = a1.x - a0.x;
    let day = a1.y - a0.y;
    let dbx = b1.x - b0.x;
    let dby = b1.y - b0.y;
    let cross = dax * dby - day * dbx;
    if cross.abs() < EPSILON {
        return None;
    }
    let t = ((b0.x - a0.x) * dby - (b0.y - a0.y) * dbx) / cross;
    Some(Point2::new(a0.x + t * dax, a0.y + t * day))
}

/// Parameter of `p` along the segment (a, b) by dominant-axis projection.
///
/// Returns `None` when `p` does not lie on the supporting line within
/// epsilon. The parameter is not clamped: values outside `[0, 1]` indicate
/// a point on the line but beyond the segment.
#[must_use]
pub fn segment_point_param(a: &Point2, b: &Point2, p: &Point2) -> Option<f64> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let t = if dx.abs() >= dy.abs() {
        (p.x - a.x) / dx
    } else {
        (p.y - a.y) / dy
    };
    let qx = a.x + t * dx;
    let qy = a.y + t * dy;
    if (p.x - qx).abs() < EPSILON && (p.y - qy).abs() < EPSILON {
        Some(t)
    } else {
        None
    }
}
