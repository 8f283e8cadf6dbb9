use super::orient_2d::{turn, Turn};
use super::{points_equal, Point2, EPSILON};

/// Computes the signed shoelace area of a closed polygon.
///
/// Positive for clockwise winding in the y-down document space.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Index of the lexicographically minimal vertex (smallest x, then smallest y).
#[must_use]
pub fn lexicographic_min_index(points: &[Point2]) -> usize {
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - EPSILON || ((pt.x - b.x).abs() < EPSILON && pt.y < b.y) {
            best = i;
        }
    }
    best
}

/// Rotates a closed polygon so it starts at the lexicographically minimal
/// vertex. Ensures deterministic output independent of the input start.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let best = lexicographic_min_index(points);
    if best == 0 {
        return points.to_vec();
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Removes cyclically-consecutive duplicate points (epsilon-equal),
/// including duplicates across the closing wrap.
#[must_use]
pub fn dedup_points(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if let Some(last) = out.last() {
            if points_equal(last, p) {
                continue;
            }
        }
        out.push(*p);
    }
    while out.len() > 1 && points_equal(&out[0], &out[out.len() - 1]) {
        out.pop();
    }
    out
}

/// Removes inline vertices: points whose neighbor triple is collinear
/// within epsilon. Repeats until stable, since removing one inline vertex
/// can expose another.
#[must_use]
pub fn remove_collinear(points: &[Point2]) -> Vec<Point2> {
    let mut pts = points.to_vec();
    loop {
        let n = pts.len();
        if n < 3 {
            return pts;
        }
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let prev = &pts[(i + n - 1) % n];
            let next = &pts[(i + 1) % n];
            if turn(prev, &pts[i], next) != Turn::Straight {
                out.push(pts[i]);
            }
        }
        if out.len() == n {
            return pts;
        }
        pts = out;
    }
}
