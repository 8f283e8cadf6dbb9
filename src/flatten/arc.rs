use std::f64::consts::{PI, TAU};

use crate::math::{points_equal, Point2, EPSILON};

use super::FlattenParams;

/// Flattens an SVG-style elliptical arc into points along the arc.
///
/// Performs the standard endpoint-to-center conversion of the SVG
/// implementation notes (sections B.2.4 and B.2.5): radii are made
/// positive and scaled up when the chord cannot fit between them, the
/// center and angular span are solved with the large-arc/sweep flag sign
/// conventions, and the span is sampled at density proportional to
/// `π(rx + ry)`. Samples run from just past the arc start to the end
/// point, ready to append to an in-progress path.
///
/// A vanishing radius short-circuits to the arc's end point alone (the
/// SVG rules treat such an arc as a straight line), as does a chord
/// shorter than the geometric tolerance.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn flatten_elliptic_arc(
    start: &Point2,
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
    end: &Point2,
    params: &FlattenParams,
) -> Vec<Point2> {
    if rx.abs() < EPSILON || ry.abs() < EPSILON {
        return vec![*end];
    }
    if points_equal(start, end) {
        return vec![*end];
    }
    let mut rx = rx.abs();
    let mut ry = ry.abs();

    // Step 1: midpoint form of the chord in the rotated frame (eq. 5.1).
    let (sin_a, cos_a) = x_axis_rotation.sin_cos();
    let hx = 0.5 * (start.x - end.x);
    let hy = 0.5 * (start.y - end.y);
    let x1p = cos_a * hx + sin_a * hy;
    let y1p = -sin_a * hx + cos_a * hy;

    // Scale radii up when the chord cannot fit (eq. 6.2, 6.3).
    let lambda = x1p * x1p / (rx * rx) + y1p * y1p / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    // Step 2: center in the rotated frame (eq. 5.2).
    let rx_sq = rx * rx;
    let ry_sq = ry * ry;
    let x1p_sq = x1p * x1p;
    let y1p_sq = y1p * y1p;
    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let num = rx_sq * ry_sq - rx_sq * y1p_sq - ry_sq * x1p_sq;
    let den = rx_sq * y1p_sq + ry_sq * x1p_sq;
    let root = sign * (num / den).max(0.0).sqrt();
    let cxp = root * rx * y1p / ry;
    let cyp = -root * ry * x1p / rx;

    // Step 3: center in document space (eq. 5.3).
    let cx = cos_a * cxp - sin_a * cyp + 0.5 * (start.x + end.x);
    let cy = sin_a * cxp + cos_a * cyp + 0.5 * (start.y + end.y);

    // Step 4: start angle and sweep (eq. 5.5, 5.6 with the flag rules).
    let theta1 = vector_angle(1.0, 0.0, (x1p - cxp) / rx, (y1p - cyp) / ry);
    let mut delta = vector_angle(
        (x1p - cxp) / rx,
        (y1p - cyp) / ry,
        (-x1p - cxp) / rx,
        (-y1p - cyp) / ry,
    );
    if !sweep && delta > 0.0 {
        delta -= TAU;
    } else if sweep && delta < 0.0 {
        delta += TAU;
    }

    // Sample the angular span (eq. 3.1).
    let n = params.point_count(PI * (rx + ry));
    let mut out = Vec::with_capacity(n as usize);
    for i in 0..n {
        let t = f64::from(i + 1) / f64::from(n);
        let (sin_t, cos_t) = (theta1 + delta * t).sin_cos();
        let ex = rx * cos_t;
        let ey = ry * sin_t;
        out.push(Point2::new(
            cos_a * ex - sin_a * ey + cx,
            sin_a * ex + cos_a * ey + cy,
        ));
    }
    out
}

/// Signed angle from vector u to vector v (eq. 5.4).
fn vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let dot = ux * vx + uy * vy;
    let len = ((ux * ux + uy * uy) * (vx * vx + vy * vy)).sqrt();
    let angle = (dot / len).clamp(-1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 {
        -angle
    } else {
        angle
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn params() -> FlattenParams {
        FlattenParams {
            points_per_unit: 0.5,
            max_points_per_curve: 100,
        }
    }

    #[test]
    fn degenerate_radius_yields_endpoint() {
        let pts = flatten_elliptic_arc(
            &p(0.0, 0.0),
            0.0,
            5.0,
            0.0,
            false,
            true,
            &p(10.0, 0.0),
            &params(),
        );
        assert_eq!(pts.len(), 1);
        assert!(points_equal(&pts[0], &p(10.0, 0.0)));
    }

    #[test]
    fn coincident_endpoints_yield_endpoint() {
        let pts = flatten_elliptic_arc(
            &p(3.0, 3.0),
            5.0,
            5.0,
            0.0,
            true,
            true,
            &p(3.0, 3.0),
            &params(),
        );
        assert_eq!(pts.len(), 1);
    }

    #[test]
    fn semicircle_lands_on_circle() {
        // Half circle of radius 5 from (0,0) to (10,0): center (5,0).
        let pts = flatten_elliptic_arc(
            &p(0.0, 0.0),
            5.0,
            5.0,
            0.0,
            false,
            true,
            &p(10.0, 0.0),
            &params(),
        );
        assert_eq!(pts.len() as u32, params().point_count(PI * 10.0));
        for q in &pts {
            let r = ((q.x - 5.0).powi(2) + q.y.powi(2)).sqrt();
            assert_abs_diff_eq!(r, 5.0, epsilon = 1e-9);
        }
        let last = pts.last().unwrap();
        assert_abs_diff_eq!(last.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn sweep_flag_mirrors_the_arc() {
        let up = flatten_elliptic_arc(
            &p(0.0, 0.0),
            5.0,
            5.0,
            0.0,
            false,
            false,
            &p(10.0, 0.0),
            &params(),
        );
        let down = flatten_elliptic_arc(
            &p(0.0, 0.0),
            5.0,
            5.0,
            0.0,
            false,
            true,
            &p(10.0, 0.0),
            &params(),
        );
        // Midpoints of the two arcs lie on opposite sides of the chord.
        let mid_up = up[up.len() / 2 - 1];
        let mid_down = down[down.len() / 2 - 1];
        assert!(mid_up.y * mid_down.y < 0.0);
    }

    #[test]
    fn undersized_radii_are_scaled_to_fit() {
        // Radius 1 cannot span a chord of 10; the radii scale up and the
        // arc still reaches the end point.
        let pts = flatten_elliptic_arc(
            &p(0.0, 0.0),
            1.0,
            1.0,
            0.0,
            false,
            true,
            &p(10.0, 0.0),
            &params(),
        );
        let last = pts.last().unwrap();
        assert_abs_diff_eq!(last.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-9);
        for q in &pts {
            assert!(q.x.is_finite() && q.y.is_finite());
        }
    }

    #[test]
    fn large_arc_flag_takes_the_long_way() {
        let minor = flatten_elliptic_arc(
            &p(0.0, 0.0),
            5.0,
            5.0,
            0.0,
            false,
            true,
            &p(5.0, 5.0),
            &params(),
        );
        let major = flatten_elliptic_arc(
            &p(0.0, 0.0),
            5.0,
            5.0,
            0.0,
            true,
            true,
            &p(5.0, 5.0),
            &params(),
        );
        // Same circle, same sampling budget; the major arc spans more of it,
        // so consecutive samples are farther apart.
        let gap = |pts: &[Point2]| {
            let a = pts[0];
            let b = pts[1];
            ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
        };
        assert!(gap(&major) > gap(&minor));
    }
}
