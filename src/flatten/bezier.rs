use crate::math::Point2;

use super::FlattenParams;

/// Flattens a cubic Bézier curve into points along the curve.
///
/// Samples the Bernstein blend at `t = i/n` for `i = 1..=n`: the curve's
/// start point is excluded and its end point is the final sample, ready to
/// append to an in-progress path. The sample count is proportional to the
/// straight-line distance between the end points, a cheap stand-in for
/// arc length.
#[must_use]
pub fn flatten_cubic_bezier(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    params: &FlattenParams,
) -> Vec<Point2> {
    let chord = ((p3.x - p0.x).powi(2) + (p3.y - p0.y).powi(2)).sqrt();
    let n = params.point_count(chord);

    let mut out = Vec::with_capacity(n as usize);
    for i in 1..=n {
        let t = f64::from(i) / f64::from(n);
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        out.push(Point2::new(
            b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
            b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
        ));
    }
    out
}
