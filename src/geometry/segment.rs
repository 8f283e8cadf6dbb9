use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{line_intersection, proper_crossing, segment_point_param};
use crate::math::{points_equal, Point2};

/// A non-degenerate line segment.
///
/// Construction rejects epsilon-equal endpoints and non-finite
/// coordinates: a degenerate segment that slips through corrupts every
/// convexity invariant downstream, so there is no silent recovery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    p1: Point2,
    p2: Point2,
}

impl Segment {
    /// Creates a segment from two distinct points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` for NaN or infinite coordinates
    /// and `GeometryError::DegenerateSegment` for epsilon-equal endpoints.
    pub fn new(p1: Point2, p2: Point2) -> Result<Self> {
        if !(p1.x.is_finite() && p1.y.is_finite() && p2.x.is_finite() && p2.y.is_finite()) {
            return Err(GeometryError::NonFinite("segment endpoint").into());
        }
        if points_equal(&p1, &p2) {
            return Err(GeometryError::DegenerateSegment {
                x1: p1.x,
                y1: p1.y,
                x2: p2.x,
                y2: p2.y,
            }
            .into());
        }
        Ok(Self { p1, p2 })
    }

    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Evaluates the supporting line at `x`.
    ///
    /// Exact endpoint x-values return the endpoint y before interpolating,
    /// so trapezoid corners land exactly on shared vertices. Must not be
    /// called on near-vertical segments; the sweep drops those before any
    /// evaluation arises.
    #[must_use]
    pub fn eval_y(&self, x: f64) -> f64 {
        if x == self.p1.x {
            return self.p1.y;
        }
        if x == self.p2.x {
            return self.p2.y;
        }
        self.p1.y + (x - self.p1.x) * (self.p2.y - self.p1.y) / (self.p2.x - self.p1.x)
    }

    /// Proper interior crossing with `other`; shared endpoints and
    /// parallel overlaps do not count.
    #[must_use]
    pub fn crosses(&self, other: &Segment) -> bool {
        proper_crossing(&self.p1, &self.p2, &other.p1, &other.p2)
    }

    /// Intersection of the two supporting lines; `None` when parallel.
    #[must_use]
    pub fn intersection(&self, other: &Segment) -> Option<Point2> {
        line_intersection(&self.p1, &self.p2, &other.p1, &other.p2)
    }

    /// Parameter of `p` along this segment, or `None` when `p` is off the
    /// supporting line.
    #[must_use]
    pub fn point_param(&self, p: &Point2) -> Option<f64> {
        segment_point_param(&self.p1, &self.p2, p)
    }
}
