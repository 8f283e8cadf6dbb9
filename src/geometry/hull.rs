use crate::error::{GeometryError, Result};
use crate::math::orient_2d::{turn, Turn};
use crate::math::polygon_2d::{dedup_points, remove_collinear, signed_area_2d};
use crate::math::Point2;

use super::{Color, Segment};

/// A strictly convex polygon with a fill color.
///
/// Guaranteed clockwise-wound (left turn at every vertex) with no
/// duplicate or inline vertices. A hull owns its point storage: splitting
/// operations produce brand-new hulls, never aliases into a neighbor.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point2>,
    color: Color,
}

impl ConvexHull {
    /// Builds a hull from a vertex ring.
    ///
    /// Normalizes the ring — duplicate removal, inline-vertex removal,
    /// winding correction — then verifies a strict left turn at every
    /// vertex.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` for NaN or infinite coordinates,
    /// `GeometryError::Degenerate` when fewer than 3 vertices survive
    /// normalization, and `GeometryError::NotConvex` when any vertex turns
    /// the wrong way.
    pub fn new(points: Vec<Point2>, color: Color) -> Result<Self> {
        if points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeometryError::NonFinite("hull vertex").into());
        }
        let mut pts = remove_collinear(&dedup_points(&points));
        if pts.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "convex hull needs 3 vertices, {} remain after normalization",
                pts.len()
            ))
            .into());
        }
        if signed_area_2d(&pts) < 0.0 {
            pts.reverse();
        }
        let n = pts.len();
        for i in 0..n {
            let prev = &pts[(i + n - 1) % n];
            let next = &pts[(i + 1) % n];
            if turn(prev, &pts[i], next) != Turn::Left {
                return Err(GeometryError::NotConvex(format!(
                    "wrong turn at vertex {i} ({}, {})",
                    pts[i].x, pts[i].y
                ))
                .into());
            }
        }
        Ok(Self { points: pts, color })
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Boundary-inclusive containment: `p` is not strictly right of any
    /// edge.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        let n = self.points.len();
        (0..n).all(|i| turn(&self.points[i], &self.points[(i + 1) % n], p) != Turn::Right)
    }

    /// Vertex centroid; strictly interior for a convex polygon.
    #[must_use]
    pub fn interior_point(&self) -> Point2 {
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point2::new(sx / n, sy / n)
    }

    /// Shoelace area; positive, since hulls are clockwise-wound.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Boundary segments in vertex order.
    ///
    /// # Errors
    ///
    /// Segment invariants are re-checked rather than assumed; a validated
    /// hull cannot fail them in practice.
    pub fn segments(&self) -> Result<Vec<Segment>> {
        let n = self.points.len();
        (0..n)
            .map(|i| Segment::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }
}
