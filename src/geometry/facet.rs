use crate::math::Point2;

use super::{Color, ConvexHull};

/// A 3- or 4-vertex convex polygon ready for rigid-facet output.
#[derive(Debug, Clone)]
pub struct Facet {
    /// Vertices in hull winding order.
    pub points: Vec<Point2>,
    /// Resolved fill color.
    pub color: Color,
}

/// Splits a convex hull into facets of at most 4 vertices.
///
/// A hull of n > 4 vertices yields the quad (p0, p1, p2, p3) and recurses
/// on (p0, p3, p4, …) until 4 or fewer vertices remain.
#[must_use]
pub fn split_hull(hull: &ConvexHull) -> Vec<Facet> {
    let mut facets = Vec::new();
    let mut pts = hull.points().to_vec();
    while pts.len() > 4 {
        facets.push(Facet {
            points: pts[..4].to_vec(),
            color: hull.color(),
        });
        let mut rest = Vec::with_capacity(pts.len() - 2);
        rest.push(pts[0]);
        rest.extend_from_slice(&pts[3..]);
        pts = rest;
    }
    facets.push(Facet {
        points: pts,
        color: hull.color(),
    });
    facets
}

/// Axis-aligned 2D bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Bounds of a point collection; `None` when the iterator is empty.
    #[must_use]
    pub fn of_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: *first,
            max: *first,
        };
        for p in iter {
            bounds.expand(p);
        }
        Some(bounds)
    }

    /// Grows the box to include `p`.
    pub fn expand(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
