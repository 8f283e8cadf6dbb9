use crate::error::{GeometryError, Result};
use crate::math::orient_2d::{turn, Turn};
use crate::math::polygon_2d::{
    dedup_points, lexicographic_min_index, remove_collinear, rotate_to_canonical_start,
    signed_area_2d,
};
use crate::math::Point2;

use super::Color;

/// Winding orientation of a stored point order, in the y-down document
/// space. Clockwise on screen corresponds to a positive shoelace sum and
/// left turns at convex corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// An implicitly-closed polygonal outline with a fill color.
///
/// The last point connects back to the first. Stored points may include
/// deliberate inline (collinear) vertices (T-junction repair inserts them),
/// but a path must have at least 3 points once duplicates and inline
/// vertices are stripped.
#[derive(Debug, Clone)]
pub struct Path {
    points: Vec<Point2>,
    color: Color,
    winding: Winding,
}

impl Path {
    /// Creates a path from an outline point sequence.
    ///
    /// Consecutive epsilon-duplicates (including across the closing wrap)
    /// are removed up front.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` for NaN or infinite coordinates,
    /// and `GeometryError::Degenerate` when fewer than 3 points survive
    /// full duplicate and inline-vertex removal.
    pub fn new(points: Vec<Point2>, color: Color) -> Result<Self> {
        if points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeometryError::NonFinite("path vertex").into());
        }
        let points = dedup_points(&points);
        let essential = remove_collinear(&points);
        if essential.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "path reduces to {} points after normalization",
                essential.len()
            ))
            .into());
        }
        let winding = winding_of(&essential);
        Ok(Self {
            points,
            color,
            winding,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Winding of the stored point order.
    #[must_use]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Signed shoelace area of the stored outline.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Fully normalized vertex ring: duplicates and inline vertices
    /// removed, rotated to start at the lexicographically minimal vertex.
    #[must_use]
    pub fn normalized(&self) -> Vec<Point2> {
        rotate_to_canonical_start(&remove_collinear(&self.points))
    }

    /// Returns this path with reversed point order and flipped winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self {
            points,
            color: self.color,
            winding: match self.winding {
                Winding::Clockwise => Winding::CounterClockwise,
                Winding::CounterClockwise => Winding::Clockwise,
            },
        }
    }

    /// Returns this path wound clockwise, reversing the point order when
    /// necessary. The decision comes from the turn at the lexicographically
    /// minimal vertex, which is strictly convex on any simple outline.
    #[must_use]
    pub fn oriented_clockwise(&self) -> Self {
        match self.winding {
            Winding::Clockwise => self.clone(),
            Winding::CounterClockwise => self.reversed(),
        }
    }
}

/// Winding of a collinear-free ring, judged at its lexicographically
/// minimal vertex.
fn winding_of(ring: &[Point2]) -> Winding {
    let n = ring.len();
    let i = lexicographic_min_index(ring);
    let prev = &ring[(i + n - 1) % n];
    let next = &ring[(i + 1) % n];
    if turn(prev, &ring[i], next) == Turn::Left {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}
