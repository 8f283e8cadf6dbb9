pub mod intersect_2d;
pub mod orient_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-6;

/// Epsilon-tolerant point equality: both coordinate deltas within [`EPSILON`].
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}
