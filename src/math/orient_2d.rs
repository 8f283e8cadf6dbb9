use super::{Point2, EPSILON};

/// Turn direction of a vertex triple.
///
/// In the y-down coordinate space of vector documents, a left turn
/// (positive cross product) is a clockwise turn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Straight,
}

/// Twice the signed area of the triangle (a, b, c).
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Classifies the turn at `b` when walking a → b → c.
///
/// Cross products within [`EPSILON`] classify as `Straight`, so floating
/// noise cannot flip a collinear triple into a spurious left or right turn.
#[must_use]
pub fn turn(a: &Point2, b: &Point2, c: &Point2) -> Turn {
    let cross = orientation(a, b, c);
    if cross > EPSILON {
        Turn::Left
    } else if cross < -EPSILON {
        Turn::Right
    } else {
        Turn::Straight
    }
}
