mod convert;
mod convex_decompose;
mod cut;
mod tjunction;
mod trapezoid;

pub use convert::{Conversion, Convert, Strategy};
pub use convex_decompose::ConvexHullDecomposition;
pub use cut::Cut;
pub use tjunction::TJunctionRepair;
pub use trapezoid::TrapezoidalDecomposition;

use crate::error::Warning;
use crate::geometry::ConvexHull;

/// Convex pieces produced by a decomposition or cut, plus the recoverable
/// conditions encountered along the way.
#[derive(Debug, Default)]
pub struct Decomposition {
    pub hulls: Vec<ConvexHull>,
    pub warnings: Vec<Warning>,
}

impl Decomposition {
    /// Total area covered by the pieces.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.hulls.iter().map(ConvexHull::area).sum()
    }
}
