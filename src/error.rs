use thiserror::Error;

/// Top-level error type for the facetize kernel.
#[derive(Debug, Error)]
pub enum FacetizeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Decompose(#[from] DecomposeError),
}

/// Errors raised by the geometric kernel and validated constructors.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("degenerate segment between ({x1}, {y1}) and ({x2}, {y2})")]
    DegenerateSegment { x1: f64, y1: f64, x2: f64, y2: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("polygon is not convex: {0}")]
    NotConvex(String),
}

/// Errors raised by the decomposition operations.
#[derive(Debug, Error)]
pub enum DecomposeError {
    #[error("paths cross or overlap: {0}")]
    CrossingPaths(String),

    #[error(
        "split line does not bisect hull: {on_vertices} on-vertices, {crossed_edges} crossed edges"
    )]
    SplitInconsistent {
        on_vertices: usize,
        crossed_edges: usize,
    },

    #[error("decomposition failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`FacetizeError`].
pub type Result<T> = std::result::Result<T, FacetizeError>;

/// Category of a recoverable condition reported alongside operation output.
///
/// Categories are stable: callers route warnings by [`WarningCategory::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCategory {
    /// A path collapsed below three usable vertices.
    DegeneratePath,
    /// Convex-hull decomposition found no convex triple with an empty triangle.
    NoConvexBite,
    /// A hull failed construction and was dropped.
    DegenerateHull,
    /// A trapezoid collapsed below three vertices and was dropped.
    DegenerateTrapezoid,
    /// More than two edges of a single path meet at one point.
    MultiEdgePoint,
    /// Trapezoidal decomposition failed and convex hulls were used instead.
    DecompositionFallback,
}

impl WarningCategory {
    /// Stable key for this category.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::DegeneratePath => "degenerate-path",
            Self::NoConvexBite => "no-convex-bite",
            Self::DegenerateHull => "degenerate-hull",
            Self::DegenerateTrapezoid => "degenerate-trapezoid",
            Self::MultiEdgePoint => "multi-edge-point",
            Self::DecompositionFallback => "decomposition-fallback",
        }
    }
}

/// A recoverable condition: the offending path or fragment was skipped and
/// processing continued.
#[derive(Debug, Clone)]
pub struct Warning {
    pub category: WarningCategory,
    pub message: String,
}

impl Warning {
    pub(crate) fn new(category: WarningCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}
