use log::warn;

use crate::error::{Result, Warning, WarningCategory};
use crate::geometry::{split_hull, Bounds, Facet, Path};

use super::{ConvexHullDecomposition, Decomposition, TJunctionRepair, TrapezoidalDecomposition};

/// Decomposition strategy for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Trapezoidal sweep; a topology failure falls back to convex hulls.
    #[default]
    TrapezoidalWithFallback,
    /// Trapezoidal sweep only; topology failures propagate.
    Trapezoidal,
    /// Greedy convex-hull decomposition only.
    ConvexHulls,
}

/// Result of an end-to-end conversion: facets for the serializer, the
/// bounding box of the output, and every recoverable condition met along
/// the way (individually failed paths are enumerated here while the
/// successful ones still produce facets).
#[derive(Debug)]
pub struct Conversion {
    pub facets: Vec<Facet>,
    pub bounds: Option<Bounds>,
    pub warnings: Vec<Warning>,
}

/// End-to-end conversion of flattened outline paths into facets.
///
/// Runs the pipeline stages in their required order: T-junction repair
/// across the whole path set first (it depends on every path's final
/// vertices at once), then per-path decomposition under the chosen
/// strategy, then facet extraction for the rigid-facet output format.
pub struct Convert {
    paths: Vec<Path>,
    strategy: Strategy,
}

impl Convert {
    #[must_use]
    pub fn new(paths: Vec<Path>) -> Self {
        Self {
            paths,
            strategy: Strategy::default(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Executes the conversion.
    ///
    /// # Errors
    ///
    /// Under [`Strategy::Trapezoidal`], propagates the sweep's topology
    /// failure; the fallback strategy downgrades it to a warning instead.
    /// T-junction repair errors always propagate.
    pub fn execute(&self) -> Result<Conversion> {
        let repaired = TJunctionRepair::new(self.paths.clone()).execute()?;

        let decomposition = match self.strategy {
            Strategy::ConvexHulls => ConvexHullDecomposition::new(repaired).execute(),
            Strategy::Trapezoidal => TrapezoidalDecomposition::new(repaired).execute()?,
            Strategy::TrapezoidalWithFallback => {
                match TrapezoidalDecomposition::new(repaired.clone()).execute() {
                    Ok(dec) => dec,
                    Err(e) => {
                        warn!("trapezoidal decomposition failed, using convex hulls: {e}");
                        let mut dec = ConvexHullDecomposition::new(repaired).execute();
                        dec.warnings.insert(
                            0,
                            Warning::new(
                                WarningCategory::DecompositionFallback,
                                format!("trapezoidal decomposition failed: {e}"),
                            ),
                        );
                        dec
                    }
                }
            }
        };

        let Decomposition { hulls, warnings } = decomposition;
        let facets: Vec<Facet> = hulls.iter().flat_map(|hull| split_hull(hull)).collect();
        let bounds = Bounds::of_points(facets.iter().flat_map(|f| f.points.iter()));
        Ok(Conversion {
            facets,
            bounds,
            warnings,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Color, ColorRegistry};
    use crate::math::polygon_2d::signed_area_2d;
    use crate::math::Point2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64, color: Color) -> Path {
        Path::new(
            vec![
                p(x0, y0),
                p(x0 + size, y0),
                p(x0 + size, y0 + size),
                p(x0, y0 + size),
            ],
            color,
        )
        .unwrap()
    }

    fn facet_area(facets: &[Facet]) -> f64 {
        facets.iter().map(|f| signed_area_2d(&f.points).abs()).sum()
    }

    #[test]
    fn single_square_converts_to_one_facet() {
        let c = ColorRegistry::new().intern("red");
        let conv = Convert::new(vec![square(0.0, 0.0, 10.0, c)]).execute().unwrap();
        assert!(conv.warnings.is_empty());
        assert_eq!(conv.facets.len(), 1);
        assert_eq!(conv.facets[0].points.len(), 4);
        assert_eq!(conv.facets[0].color, c);
        let bounds = conv.bounds.unwrap();
        assert!((bounds.width() - 10.0).abs() < 1e-9);
        assert!((bounds.height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn all_facets_have_at_most_four_vertices() {
        let c = ColorRegistry::new().intern("red");
        // An octagon decomposes into one hull with 8 vertices, which must
        // then split into 3 facets.
        let octagon = Path::new(
            vec![
                p(3.0, 0.0),
                p(7.0, 0.0),
                p(10.0, 3.0),
                p(10.0, 7.0),
                p(7.0, 10.0),
                p(3.0, 10.0),
                p(0.0, 7.0),
                p(0.0, 3.0),
            ],
            c,
        )
        .unwrap();
        let expected = octagon.signed_area();
        let conv = Convert::new(vec![octagon])
            .with_strategy(Strategy::ConvexHulls)
            .execute()
            .unwrap();
        assert!(conv.facets.iter().all(|f| f.points.len() <= 4));
        assert!((facet_area(&conv.facets) - expected).abs() < 1e-9);
    }

    #[test]
    fn overlapping_paths_fall_back_to_convex_hulls() {
        let mut reg = ColorRegistry::new();
        let red = reg.intern("red");
        let blue = reg.intern("blue");
        let paths = vec![
            square(0.0, 0.0, 10.0, red),
            square(5.0, 5.0, 10.0, blue),
        ];
        let conv = Convert::new(paths.clone()).execute().unwrap();
        assert_eq!(
            conv.warnings[0].category.key(),
            "decomposition-fallback"
        );
        // Both squares decompose independently under the fallback.
        assert!((facet_area(&conv.facets) - 200.0).abs() < 1e-6);

        // The strict strategy refuses instead.
        assert!(Convert::new(paths)
            .with_strategy(Strategy::Trapezoidal)
            .execute()
            .is_err());
    }

    #[test]
    fn touching_paths_share_vertices_after_conversion() {
        let mut reg = ColorRegistry::new();
        let red = reg.intern("red");
        let blue = reg.intern("blue");
        // The small square's left edge lies on the big square's right edge;
        // repair inserts the shared vertices before decomposition. The
        // shared boundary is a literal edge overlap, so the sweep refuses
        // and the conversion takes the convex-hull route.
        let paths = vec![
            square(0.0, 0.0, 10.0, red),
            Path::new(
                vec![p(10.0, 2.0), p(14.0, 2.0), p(14.0, 8.0), p(10.0, 8.0)],
                blue,
            )
            .unwrap(),
        ];
        let conv = Convert::new(paths).execute().unwrap();
        assert_eq!(conv.warnings[0].category.key(), "decomposition-fallback");
        assert!((facet_area(&conv.facets) - (100.0 + 24.0)).abs() < 1e-6);
    }
}
