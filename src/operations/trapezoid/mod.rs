mod crossing;
mod event;
mod sweep;
mod topology;

use log::debug;

use crate::error::Result;
use crate::geometry::Path;

use super::Decomposition;

/// Sweep-line trapezoidal decomposition with nesting inference.
///
/// Moves a sweep line along the x-axis over the edges of a closed path
/// set (possibly nested, representing holes), emitting a trapezoid or
/// triangle whenever a region between two active edges closes. Fill
/// colors follow the nesting topology: hole interiors render in the color
/// surrounding the hole's outer path.
///
/// The sweep assumes non-crossing edges and well-separated meeting
/// points; a pre-pass verifies this and fails the whole attempt when the
/// path set breaks the assumption, letting the caller fall back to
/// convex-hull decomposition.
pub struct TrapezoidalDecomposition {
    paths: Vec<Path>,
}

impl TrapezoidalDecomposition {
    #[must_use]
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    /// Executes the decomposition.
    ///
    /// # Errors
    ///
    /// Returns `DecomposeError::CrossingPaths` when edges cross, overlap,
    /// or meet more than two at a point across distinct paths — the
    /// nesting topology cannot be determined safely.
    pub fn execute(&self) -> Result<Decomposition> {
        let mut out = Decomposition::default();

        let clockwise: Vec<Path> = self.paths.iter().map(Path::oriented_clockwise).collect();
        out.warnings.extend(crossing::check_crossings(&clockwise)?);

        let (mut lines, events) = event::build_events(&clockwise);
        if events.len() < 4 {
            return Ok(out);
        }

        let topo = topology::infer_topology(&clockwise, &lines, &events);
        sweep::run_sweep(&mut lines, &events, &topo, &mut out);
        debug!(
            "trapezoidal decomposition: {} paths -> {} pieces, {} warnings",
            self.paths.len(),
            out.hulls.len(),
            out.warnings.len()
        );
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Color, ColorRegistry, ConvexHull, Path};
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

    fn area_of(dec: &Decomposition, color: Color) -> f64 {
        dec.hulls
            .iter()
            .filter(|h| h.color() == color)
            .map(ConvexHull::area)
            .sum()
    }

    #[test]
    fn square_becomes_one_trapezoid() {
        let c = ColorRegistry::new().intern("red");
        let dec = TrapezoidalDecomposition::new(vec![square(0.0, 0.0, 10.0, c)])
            .execute()
            .unwrap();
        assert!(dec.warnings.is_empty());
        assert_eq!(dec.hulls.len(), 1);
        assert!((dec.hulls[0].area() - 100.0).abs() < 1e-9);
        assert_eq!(dec.hulls[0].color(), c);
    }

    #[test]
    fn diamond_decomposes_into_left_and_right_triangles() {
        let c = ColorRegistry::new().intern("red");
        let diamond = Path::new(
            vec![p(0.0, 5.0), p(5.0, 0.0), p(10.0, 5.0), p(5.0, 10.0)],
            c,
        )
        .unwrap();
        let dec = TrapezoidalDecomposition::new(vec![diamond]).execute().unwrap();
        assert!(dec.warnings.is_empty());
        assert!((dec.total_area() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn pieces_do_not_overlap() {
        let c = ColorRegistry::new().intern("red");
        let diamond = Path::new(
            vec![p(0.0, 5.0), p(5.0, 0.0), p(10.0, 5.0), p(5.0, 10.0)],
            c,
        )
        .unwrap();
        let dec = TrapezoidalDecomposition::new(vec![diamond]).execute().unwrap();
        for (i, a) in dec.hulls.iter().enumerate() {
            for (j, b) in dec.hulls.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.contains(&a.interior_point()),
                        "piece {i} interior lies inside piece {j}"
                    );
                }
            }
        }
    }

    #[test]
    fn side_by_side_squares_keep_their_colors() {
        let mut reg = ColorRegistry::new();
        let red = reg.intern("red");
        let blue = reg.intern("blue");
        let dec = TrapezoidalDecomposition::new(vec![
            square(0.0, 0.0, 10.0, red),
            square(20.0, 0.0, 10.0, blue),
        ])
        .execute()
        .unwrap();
        assert!((area_of(&dec, red) - 100.0).abs() < 1e-9);
        assert!((area_of(&dec, blue) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn nested_square_renders_on_top_of_its_enclosure() {
        let mut reg = ColorRegistry::new();
        let blue = reg.intern("blue");
        let red = reg.intern("red");
        let dec = TrapezoidalDecomposition::new(vec![
            square(0.0, 0.0, 20.0, blue),
            square(5.0, 5.0, 10.0, red),
        ])
        .execute()
        .unwrap();
        // 400 total: the inner square keeps its own color, the rest is blue.
        assert!((dec.total_area() - 400.0).abs() < 1e-9);
        assert!((area_of(&dec, red) - 100.0).abs() < 1e-9);
        assert!((area_of(&dec, blue) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn hole_interior_takes_the_surrounding_color() {
        let mut reg = ColorRegistry::new();
        let blue = reg.intern("blue");
        let red = reg.intern("red");
        let green = reg.intern("green");
        let dec = TrapezoidalDecomposition::new(vec![
            square(0.0, 0.0, 20.0, blue),
            square(2.0, 2.0, 16.0, red),
            square(5.0, 5.0, 10.0, green),
        ])
        .execute()
        .unwrap();
        // The innermost square is a hole in the red one; its interior
        // renders blue. Green appears nowhere.
        assert!((dec.total_area() - 400.0).abs() < 1e-9);
        assert!(area_of(&dec, green).abs() < 1e-9);
        assert!((area_of(&dec, red) - (256.0 - 100.0)).abs() < 1e-9);
        assert!((area_of(&dec, blue) - (400.0 - 256.0 + 100.0)).abs() < 1e-9);
    }

    #[test]
    fn reflex_bump_on_the_bottom_edge_conserves_area() {
        // Two sloped edges chain at (8, 4): one ends where the next
        // starts. The regions on both sides of the chain vertex must
        // still come out whole.
        let c = ColorRegistry::new().intern("red");
        let pentagon = Path::new(
            vec![p(0.0, 0.0), p(8.0, 4.0), p(16.0, 0.0), p(16.0, 16.0), p(0.0, 16.0)],
            c,
        )
        .unwrap();
        let dec = TrapezoidalDecomposition::new(vec![pentagon]).execute().unwrap();
        assert!(dec.warnings.is_empty());
        assert!((dec.total_area() - 224.0).abs() < 1e-9);
    }

    #[test]
    fn reflex_bump_on_the_top_edge_conserves_area() {
        let c = ColorRegistry::new().intern("red");
        let pentagon = Path::new(
            vec![p(0.0, 0.0), p(16.0, 0.0), p(16.0, 16.0), p(8.0, 12.0), p(0.0, 16.0)],
            c,
        )
        .unwrap();
        let dec = TrapezoidalDecomposition::new(vec![pentagon]).execute().unwrap();
        assert!(dec.warnings.is_empty());
        assert!((dec.total_area() - 224.0).abs() < 1e-9);
    }

    #[test]
    fn bump_pentagon_nested_in_a_square_conserves_both_areas() {
        let mut reg = ColorRegistry::new();
        let blue = reg.intern("blue");
        let red = reg.intern("red");
        let outer = Path::new(
            vec![p(-4.0, -10.0), p(20.0, -10.0), p(20.0, 26.0), p(-4.0, 26.0)],
            blue,
        )
        .unwrap();
        let pentagon = Path::new(
            vec![p(0.0, 0.0), p(8.0, 4.0), p(16.0, 0.0), p(16.0, 16.0), p(0.0, 16.0)],
            red,
        )
        .unwrap();
        let dec = TrapezoidalDecomposition::new(vec![outer, pentagon])
            .execute()
            .unwrap();
        assert!((dec.total_area() - 864.0).abs() < 1e-9);
        assert!((area_of(&dec, red) - 224.0).abs() < 1e-9);
        assert!((area_of(&dec, blue) - 640.0).abs() < 1e-9);
    }

    #[test]
    fn crossing_paths_fail_decomposition() {
        let mut reg = ColorRegistry::new();
        let red = reg.intern("red");
        let blue = reg.intern("blue");
        let result = TrapezoidalDecomposition::new(vec![
            square(0.0, 0.0, 10.0, red),
            square(5.0, 5.0, 10.0, blue),
        ])
        .execute();
        assert!(result.is_err());
    }

    #[test]
    fn empty_input_yields_empty_decomposition() {
        let dec = TrapezoidalDecomposition::new(vec![]).execute().unwrap();
        assert!(dec.hulls.is_empty());
        assert!(dec.warnings.is_empty());
    }
}
