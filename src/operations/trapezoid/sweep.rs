use crate::error::{Warning, WarningCategory};
use crate::geometry::ConvexHull;
use crate::math::{points_equal, Point2, EPSILON};

use super::event::{above_and_below, EventKind, LineRecord, SweepEvent, SWEEP_NUDGE};
use super::topology::PathTopology;
use super::Decomposition;

/// The main sweep: walks the sorted events left to right, keeping the set
/// of active line records and emitting a trapezoid whenever a region
/// between two active lines closes at the current x.
pub(super) fn run_sweep(
    lines: &mut [LineRecord],
    events: &[SweepEvent],
    topo: &PathTopology,
    out: &mut Decomposition,
) {
    let mut active: Vec<usize> = Vec::new();
    let mut last_point: Option<Point2> = None;

    for e in events {
        match e.kind {
            EventKind::Start => {
                // A line starting at the previous event point closes no
                // region. Neither does a start chained onto a line that
                // ends at this very point: that line's end event, sorted
                // after the starts at this x, emits the pending regions on
                // both of its sides. Probing across the dying line here
                // would pair the wrong bounds.
                let chained = active
                    .iter()
                    .any(|&i| points_equal(lines[i].seg.p2(), &e.p));
                if !chained
                    && !active.is_empty()
                    && last_point.is_none_or(|lp| !points_equal(&lp, &e.p))
                {
                    let probe = Point2::new(e.p.x + SWEEP_NUDGE, e.p.y);
                    if let (Some(above), Some(below)) = above_and_below(lines, &active, &probe) {
                        build_trapezoid(lines, above, below, e.p.x, topo, out);
                    }
                }
                active.push(e.line);
            }
            EventKind::End => {
                active.retain(|&i| i != e.line);
                // A chained successor starts exactly at this point and
                // extends backward past the probe; it would shadow the
                // real neighbors.
                let candidates: Vec<usize> = active
                    .iter()
                    .copied()
                    .filter(|&i| !points_equal(lines[i].seg.p1(), &e.p))
                    .collect();
                let probe = Point2::new(e.p.x - SWEEP_NUDGE, e.p.y);
                let (above, below) = above_and_below(lines, &candidates, &probe);
                if let Some(above) = above {
                    build_trapezoid(lines, above, e.line, e.p.x, topo, out);
                }
                if let Some(below) = below {
                    build_trapezoid(lines, e.line, below, e.p.x, topo, out);
                }
            }
        }
        last_point = Some(e.p);
    }
}

/// Emits the region between `below` and `above`, closed on the right at
/// `right_x`.
///
/// A record is interior-moving when its path interior faces the region;
/// only moving records advance their `left` pointer, and the region's
/// color comes from the moving record's path (resolved through the
/// topology pass, so hole boundaries contribute their surrounding color).
fn build_trapezoid(
    lines: &mut [LineRecord],
    above: usize,
    below: usize,
    right_x: f64,
    topo: &PathTopology,
    out: &mut Decomposition,
) {
    let above_moving = !lines[above].color_above;
    let below_moving = lines[below].color_above;
    if !above_moving && !below_moving {
        return; // Exterior on both sides: empty space.
    }

    let left_x = f64::max(
        if below_moving {
            lines[below].left.x
        } else {
            lines[below].seg.p1().x
        },
        if above_moving {
            lines[above].left.x
        } else {
            lines[above].seg.p1().x
        },
    );
    if left_x >= right_x - EPSILON {
        return; // Region already emitted up to here.
    }

    let p1 = Point2::new(left_x, lines[below].seg.eval_y(left_x));
    let p2 = Point2::new(left_x, lines[above].seg.eval_y(left_x));
    let p3 = Point2::new(right_x, lines[above].seg.eval_y(right_x));
    let p4 = Point2::new(right_x, lines[below].seg.eval_y(right_x));

    // Coincident corners collapse a quad into a triangle.
    let mut points = vec![p1];
    if (p2.y - p1.y).abs() >= EPSILON {
        points.push(p2);
    }
    points.push(p3);
    if (p4.y - p3.y).abs() >= EPSILON {
        points.push(p4);
    }
    if points.len() < 3 {
        out.warnings.push(Warning::new(
            WarningCategory::DegenerateTrapezoid,
            format!("degenerate trapezoid at x = {left_x}..{right_x}"),
        ));
        return;
    }

    let source = if below_moving {
        lines[below].path
    } else {
        lines[above].path
    };
    match ConvexHull::new(points, topo.effective_color[source]) {
        Ok(hull) => out.hulls.push(hull),
        Err(e) => {
            out.warnings.push(Warning::new(
                WarningCategory::DegenerateTrapezoid,
                format!("trapezoid at x = {left_x}..{right_x} rejected: {e}"),
            ));
            return;
        }
    }

    if below_moving {
        lines[below].left = p4;
    }
    if above_moving {
        lines[above].left = p3;
    }
}
