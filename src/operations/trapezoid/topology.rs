use crate::geometry::{Color, Path};
use crate::math::Point2;

use super::event::{above_and_below, EventKind, LineRecord, SweepEvent, SWEEP_NUDGE};

/// Nesting relations resolved before the main sweep.
pub(super) struct PathTopology {
    /// The path whose interior immediately encloses each path, if any.
    pub outer: Vec<Option<usize>>,
    /// Fill color each path's boundary contributes to trapezoids. A hole
    /// boundary contributes the color surrounding its outer path instead
    /// of its own.
    pub effective_color: Vec<Color>,
}

/// Second sweep: classifies every path's nesting before trapezoids are
/// emitted.
///
/// At a path's first event, the active line directly below the event point
/// decides the enclosure: no line below means the path lies against the
/// decomposition root; a line whose interior faces up means the path nests
/// directly inside that line's path; a line whose interior faces away
/// means the path shares that path's own enclosure. A path whose outer
/// path is itself nested is a hole, and holes render in the color that
/// surrounds their outer path.
pub(super) fn infer_topology(
    paths: &[Path],
    lines: &[LineRecord],
    events: &[SweepEvent],
) -> PathTopology {
    let mut outer: Vec<Option<usize>> = vec![None; paths.len()];
    let mut seen: Vec<bool> = vec![false; paths.len()];
    let mut order: Vec<usize> = Vec::with_capacity(paths.len());
    let mut active: Vec<usize> = Vec::new();

    for e in events {
        match e.kind {
            EventKind::Start => {
                let path = lines[e.line].path;
                if !seen[path] {
                    seen[path] = true;
                    order.push(path);
                    let probe = Point2::new(e.p.x + SWEEP_NUDGE, e.p.y);
                    let others: Vec<usize> = active
                        .iter()
                        .copied()
                        .filter(|&i| lines[i].path != path)
                        .collect();
                    let (_, below) = above_and_below(lines, &others, &probe);
                    outer[path] = below.and_then(|b| {
                        if lines[b].color_above {
                            Some(lines[b].path)
                        } else {
                            outer[lines[b].path]
                        }
                    });
                }
                active.push(e.line);
            }
            EventKind::End => {
                active.retain(|&i| i != e.line);
            }
        }
    }

    // Resolve hole colors in classification order: a path's outer chain
    // always points at already-classified paths, so one pass settles the
    // recursion.
    let mut effective_color: Vec<Color> = paths.iter().map(Path::color).collect();
    for &path in &order {
        if let Some(enclosing) = outer[path] {
            if let Some(grand) = outer[enclosing] {
                effective_color[path] = effective_color[grand];
            }
        }
    }

    PathTopology {
        outer,
        effective_color,
    }
}
