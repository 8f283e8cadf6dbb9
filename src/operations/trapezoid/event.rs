use std::cmp::Ordering;

use crate::geometry::{Color, Path, Segment};
use crate::math::orient_2d::orientation;
use crate::math::{Point2, EPSILON};

/// Small x offset used when probing the active set just beside an event
/// point, so lines starting or ending exactly at the point do not make the
/// above/below classification ambiguous.
pub(super) const SWEEP_NUDGE: f64 = 1e-7;

/// A boundary segment tracked by the sweep.
///
/// `color_above` records which side of the segment is path interior: for a
/// clockwise path an edge walked left-to-right has its interior on the
/// larger-y side. `left` is the left boundary already emitted for the
/// region this record borders.
#[derive(Debug, Clone)]
pub(super) struct LineRecord {
    pub seg: Segment,
    pub path: usize,
    pub color: Color,
    pub color_above: bool,
    pub left: Point2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum EventKind {
    Start,
    End,
}

/// One endpoint of a line record.
#[derive(Debug, Clone, Copy)]
pub(super) struct SweepEvent {
    pub p: Point2,
    pub line: usize,
    pub kind: EventKind,
}

/// Builds the line-record arena and sorted event queue for `paths`.
///
/// Vertical edges contribute no trapezoid boundary in an x-sweep and are
/// dropped here (the crossing pre-pass inspects them separately). Events
/// are ordered by x, then starts before ends, then by y — the ordering
/// that avoids zero-width trapezoids at shared x-coordinates.
pub(super) fn build_events(paths: &[Path]) -> (Vec<LineRecord>, Vec<SweepEvent>) {
    let mut lines = Vec::new();
    let mut events = Vec::new();
    for (path_idx, path) in paths.iter().enumerate() {
        let pts = path.points();
        let mut prev = &pts[pts.len() - 1];
        for p in pts {
            if (prev.x - p.x).abs() < EPSILON {
                prev = p;
                continue;
            }
            let (p1, p2, color_above) = if prev.x < p.x {
                (prev, p, true)
            } else {
                (p, prev, false)
            };
            let Ok(seg) = Segment::new(*p1, *p2) else {
                prev = p;
                continue;
            };
            let line = lines.len();
            lines.push(LineRecord {
                seg,
                path: path_idx,
                color: path.color(),
                color_above,
                left: *p1,
            });
            events.push(SweepEvent {
                p: *p1,
                line,
                kind: EventKind::Start,
            });
            events.push(SweepEvent {
                p: *p2,
                line,
                kind: EventKind::End,
            });
            prev = p;
        }
    }
    events.sort_by(event_order);
    (lines, events)
}

fn event_order(a: &SweepEvent, b: &SweepEvent) -> Ordering {
    a.p.x
        .partial_cmp(&b.p.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.p.y.partial_cmp(&b.p.y).unwrap_or(Ordering::Equal))
}

/// Finds the active lines directly above and below `p`: "above" means the
/// larger-y side. Candidates are classified by the turn test against the
/// line and ranked by their y at `p.x`.
pub(super) fn above_and_below(
    lines: &[LineRecord],
    active: &[usize],
    p: &Point2,
) -> (Option<usize>, Option<usize>) {
    let mut above: Option<usize> = None;
    let mut below: Option<usize> = None;
    for &idx in active {
        let line = &lines[idx];
        let y = line.seg.eval_y(p.x);
        if orientation(line.seg.p1(), line.seg.p2(), p) > 0.0 {
            // p lies on the larger-y side, so this line is below it.
            if below.is_none_or(|b| y > lines[b].seg.eval_y(p.x)) {
                below = Some(idx);
            }
        } else if above.is_none_or(|a| y < lines[a].seg.eval_y(p.x)) {
            above = Some(idx);
        }
    }
    (above, below)
}
