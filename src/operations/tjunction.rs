use std::cmp::Ordering;

use crate::error::Result;
use crate::geometry::Path;
use crate::math::intersect_2d::segment_point_param;
use crate::math::{points_equal, Point2};

/// Inserts shared vertices where one path's vertex lies on another's edge.
///
/// A T-junction, a vertex of one path resting on the interior of another
/// path's edge, renders as a hairline crack in rigid-facet output. The
/// repair collects the deduplicated vertex cloud of the whole path set and
/// splices every cloud point that lies strictly between an edge's
/// endpoints into that edge, so touching paths share an explicit vertex.
pub struct TJunctionRepair {
    paths: Vec<Path>,
}

impl TJunctionRepair {
    #[must_use]
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    /// Executes the repair, returning the adjusted paths.
    ///
    /// # Errors
    ///
    /// Propagates path reconstruction failures; the repair only ever adds
    /// points, so a valid input set cannot fail in practice.
    pub fn execute(&self) -> Result<Vec<Path>> {
        let mut cloud: Vec<Point2> = self
            .paths
            .iter()
            .flat_map(|path| path.points().iter().copied())
            .collect();
        cloud.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
        });
        cloud.dedup_by(|a, b| points_equal(a, b));

        let mut out = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            let pts = path.points();
            let mut new_pts: Vec<Point2> = Vec::with_capacity(pts.len());
            let mut prev = &pts[pts.len() - 1];
            for p in pts {
                let mut hits: Vec<(f64, Point2)> = cloud
                    .iter()
                    .filter(|&s| !points_equal(s, prev) && !points_equal(s, p))
                    .filter_map(|s| {
                        segment_point_param(prev, p, s)
                            .filter(|&t| t > 0.0 && t < 1.0)
                            .map(|t| (t, *s))
                    })
                    .collect();
                hits.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
                hits.dedup_by(|a, b| points_equal(&a.1, &b.1));
                new_pts.extend(hits.into_iter().map(|(_, s)| s));
                new_pts.push(*p);
                prev = p;
            }
            out.push(Path::new(new_pts, path.color())?);
        }
        Ok(out)
    }
}
