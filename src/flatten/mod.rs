mod arc;
mod bezier;

pub use arc::flatten_elliptic_arc;
pub use bezier::flatten_cubic_bezier;

/// Parameters controlling curve flattening density.
///
/// Point count is proportional to the estimated curve length and capped, so
/// a pathological curve cannot blow up the output path.
#[derive(Debug, Clone, Copy)]
pub struct FlattenParams {
    /// Sample points per unit of estimated curve length.
    pub points_per_unit: f64,
    /// Hard cap on points emitted for a single curve.
    pub max_points_per_curve: u32,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            points_per_unit: 0.5,
            max_points_per_curve: 100,
        }
    }
}

impl FlattenParams {
    /// Point count for a curve of estimated length `length`: proportional
    /// to the density budget, capped, and never below one so the curve end
    /// point is always emitted.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn point_count(&self, length: f64) -> u32 {
        let raw = (length * self.points_per_unit).ceil();
        if raw >= f64::from(self.max_points_per_curve) {
            self.max_points_per_curve
        } else if raw >= 1.0 {
            raw as u32
        } else {
            1
        }
    }
}
