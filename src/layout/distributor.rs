use bevy::prelude::*;

use crate::curve::SampledCurve;
use crate::error::LayoutError;

/// A position assigned to one item, in y-down canvas coordinates.
pub type LayoutPosition = Vec2;

/// How item positions are read off the sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Default)]
pub enum ArcSampling {
    /// Use the nearest sample at or past each target arc length.
    /// Positions are always exact curve samples.
    #[default]
    Snapped,
    /// Interpolate linearly between the two bracketing samples.
    /// Smoother at low sample counts.
    Interpolated,
}

/// Item positions evenly spaced along a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLayout {
    /// One position per item, in item order.
    pub positions: Vec<LayoutPosition>,
    /// Traversal stretch applied when the curve was too short (always `>= 1`).
    pub scale_factor: f32,
    /// Distance between consecutive items in stretched traversal units.
    pub step: f32,
}

impl CurveLayout {
    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position for item `index`, if any.
    pub fn get(&self, index: usize) -> Option<LayoutPosition> {
        self.positions.get(index).copied()
    }
}

/// Distribute `item_count` items evenly by arc length along `curve`.
///
/// See [`distribute_with`]; this uses [`ArcSampling::Snapped`].
pub fn distribute(
    curve: &SampledCurve,
    item_count: usize,
    min_item_spacing: f32,
) -> Result<CurveLayout, LayoutError> {
    distribute_with(curve, item_count, min_item_spacing, ArcSampling::Snapped)
}

/// Distribute `item_count` items evenly by arc length along `curve`.
///
/// If `min_item_spacing * item_count` exceeds the curve's length, the
/// traversal is stretched by that ratio instead of shrinking the spacing:
/// every target arc length is divided by the stretch before the lookup, so
/// positions stay on the original curve and simply crowd closer together.
///
/// The first item sits half a step from the curve's start. Position `i`
/// belongs to item `i`.
///
/// # Errors
/// [`LayoutError::NoItems`] for zero items, [`LayoutError::InvalidSpacing`] for
/// a non-positive or non-finite spacing.
pub fn distribute_with(
    curve: &SampledCurve,
    item_count: usize,
    min_item_spacing: f32,
    sampling: ArcSampling,
) -> Result<CurveLayout, LayoutError> {
    if item_count == 0 {
        return Err(LayoutError::NoItems);
    }
    if !(min_item_spacing.is_finite() && min_item_spacing > 0.0) {
        return Err(LayoutError::InvalidSpacing {
            spacing: min_item_spacing,
        });
    }

    let total_length = curve.total_length();
    let required_perimeter = min_item_spacing * item_count as f32;
    let scale_factor = if total_length > 0.0 {
        (required_perimeter / total_length).max(1.0)
    } else {
        1.0
    };

    let effective_length = total_length * scale_factor;
    let step = effective_length / item_count as f32;
    let start_offset = step / 2.0;

    let positions = (0..item_count)
        .map(|i| {
            let s = (start_offset + i as f32 * step) / scale_factor;
            match sampling {
                ArcSampling::Snapped => curve.point_at_arc_length(s).canvas,
                ArcSampling::Interpolated => curve.position_at_arc_length(s),
            }
        })
        .collect();

    Ok(CurveLayout {
        positions,
        scale_factor,
        step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::heart;

    fn heart_curve() -> SampledCurve {
        SampledCurve::sample(heart, 600, Vec2::new(3000.0, 2600.0)).unwrap()
    }

    #[test]
    fn test_rejects_invalid_arguments() {
        let curve = heart_curve();

        assert_eq!(distribute(&curve, 0, 10.0), Err(LayoutError::NoItems));
        for spacing in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let err = distribute(&curve, 3, spacing).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_exact_count() {
        let curve = heart_curve();
        for count in [1, 2, 7, 173, 1000] {
            let layout = distribute(&curve, count, 160.0).unwrap();
            assert_eq!(layout.len(), count);
        }
    }

    #[test]
    fn test_deterministic() {
        let curve = heart_curve();
        let a = distribute(&curve, 173, 160.0).unwrap();
        let b = distribute(&curve, 173, 160.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_item_at_half_length() {
        let curve = heart_curve();
        let layout = distribute(&curve, 1, 10.0).unwrap();

        assert_eq!(layout.scale_factor, 1.0);
        assert_eq!(layout.step, curve.total_length());
        assert_eq!(
            layout.positions[0],
            curve.point_at_arc_length(curve.total_length() / 2.0).canvas
        );
    }

    #[test]
    fn test_short_curve_is_stretched() {
        let curve = heart_curve();
        let count = 1000;
        let spacing = 160.0;
        assert!(spacing * count as f32 > curve.total_length());

        let layout = distribute(&curve, count, spacing).unwrap();
        assert!(layout.scale_factor > 1.0);
        assert!((layout.step - spacing).abs() < 1e-2);

        // Only traversal is stretched; every position stays on the heart
        let bounds = curve.bounds();
        for position in &layout.positions {
            assert!(position.x >= bounds.min.x - 1e-3 && position.x <= bounds.max.x + 1e-3);
            assert!(position.y >= bounds.min.y - 1e-3 && position.y <= bounds.max.y + 1e-3);
            assert!(curve.points().iter().any(|p| p.canvas == *position));
        }
    }

    #[test]
    fn test_long_curve_keeps_even_spacing() {
        let curve = heart_curve();
        let layout = distribute(&curve, 10, 160.0).unwrap();

        assert_eq!(layout.scale_factor, 1.0);
        assert!((layout.step - curve.total_length() / 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_interpolated_stays_close_to_snapped() {
        let curve = heart_curve();
        let snapped = distribute(&curve, 50, 160.0).unwrap();
        let smooth = distribute_with(&curve, 50, 160.0, ArcSampling::Interpolated).unwrap();

        // Neighbouring samples are at most one segment apart
        let max_segment = curve
            .points()
            .windows(2)
            .map(|w| w[1].arc_length - w[0].arc_length)
            .fold(0.0, f32::max);
        for (a, b) in snapped.positions.iter().zip(&smooth.positions) {
            assert!(a.distance(*b) <= max_segment + 1e-3);
        }
    }
}
