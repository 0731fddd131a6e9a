//! Arc-length parameterized sampling of parametric curves.
//!
//! A [`SampledCurve`] is built once from a curve function and answers
//! "which point lies at arc length `s`" queries by binary search over the
//! cumulative lengths.

use std::f32::consts::PI;
use std::ops::Range;

use bevy::prelude::*;

use crate::error::LayoutError;

/// A single sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Curve parameter this sample was taken at.
    pub t: f32,
    /// Raw output of the curve function.
    pub raw: Vec2,
    /// Normalized and scaled canvas position (y-down).
    pub canvas: Vec2,
    /// Cumulative arc length from the first sample.
    pub arc_length: f32,
}

/// A curve sampled at a fixed resolution and fitted to a canvas size.
///
/// Samples are ordered by `t` and their `arc_length` is non-decreasing,
/// starting at zero. The curve is immutable once built.
#[derive(Debug, Clone)]
pub struct SampledCurve {
    points: Vec<CurvePoint>,
    total_length: f32,
    canvas_size: Vec2,
}

impl SampledCurve {
    /// Sample `curve_fn` over `[-π, π]`.
    ///
    /// See [`SampledCurve::sample_range`].
    pub fn sample(
        curve_fn: impl Fn(f32) -> Vec2,
        samples: usize,
        canvas_size: Vec2,
    ) -> Result<Self, LayoutError> {
        Self::sample_range(curve_fn, -PI..PI, samples, canvas_size)
    }

    /// Sample `curve_fn` at `samples` evenly spaced parameters covering `range`
    /// (both ends included).
    ///
    /// The raw points are normalized into a unit square centered on the origin
    /// and scaled to `canvas_size`, with the vertical axis flipped so that the
    /// result is in y-down canvas coordinates.
    ///
    /// # Errors
    /// Returns [`LayoutError::TooFewSamples`] if `samples < 2`.
    pub fn sample_range(
        curve_fn: impl Fn(f32) -> Vec2,
        range: Range<f32>,
        samples: usize,
        canvas_size: Vec2,
    ) -> Result<Self, LayoutError> {
        if samples < 2 {
            return Err(LayoutError::TooFewSamples { count: samples });
        }

        let span_t = range.end - range.start;
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);

        let mut points: Vec<CurvePoint> = (0..samples)
            .map(|i| {
                let t = range.start + span_t * i as f32 / (samples - 1) as f32;
                let raw = curve_fn(t);
                min = min.min(raw);
                max = max.max(raw);
                CurvePoint {
                    t,
                    raw,
                    canvas: Vec2::ZERO,
                    arc_length: 0.0,
                }
            })
            .collect();

        // Flat curves keep a unit span to avoid dividing by zero
        let span = max - min;
        let span = Vec2::new(
            if span.x == 0.0 { 1.0 } else { span.x },
            if span.y == 0.0 { 1.0 } else { span.y },
        );

        let mut total_length = 0.0;
        let mut prev: Option<Vec2> = None;

        for point in &mut points {
            let normalized = (point.raw - min) / span - Vec2::splat(0.5);
            point.canvas = Vec2::new(
                normalized.x * canvas_size.x,
                -normalized.y * canvas_size.y,
            );

            if let Some(prev) = prev {
                total_length += point.canvas.distance(prev);
            }
            point.arc_length = total_length;
            prev = Some(point.canvas);
        }

        Ok(Self {
            points,
            total_length,
            canvas_size,
        })
    }

    /// All samples in parameter order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a curve has at least two samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total arc length of the sampled polyline, in canvas units.
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// The canvas size the curve was fitted to.
    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Bounding rectangle of the canvas the curve was fitted to.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(Vec2::ZERO, self.canvas_size)
    }

    /// Wrap an arc length into `[0, total_length)`, treating the curve as a
    /// closed loop.
    ///
    /// Tiny negative inputs may round up to exactly `total_length`; lookups
    /// clamp that to the last sample.
    pub fn wrap_arc_length(&self, s: f32) -> f32 {
        let length = self.total_length;
        if length <= 0.0 || !s.is_finite() {
            return 0.0;
        }
        s.rem_euclid(length)
    }

    /// Index of the first sample whose arc length is `>= target`.
    ///
    /// `target` past the end clamps to the last sample.
    fn lower_bound(&self, target: f32) -> usize {
        let mut lo = 0;
        let mut hi = self.points.len() - 1;

        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.points[mid].arc_length < target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// The sample at (or just past) arc length `s`.
    ///
    /// `s` wraps around the curve, so negative values and values past the
    /// total length are valid. No interpolation is done: the result is always
    /// one of the curve's samples.
    pub fn point_at_arc_length(&self, s: f32) -> &CurvePoint {
        let target = self.wrap_arc_length(s);
        &self.points[self.lower_bound(target)]
    }

    /// Canvas position at arc length `s`, interpolated between the two samples
    /// that bracket it.
    pub fn position_at_arc_length(&self, s: f32) -> Vec2 {
        let target = self.wrap_arc_length(s);
        let idx = self.lower_bound(target);
        if idx == 0 {
            return self.points[0].canvas;
        }

        let p0 = &self.points[idx - 1];
        let p1 = &self.points[idx];
        let segment = p1.arc_length - p0.arc_length;
        if segment.abs() < 1e-6 {
            return p1.canvas;
        }

        let alpha = ((target - p0.arc_length) / segment).clamp(0.0, 1.0);
        p0.canvas.lerp(p1.canvas, alpha)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, TAU};

    use super::*;

    fn unit_circle(t: f32) -> Vec2 {
        Vec2::new(t.cos(), t.sin())
    }

    #[test]
    fn test_too_few_samples() {
        for count in [0, 1] {
            let err = SampledCurve::sample(unit_circle, count, Vec2::splat(2.0)).unwrap_err();
            assert_eq!(err, LayoutError::TooFewSamples { count });
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_arc_length_monotonic() {
        let curve = SampledCurve::sample(crate::curve::heart, 600, Vec2::new(3000.0, 2600.0))
            .unwrap();

        assert_eq!(curve.len(), 600);
        assert_eq!(curve.points()[0].arc_length, 0.0);
        for pair in curve.points().windows(2) {
            assert!(pair[1].arc_length >= pair[0].arc_length);
        }
        assert_eq!(
            curve.points().last().unwrap().arc_length,
            curve.total_length()
        );
    }

    #[test]
    fn test_unit_circle_length() {
        let curve = SampledCurve::sample(unit_circle, 360, Vec2::splat(2.0)).unwrap();

        // Circle fits exactly in a 2x2 canvas, so canvas coordinates match the
        // raw ones with y flipped.
        let first = curve.points()[0];
        assert!((first.canvas - Vec2::new(-1.0, 0.0)).length() < 1e-4);
        assert!((curve.total_length() - TAU).abs() < 1e-3);
    }

    #[test]
    fn test_quarter_arc_is_quarter_turn() {
        let curve = SampledCurve::sample(unit_circle, 360, Vec2::splat(2.0)).unwrap();
        let point = curve.point_at_arc_length(curve.total_length() / 4.0);

        // A quarter of the way around from t = -π
        let expected_t = -std::f32::consts::PI + FRAC_PI_2;
        assert!((point.t - expected_t).abs() < 0.02);
        assert!((point.canvas - Vec2::new(0.0, 1.0)).length() < 0.02);
    }

    #[test]
    fn test_point_at_arc_length_wraps() {
        let curve = SampledCurve::sample(unit_circle, 360, Vec2::splat(2.0)).unwrap();
        let length = curve.total_length();

        for s in [-3.0 * length, -1.5, -1e-7, 0.0, 0.3, length, length + 0.3, 7.0 * length] {
            let target = curve.wrap_arc_length(s);
            let point = curve.point_at_arc_length(s);
            assert!(point.arc_length >= 0.0);
            assert!(point.arc_length <= length);
            assert!(point.arc_length >= target);
        }

        assert_eq!(curve.point_at_arc_length(0.3), curve.point_at_arc_length(length + 0.3));
        assert_eq!(curve.point_at_arc_length(0.0).t, curve.points()[0].t);
    }

    #[test]
    fn test_point_at_arc_length_exact_sample() {
        let curve = SampledCurve::sample(unit_circle, 64, Vec2::splat(2.0)).unwrap();
        let sample = curve.points()[10];

        assert_eq!(*curve.point_at_arc_length(sample.arc_length), sample);
    }

    #[test]
    fn test_flat_curve_has_unit_span() {
        // Horizontal line: zero vertical span must not produce NaN
        let curve = SampledCurve::sample_range(
            |t| Vec2::new(t, 0.0),
            0.0..1.0,
            11,
            Vec2::new(100.0, 50.0),
        )
        .unwrap();

        for point in curve.points() {
            assert!(point.canvas.is_finite());
            assert_eq!(point.canvas.y, 25.0);
        }
        assert!((curve.total_length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_curve_returns_first_sample() {
        let curve = SampledCurve::sample(|_| Vec2::ONE, 8, Vec2::splat(10.0)).unwrap();

        assert_eq!(curve.total_length(), 0.0);
        assert_eq!(curve.point_at_arc_length(42.0).t, curve.points()[0].t);
        assert!(curve.position_at_arc_length(-3.0).is_finite());
    }

    #[test]
    fn test_interpolated_position_between_samples() {
        let curve = SampledCurve::sample_range(
            |t| Vec2::new(t, 0.0),
            0.0..1.0,
            3,
            Vec2::new(100.0, 10.0),
        )
        .unwrap();

        // Samples at x = -50, 0, 50; a quarter of the way is halfway into the
        // first segment.
        let position = curve.position_at_arc_length(25.0);
        assert!((position.x - -25.0).abs() < 1e-4);

        // The snapped lookup returns the next sample instead
        assert_eq!(curve.point_at_arc_length(25.0).canvas.x, 0.0);
    }
}
