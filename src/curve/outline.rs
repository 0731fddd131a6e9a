use bevy::prelude::*;

use super::SampledCurve;

/// The classic parametric heart, defined over `[-π, π]`.
///
/// The cusp sits at `t = 0` (top center) and the tip at `t = ±π`.
pub fn heart(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vec2::new(x, y)
}

/// The sampled heart outline, built once at startup from [`GalleryConfig`].
///
/// [`GalleryConfig`]: crate::config::GalleryConfig
#[derive(Resource, Debug, Clone, Deref)]
pub struct HeartCurve(pub SampledCurve);
