mod outline;
mod sampled;

pub use outline::*;
pub use sampled::*;

use bevy::prelude::*;

use crate::config::GalleryConfig;

/// Plugin that samples the heart outline once and stores it as a [`HeartCurve`]
/// resource.
///
/// Reads [`GalleryConfig`] (inserting the default if missing). An invalid
/// sample count is logged and leaves the resource absent, which disables
/// layout and spawning.
pub struct HeartCurvePlugin;

impl Plugin for HeartCurvePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GalleryConfig>()
            .add_systems(PreStartup, build_heart_curve);
    }
}

fn build_heart_curve(mut commands: Commands, config: Res<GalleryConfig>) {
    match SampledCurve::sample(heart, config.heart_samples, config.heart_size) {
        Ok(curve) => {
            debug!(
                "Sampled heart: {} points, length {:.1}",
                curve.len(),
                curve.total_length()
            );
            commands.insert_resource(HeartCurve(curve));
        }
        Err(err) => error!("Cannot sample heart curve: {err}"),
    }
}
