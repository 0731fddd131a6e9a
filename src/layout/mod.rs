mod distributor;

pub use distributor::*;

use bevy::prelude::*;

use crate::config::GalleryConfig;
use crate::curve::{HeartCurve, HeartCurvePlugin};
use crate::error::LayoutError;
use crate::photos::PhotoList;

/// The current photo layout along the heart.
///
/// Recomputed whenever the [`PhotoList`] changes. Absent while there are no
/// photos or no heart curve.
#[derive(Resource, Debug, Clone)]
pub struct GalleryLayout {
    /// Positions along the heart, one per photo in list order.
    pub layout: CurveLayout,
    /// How positions were read off the curve.
    pub sampling: ArcSampling,
}

/// Selects how [`GalleryLayout`] positions are sampled.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Deref, DerefMut, Reflect)]
#[reflect(Resource, Default)]
pub struct LayoutSampling(pub ArcSampling);

/// Written once when the photos cannot be laid out with the current inputs.
///
/// No new attempt is made until the photo list, the sampling mode, the curve
/// or the [`GalleryConfig`] changes.
#[derive(Message, Debug, Clone)]
pub struct LayoutFailed {
    pub error: LayoutError,
}

/// Plugin that keeps a [`GalleryLayout`] in sync with the photo list.
///
/// # Usage
///
/// ```ignore
/// use bevy::prelude::*;
/// use bevy_heart_gallery::prelude::*;
///
/// fn setup(mut commands: Commands) {
///     commands.insert_resource(PhotoList::new(vec!["photos/a.jpg".into()]));
/// }
///
/// fn read_layout(layout: Option<Res<GalleryLayout>>) {
///     if let Some(layout) = layout {
///         println!("{} positions", layout.layout.len());
///     }
/// }
/// ```
pub struct HeartLayoutPlugin;

impl Plugin for HeartLayoutPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<HeartCurvePlugin>() {
            app.add_plugins(HeartCurvePlugin);
        }

        app.init_resource::<PhotoList>()
            .init_resource::<LayoutSampling>()
            .register_type::<ArcSampling>()
            .register_type::<LayoutSampling>()
            .add_message::<LayoutFailed>()
            .add_systems(Update, update_gallery_layout);
    }
}

/// Rebuild the layout when the photo list, the sampling mode, the curve or the
/// config changes.
///
/// A failed rebuild is reported once through [`LayoutFailed`] and not retried
/// until one of those inputs changes.
#[allow(clippy::too_many_arguments)]
pub fn update_gallery_layout(
    mut commands: Commands,
    photos: Res<PhotoList>,
    sampling: Res<LayoutSampling>,
    curve: Option<Res<HeartCurve>>,
    config: Res<GalleryConfig>,
    current: Option<Res<GalleryLayout>>,
    mut failed: MessageWriter<LayoutFailed>,
    mut last_failed: Local<bool>,
) {
    let Some(curve) = curve else {
        return;
    };

    let inputs_changed = photos.is_changed()
        || sampling.is_changed()
        || curve.is_changed()
        || config.is_changed();
    let needs_rebuild = inputs_changed || (current.is_none() && !*last_failed);
    if !needs_rebuild {
        return;
    }

    *last_failed = false;
    if photos.is_empty() {
        if current.is_some() {
            commands.remove_resource::<GalleryLayout>();
        }
        return;
    }

    match distribute_with(&curve, photos.len(), config.item_spacing(), **sampling) {
        Ok(layout) => {
            info!(
                "Laid out {} photos along the heart (stretch {:.2})",
                layout.len(),
                layout.scale_factor
            );
            commands.insert_resource(GalleryLayout {
                layout,
                sampling: **sampling,
            });
        }
        Err(error) => {
            error!("Cannot lay out photos: {error}");
            failed.write(LayoutFailed { error });
            *last_failed = true;
            if current.is_some() {
                commands.remove_resource::<GalleryLayout>();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    fn app_with_photos(count: usize) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(HeartLayoutPlugin);
        app.insert_resource(PhotoList::new(
            (0..count).map(|i| format!("photos/{i}.jpg")).collect(),
        ));
        app
    }

    #[test]
    fn test_layout_follows_photo_list() {
        let mut app = app_with_photos(12);
        app.update();

        let layout = app.world().resource::<GalleryLayout>();
        assert_eq!(layout.layout.len(), 12);
        assert_eq!(layout.sampling, ArcSampling::Snapped);

        app.insert_resource(PhotoList::new(vec!["only.jpg".into()]));
        app.update();
        assert_eq!(app.world().resource::<GalleryLayout>().layout.len(), 1);
    }

    #[test]
    fn test_no_layout_without_photos() {
        let mut app = app_with_photos(0);
        app.update();
        assert!(app.world().get_resource::<GalleryLayout>().is_none());
    }

    #[test]
    fn test_sampling_mode_change_rebuilds() {
        let mut app = app_with_photos(5);
        app.update();

        app.world_mut().resource_mut::<LayoutSampling>().0 = ArcSampling::Interpolated;
        app.update();
        assert_eq!(
            app.world().resource::<GalleryLayout>().sampling,
            ArcSampling::Interpolated
        );
    }

    #[test]
    fn test_failed_layout_reported_once() {
        let mut app = app_with_photos(3);
        app.insert_resource(GalleryConfig::default().with_tile_size(Vec2::new(-200.0, 210.0)));

        let mut cursor = app.world().resource::<Messages<LayoutFailed>>().get_cursor();
        let mut errors = Vec::new();
        for _ in 0..5 {
            app.update();
            let messages = app.world().resource::<Messages<LayoutFailed>>();
            errors.extend(cursor.read(messages).map(|failed| failed.error.clone()));
        }

        assert_eq!(
            errors,
            vec![LayoutError::InvalidSpacing { spacing: -190.0 }]
        );
        assert!(app.world().get_resource::<GalleryLayout>().is_none());

        // A config change triggers a new attempt
        app.insert_resource(GalleryConfig::default());
        app.update();
        assert_eq!(app.world().resource::<GalleryLayout>().layout.len(), 3);
    }
}
