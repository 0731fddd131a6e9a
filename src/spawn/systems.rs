use bevy::asset::LoadState;
use bevy::prelude::*;
use rand::Rng;

use crate::config::GalleryConfig;
use crate::layout::GalleryLayout;
use crate::photos::PhotoList;

use super::{
    GalleryCanvas, GalleryPhoto, PhotoRevealed, PhotoSkipped, PhotoSpawner, RevealOutcome,
    SpawnFinished, SpawnPop, SpawnScheduler,
};

/// Spawn the canvas root if the app has none.
pub fn spawn_canvas(mut commands: Commands, canvases: Query<(), With<GalleryCanvas>>) {
    if canvases.is_empty() {
        commands.spawn((Name::new("Gallery Canvas"), GalleryCanvas));
    }
}

/// Restart revealing from the first photo whenever the layout changes.
pub fn restart_spawner(
    mut commands: Commands,
    layout: Res<GalleryLayout>,
    photos: Res<PhotoList>,
    config: Res<GalleryConfig>,
    existing: Query<Entity, With<GalleryPhoto>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let scheduler = SpawnScheduler::new(photos.len(), config.spawn_timing);
    commands.insert_resource(PhotoSpawner::new(
        scheduler,
        photos.to_vec(),
        layout.layout.positions.clone(),
    ));
}

/// Remove the spawner and every photo once the layout is gone.
pub fn clear_gallery(mut commands: Commands, existing: Query<Entity, With<GalleryPhoto>>) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<PhotoSpawner>();
}

/// Advance the reveal sequence by at most one step.
///
/// Starts loading the next photo once the delay has elapsed, and reveals or
/// skips the photo in flight once its image has loaded or failed.
#[allow(clippy::too_many_arguments)]
pub fn drive_spawner(
    mut commands: Commands,
    spawner: Option<ResMut<PhotoSpawner>>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    canvas: Query<Entity, With<GalleryCanvas>>,
    config: Res<GalleryConfig>,
    time: Res<Time>,
    mut revealed: MessageWriter<PhotoRevealed>,
    mut skipped: MessageWriter<PhotoSkipped>,
    mut finished: MessageWriter<SpawnFinished>,
) {
    let Some(mut spawner) = spawner else {
        return;
    };

    if spawner.scheduler.is_cancelled() || spawner.scheduler.is_finished() {
        return;
    }

    if let Some((index, handle)) = spawner.pending.clone() {
        let path = spawner.photos[index].clone();

        let outcome = match asset_server.load_state(&handle) {
            LoadState::Loaded => {
                let image_size = images.get(&handle).map(|image| image.size());
                let size = photo_display_size(image_size, &config);
                let jitter = jitter_offset(&mut rand::thread_rng(), config.jitter);
                let position = spawner.positions.get(index).copied().unwrap_or(Vec2::ZERO) + jitter;

                let mut entity = commands.spawn((
                    Name::new(format!("Photo {index}")),
                    GalleryPhoto {
                        index,
                        path: path.clone(),
                    },
                    Sprite {
                        image: handle,
                        custom_size: Some(size),
                        ..default()
                    },
                    Transform::from_translation(canvas_to_world(position, index))
                        .with_scale(Vec3::splat(config.pop_start_scale)),
                    SpawnPop::new(config.pop_duration, config.pop_start_scale),
                ));
                if let Ok(canvas) = canvas.single() {
                    entity.insert(ChildOf(canvas));
                }

                revealed.write(PhotoRevealed {
                    entity: entity.id(),
                    index,
                });
                spawner.revealed += 1;
                RevealOutcome::Revealed
            }
            LoadState::Failed(err) => {
                warn!("Failed to load image {path}: {err}");
                skipped.write(PhotoSkipped { index, path });
                spawner.skipped += 1;
                RevealOutcome::Failed
            }
            _ => return,
        };

        spawner.pending = None;
        match spawner.scheduler.complete(outcome) {
            Some(delay) => spawner.delay = Some(Timer::new(delay, TimerMode::Once)),
            None => {
                info!(
                    "Gallery complete: {} revealed, {} skipped",
                    spawner.revealed, spawner.skipped
                );
                finished.write(SpawnFinished {
                    revealed: spawner.revealed,
                    skipped: spawner.skipped,
                });
            }
        }
        return;
    }

    if !spawner.tick_delay(time.delta()) {
        return;
    }

    if let Some(index) = spawner.scheduler.begin() {
        let handle = asset_server.load(spawner.photos[index].clone());
        spawner.pending = Some((index, handle));
        spawner.delay = None;
    }
}

/// Play the pop-in animation and drop it once done.
pub fn animate_spawn_pop(
    mut commands: Commands,
    time: Res<Time>,
    mut photos: Query<(Entity, &mut SpawnPop, &mut Transform)>,
) {
    for (entity, mut pop, mut transform) in &mut photos {
        pop.timer.tick(time.delta());

        if pop.timer.is_finished() {
            transform.scale = Vec3::ONE;
            commands.entity(entity).remove::<SpawnPop>();
        } else {
            transform.scale = Vec3::splat(pop.scale());
        }
    }
}

/// Display size of a photo: fixed tile height, width from the image aspect.
pub fn photo_display_size(image_size: Option<UVec2>, config: &GalleryConfig) -> Vec2 {
    let aspect = image_size
        .filter(|size| size.x > 0 && size.y > 0)
        .map(|size| size.x as f32 / size.y as f32)
        .unwrap_or_else(|| config.fallback_aspect());

    let height = config.tile_size.y;
    Vec2::new(height * aspect, height)
}

/// Random offset in `[-amount/2, amount/2)` on each axis.
pub fn jitter_offset(rng: &mut impl Rng, amount: f32) -> Vec2 {
    Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * amount
}

/// Convert a y-down canvas position to a world translation. Later photos are
/// drawn on top.
pub fn canvas_to_world(position: Vec2, index: usize) -> Vec3 {
    Vec3::new(position.x, -position.y, index as f32 * 1e-3)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_display_size_keeps_height() {
        let config = GalleryConfig::default();

        let landscape = photo_display_size(Some(UVec2::new(400, 200)), &config);
        assert_eq!(landscape, Vec2::new(420.0, 210.0));

        let portrait = photo_display_size(Some(UVec2::new(300, 600)), &config);
        assert_eq!(portrait, Vec2::new(105.0, 210.0));
    }

    #[test]
    fn test_display_size_fallback() {
        let config = GalleryConfig::default();

        for size in [None, Some(UVec2::ZERO), Some(UVec2::new(10, 0))] {
            let fallback = photo_display_size(size, &config);
            assert!((fallback - Vec2::new(150.0, 210.0)).length() < 1e-3);
        }
    }

    #[test]
    fn test_jitter_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let offset = jitter_offset(&mut rng, 4.0);
            assert!(offset.x >= -2.0 && offset.x < 2.0);
            assert!(offset.y >= -2.0 && offset.y < 2.0);
        }
        assert_eq!(jitter_offset(&mut rng, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_canvas_to_world_flips_y() {
        let world = canvas_to_world(Vec2::new(10.0, 1300.0), 2);
        assert_eq!(world.x, 10.0);
        assert_eq!(world.y, -1300.0);
        assert!(canvas_to_world(Vec2::ZERO, 3).z > world.z);
    }

    #[test]
    fn test_spawn_pop_finishes() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_systems(Update, animate_spawn_pop);

        let photo = app
            .world_mut()
            .spawn((
                Transform::from_scale(Vec3::splat(0.6)),
                SpawnPop::new(Duration::from_millis(520), 0.6),
            ))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(260));
        app.update();

        let scale = app.world().get::<Transform>(photo).unwrap().scale.x;
        assert!(scale > 0.6 && scale < 1.0);
        assert!(app.world().get::<SpawnPop>(photo).is_some());

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(300));
        app.update();

        assert_eq!(app.world().get::<Transform>(photo).unwrap().scale, Vec3::ONE);
        assert!(app.world().get::<SpawnPop>(photo).is_none());
    }
}
