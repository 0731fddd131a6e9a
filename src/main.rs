//! Heart gallery viewer.
//!
//! Run with: `cargo run -- [path/to/photos.json]`
//!
//! Photo paths in the manifest are relative to the `assets/` directory.

use bevy::prelude::*;
use bevy_heart_gallery::prelude::*;

fn main() {
    let mut config = GalleryConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        config = config.with_manifest_path(path);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Heart Gallery".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.07, 0.03, 0.06)))
        .insert_resource(config)
        .add_plugins(HeartGalleryPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (toggle_sampling, log_progress))
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    info!("Drag to pan, scroll to zoom, I to toggle interpolated layout, Escape to stop");
}

fn toggle_sampling(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sampling: ResMut<LayoutSampling>,
    spawner: Option<ResMut<PhotoSpawner>>,
) {
    if keyboard.just_pressed(KeyCode::KeyI) {
        sampling.0 = match sampling.0 {
            ArcSampling::Snapped => ArcSampling::Interpolated,
            ArcSampling::Interpolated => ArcSampling::Snapped,
        };
        info!("Layout sampling: {:?}", sampling.0);
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        if let Some(mut spawner) = spawner {
            spawner.cancel();
            info!("Stopped revealing photos");
        }
    }
}

fn log_progress(
    mut skipped: MessageReader<PhotoSkipped>,
    mut finished: MessageReader<SpawnFinished>,
) {
    for message in skipped.read() {
        debug!("Skipped photo {} ({})", message.index, message.path);
    }
    for message in finished.read() {
        info!(
            "All photos attempted: {} shown, {} missing",
            message.revealed, message.skipped
        );
    }
}
