//! Staggered reveal of gallery photos.
//!
//! Photos are revealed strictly in [`PhotoList`](crate::photos::PhotoList)
//! order. Each reveal waits for the photo's image to finish loading; the
//! delay before the next one shrinks after every successful reveal and stays
//! the same after a failed one.
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use bevy_heart_gallery::prelude::*;
//!
//! fn log_reveals(mut revealed: MessageReader<PhotoRevealed>) {
//!     for message in revealed.read() {
//!         info!("photo {} is visible", message.index);
//!     }
//! }
//!
//! fn stop_on_escape(keyboard: Res<ButtonInput<KeyCode>>, spawner: Option<ResMut<PhotoSpawner>>) {
//!     if let (true, Some(mut spawner)) = (keyboard.just_pressed(KeyCode::Escape), spawner) {
//!         spawner.cancel();
//!     }
//! }
//! ```

mod components;
mod scheduler;
mod systems;

pub use components::*;
pub use scheduler::*;
pub use systems::{canvas_to_world, jitter_offset, photo_display_size};

use bevy::prelude::*;

use crate::layout::{update_gallery_layout, GalleryLayout, HeartLayoutPlugin};

/// Plugin that reveals the photos of the current [`GalleryLayout`] one by one.
pub struct GallerySpawnPlugin;

impl Plugin for GallerySpawnPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<HeartLayoutPlugin>() {
            app.add_plugins(HeartLayoutPlugin);
        }

        app.register_type::<GalleryCanvas>()
            .register_type::<GalleryPhoto>()
            .add_message::<PhotoRevealed>()
            .add_message::<PhotoSkipped>()
            .add_message::<SpawnFinished>()
            .add_systems(Startup, systems::spawn_canvas)
            .add_systems(
                Update,
                (
                    systems::restart_spawner
                        .run_if(resource_exists_and_changed::<GalleryLayout>),
                    systems::clear_gallery.run_if(resource_removed::<GalleryLayout>),
                    systems::drive_spawner,
                    systems::animate_spawn_pop,
                )
                    .chain()
                    .after(update_gallery_layout),
            );
    }
}
