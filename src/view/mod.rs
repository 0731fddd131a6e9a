mod pan_zoom;

pub use pan_zoom::*;

use bevy::prelude::*;

use crate::config::GalleryConfig;

/// Plugin that lets the viewer pan and zoom the gallery canvas.
///
/// # Controls
/// - Left mouse button + drag: Pan
/// - Scroll wheel: Zoom towards the cursor
pub struct GalleryViewPlugin;

impl Plugin for GalleryViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GalleryConfig>()
            .register_type::<GalleryView>()
            .add_systems(PreStartup, init_gallery_view)
            .add_systems(Update, (gallery_view_input, apply_gallery_view).chain());
    }
}

fn init_gallery_view(mut commands: Commands, config: Res<GalleryConfig>) {
    commands.insert_resource(GalleryView::new(config.view));
}
