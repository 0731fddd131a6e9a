//! # bevy_heart_gallery
//!
//! A Bevy plugin that lays out a photo gallery along a heart-shaped curve.
//!
//! ## Features
//!
//! - Heart outline sampled once with an arc-length lookup table
//! - Photos spaced evenly by arc length, crowding closer instead of
//!   overflowing when there are too many for the outline
//! - Staggered reveal with a delay that shortens after each photo
//! - Drag to pan, scroll to zoom towards the cursor
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_heart_gallery::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .insert_resource(GalleryConfig::default().with_manifest_path("assets/photos.json"))
//!         .add_plugins(HeartGalleryPlugin)
//!         .add_systems(Startup, |mut commands: Commands| {
//!             commands.spawn(Camera2d);
//!         })
//!         .run();
//! }
//! ```
//!
//! ## Plugins
//!
//! - [`HeartGalleryPlugin`]: Everything below
//! - [`HeartCurvePlugin`]: Samples the heart outline into a [`HeartCurve`](curve::HeartCurve)
//! - [`HeartLayoutPlugin`]: Keeps a [`GalleryLayout`](layout::GalleryLayout) in sync with the photo list
//! - [`PhotoManifestPlugin`]: Loads and shuffles the photo list
//! - [`GallerySpawnPlugin`]: Reveals photos one by one
//! - [`GalleryViewPlugin`]: Pan and zoom
//!
//! ## Using the geometry directly
//!
//! The curve and layout code does not need an `App`:
//!
//! ```
//! use bevy::math::Vec2;
//! use bevy_heart_gallery::curve::{heart, SampledCurve};
//! use bevy_heart_gallery::layout::distribute;
//!
//! let curve = SampledCurve::sample(heart, 600, Vec2::new(3000.0, 2600.0)).unwrap();
//! let layout = distribute(&curve, 173, 160.0).unwrap();
//! assert_eq!(layout.positions.len(), 173);
//! ```

pub mod config;
pub mod curve;
pub mod error;
pub mod layout;
pub mod photos;
pub mod spawn;
pub mod view;

pub use curve::HeartCurvePlugin;
pub use layout::HeartLayoutPlugin;
pub use photos::PhotoManifestPlugin;
pub use spawn::GallerySpawnPlugin;
pub use view::GalleryViewPlugin;

use bevy::prelude::*;

/// Adds every gallery plugin.
pub struct HeartGalleryPlugin;

impl Plugin for HeartGalleryPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            HeartCurvePlugin,
            PhotoManifestPlugin,
            HeartLayoutPlugin,
            GallerySpawnPlugin,
            GalleryViewPlugin,
        ));
    }
}

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::config::GalleryConfig;
    pub use crate::curve::{heart, CurvePoint, HeartCurve, HeartCurvePlugin, SampledCurve};
    pub use crate::error::{LayoutError, ManifestError};
    pub use crate::layout::{
        distribute, distribute_with, ArcSampling, CurveLayout, GalleryLayout, HeartLayoutPlugin,
        LayoutFailed, LayoutPosition, LayoutSampling,
    };
    pub use crate::photos::{PhotoList, PhotoManifest, PhotoManifestPlugin};
    pub use crate::spawn::{
        GalleryCanvas, GalleryPhoto, GallerySpawnPlugin, PhotoRevealed, PhotoSkipped,
        PhotoSpawner, RevealOutcome, SpawnFinished, SpawnPhase, SpawnScheduler, SpawnTiming,
    };
    pub use crate::view::{GalleryView, GalleryViewPlugin, ViewLimits};
    pub use crate::HeartGalleryPlugin;
}
