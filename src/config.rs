//! Gallery configuration.

use std::path::PathBuf;
use std::time::Duration;

use bevy::prelude::*;

use crate::spawn::SpawnTiming;
use crate::view::ViewLimits;

/// All tunable gallery parameters.
///
/// Insert this resource before adding the gallery plugins to override the
/// defaults; plugins fall back to [`GalleryConfig::default`] otherwise.
#[derive(Resource, Debug, Clone)]
pub struct GalleryConfig {
    /// Canvas size the heart outline is fitted to.
    pub heart_size: Vec2,
    /// Number of samples used to approximate the heart's arc length.
    pub heart_samples: usize,
    /// Base photo tile size. Height is fixed, width follows the image aspect.
    pub tile_size: Vec2,
    /// Gap between neighbouring tiles along the outline.
    pub tile_gap: f32,
    /// Maximum random offset applied to each tile (full width of the range).
    pub jitter: f32,
    /// Reveal cadence.
    pub spawn_timing: SpawnTiming,
    /// Duration of the pop-in animation for revealed photos.
    pub pop_duration: Duration,
    /// Scale revealed photos start the pop-in animation at.
    pub pop_start_scale: f32,
    /// Pan and zoom limits for the gallery view.
    pub view: ViewLimits,
    /// JSON file listing the photo paths, relative to the working directory.
    pub manifest_path: PathBuf,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            heart_size: Vec2::new(3000.0, 2600.0),
            heart_samples: 600,
            tile_size: Vec2::new(150.0, 210.0),
            tile_gap: 10.0,
            jitter: 4.0,
            spawn_timing: SpawnTiming::default(),
            pop_duration: Duration::from_millis(520),
            pop_start_scale: 0.6,
            view: ViewLimits::default(),
            manifest_path: PathBuf::from("assets/photos.json"),
        }
    }
}

impl GalleryConfig {
    /// Set the heart canvas size.
    pub fn with_heart_size(mut self, size: Vec2) -> Self {
        self.heart_size = size;
        self
    }

    /// Set the heart sample resolution.
    pub fn with_heart_samples(mut self, samples: usize) -> Self {
        self.heart_samples = samples;
        self
    }

    /// Set the base tile size.
    pub fn with_tile_size(mut self, size: Vec2) -> Self {
        self.tile_size = size;
        self
    }

    /// Set the reveal cadence.
    pub fn with_spawn_timing(mut self, timing: SpawnTiming) -> Self {
        self.spawn_timing = timing;
        self
    }

    /// Set the manifest path.
    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Minimum arc-length distance between tile centers.
    pub fn item_spacing(&self) -> f32 {
        self.tile_size.x + self.tile_gap
    }

    /// Width-over-height ratio used when an image reports no size.
    pub fn fallback_aspect(&self) -> f32 {
        self.tile_size.x / self.tile_size.y
    }
}
