//! Photo manifest loading and shuffling.
//!
//! The manifest is a JSON array of image paths, relative to the asset
//! directory:
//!
//! ```json
//! ["photos/001.jpg", "photos/002.jpg"]
//! ```

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GalleryConfig;
use crate::error::ManifestError;

/// The photo paths listed in a manifest file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoManifest {
    pub paths: Vec<String>,
}

impl PhotoManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Consume the manifest, returning its paths in a random order
    /// (Fisher–Yates).
    pub fn shuffled(mut self, rng: &mut impl Rng) -> Vec<String> {
        self.paths.shuffle(rng);
        self.paths
    }
}

/// The photos to show, in reveal order.
///
/// Item `i` of this list is placed at position `i` of the layout.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct PhotoList(Vec<String>);

impl PhotoList {
    pub fn new(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

/// Plugin that loads [`GalleryConfig::manifest_path`] at startup and inserts
/// the shuffled [`PhotoList`].
///
/// A missing or malformed manifest is logged and results in an empty gallery.
pub struct PhotoManifestPlugin;

impl Plugin for PhotoManifestPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GalleryConfig>()
            .init_resource::<PhotoList>()
            .add_systems(Startup, load_photo_list);
    }
}

fn load_photo_list(mut commands: Commands, config: Res<GalleryConfig>) {
    let paths = match PhotoManifest::load(&config.manifest_path) {
        Ok(manifest) => manifest.shuffled(&mut rand::thread_rng()),
        Err(err) => {
            error!("{err}");
            Vec::new()
        }
    };

    info!("Loaded {} photos", paths.len());
    commands.insert_resource(PhotoList::new(paths));
}
