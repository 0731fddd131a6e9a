use std::time::Duration;

use bevy::prelude::*;

use super::SpawnScheduler;

/// Root entity that all revealed photos are parented to.
///
/// Panning and zooming move and scale this entity; photo transforms stay in
/// canvas space.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct GalleryCanvas;

/// Marker component added to every revealed photo.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct GalleryPhoto {
    /// Position of this photo in the [`PhotoList`](crate::photos::PhotoList).
    pub index: usize,
    /// Asset path the image was loaded from.
    pub path: String,
}

/// Short scale-up animation played when a photo is revealed.
///
/// Removed once the animation completes.
#[derive(Component, Debug, Clone)]
pub struct SpawnPop {
    pub timer: Timer,
    /// Scale at the start of the animation. Ends at 1.
    pub start_scale: f32,
}

impl SpawnPop {
    pub fn new(duration: Duration, start_scale: f32) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
            start_scale,
        }
    }

    /// Current scale, easing out towards 1.
    pub fn scale(&self) -> f32 {
        let t = self.timer.fraction();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.start_scale + (1.0 - self.start_scale) * eased
    }
}

/// Drives the reveal of the current photo list.
///
/// Rebuilt whenever the [`GalleryLayout`](crate::layout::GalleryLayout)
/// changes. Cancel it to stop revealing mid-sequence.
#[derive(Resource, Debug)]
pub struct PhotoSpawner {
    pub(crate) scheduler: SpawnScheduler,
    pub(crate) photos: Vec<String>,
    pub(crate) positions: Vec<Vec2>,
    /// Image currently loading, with its photo index.
    pub(crate) pending: Option<(usize, Handle<Image>)>,
    /// Wait before the next photo starts loading. `None` means start now.
    pub(crate) delay: Option<Timer>,
    pub(crate) revealed: usize,
    pub(crate) skipped: usize,
}

impl PhotoSpawner {
    pub fn new(scheduler: SpawnScheduler, photos: Vec<String>, positions: Vec<Vec2>) -> Self {
        Self {
            scheduler,
            photos,
            positions,
            pending: None,
            delay: None,
            revealed: 0,
            skipped: 0,
        }
    }

    /// Stop revealing photos. Photos already shown stay.
    pub fn cancel(&mut self) {
        self.scheduler.cancel();
        self.pending = None;
        self.delay = None;
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    /// Number of photos shown so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Number of photos whose image failed to load.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Advance the delay timer; true once the next photo may start loading.
    pub(crate) fn tick_delay(&mut self, delta: Duration) -> bool {
        match &mut self.delay {
            Some(timer) => {
                timer.tick(delta);
                timer.is_finished()
            }
            None => true,
        }
    }
}

/// Message written when a photo is revealed.
#[derive(Message, Debug, Clone)]
pub struct PhotoRevealed {
    /// The new photo entity.
    pub entity: Entity,
    /// Index in the photo list.
    pub index: usize,
}

/// Message written when a photo's image fails to load and is skipped.
#[derive(Message, Debug, Clone)]
pub struct PhotoSkipped {
    pub index: usize,
    pub path: String,
}

/// Message written once every photo has been attempted.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnFinished {
    pub revealed: usize,
    pub skipped: usize,
}
