use std::time::Duration;

/// Reveal cadence: each successful reveal shortens the next delay by `decay`,
/// down to `min_delay`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTiming {
    /// Delay after the first reveal is derived from this.
    pub initial_delay: Duration,
    /// Floor for the decaying delay.
    pub min_delay: Duration,
    /// Multiplier applied to the delay after each successful reveal.
    pub decay: f32,
}

impl Default for SpawnTiming {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(480),
            min_delay: Duration::from_millis(70),
            decay: 0.97,
        }
    }
}

impl SpawnTiming {
    /// The delay that follows `delay` after a successful reveal.
    ///
    /// A `decay` that yields no valid duration (negative, NaN, overflowing)
    /// falls back to `min_delay`.
    pub fn next_delay(&self, delay: Duration) -> Duration {
        Duration::try_from_secs_f32(delay.as_secs_f32() * self.decay)
            .unwrap_or(self.min_delay)
            .max(self.min_delay)
    }

    /// The delay in effect after `reveals` successful reveals.
    pub fn delay_after(&self, reveals: usize) -> Duration {
        (0..reveals).fold(self.initial_delay, |delay, _| self.next_delay(delay))
    }
}

/// Result of loading one item's resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The item was shown.
    Revealed,
    /// The item's resource failed to load and was skipped.
    Failed,
}

/// Current phase of a [`SpawnScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnPhase {
    /// Waiting for the next `begin`.
    #[default]
    Ready,
    /// Item `index` is loading.
    Loading { index: usize },
    /// Every item has been attempted.
    Finished,
    /// Cancelled before finishing.
    Cancelled,
}

/// Reveals items strictly in order, one at a time.
///
/// The caller drives it: [`begin`](Self::begin) yields the index to load,
/// [`complete`](Self::complete) reports the outcome and yields the delay to
/// wait before calling `begin` again. Item `i + 1` is never begun before item
/// `i` completed.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    item_count: usize,
    next_index: usize,
    current_delay: Duration,
    timing: SpawnTiming,
    phase: SpawnPhase,
}

impl SpawnScheduler {
    pub fn new(item_count: usize, timing: SpawnTiming) -> Self {
        Self {
            item_count,
            next_index: 0,
            current_delay: timing.initial_delay,
            timing,
            phase: if item_count == 0 {
                SpawnPhase::Finished
            } else {
                SpawnPhase::Ready
            },
        }
    }

    /// Start revealing the next item, returning its index.
    ///
    /// Returns `None` if an item is already loading, or the scheduler is
    /// finished or cancelled.
    pub fn begin(&mut self) -> Option<usize> {
        if self.phase != SpawnPhase::Ready {
            return None;
        }

        let index = self.next_index;
        self.phase = SpawnPhase::Loading { index };
        Some(index)
    }

    /// Finish the item in flight.
    ///
    /// A successful reveal decays the delay; a failed one keeps it. Returns
    /// the delay before the next [`begin`](Self::begin), or `None` if there
    /// is nothing left to reveal.
    pub fn complete(&mut self, outcome: RevealOutcome) -> Option<Duration> {
        let SpawnPhase::Loading { .. } = self.phase else {
            return None;
        };

        self.next_index += 1;
        if outcome == RevealOutcome::Revealed {
            self.current_delay = self.timing.next_delay(self.current_delay);
        }

        if self.next_index >= self.item_count {
            self.phase = SpawnPhase::Finished;
            return None;
        }

        self.phase = SpawnPhase::Ready;
        Some(self.current_delay)
    }

    /// Stop revealing. The item in flight, if any, is abandoned.
    pub fn cancel(&mut self) {
        if self.phase != SpawnPhase::Finished {
            self.phase = SpawnPhase::Cancelled;
        }
    }

    pub fn phase(&self) -> SpawnPhase {
        self.phase
    }

    /// Index of the next item to reveal.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Delay that will follow the next completion if it fails.
    pub fn current_delay(&self) -> Duration {
        self.current_delay
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SpawnPhase::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.phase == SpawnPhase::Cancelled
    }
}
