//! Error types for curve sampling, layout and the photo manifest.

use std::path::PathBuf;

/// Errors produced by curve sampling and item distribution.
///
/// Every variant is an invalid-argument condition: the geometric core has no
/// other failure modes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Arc length needs at least two samples to be defined.
    #[error("invalid argument: curve needs at least 2 samples, got {count}")]
    TooFewSamples { count: usize },

    /// Distributing zero items has no meaningful step.
    #[error("invalid argument: item count must be at least 1")]
    NoItems,

    /// Minimum spacing must be a positive, finite distance.
    #[error("invalid argument: item spacing must be positive and finite, got {spacing}")]
    InvalidSpacing { spacing: f32 },
}

impl LayoutError {
    /// All layout errors reject their input rather than produce degenerate output.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::TooFewSamples { .. } | Self::NoItems | Self::InvalidSpacing { .. }
        )
    }
}

/// Errors that can occur while loading the photo manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read photo manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("photo manifest is not a JSON array of paths: {0}")]
    Parse(#[from] serde_json::Error),
}
