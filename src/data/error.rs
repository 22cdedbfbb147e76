//! Error types for dataset loading.

use crate::framework::FrameworkError;
use thiserror::Error;

/// A failed dataset load.
///
/// The cause is opaque to the picker core; every variant is handled the same way
/// (cached with the handle and surfaced once per picker as an error event).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DatasetLoadError {
    /// The dataset could not be fetched.
    #[error("Dataset fetch failed: {0}")]
    Fetch(String),

    /// The dataset was fetched but could not be parsed.
    #[error("Dataset parse failed: {0}")]
    Parse(String),

    /// The dataset store could not be opened or written.
    #[error("Dataset storage error: {0}")]
    Storage(String),

    /// The load task ended without producing a result.
    #[error("Dataset load aborted")]
    Aborted,
}

impl From<FrameworkError> for DatasetLoadError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::LoadAborted => DatasetLoadError::Aborted,
        }
    }
}
