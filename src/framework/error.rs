//! # Framework Errors
//!
//! Failures raised by the generic building blocks themselves, independent of
//! any domain payload. Domain error types convert from these.

/// Errors that can occur within the framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    /// The task driving a [`SharedLoad`](crate::framework::SharedLoad) ended without settling it.
    #[error("Load task ended before settling")]
    LoadAborted,
}
