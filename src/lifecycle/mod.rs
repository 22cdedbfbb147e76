//! Picker creation and runtime setup.
//!
//! # Main Components
//!
//! - [`PickerSystem`] - The orchestrator that creates pickers and wires their readiness
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod picker_system;
pub mod tracing;

pub use picker_system::*;
pub use self::tracing::setup_tracing;
