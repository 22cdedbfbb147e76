//! Dataset loading and the process-wide dataset cache.
//!
//! - [`DataLoader`] - Seam to the external loader that actually fetches and parses data
//! - [`DataCache`] - Single-slot, locale-keyed cache of in-flight or settled loads
//! - [`DatasetHandle`] - The shared handle every picker receives
//! - [`DatasetLoadError`] - The one recoverable failure the core knows about

pub mod cache;
pub mod error;
pub mod loader;

pub use cache::*;
pub use error::*;
pub use loader::*;
