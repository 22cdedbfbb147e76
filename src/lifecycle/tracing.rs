//! # Observability & Tracing
//!
//! The [`setup_tracing`] function installs a compact `tracing-subscriber` formatter whose
//! filter is read from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Picker creation**: a `create_picker` span carrying the `picker_id`
//! - **Dataset cache**: load start, cache hits, locale evictions, load outcome
//! - **Readiness**: a `readiness` span per picker around the `data:ready` / `error` emission
//! - **Styles**: the one-time injection
//!
//! ## Usage Examples
//!
//! ```bash
//! # Creation and load outcomes
//! RUST_LOG=info cargo run
//!
//! # Cache hits, subscriptions and every emission
//! RUST_LOG=debug cargo run
//!
//! # Only the cache
//! RUST_LOG=picker_core::data=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**, two pickers in the same locale:
//!
//! ```text
//! INFO create_picker: Styles injected bytes=812
//! INFO create_picker: Starting dataset load locale=en
//! INFO create_picker: Picker created picker_id="picker-1760832000000-0"
//! INFO create_picker: Picker created picker_id="picker-1760832000000-1"
//! INFO Dataset loaded locale=en emojis=3
//! ```
//!
//! The second picker starts no load: it joined the first one's.

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
