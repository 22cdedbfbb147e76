//! Generic, domain-free building blocks.
//!
//! # Main Components
//!
//! - [`SharedLoad`] - A settle-once asynchronous value that many waiters can share
//! - [`EventBus`] - A synchronous, ordered publish/subscribe channel over a closed event type
//! - [`FrameworkError`] - Errors raised by the building blocks themselves
//!
//! # Testing
//!
//! See [`mock`] for a scripted loader and recording collaborators that let tests drive
//! a [`PickerSystem`](crate::lifecycle::PickerSystem) without any real I/O.

pub mod error;
pub mod event_bus;
pub mod mock;
pub mod shared;

pub use error::FrameworkError;
pub use event_bus::{BusEvent, EventBus, Subscription};
pub use shared::{LoadState, SharedLoad};
