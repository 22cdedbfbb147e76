//! # Settle-Once Shared Loads
//!
//! A [`SharedLoad`] is the Rust shape of "a promise everybody can hold": a background
//! task drives a future to completion and publishes the outcome exactly once through a
//! `tokio::sync::watch` cell. Every clone observes the same cell, so callers that asked
//! for the load while it was in flight and callers that arrive after it finished all see
//! one and the same outcome.
//!
//! ## Lifecycle
//!
//! ```text
//! Pending ──► Fulfilled(T)
//!    │
//!    └──────► Rejected(E)
//! ```
//!
//! The transition happens at most once. If the driving task dies without publishing
//! (for instance because the future panicked), waiters receive
//! [`FrameworkError::LoadAborted`] converted into `E`.
//!
//! There is no cancellation: dropping every handle does not stop the task, the result is
//! just never read.

use crate::framework::FrameworkError;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Observable state of a [`SharedLoad`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T, E> {
    Pending,
    Fulfilled(T),
    Rejected(E),
}

impl<T, E> LoadState<T, E> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, LoadState::Fulfilled(_))
    }

    fn into_result(self) -> Option<Result<T, E>> {
        match self {
            LoadState::Pending => None,
            LoadState::Fulfilled(value) => Some(Ok(value)),
            LoadState::Rejected(error) => Some(Err(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for LoadState<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Fulfilled(value),
            Err(error) => LoadState::Rejected(error),
        }
    }
}

/// A clonable handle on a value that settles once, in the background.
///
/// Clones share identity; use [`SharedLoad::ptr_eq`] to check whether two handles refer
/// to the same load.
pub struct SharedLoad<T, E> {
    state: Arc<watch::Receiver<LoadState<T, E>>>,
}

impl<T, E> Clone for SharedLoad<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T, E> fmt::Debug for SharedLoad<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.state.borrow() {
            LoadState::Pending => "pending",
            LoadState::Fulfilled(_) => "fulfilled",
            LoadState::Rejected(_) => "rejected",
        };
        f.debug_struct("SharedLoad").field("state", &state).finish()
    }
}

impl<T, E> SharedLoad<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + From<FrameworkError> + Send + Sync + 'static,
{
    /// Spawns `load` onto the current Tokio runtime and returns a handle to its outcome.
    ///
    /// The future is never polled inline. On a current-thread runtime it first runs
    /// after the caller yields; on a multi-thread runtime another worker may pick it up
    /// immediately.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn<F>(load: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (sender, receiver) = watch::channel(LoadState::Pending);
        tokio::spawn(async move {
            let outcome = LoadState::from(load.await);
            // Fails only when every handle is gone; nobody is left to read it.
            let _ = sender.send(outcome);
        });
        Self {
            state: Arc::new(receiver),
        }
    }

    /// A handle that is already settled with `result`.
    pub fn settled_with(result: Result<T, E>) -> Self {
        let (_, receiver) = watch::channel(LoadState::from(result));
        Self {
            state: Arc::new(receiver),
        }
    }

    /// Waits until the load settles and returns its outcome.
    ///
    /// Any number of callers may wait concurrently; all get the same outcome.
    pub async fn settled(&self) -> Result<T, E> {
        let mut receiver = (*self.state).clone();
        let state = match receiver.wait_for(|state| state.is_settled()).await {
            Ok(state) => (*state).clone(),
            Err(_) => return Err(E::from(FrameworkError::LoadAborted)),
        };
        state
            .into_result()
            .unwrap_or_else(|| Err(E::from(FrameworkError::LoadAborted)))
    }

    /// Current state, without waiting.
    pub fn state(&self) -> LoadState<T, E> {
        self.state.borrow().clone()
    }
}

impl<T, E> SharedLoad<T, E> {
    /// `true` when both handles refer to the same load.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}
