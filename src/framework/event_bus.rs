//! # Event Bus
//!
//! A per-instance publish/subscribe channel with synchronous delivery.
//!
//! Events are a closed type implementing [`BusEvent`]; listeners subscribe to one
//! [`BusEvent::Kind`] and receive every later emission of that kind, in the order they
//! subscribed. There is no buffering or replay: a listener that subscribes after an
//! emission never sees it.
//!
//! Emission takes a snapshot of the matching listeners before invoking any of them, so a
//! listener may subscribe or detach from inside its callback without deadlocking. Changes
//! made that way take effect from the next emission.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::debug;

/// A closed set of notifications that can travel over an [`EventBus`].
pub trait BusEvent: Send + Sync + 'static {
    /// Payload-free discriminant listeners subscribe to.
    type Kind: Copy + Eq + Debug + Send + Sync + 'static;

    fn kind(&self) -> Self::Kind;
}

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Registered<E: BusEvent> {
    id: u64,
    kind: E::Kind,
    listener: Listener<E>,
}

struct Registry<E: BusEvent> {
    next_id: u64,
    listeners: Vec<Registered<E>>,
}

fn lock<E: BusEvent>(registry: &Mutex<Registry<E>>) -> MutexGuard<'_, Registry<E>> {
    // The registry is only ever pushed to or filtered, so it stays consistent.
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Synchronous, ordered event channel.
///
/// Cloning is cheap; clones share the same listener list.
pub struct EventBus<E: BusEvent> {
    registry: Arc<Mutex<Registry<E>>>,
}

impl<E: BusEvent> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E: BusEvent> Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &lock(&self.registry).listeners.len())
            .finish()
    }
}

impl<E: BusEvent> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BusEvent> EventBus<E> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers `listener` for events of `kind`.
    ///
    /// The returned [`Subscription`] can be used to detach it again. Dropping the
    /// subscription leaves the listener in place.
    pub fn on<F>(&self, kind: E::Kind, listener: F) -> Subscription<E>
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Registered {
            id,
            kind,
            listener: Arc::new(listener),
        });
        debug!(event = ?kind, listeners = registry.listeners.len(), "Subscribed");

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener currently subscribed to its kind.
    ///
    /// Returns the number of listeners invoked.
    pub fn emit(&self, event: E) -> usize {
        let kind = event.kind();
        let targets: Vec<Listener<E>> = lock(&self.registry)
            .listeners
            .iter()
            .filter(|registered| registered.kind == kind)
            .map(|registered| Arc::clone(&registered.listener))
            .collect();

        debug!(event = ?kind, listeners = targets.len(), "Emit");
        for listener in &targets {
            listener(&event);
        }
        targets.len()
    }

    pub fn listener_count(&self, kind: E::Kind) -> usize {
        lock(&self.registry)
            .listeners
            .iter()
            .filter(|registered| registered.kind == kind)
            .count()
    }
}

/// Handle returned by [`EventBus::on`].
pub struct Subscription<E: BusEvent> {
    id: u64,
    registry: Weak<Mutex<Registry<E>>>,
}

impl<E: BusEvent> Subscription<E> {
    /// Removes the listener. Returns `false` if it was already gone.
    pub fn detach(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = lock(&registry);
        let before = registry.listeners.len();
        registry.listeners.retain(|registered| registered.id != self.id);
        let removed = registry.listeners.len() != before;
        if removed {
            debug!(listeners = registry.listeners.len(), "Detached");
        }
        removed
    }
}
