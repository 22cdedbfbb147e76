//! Shared presentation assets.
//!
//! Every picker needs the same stylesheet in the host environment, but it must only be
//! added once no matter how many pickers are created. [`AssetInjector`] guards that with an
//! explicit two-state machine.

use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// The built-in picker stylesheet.
pub const PICKER_STYLES: &str = include_str!("picker.css");

/// The environment styles are applied to (a document head, a style registry...).
pub trait StyleHost: Send + Sync + 'static {
    fn apply_styles(&self, css: &str);
}

/// Whether the payload has reached the host yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionState {
    NotInjected,
    Injected,
}

/// Applies an asset payload to a [`StyleHost`] at most once.
pub struct AssetInjector {
    host: Box<dyn StyleHost>,
    state: Mutex<InjectionState>,
}

impl AssetInjector {
    pub fn new(host: impl StyleHost) -> Self {
        Self {
            host: Box::new(host),
            state: Mutex::new(InjectionState::NotInjected),
        }
    }

    /// Applies `payload` if nothing has been applied yet.
    ///
    /// Returns `true` only for the call that performed the injection. The lock is held
    /// across the host call, so concurrent first calls cannot both apply.
    pub fn apply(&self, payload: &str) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            InjectionState::Injected => {
                debug!("Styles already injected");
                false
            }
            InjectionState::NotInjected => {
                self.host.apply_styles(payload);
                *state = InjectionState::Injected;
                info!(bytes = payload.len(), "Styles injected");
                true
            }
        }
    }

    pub fn state(&self) -> InjectionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::RecordingStyleHost;
    use std::sync::Arc;

    #[test]
    fn only_first_apply_reaches_the_host() {
        let host = RecordingStyleHost::new();
        let injector = AssetInjector::new(host.clone());

        assert_eq!(injector.state(), InjectionState::NotInjected);
        assert!(injector.apply(PICKER_STYLES));
        assert!(!injector.apply(PICKER_STYLES));
        assert!(!injector.apply(PICKER_STYLES));

        assert_eq!(injector.state(), InjectionState::Injected);
        assert_eq!(host.applied(), vec![PICKER_STYLES.to_string()]);
    }

    #[test]
    fn concurrent_first_calls_inject_once() {
        let host = RecordingStyleHost::new();
        let injector = Arc::new(AssetInjector::new(host.clone()));

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let injector = injector.clone();
                std::thread::spawn(move || injector.apply(".a { color: red; }"))
            })
            .collect();
        let winners = threads
            .into_iter()
            .map(|t| t.join().unwrap())
            .filter(|applied| *applied)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(host.count(), 1);
    }

    #[test]
    fn builtin_stylesheet_is_not_empty() {
        assert!(PICKER_STYLES.contains(".picker"));
    }
}
