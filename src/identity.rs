//! Picker identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Shared by every generator so two systems in one process never collide.
static NEXT_INDEX: AtomicU64 = AtomicU64::new(0);

/// Identifier of one live picker, e.g. `picker-1760832000000-3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PickerId(String);

impl PickerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces process-unique [`PickerId`]s.
///
/// The millisecond timestamp keeps ids readable; the process-wide counter is what makes
/// ids minted in the same millisecond distinct.
#[derive(Debug, Clone)]
pub struct IdentityGenerator {
    prefix: String,
}

impl Default for IdentityGenerator {
    fn default() -> Self {
        Self::new("picker")
    }
}

impl IdentityGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn next_id(&self) -> PickerId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let index = NEXT_INDEX.fetch_add(1, Ordering::Relaxed);
        PickerId(format!("{}-{}-{}", self.prefix, millis, index))
    }
}
