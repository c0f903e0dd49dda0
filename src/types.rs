use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

// ============================================================================
// DispatcherId
// ============================================================================

static NEXT_DISPATCHER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Dispatcher`](crate::dispatch::Dispatcher).
///
/// Used as the event `target` and as the entries of the propagation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DispatcherId(u64);

impl DispatcherId {
    pub(crate) fn next() -> Self {
        Self(NEXT_DISPATCHER_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[cfg(test)]
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DispatcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Options structs
// ============================================================================

/// Options fixed at event construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventOptions {
    /// Propagate the event to ancestors after the target's listeners ran.
    pub bubbles: bool,
}

impl EventOptions {
    pub fn bubbling() -> Self {
        Self { bubbles: true }
    }
}

/// Options for `add_event_listener()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListenerOptions {
    /// Higher priorities fire first. Equal priorities fire in registration order.
    pub priority: i32,
}

impl ListenerOptions {
    pub fn priority(priority: i32) -> Self {
        Self { priority }
    }
}
