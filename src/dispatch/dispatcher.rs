//! Dispatcher and the `EventTarget` capability trait.
//!
//! Hosts gain event handling by embedding a [`Dispatcher`] and implementing
//! [`EventTarget`], which supplies the parent link used for bubbling. The
//! public listener and dispatch operations are provided methods on the trait.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::types::{DispatcherId, ListenerOptions};

use super::{engine, event::Event, listener::Listener, listener::ListenerTable};

// ============================================================================
// Dispatcher
// ============================================================================

/// Owns one listener table and a process-unique identity.
#[derive(Debug)]
pub struct Dispatcher {
    id: DispatcherId,
    listeners: ListenerTable,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            id: DispatcherId::next(),
            listeners: ListenerTable::new(),
        }
    }

    pub fn id(&self) -> DispatcherId {
        self.id
    }

    pub fn listeners(&self) -> &ListenerTable {
        &self.listeners
    }

    pub fn has_listeners(&self, event_type: &str) -> bool {
        self.listeners.len(event_type) > 0
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.len(event_type)
    }

    /// Drop every listener for `event_type`.
    pub fn remove_all_listeners(&self, event_type: &str) -> usize {
        self.listeners.clear_type(event_type)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// EventTarget
// ============================================================================

/// Anything that can receive and propagate events.
pub trait EventTarget: Send + Sync {
    /// The dispatcher holding this target's listeners.
    fn dispatcher(&self) -> &Dispatcher;

    /// Next target up the host hierarchy, if any.
    fn parent(&self) -> Option<Arc<dyn EventTarget>> {
        None
    }

    /// Register `listener` for `event_type`. Registering the same pair twice
    /// is a no-op and keeps the original priority.
    fn add_event_listener(&self, event_type: &str, listener: &Listener, options: ListenerOptions) {
        let dispatcher = self.dispatcher();
        if !dispatcher
            .listeners()
            .register(event_type, listener, options.priority)
        {
            debug!(
                event_type,
                dispatcher = %dispatcher.id(),
                "listener already registered; ignoring"
            );
        }
    }

    fn has_event_listener(&self, event_type: &str, listener: &Listener) -> bool {
        self.dispatcher().listeners().contains(event_type, listener)
    }

    fn remove_event_listener(&self, event_type: &str, listener: &Listener) {
        self.dispatcher().listeners().unregister(event_type, listener);
    }

    /// Dispatch `event` starting at this target.
    ///
    /// Runs synchronously to completion. The first listener error aborts the
    /// dispatch and is returned as `EventError::ListenerFailure`.
    fn dispatch_event(&self, mut event: Event) -> Result<()> {
        engine::dispatch(self, &mut event)
    }
}

impl EventTarget for Dispatcher {
    fn dispatcher(&self) -> &Dispatcher {
        self
    }
}
