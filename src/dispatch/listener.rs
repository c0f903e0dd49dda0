//! Listener handles and the per-dispatcher listener table.
//!
//! Listeners are stored as `Arc<dyn Fn(&mut Event)>` so snapshots are cheap.
//! A [`Listener`]'s identity is the identity of its shared callable: clones
//! of one handle refer to the same listener, separately built handles never
//! do.
//!
//! All table methods take `&self` (interior mutability via
//! `parking_lot::Mutex`). The lock is never held while a listener runs, which
//! lets listeners register and unregister during dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::BoxError;

use super::event::Event;

/// Closure type for event listeners.
pub type ListenerFn = dyn Fn(&mut Event) -> Result<(), BoxError> + Send + Sync;

// ============================================================================
// Listener
// ============================================================================

/// A cloneable handle to a registered callable.
#[derive(Clone)]
pub struct Listener {
    callback: Arc<ListenerFn>,
}

impl Listener {
    /// Wrap an infallible callback.
    pub fn new(callback: impl Fn(&mut Event) + Send + Sync + 'static) -> Self {
        Self::fallible(move |event| {
            callback(event);
            Ok(())
        })
    }

    /// Wrap a callback whose `Err` aborts the dispatch it runs in.
    pub fn fallible(
        callback: impl Fn(&mut Event) -> Result<(), BoxError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Whether `self` and `other` are the same listener.
    pub fn same(&self, other: &Listener) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }

    pub(crate) fn invoke(&self, event: &mut Event) -> Result<(), BoxError> {
        (self.callback)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Arc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

// ============================================================================
// ListenerTable
// ============================================================================

struct Entry {
    listener: Listener,
    priority: i32,
}

/// Event type → listeners, each sequence kept in invocation order.
#[derive(Default)]
pub struct ListenerTable {
    entries: Mutex<HashMap<String, Vec<Entry>>>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event_type`.
    ///
    /// Inserted after every entry of greater or equal priority. Returns
    /// `false` (and changes nothing) if the pair was already registered.
    pub fn register(&self, event_type: &str, listener: &Listener, priority: i32) -> bool {
        let mut entries = self.entries.lock();
        let list = entries.entry(event_type.to_string()).or_default();
        if list.iter().any(|e| e.listener.same(listener)) {
            return false;
        }
        let at = list
            .iter()
            .position(|e| e.priority < priority)
            .unwrap_or(list.len());
        list.insert(
            at,
            Entry {
                listener: listener.clone(),
                priority,
            },
        );
        true
    }

    pub fn contains(&self, event_type: &str, listener: &Listener) -> bool {
        self.entries
            .lock()
            .get(event_type)
            .is_some_and(|list| list.iter().any(|e| e.listener.same(listener)))
    }

    /// Remove `listener` from `event_type`.
    ///
    /// Does nothing if the pair is not present (safe to call multiple times).
    pub fn unregister(&self, event_type: &str, listener: &Listener) -> bool {
        // Dropped after the guard: a listener's captures may re-enter the table.
        let removed: Vec<Entry> = {
            let mut entries = self.entries.lock();
            let Some(list) = entries.get_mut(event_type) else {
                return false;
            };
            let (removed, kept): (Vec<Entry>, Vec<Entry>) = std::mem::take(list)
                .into_iter()
                .partition(|e| e.listener.same(listener));
            *list = kept;
            if list.is_empty() {
                entries.remove(event_type);
            }
            removed
        };
        !removed.is_empty()
    }

    /// Point-in-time copy of the listeners for `event_type`, in invocation
    /// order. Later registrations or removals do not affect it.
    pub fn snapshot(&self, event_type: &str) -> Vec<Listener> {
        self.entries
            .lock()
            .get(event_type)
            .map(|list| list.iter().map(|e| e.listener.clone()).collect())
            .unwrap_or_default()
    }

    /// Number of listeners registered for `event_type`.
    pub fn len(&self, event_type: &str) -> usize {
        self.entries.lock().get(event_type).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Event types with at least one listener, sorted.
    pub fn event_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.entries.lock().keys().cloned().collect();
        types.sort();
        types
    }

    /// Remove every listener for `event_type`, returning how many were removed.
    pub fn clear_type(&self, event_type: &str) -> usize {
        let removed = self.entries.lock().remove(event_type);
        removed.map_or(0, |list| list.len())
    }

    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.entries.lock());
        drop(removed);
    }
}

impl fmt::Debug for ListenerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.lock();
        let mut map = f.debug_map();
        for (event_type, list) in entries.iter() {
            map.entry(event_type, &list.len());
        }
        map.finish()
    }
}
