//! The dispatch loop.
//!
//! Each level snapshots its listeners before invoking any of them, so
//! listeners may add or remove listeners (or dispatch other events) without
//! perturbing the iteration in progress.

use tracing::{debug, trace};

use crate::error::{EventError, Result};

use super::{dispatcher::EventTarget, event::Event, path::next_ancestor};

/// Run `event` through `target`'s listeners, then bubble to its ancestors.
pub fn dispatch<T>(target: &T, event: &mut Event) -> Result<()>
where
    T: EventTarget + ?Sized,
{
    let dispatcher = target.dispatcher();
    let id = dispatcher.id();
    event.enter_level(id);

    let listeners = dispatcher.listeners().snapshot(event.event_type());
    trace!(
        event_type = event.event_type(),
        dispatcher = %id,
        depth = event.path().len() - 1,
        listeners = listeners.len(),
        "dispatching event"
    );

    for (index, listener) in listeners.iter().enumerate() {
        if event.is_queue_stopped() {
            debug!(
                event_type = event.event_type(),
                dispatcher = %id,
                skipped = listeners.len() - index,
                "listener queue stopped"
            );
            break;
        }
        if let Err(source) = listener.invoke(event) {
            debug!(
                event_type = event.event_type(),
                dispatcher = %id,
                error = %source,
                "listener failed; aborting dispatch"
            );
            return Err(EventError::listener_failure(event.event_type(), id, source));
        }
    }

    if !event.should_bubble() {
        if event.bubbles() {
            debug!(
                event_type = event.event_type(),
                dispatcher = %id,
                "bubbling stopped"
            );
        }
        return Ok(());
    }

    match next_ancestor(target, event.path()) {
        Some(parent) => dispatch(&*parent, event),
        None => Ok(()),
    }
}
