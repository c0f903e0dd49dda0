//! Resolves the next level of a bubbling dispatch.

use std::sync::Arc;

use tracing::warn;

use crate::types::DispatcherId;

use super::dispatcher::EventTarget;

/// The parent of `target`, unless it was already visited on `path`.
///
/// A repeat means the host hierarchy is cyclic; propagation ends there
/// instead of looping.
pub fn next_ancestor<T>(target: &T, path: &[DispatcherId]) -> Option<Arc<dyn EventTarget>>
where
    T: EventTarget + ?Sized,
{
    let parent = target.parent()?;
    let parent_id = parent.dispatcher().id();
    if path.contains(&parent_id) {
        warn!(
            dispatcher = %target.dispatcher().id(),
            parent = %parent_id,
            depth = path.len(),
            "cyclic event target hierarchy; bubbling halted"
        );
        return None;
    }
    Some(parent)
}
