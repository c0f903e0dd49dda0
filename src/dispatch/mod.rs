//! Synchronous event dispatch with priority ordering and bubbling.
//!
//! # Modules
//!
//! - [`listener`] — [`Listener`] handles and the per-dispatcher [`ListenerTable`].
//! - [`event`] — [`Event`], the record carried through one dispatch.
//! - [`path`] — [`next_ancestor`], parent resolution with a cycle guard.
//! - [`engine`] — [`dispatch`], the level-by-level dispatch loop.
//! - [`dispatcher`] — [`Dispatcher`] and the [`EventTarget`] capability trait.

pub mod dispatcher;
pub mod engine;
pub mod event;
pub mod listener;
pub mod path;

pub use dispatcher::{Dispatcher, EventTarget};
pub use engine::dispatch;
pub use event::Event;
pub use listener::{Listener, ListenerFn, ListenerTable};
pub use path::next_ancestor;
