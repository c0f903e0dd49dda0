pub mod error;
pub mod types;

pub mod dispatch;

pub use dispatch::{Dispatcher, Event, EventTarget, Listener};
pub use error::{BoxError, EventError, Result};
pub use types::{DispatcherId, EventOptions, ListenerOptions};
