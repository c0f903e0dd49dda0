use thiserror::Error;

use crate::types::DispatcherId;

/// Boxed error returned by a failing listener.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// ---------------------------------------------------------------------------
// EventError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Listener for \"{event_type}\" failed on dispatcher {dispatcher}")]
    ListenerFailure {
        event_type: String,
        dispatcher: DispatcherId,
        #[source]
        source: BoxError,
    },
}

impl EventError {
    pub(crate) fn listener_failure(
        event_type: impl Into<String>,
        dispatcher: DispatcherId,
        source: BoxError,
    ) -> Self {
        Self::ListenerFailure {
            event_type: event_type.into(),
            dispatcher,
            source,
        }
    }
}

/// Convenience alias — the default error type is `EventError`.
pub type Result<T, E = EventError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
