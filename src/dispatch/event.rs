//! Event — the record carried through one dispatch.
//!
//! Created per `dispatch_event` call and consumed by it. Listeners receive
//! `&mut Event`, which doubles as the control handle for `stop_queue` and
//! `stop_bubbling`.

use serde_json::{Map, Value};

use crate::error::{EventError, Result};
use crate::types::{DispatcherId, EventOptions};

#[derive(Debug)]
pub struct Event {
    event_type: String,
    target: Option<DispatcherId>,
    attachment: Map<String, Value>,
    bubbles: bool,
    path: Vec<DispatcherId>,
    queue_stopped: bool,
    bubbling_stopped: bool,
}

impl Event {
    /// Create an event with no attachment data.
    pub fn new(event_type: impl Into<String>, options: EventOptions) -> Result<Self> {
        Self::with_data(event_type, Map::new(), options)
    }

    /// Create an event carrying `data` as its attachment.
    pub fn with_data(
        event_type: impl Into<String>,
        data: Map<String, Value>,
        options: EventOptions,
    ) -> Result<Self> {
        let event_type = event_type.into();
        if event_type.is_empty() {
            return Err(EventError::InvalidArgument(
                "event type must not be empty".to_string(),
            ));
        }
        Ok(Self {
            event_type,
            target: None,
            attachment: data,
            bubbles: options.bubbles,
            path: Vec::new(),
            queue_stopped: false,
            bubbling_stopped: false,
        })
    }

    /// Create an event from a JSON object of the form `{"type": ..., ...}`.
    ///
    /// `type` must be a non-empty string; every other member becomes
    /// attachment data.
    pub fn from_value(value: Value, options: EventOptions) -> Result<Self> {
        let Value::Object(mut data) = value else {
            return Err(EventError::InvalidArgument(format!(
                "event data must be an object, received {}",
                json_kind(&value)
            )));
        };
        let event_type = match data.remove("type") {
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(EventError::InvalidArgument(format!(
                    "event type must be a string, received {}",
                    json_kind(&other)
                )))
            }
            None => {
                return Err(EventError::InvalidArgument(
                    "event data is missing \"type\"".to_string(),
                ))
            }
        };
        Self::with_data(event_type, data, options)
    }

    /// Builder-style attachment insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attachment.insert(key.into(), value.into());
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The dispatcher `dispatch_event` was originally called on.
    ///
    /// `None` until dispatch starts.
    pub fn target(&self) -> Option<DispatcherId> {
        self.target
    }

    /// The dispatcher whose listeners are currently running.
    pub fn current_target(&self) -> Option<DispatcherId> {
        self.path.last().copied()
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    /// Dispatchers visited so far, target first.
    pub fn path(&self) -> &[DispatcherId] {
        &self.path
    }

    pub fn attachment(&self) -> &Map<String, Value> {
        &self.attachment
    }

    pub fn attachment_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.attachment
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attachment.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attachment.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attachment.remove(key)
    }

    // ------------------------------------------------------------------------
    // Control
    // ------------------------------------------------------------------------

    /// Skip the remaining listeners at the current level.
    ///
    /// Bubbling to the next level is unaffected.
    pub fn stop_queue(&mut self) {
        self.queue_stopped = true;
    }

    /// Halt propagation to ancestors. Remaining listeners at the current level
    /// still run.
    pub fn stop_bubbling(&mut self) {
        self.bubbling_stopped = true;
    }

    pub fn is_queue_stopped(&self) -> bool {
        self.queue_stopped
    }

    pub fn is_bubbling_stopped(&self) -> bool {
        self.bubbling_stopped
    }

    /// Whether the engine should move on to the next ancestor.
    pub(crate) fn should_bubble(&self) -> bool {
        self.bubbles && !self.bubbling_stopped
    }

    /// Enter a new propagation level at `dispatcher`.
    pub(crate) fn enter_level(&mut self, dispatcher: DispatcherId) {
        if self.target.is_none() {
            self.target = Some(dispatcher);
        }
        self.path.push(dispatcher);
        self.queue_stopped = false;
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
