//! Shared helpers: a parent-linked host node and call logs.

use std::sync::{Arc, Mutex, Weak};

use bubbling_events::{Dispatcher, Event, EventTarget, Listener};

/// Minimal host hierarchy: a dispatcher plus a weak parent link.
pub struct Node {
    dispatcher: Dispatcher,
    parent: Mutex<Option<Weak<Node>>>,
}

impl Node {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            dispatcher: Dispatcher::new(),
            parent: Mutex::new(None),
        })
    }

    pub fn set_parent(&self, parent: &Arc<Node>) {
        *self.parent.lock().unwrap() = Some(Arc::downgrade(parent));
    }
}

impl EventTarget for Node {
    fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    fn parent(&self) -> Option<Arc<dyn EventTarget>> {
        let parent: Arc<dyn EventTarget> = self.parent.lock().unwrap().as_ref()?.upgrade()?;
        Some(parent)
    }
}

pub type Log = Arc<Mutex<Vec<String>>>;

/// Helper: create a shared call-log that listeners append to.
pub fn make_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// A listener that appends `name` to `log`.
pub fn recorder(log: &Log, name: &str) -> Listener {
    let log = Arc::clone(log);
    let name = name.to_string();
    Listener::new(move |_| log.lock().unwrap().push(name.clone()))
}

/// A listener that appends `name` and then runs `f` on the event.
pub fn recorder_then(
    log: &Log,
    name: &str,
    f: impl Fn(&mut Event) + Send + Sync + 'static,
) -> Listener {
    let log = Arc::clone(log);
    let name = name.to_string();
    Listener::new(move |event| {
        log.lock().unwrap().push(name.clone());
        f(event);
    })
}
