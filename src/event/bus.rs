use std::cell::RefCell;

use crate::event::{EditorEvent, EventHandler};

/// A simple event bus for broadcasting editor events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
    /// Subscriptions made from inside a handler, added once `emit` returns
    pending: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events.
    ///
    /// A handler subscribed while an event is being emitted first hears the
    /// next event.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        match self.handlers.try_borrow_mut() {
            Ok(mut handlers) => handlers.push(handler),
            Err(_) => self.pending.borrow_mut().push(handler),
        }
    }

    /// Emit an event to all registered handlers, in subscription order
    pub fn emit(&self, event: EditorEvent) {
        {
            let mut handlers = self.handlers.borrow_mut();
            for handler in handlers.iter_mut() {
                handler.handle_event(&event);
            }
        }
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        self.handlers.borrow_mut().extend(pending);
    }
}
