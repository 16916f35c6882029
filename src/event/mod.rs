mod bus;
mod events;

pub use bus::EventBus;
pub use events::EditorEvent;

/// Receives editor events synchronously on the UI thread.
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

impl<F: FnMut(&EditorEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &EditorEvent) {
        self(event)
    }
}
