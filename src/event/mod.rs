mod bus;
mod events;

pub use bus::EventBus;
pub use events::BuilderEvent;

/// Receives every event emitted on an [`EventBus`].
///
/// Handlers run synchronously inside the emitting call. Events they emit on
/// the same bus are dropped.
pub trait EventHandler {
    fn handle_event(&mut self, event: &BuilderEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&BuilderEvent),
{
    fn handle_event(&mut self, event: &BuilderEvent) {
        self(event)
    }
}
