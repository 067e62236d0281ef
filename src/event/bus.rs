use std::cell::RefCell;
use std::fmt;

use crate::event::{BuilderEvent, EventHandler};

/// Broadcasts session events to subscribed handlers, in subscription order
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.handlers.try_borrow().map_or(0, |handlers| handlers.len());
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{count} handlers>"))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Deliver `event` to every handler.
    ///
    /// An event emitted from inside a handler is dropped with a warning.
    pub fn emit(&self, event: BuilderEvent) {
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            log::warn!("Dropping {:?} emitted while handling another event", event);
            return;
        };
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(Box::new(move |_: &BuilderEvent| seen.borrow_mut().push(tag)));
        }

        bus.emit(BuilderEvent::ElementRemoved { id: 1 });
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn reentrant_emit_is_dropped() {
        let bus = Rc::new(EventBus::new());
        let inner = Rc::downgrade(&bus);
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        bus.subscribe(Box::new(move |_: &BuilderEvent| {
            *counter.borrow_mut() += 1;
            if let Some(bus) = inner.upgrade() {
                bus.emit(BuilderEvent::ElementRemoved { id: 2 });
            }
        }));

        bus.emit(BuilderEvent::ElementRemoved { id: 1 });
        assert_eq!(*calls.borrow(), 1);
    }
}
