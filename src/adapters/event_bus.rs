//! In-process event host.
//!
//! Hosts translate their native input events into [`HostEvent`]s and push
//! them through [`EventBus::dispatch`]; trackers subscribe to the bus.

use std::cell::{Cell, RefCell};
use std::fmt;

use crate::traits::{EventHandler, EventHost, EventKind, HostEvent, SubscriptionId};

struct Subscriber {
    id: SubscriptionId,
    kind: EventKind,
    handler: EventHandler,
}

/// Single-threaded publish/subscribe bus implementing [`EventHost`].
///
/// Handlers run in registration order. Dispatch works on a snapshot of the
/// subscriber list and re-checks each registration right before calling it,
/// so a handler that unsubscribes itself or others mid-dispatch is honoured.
#[derive(Default)]
pub struct EventBus {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every handler subscribed to its kind.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &HostEvent) -> usize {
        let kind = event.kind();
        let targets: Vec<(SubscriptionId, EventHandler)> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|sub| sub.kind == kind)
            .map(|sub| (sub.id, sub.handler.clone()))
            .collect();

        let mut delivered = 0;
        for (id, handler) in targets {
            if !self.is_subscribed(id) {
                continue;
            }
            handler(event);
            delivered += 1;
        }
        tracing::trace!("Dispatched {:?} to {} handler(s)", kind, delivered);
        delivered
    }

    /// Translate a crossterm event and dispatch it.
    ///
    /// Returns 0 for events that have no [`HostEvent`] counterpart.
    pub fn dispatch_crossterm(&self, event: &crossterm::event::Event) -> usize {
        match super::translate_event(event) {
            Some(host_event) => self.dispatch(&host_event),
            None => 0,
        }
    }

    /// Whether `id` is still registered.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.borrow().iter().any(|sub| sub.id == id)
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Number of live registrations for one kind.
    pub fn subscriber_count_for(&self, kind: EventKind) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|sub| sub.kind == kind)
            .count()
    }
}

impl EventHost for EventBus {
    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers
            .borrow_mut()
            .push(Subscriber { id, kind, handler });
        tracing::trace!("Subscribed {} to {:?}", id, kind);
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|sub| sub.id != id);
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("next_id", &self.next_id.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
