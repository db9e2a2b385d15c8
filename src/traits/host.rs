//! Event host trait abstraction.
//!
//! Hosts deliver three kinds of notifications. Delivery is single-threaded
//! and in order, one event at a time.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Kinds of notification a tracker subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The pointer moved anywhere in the viewport
    PointerMove,
    /// A pointer button was pressed anywhere in the viewport
    PointerDown,
    /// The viewport was resized
    Resize,
}

/// A notification delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    PointerMove(Point),
    PointerDown(Point),
    Resize { width: f64, height: f64 },
}

impl HostEvent {
    /// The kind used to route this event to subscribers.
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerMove(_) => EventKind::PointerMove,
            HostEvent::PointerDown(_) => EventKind::PointerDown,
            HostEvent::Resize { .. } => EventKind::Resize,
        }
    }
}

/// Callback registered with a host.
pub type EventHandler = Rc<dyn Fn(&HostEvent)>;

/// Opaque handle returned by [`EventHost::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// Trait for hosts that deliver pointer and resize notifications.
///
/// Methods take `&self`: handlers may unsubscribe while the host is in the
/// middle of dispatching, so implementations keep their registry behind
/// interior mutability.
///
/// # Contract
///
/// - After `unsubscribe(id)` returns, the handler behind `id` is never
///   invoked again, even if a dispatch is already in progress.
/// - Unsubscribing an unknown or already-removed id is a no-op.
pub trait EventHost {
    /// Register `handler` for events of `kind`.
    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> SubscriptionId;

    /// Remove a registration.
    fn unsubscribe(&self, id: SubscriptionId);
}

impl<H: EventHost + ?Sized> EventHost for Rc<H> {
    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> SubscriptionId {
        (**self).subscribe(kind, handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        (**self).unsubscribe(id)
    }
}
