//! Proximity tracker for transient pop-up panels.
//!
//! A [`ProximityTracker`] follows pointer movement and presses against the
//! bounds of a target node and fires a close callback once the pointer
//! clearly heads away from it.
//!
//! # Usage
//!
//! ```ignore
//! use popguard::adapters::EventBus;
//! use popguard::config::TrackerConfig;
//! use popguard::tracker::ProximityTracker;
//! use std::rc::Rc;
//!
//! let bus = Rc::new(EventBus::new());
//! let tracker = ProximityTracker::new(
//!     Rc::clone(&bus),
//!     Some(node),
//!     TrackerConfig::default().with_threshold(50.0),
//!     move || popup.hide(),
//! )?;
//!
//! // Host event loop
//! bus.dispatch(&HostEvent::PointerMove(Point::new(180.0, 50.0)));
//! ```
//!
//! # Lifecycle
//!
//! Construction registers move, press and resize handlers. A close, an
//! explicit [`destroy`](ProximityTracker::destroy), or dropping the tracker
//! releases them. Handlers only hold a weak reference to the tracker, so the
//! host never keeps a dropped tracker alive.

pub mod state;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::geometry::{BoundingBox, Point};
use crate::traits::{EventHandler, EventHost, EventKind, HostEvent, LayoutNode, SubscriptionId};

pub use state::{CloseReason, ProximityState, TrackingState, Verdict};

type CloseCallback = Box<dyn FnOnce()>;

/// One host registration owned by the tracker.
#[derive(Debug, Clone, Copy)]
struct Registration {
    kind: EventKind,
    id: SubscriptionId,
}

/// Shared internals reachable from the registered handlers.
struct Inner<H: EventHost, N: LayoutNode> {
    host: H,
    node: N,
    state: RefCell<ProximityState>,
    /// Taken on close; `None` afterwards.
    on_close: RefCell<Option<CloseCallback>>,
    registrations: RefCell<Vec<Registration>>,
    /// Cleared on close or destroy. Handlers check it before doing anything.
    active: Cell<bool>,
}

impl<H: EventHost, N: LayoutNode> Inner<H, N> {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn handle(&self, event: &HostEvent) {
        if !self.is_active() {
            return;
        }

        let verdict = match event {
            HostEvent::PointerMove(point) => self.state.borrow_mut().pointer_moved(*point),
            HostEvent::PointerDown(point) => self.state.borrow().pointer_pressed(*point),
            HostEvent::Resize { .. } => {
                self.recalculate();
                Verdict::Stay
            }
        };

        if let Verdict::Close(reason) = verdict {
            self.close(reason);
        }
    }

    fn recalculate(&self) {
        let bounds = self.node.bounding_rect();
        tracing::debug!(
            "Recalculated bounds: {}x{} at ({}, {})",
            bounds.width(),
            bounds.height(),
            bounds.left,
            bounds.top
        );
        self.state.borrow_mut().set_bounds(bounds);
    }

    fn close(&self, reason: CloseReason) {
        // Deactivate first: the callback may trigger more events re-entrantly.
        if !self.deactivate() {
            return;
        }
        tracing::info!(reason = ?reason, "Closing pop-up");

        let callback = self.on_close.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
        self.release();
    }

    fn destroy(&self) {
        if self.deactivate() {
            tracing::debug!("Tracker destroyed");
        }
        // Dropped outside the borrow: the callback may own this tracker.
        let callback = self.on_close.borrow_mut().take();
        drop(callback);
        self.release();
    }

    /// Returns whether this call flipped the tracker from active to inactive.
    fn deactivate(&self) -> bool {
        self.active.replace(false)
    }

    /// Drain and unsubscribe every registration. Safe to call repeatedly.
    fn release(&self) {
        let registrations = std::mem::take(&mut *self.registrations.borrow_mut());
        for registration in registrations {
            tracing::trace!(
                "Unsubscribing {} ({:?})",
                registration.id,
                registration.kind
            );
            self.host.unsubscribe(registration.id);
        }
    }
}

/// Decides when a pop-up anchored to a target node should close.
///
/// See the [module docs](self) for the lifecycle.
pub struct ProximityTracker<H, N>
where
    H: EventHost + 'static,
    N: LayoutNode + 'static,
{
    inner: Rc<Inner<H, N>>,
}

impl<H, N> ProximityTracker<H, N>
where
    H: EventHost + 'static,
    N: LayoutNode + 'static,
{
    /// Start tracking `target`.
    ///
    /// # Errors
    /// - [`TrackerError::InvalidConfig`] if the config fails validation
    /// - [`TrackerError::InvalidTarget`] if `target` is `None` or detached
    ///
    /// Nothing is registered with the host when construction fails.
    pub fn new<T, F>(host: H, target: T, config: TrackerConfig, on_close: F) -> TrackerResult<Self>
    where
        T: Into<Option<N>>,
        F: FnOnce() + 'static,
    {
        config.validate()?;

        let node = target.into().ok_or_else(TrackerError::unresolved_target)?;
        if !node.is_attached() {
            return Err(TrackerError::detached_target());
        }

        let bounds = node.bounding_rect();
        let inner = Rc::new(Inner {
            host,
            node,
            state: RefCell::new(ProximityState::new(bounds, &config)),
            on_close: RefCell::new(Some(Box::new(on_close))),
            registrations: RefCell::new(Vec::with_capacity(3)),
            active: Cell::new(true),
        });

        for kind in [EventKind::PointerMove, EventKind::PointerDown, EventKind::Resize] {
            let id = inner.host.subscribe(kind, Self::handler(&inner));
            inner
                .registrations
                .borrow_mut()
                .push(Registration { kind, id });
        }

        tracing::debug!(
            "Tracking {}x{} box at ({}, {}) (threshold={})",
            bounds.width(),
            bounds.height(),
            bounds.left,
            bounds.top,
            config.threshold
        );

        Ok(Self { inner })
    }

    fn handler(inner: &Rc<Inner<H, N>>) -> EventHandler {
        let weak: Weak<Inner<H, N>> = Rc::downgrade(inner);
        Rc::new(move |event: &HostEvent| {
            if let Some(inner) = weak.upgrade() {
                inner.handle(event);
            }
        })
    }

    /// Re-read the target's bounds. Start point and state are untouched.
    pub fn recalculate(&self) {
        self.inner.recalculate();
    }

    /// Stop tracking without invoking the close callback. Idempotent.
    pub fn destroy(&self) {
        self.inner.destroy();
    }

    /// Whether the tracker still reacts to events.
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    pub fn state(&self) -> TrackingState {
        self.inner.state.borrow().state()
    }

    pub fn start_point(&self) -> Option<Point> {
        self.inner.state.borrow().start_point()
    }

    pub fn bounds(&self) -> BoundingBox {
        self.inner.state.borrow().bounds()
    }

    pub fn threshold(&self) -> f64 {
        self.inner.state.borrow().threshold()
    }

    /// The tracked node.
    pub fn node(&self) -> &N {
        &self.inner.node
    }
}

impl<H, N> Drop for ProximityTracker<H, N>
where
    H: EventHost + 'static,
    N: LayoutNode + 'static,
{
    fn drop(&mut self) {
        self.inner.destroy();
    }
}

impl<H, N> fmt::Debug for ProximityTracker<H, N>
where
    H: EventHost + 'static,
    N: LayoutNode + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProximityTracker")
            .field("state", &self.state())
            .field("start", &self.start_point())
            .field("bounds", &self.bounds())
            .field("active", &self.is_active())
            .field("registrations", &self.inner.registrations.borrow().len())
            .finish()
    }
}
