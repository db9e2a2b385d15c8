//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let harness = TrackerHarness::new(unit_box());
//! let tracker = harness.tracker(50.0);
//! harness.move_to(180.0, 50.0);
//! assert_eq!(harness.close_count(), 0);
//! ```

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use popguard::adapters::mock::MockNode;
use popguard::adapters::EventBus;
use popguard::geometry::{BoundingBox, Point};
use popguard::traits::HostEvent;
use popguard::{ProximityTracker, TrackerConfig};

pub type TestTracker = ProximityTracker<Rc<EventBus>, Rc<MockNode>>;

/// The 100x100 box anchored at the origin used by most scenarios.
pub fn unit_box() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 100.0, 100.0)
}

/// Install a test-writer subscriber so `RUST_LOG=popguard=trace` shows tracker logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A bus, a node and a close counter wired together.
pub struct TrackerHarness {
    pub bus: Rc<EventBus>,
    pub node: Rc<MockNode>,
    closes: Rc<Cell<u32>>,
}

impl TrackerHarness {
    pub fn new(bounds: BoundingBox) -> Self {
        init_tracing();
        Self {
            bus: Rc::new(EventBus::new()),
            node: Rc::new(MockNode::new(bounds)),
            closes: Rc::new(Cell::new(0)),
        }
    }

    /// Build a tracker over the harness node with the given threshold.
    pub fn tracker(&self, threshold: f64) -> TestTracker {
        self.tracker_with(TrackerConfig::default().with_threshold(threshold))
    }

    pub fn tracker_with(&self, config: TrackerConfig) -> TestTracker {
        let closes = Rc::clone(&self.closes);
        ProximityTracker::new(
            Rc::clone(&self.bus),
            Rc::clone(&self.node),
            config,
            move || closes.set(closes.get() + 1),
        )
        .expect("Failed to create tracker")
    }

    pub fn move_to(&self, x: f64, y: f64) {
        self.bus.dispatch(&HostEvent::PointerMove(Point::new(x, y)));
    }

    pub fn press(&self, x: f64, y: f64) {
        self.bus.dispatch(&HostEvent::PointerDown(Point::new(x, y)));
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.bus.dispatch(&HostEvent::Resize { width, height });
    }

    pub fn close_count(&self) -> u32 {
        self.closes.get()
    }

    pub fn closed(&self) -> bool {
        self.close_count() > 0
    }
}
