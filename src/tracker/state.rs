//! Pointer-tracking state machine.
//!
//! Pure decision logic with no host coupling: feed it pointer positions,
//! get back whether the panel should close. [`ProximityTracker`] wraps this
//! with event subscriptions and the close callback.
//!
//! [`ProximityTracker`]: super::ProximityTracker

use crate::config::TrackerConfig;
use crate::geometry::{distance, in_triangle, BoundingBox, Point};

/// Where the pointer is relative to the tracked box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// The pointer has not entered the box since tracking started
    #[default]
    Opened,
    /// The pointer has entered the box at least once
    Hovered,
}

/// Why a close was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// A press landed outside the box
    ClickOutside,
    /// The pointer left every cone between the start point and the box edges
    LeftCone,
    /// The pointer moved further than the threshold from a hovered box
    BeyondThreshold,
}

/// Outcome of feeding one event to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Stay,
    Close(CloseReason),
}

impl Verdict {
    pub fn is_close(&self) -> bool {
        matches!(self, Verdict::Close(_))
    }
}

/// Tracking state for one pop-up session.
///
/// `start` is set by the first pointer move and never reassigned. The state
/// only ever moves from `Opened` to `Hovered`.
#[derive(Debug, Clone)]
pub struct ProximityState {
    bounds: BoundingBox,
    start: Option<Point>,
    state: TrackingState,
    threshold: f64,
    start_tolerance: f64,
}

impl ProximityState {
    /// Start tracking `bounds` in the `Opened` state with no start point.
    pub fn new(bounds: BoundingBox, config: &TrackerConfig) -> Self {
        Self {
            bounds,
            start: None,
            state: TrackingState::Opened,
            threshold: config.threshold,
            start_tolerance: config.start_tolerance,
        }
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn start_point(&self) -> Option<Point> {
        self.start
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Replace the tracked bounds. Nothing else changes.
    pub fn set_bounds(&mut self, bounds: BoundingBox) {
        self.bounds = bounds;
    }

    /// Whether `point` is outside the box grown by `grow` on every side.
    pub fn outside_box(&self, point: Point, grow: f64) -> bool {
        self.bounds.is_outside(point, grow)
    }

    /// A press anywhere: close iff it lands outside the box.
    pub fn pointer_pressed(&self, point: Point) -> Verdict {
        if self.outside_box(point, 0.0) {
            Verdict::Close(CloseReason::ClickOutside)
        } else {
            Verdict::Stay
        }
    }

    /// A pointer move anywhere.
    pub fn pointer_moved(&mut self, point: Point) -> Verdict {
        let start = *self.start.get_or_insert_with(|| {
            tracing::debug!("Start point anchored at ({}, {})", point.x, point.y);
            point
        });

        match self.state {
            TrackingState::Opened => {
                if !self.outside_box(point, 0.0) {
                    tracing::debug!("Pointer entered box at ({}, {})", point.x, point.y);
                    self.state = TrackingState::Hovered;
                    return Verdict::Stay;
                }

                if self.in_travel_cone(start, point) {
                    Verdict::Stay
                } else {
                    Verdict::Close(CloseReason::LeftCone)
                }
            }
            TrackingState::Hovered => {
                if self.outside_box(point, self.threshold) {
                    Verdict::Close(CloseReason::BeyondThreshold)
                } else {
                    Verdict::Stay
                }
            }
        }
    }

    /// Whether `point` is still heading towards the box from `start`.
    ///
    /// Safe when within the start tolerance, or inside any triangle formed
    /// by `start` and one edge of the box.
    fn in_travel_cone(&self, start: Point, point: Point) -> bool {
        if distance(start, point) < self.start_tolerance {
            return true;
        }

        let inside = self
            .bounds
            .edges()
            .any(|(a, b)| in_triangle(point, start, a, b));

        tracing::trace!(
            "Cone check from ({}, {}) to ({}, {}): inside={}",
            start.x,
            start.y,
            point.x,
            point.y,
            inside
        );
        inside
    }
}
