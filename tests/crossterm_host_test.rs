//! Terminal host integration tests
//!
//! Drive a tracker with crossterm events over a ratatui `Rect`, the way a
//! TUI event loop would after rendering a tooltip.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use popguard::adapters::{EventBus, RectNode};
use popguard::geometry::BoundingBox;
use popguard::{ProximityTracker, TrackerConfig, TrackerError, TrackingState};
use ratatui::layout::Rect;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

struct TerminalHost {
    bus: Rc<EventBus>,
    node: Rc<RectNode>,
    closes: Rc<Cell<u32>>,
}

impl TerminalHost {
    /// A 20x6 tooltip at column 40, row 10.
    fn new() -> Self {
        common::init_tracing();
        Self {
            bus: Rc::new(EventBus::new()),
            node: Rc::new(RectNode::new(Rect::new(40, 10, 20, 6))),
            closes: Rc::new(Cell::new(0)),
        }
    }

    fn tracker(&self, threshold: f64) -> ProximityTracker<Rc<EventBus>, Rc<RectNode>> {
        let closes = Rc::clone(&self.closes);
        ProximityTracker::new(
            Rc::clone(&self.bus),
            Rc::clone(&self.node),
            TrackerConfig::default().with_threshold(threshold),
            move || closes.set(closes.get() + 1),
        )
        .expect("Failed to create tracker")
    }

    fn send(&self, event: Event) -> usize {
        self.bus.dispatch_crossterm(&event)
    }
}

#[test]
fn test_rect_bounds_are_captured() {
    let host = TerminalHost::new();
    let tracker = host.tracker(5.0);

    assert_eq!(tracker.bounds(), BoundingBox::new(40.0, 10.0, 60.0, 16.0));
}

#[test]
fn test_mouse_approach_then_hover_stays_open() {
    let host = TerminalHost::new();
    let tracker = host.tracker(5.0);

    host.send(mouse(MouseEventKind::Moved, 70, 13));
    host.send(mouse(MouseEventKind::Moved, 65, 13));
    host.send(mouse(MouseEventKind::Moved, 55, 13));

    assert_eq!(tracker.state(), TrackingState::Hovered);
    assert_eq!(host.closes.get(), 0);

    // Drag counts as movement; 3 cells below stays within threshold.
    host.send(mouse(MouseEventKind::Drag(MouseButton::Left), 50, 19));
    assert_eq!(host.closes.get(), 0);

    host.send(mouse(MouseEventKind::Moved, 50, 30));
    assert_eq!(host.closes.get(), 1);
}

#[test]
fn test_right_click_outside_closes() {
    let host = TerminalHost::new();
    let _tracker = host.tracker(5.0);

    host.send(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0));
    assert_eq!(host.closes.get(), 1);
}

#[test]
fn test_release_scroll_and_keys_are_ignored() {
    let host = TerminalHost::new();
    let _tracker = host.tracker(5.0);

    assert_eq!(host.send(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)), 0);
    assert_eq!(host.send(mouse(MouseEventKind::ScrollUp, 0, 0)), 0);
    assert_eq!(host.send(Event::FocusGained), 0);
    assert_eq!(host.closes.get(), 0);
}

#[test]
fn test_terminal_resize_follows_relayout() {
    let host = TerminalHost::new();
    let tracker = host.tracker(5.0);

    host.node.set_area(Rect::new(0, 0, 10, 4));
    assert_eq!(host.send(Event::Resize(100, 30)), 1);

    assert_eq!(tracker.bounds(), BoundingBox::new(0.0, 0.0, 10.0, 4.0));
    host.send(mouse(MouseEventKind::Down(MouseButton::Left), 5, 2));
    assert_eq!(host.closes.get(), 0);
}

#[test]
fn test_detached_rect_node_is_rejected() {
    let bus = Rc::new(EventBus::new());
    let node = Rc::new(RectNode::new(Rect::new(0, 0, 5, 5)));
    node.detach();

    let result: Result<ProximityTracker<_, Rc<RectNode>>, _> =
        ProximityTracker::new(Rc::clone(&bus), node, TrackerConfig::default(), || {});
    assert!(matches!(result, Err(TrackerError::InvalidTarget { .. })));
    assert_eq!(bus.subscriber_count(), 0);
}
