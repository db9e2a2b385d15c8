//! crossterm input translation.
//!
//! Terminal hosts read `crossterm::event::Event`s (from `event::read` in
//! their input loop) and convert them here. Coordinates are terminal cells.

use crossterm::event::{Event, MouseEventKind};

use crate::geometry::Point;
use crate::traits::HostEvent;

/// Convert a crossterm event into a [`HostEvent`].
///
/// - mouse `Moved` and `Drag(_)` become `PointerMove`
/// - mouse `Down(_)` (any button) becomes `PointerDown`
/// - `Resize(cols, rows)` becomes `Resize`
///
/// Everything else (keys, scroll, button release, focus, paste) maps to `None`.
pub fn translate_event(event: &Event) -> Option<HostEvent> {
    match event {
        Event::Mouse(mouse) => {
            let point = Point::from((mouse.column, mouse.row));
            match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    Some(HostEvent::PointerMove(point))
                }
                MouseEventKind::Down(_) => Some(HostEvent::PointerDown(point)),
                _ => None,
            }
        }
        Event::Resize(cols, rows) => Some(HostEvent::Resize {
            width: f64::from(*cols),
            height: f64::from(*rows),
        }),
        _ => None,
    }
}
