//! Layout node backed by a ratatui `Rect`.
//!
//! Terminal UIs know a widget's area only after layout, so the render pass
//! pushes the latest area into the node and the tracker reads it back on
//! `recalculate()` or a resize.

use std::cell::Cell;

use ratatui::layout::Rect;

use crate::geometry::BoundingBox;
use crate::traits::LayoutNode;

/// A pop-up's on-screen area, updated by the render pass.
///
/// Share it with the tracker through an `Rc<RectNode>`.
#[derive(Debug)]
pub struct RectNode {
    area: Cell<Rect>,
    attached: Cell<bool>,
}

impl RectNode {
    /// Create an attached node covering `area`.
    pub fn new(area: Rect) -> Self {
        Self {
            area: Cell::new(area),
            attached: Cell::new(true),
        }
    }

    /// Record the area the pop-up was last rendered into.
    pub fn set_area(&self, area: Rect) {
        self.area.set(area);
    }

    pub fn area(&self) -> Rect {
        self.area.get()
    }

    /// Mark the node as removed from the layout.
    pub fn detach(&self) {
        self.attached.set(false);
    }
}

impl LayoutNode for RectNode {
    fn bounding_rect(&self) -> BoundingBox {
        BoundingBox::from(self.area.get())
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }
}
