//! Layout node trait abstraction.

use std::rc::Rc;

use crate::geometry::BoundingBox;

/// A concrete, already-resolved element whose bounds the tracker follows.
///
/// Unwrapping framework-specific handles into a node is the host's job;
/// the tracker only ever sees implementors of this trait.
pub trait LayoutNode {
    /// Current bounds in the same coordinate space as pointer events.
    fn bounding_rect(&self) -> BoundingBox;

    /// Whether the node is still part of a live layout.
    ///
    /// Detached nodes are rejected at tracker construction.
    fn is_attached(&self) -> bool {
        true
    }
}

impl<N: LayoutNode + ?Sized> LayoutNode for Rc<N> {
    fn bounding_rect(&self) -> BoundingBox {
        (**self).bounding_rect()
    }

    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }
}

/// A plain box is a node that never moves.
impl LayoutNode for BoundingBox {
    fn bounding_rect(&self) -> BoundingBox {
        *self
    }
}
