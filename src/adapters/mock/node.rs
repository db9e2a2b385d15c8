//! Mock layout node for testing.

use std::cell::Cell;

use crate::geometry::BoundingBox;
use crate::traits::LayoutNode;

/// Layout node whose bounds and attachment are set by the test.
///
/// Counts how often the tracker queries its bounds.
///
/// # Example
///
/// ```ignore
/// use popguard::adapters::mock::MockNode;
/// use popguard::geometry::BoundingBox;
///
/// let node = Rc::new(MockNode::new(BoundingBox::new(0.0, 0.0, 100.0, 100.0)));
/// node.set_bounds(BoundingBox::new(0.0, 0.0, 200.0, 100.0));
/// tracker.recalculate();
/// assert_eq!(node.query_count(), 2);
/// ```
#[derive(Debug)]
pub struct MockNode {
    bounds: Cell<BoundingBox>,
    attached: Cell<bool>,
    queries: Cell<usize>,
}

impl MockNode {
    /// Create an attached node with the given bounds.
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds: Cell::new(bounds),
            attached: Cell::new(true),
            queries: Cell::new(0),
        }
    }

    /// Create a node that reports itself as detached.
    pub fn detached(bounds: BoundingBox) -> Self {
        let node = Self::new(bounds);
        node.attached.set(false);
        node
    }

    /// Change the bounds reported on the next query.
    pub fn set_bounds(&self, bounds: BoundingBox) {
        self.bounds.set(bounds);
    }

    /// Configure whether the node reports itself as attached.
    pub fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }

    /// How many times `bounding_rect` has been called.
    pub fn query_count(&self) -> usize {
        self.queries.get()
    }
}

impl LayoutNode for MockNode {
    fn bounding_rect(&self) -> BoundingBox {
        self.queries.set(self.queries.get() + 1);
        self.bounds.get()
    }

    fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_node_counts_queries() {
        let node = MockNode::new(BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(node.query_count(), 0);

        node.bounding_rect();
        node.set_bounds(BoundingBox::new(5.0, 5.0, 6.0, 6.0));
        assert_eq!(node.bounding_rect(), BoundingBox::new(5.0, 5.0, 6.0, 6.0));
        assert_eq!(node.query_count(), 2);
    }

    #[test]
    fn test_mock_node_attachment() {
        let node = MockNode::detached(BoundingBox::default());
        assert!(!node.is_attached());
        node.set_attached(true);
        assert!(node.is_attached());
    }
}
