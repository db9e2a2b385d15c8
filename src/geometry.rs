//! Geometry primitives for proximity tracking.
//!
//! Pointer coordinates and element bounds share one coordinate space
//! (viewport pixels, or terminal cells for a TUI host). The origin is the
//! top-left corner and y grows downwards.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// A pointer or corner position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (grows to the right)
    pub x: f64,
    /// Vertical position (grows downwards)
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to this point.
    fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

/// Axis-aligned bounds of the tracked element.
///
/// Edges are always ordered: `left <= right` and `top <= bottom`. The
/// constructors swap edges given in the wrong order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Create a box from its four edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Create a box from an origin and a size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether `point` lies outside the box grown by `grow` on every side.
    ///
    /// Edges count as inside.
    pub fn is_outside(&self, point: Point, grow: f64) -> bool {
        point.x < self.left - grow
            || point.x > self.right + grow
            || point.y < self.top - grow
            || point.y > self.bottom + grow
    }

    /// Corners in cyclic order: top-left, bottom-left, bottom-right, top-right.
    ///
    /// Each corner is adjacent to its neighbours, wrapping around, so
    /// consecutive pairs trace the four edges.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.left, self.bottom),
            Point::new(self.right, self.bottom),
            Point::new(self.right, self.top),
        ]
    }

    /// The four edges as adjacent corner pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> {
        let corners = self.corners();
        (0..corners.len()).map(move |i| (corners[i], corners[(i + 1) % corners.len()]))
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::from_origin_size(
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.width),
            f64::from(rect.height),
        )
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Slack on the barycentric coordinates along the edges through the apex.
///
/// A point on the segment from the apex to a corner sits on the side shared
/// by two adjacent triangles. Rounding can push its `u` or `v` just below
/// zero in both, so those sides accept a small negative value.
const EDGE_EPSILON: f64 = 1e-9;

/// Barycentric point-in-triangle test.
///
/// Inside iff `u >= 0`, `v >= 0` and `u + v < 1`: points on the edges
/// through `a` count as inside (within [`EDGE_EPSILON`]), points on the far
/// edge `b`-`c` do not. A zero-area triangle contains nothing.
pub fn in_triangle(point: Point, a: Point, b: Point, c: Point) -> bool {
    let v0 = c.offset_from(a);
    let v1 = b.offset_from(a);
    let v2 = point.offset_from(a);

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0.0 {
        return false;
    }
    let inv_denom = 1.0 / denom;

    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    u >= -EDGE_EPSILON && v >= -EDGE_EPSILON && u + v < 1.0
}
