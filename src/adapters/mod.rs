//! Concrete implementations of the host traits.
//!
//! # Adapters
//!
//! - [`EventBus`] - In-process [`EventHost`](crate::traits::EventHost) that hosts feed events into
//! - [`RectNode`] - [`LayoutNode`](crate::traits::LayoutNode) backed by a ratatui `Rect`
//! - [`translate_event`] - crossterm `Event` to [`HostEvent`](crate::traits::HostEvent)
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockNode`] - Node with settable bounds and attachment

pub mod crossterm_events;
pub mod event_bus;
pub mod mock;
pub mod rect_node;

pub use crossterm_events::translate_event;
pub use event_bus::EventBus;
pub use mock::MockNode;
pub use rect_node::RectNode;
