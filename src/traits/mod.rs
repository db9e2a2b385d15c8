//! Trait abstractions for the host environment.
//!
//! The tracker never talks to a windowing layer directly. Everything it needs
//! from the outside world goes through these traits, so hosts (a crossterm
//! event loop, a GUI toolkit, a test harness) plug in by implementing them.
//!
//! # Traits
//!
//! - [`EventHost`] - Subscribe/unsubscribe to pointer and resize notifications
//! - [`LayoutNode`] - Query the current bounds of the tracked element

pub mod host;
pub mod node;

pub use host::{EventHandler, EventHost, EventKind, HostEvent, SubscriptionId};
pub use node::LayoutNode;
