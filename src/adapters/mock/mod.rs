//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockNode`] - Layout node with settable bounds and attachment

pub mod node;

pub use node::MockNode;
