//! Popguard - decide when a transient pop-up should auto-close
//!
//! A [`ProximityTracker`](tracker::ProximityTracker) watches pointer moves
//! and presses relative to a pop-up's bounds and fires a close callback
//! once the pointer clearly heads away from it. Hosts plug in through the
//! [`traits`] module; [`adapters`] ships a crossterm/ratatui binding.

pub mod adapters;
pub mod config;
pub mod error;
pub mod geometry;
pub mod tracker;
pub mod traits;

pub use config::TrackerConfig;
pub use error::{TrackerError, TrackerResult};
pub use geometry::{BoundingBox, Point};
pub use tracker::{CloseReason, ProximityTracker, TrackingState};
