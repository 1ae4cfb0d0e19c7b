//! Shared building blocks for the contrail workspace.
//!
//! - [`constraint`]: numeric invariants checked once at construction
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Recorder`]: an observer that keeps every event for later inspection

pub mod constraint;
mod observer;

pub use observer::{Observer, Recorder};
