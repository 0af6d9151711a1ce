//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Implementations live in `crate::infrastructure::events`.

pub mod tree_events;

pub use tree_events::{NoopEventSink, TreeEvent, TreeEventSink};
