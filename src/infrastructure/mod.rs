//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `events/` - Tree event sinks (NDJSON stream, repaint flag)

pub mod events;

pub use events::{JsonEventSink, RepaintFlag};
