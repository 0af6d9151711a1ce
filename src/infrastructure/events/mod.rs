//! Event Sink Implementations
//!
//! Provides concrete implementations of TreeEventSink:
//! - JsonEventSink: NDJSON step stream for scripts and CI
//! - RepaintFlag: marks the interactive grid dirty

mod json;
mod repaint;

pub use json::JsonEventSink;
pub use repaint::RepaintFlag;
