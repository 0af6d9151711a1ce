//! Application Layer
//!
//! Use cases that orchestrate the talent tree.
//! This layer:
//! - Depends on Domain layer (entities, tree, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Owns the single writer that every renderer goes through
//!
//! ## Use Cases
//!
//! - `TalentCalculator` - Applies select/deselect steps, logs, and notifies sinks

pub mod calculator;

pub use calculator::{ApplyReport, StepOutcome, StepResult, TalentCalculator};
