//! Talent calculator use case
//!
//! Drives one [`TalentTree`](crate::domain::tree::TalentTree): every step
//! runs to completion, is logged, and is broadcast to the registered sinks.

mod result;
mod use_case;


pub use result::{ApplyReport, StepOutcome, StepResult};
pub use use_case::TalentCalculator;
