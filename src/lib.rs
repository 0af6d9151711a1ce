//! talent-calc - talent tree calculator
//!
//! A talent tree is a set of named paths. Each path is a linear chain of
//! talents, and all paths share one point budget. Talents are selected in
//! chain order and deselected from the tail backward.
//!
//! The library holds the model and its rules; the `talent-calc` binary is a
//! terminal renderer driving it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod seed;

// Re-exports for convenience
pub use application::{ApplyReport, StepOutcome, TalentCalculator};
pub use config::Config;
pub use domain::command::{Action, TalentCommand};
pub use domain::entities::{Budget, PathId, Talent, TalentId, TalentPath};
pub use domain::ports::{NoopEventSink, TreeEvent, TreeEventSink};
pub use domain::tree::{TalentTree, Transition};
pub use error::{TalentError, TalentResult};
pub use infrastructure::{JsonEventSink, RepaintFlag};
pub use seed::TreeSeed;
