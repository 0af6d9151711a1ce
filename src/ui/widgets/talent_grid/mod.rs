//! Talent Grid Widget
//!
//! The full-screen talent calculator: one row per path, one cell per talent,
//! connector bars between chained talents, and a notice line for rejected
//! actions.
//!
//! # Module Structure
//!
//! - `grid` - cursor/notice state and action handling
//! - `render` - string rendering plus the cell hit-test layout
//! - `input` - key/mouse mapping and the interactive loop

mod grid;
mod input;
mod render;

pub use input::run_interactive;
pub use render::render_grid;
