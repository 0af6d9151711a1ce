//! Terminal presentation for the `talent-calc` binary.

pub mod context;
pub mod error;
pub mod json;
pub mod notice;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod widgets;
