//! Domain Entities
//!
//! - `Talent` - A single selectable node with prev/post links
//! - `TalentPath` - An ordered chain of talents
//! - `Budget` - The shared point ceiling and current spend

mod budget;
mod path;
mod talent;

pub use budget::Budget;
pub use path::{PathId, TalentPath};
pub use talent::{Talent, TalentId};
