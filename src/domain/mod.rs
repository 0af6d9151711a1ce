//! Domain Layer
//!
//! The talent tree model: pure state and rules without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Talents, paths and the point budget
//! - `command` - Select/deselect steps addressed by (path, talent)
//! - `tree` - The `TalentTree` model with select/deselect validation
//! - `ports/` - Observer interface for renderers and event streams
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the terminal or file system
//! 2. **Single writer** - Only `select`/`deselect` mutate state
//! 3. **Structured failures** - Rule violations are returned, never shown

pub mod command;
pub mod entities;
pub mod ports;
pub mod tree;
