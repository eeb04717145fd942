//! Shared dataset types for Herodex.
//!
//! These are the wire schemas for the hand-authored JSON tables
//! (heroes, counters, synergies, meta, patches) plus the static
//! display-descriptor mappings (role/tier/subrole/change-type labels,
//! icons and colors) that every consumer renders with.

pub mod display;
pub mod hero;
pub mod meta;

// Re-exports for convenience
pub use display::*;
pub use hero::*;
pub use meta::*;
