//! Pure filter/sort projections over the dataset.
//!
//! Four independent view contexts share this engine:
//! - **roster**: searchable, role-filterable hero grid
//! - **counters**: sortable counter list for a hero detail page
//! - **tiers**: role-filterable tier list over the meta snapshot
//! - **patches**: hero/type/text-filterable patch history
//!
//! Every function here is a deterministic transformation of borrowed
//! tables plus criteria; re-invoking with identical inputs yields
//! identical output. Empty results are ordinary values.

mod counters;
mod patches;
mod roster;
mod tiers;


pub use counters::{CounterSort, counter_view, sort_counters};
pub use patches::{FilteredPatch, PatchFilter, PatchHistory, ResolvedChange, filter_patches};
pub use roster::{RoleGroup, RosterEntry, RosterFilter, roster, roster_grouped};
pub use tiers::{TierBucket, TierEntry, tier_list};

use herodex_types::Role;

/// Role criterion shared by the roster, counter, and tier projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn matches(&self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(wanted) => *wanted == role,
        }
    }
}

/// Case-insensitive substring match; an empty needle matches anything
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
