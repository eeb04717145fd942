//! Patch history filtering.

use herodex_types::{ChangeType, Hero, Patch, PatchChange};

use super::contains_ignore_case;
use crate::dataset::Dataset;

/// Criteria for the patch history view. A change survives only if it
/// matches every active criterion.
#[derive(Debug, Clone, Default)]
pub struct PatchFilter {
    /// Restrict to changes for one hero id; `None` means all heroes
    pub hero: Option<String>,
    /// Restrict to one change type; `None` means all types
    pub change_type: Option<ChangeType>,
    /// Substring matched case-insensitively against the resolved
    /// hero's localized name or the change description
    pub search: String,
}

/// One surviving change with its hero resolved
#[derive(Debug, Clone, Copy)]
pub struct ResolvedChange<'a> {
    pub hero: &'a Hero,
    pub change: &'a PatchChange,
}

/// A patch with only its surviving changes
#[derive(Debug, Clone)]
pub struct FilteredPatch<'a> {
    pub patch: &'a Patch,
    pub changes: Vec<ResolvedChange<'a>>,
}

/// Filtered history plus the aggregate change count
#[derive(Debug, Clone)]
pub struct PatchHistory<'a> {
    /// Patches with at least one surviving change, in table order
    /// (newest-first by authoring convention)
    pub patches: Vec<FilteredPatch<'a>>,
    pub total_changes: usize,
}

/// Apply the filter to the whole patch table. Patches left with zero
/// surviving changes are dropped entirely; changes referencing unknown
/// heroes are dropped before any criterion is tested.
pub fn filter_patches<'a>(data: &'a Dataset, filter: &PatchFilter) -> PatchHistory<'a> {
    let mut patches = Vec::new();
    let mut total_changes = 0;

    for patch in data.patches() {
        let changes: Vec<ResolvedChange<'a>> = patch
            .changes
            .iter()
            .filter_map(|change| {
                let hero = data.hero(&change.hero_id)?;
                if let Some(wanted) = &filter.hero {
                    if *wanted != change.hero_id {
                        return None;
                    }
                }
                if let Some(wanted) = filter.change_type {
                    if wanted != change.kind {
                        return None;
                    }
                }
                if !filter.search.is_empty()
                    && !contains_ignore_case(&hero.local_name, &filter.search)
                    && !contains_ignore_case(&change.description, &filter.search)
                {
                    return None;
                }
                Some(ResolvedChange { hero, change })
            })
            .collect();

        if changes.is_empty() {
            continue;
        }
        total_changes += changes.len();
        patches.push(FilteredPatch { patch, changes });
    }

    PatchHistory {
        patches,
        total_changes,
    }
}
