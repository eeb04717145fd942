//! Counter list ordering and role restriction.

use std::cmp::Reverse;

use super::RoleFilter;
use crate::resolve::ResolvedCounter;

/// Selectable orderings for a counter list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterSort {
    /// Tier rank then effectiveness, strongest first
    #[default]
    ByStrength,
    /// Localized name, ascending
    ByName,
}

/// Restrict to counters of one role, then sort. The counter's own role
/// field wins; records that predate the field fall back to the
/// resolved hero's role.
pub fn counter_view<'a>(
    counters: &[ResolvedCounter<'a>],
    role: RoleFilter,
    order: CounterSort,
) -> Vec<ResolvedCounter<'a>> {
    let mut view: Vec<ResolvedCounter<'a>> = counters
        .iter()
        .filter(|entry| role.matches(entry.info.role.unwrap_or(entry.hero.role)))
        .copied()
        .collect();
    sort_counters(&mut view, order);
    view
}

/// Sort a counter list in place (stable, so authoring order breaks ties)
pub fn sort_counters(counters: &mut [ResolvedCounter<'_>], order: CounterSort) {
    match order {
        CounterSort::ByStrength => {
            counters.sort_by_key(|entry| Reverse(strength_key(entry)));
        }
        CounterSort::ByName => {
            counters.sort_by_cached_key(|entry| collation_key(&entry.hero.local_name));
        }
    }
}

/// Composite strength key: authored tier rank first, effectiveness
/// second. Tiers are a late schema addition; a record without one gets
/// a rank imputed from its effectiveness so mixed lists still order by
/// strength instead of clustering legacy entries.
fn strength_key(entry: &ResolvedCounter<'_>) -> (u8, u8) {
    let effectiveness = entry.info.effectiveness;
    let rank = entry
        .info
        .tier
        .map(|tier| tier.rank())
        .unwrap_or_else(|| (effectiveness.saturating_sub(1)).max(1));
    (rank, effectiveness)
}

/// Collation key for localized names: lowercased, with `ё` folded into
/// `е` so Cyrillic names sort in dictionary order by code point.
fn collation_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}
