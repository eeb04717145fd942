//! Roster grid filtering and role grouping.

use herodex_types::{Hero, Role, Tier};

use super::{RoleFilter, contains_ignore_case};
use crate::dataset::Dataset;

/// Criteria for the roster grid
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
    /// Substring matched case-insensitively against both name fields;
    /// empty matches every hero
    pub search: String,
    pub role: RoleFilter,
}

/// One roster row: the hero plus its meta tier for the badge, if ranked
#[derive(Debug, Clone, Copy)]
pub struct RosterEntry<'a> {
    pub hero: &'a Hero,
    pub tier: Option<Tier>,
}

/// Roster entries for one role section
#[derive(Debug, Clone)]
pub struct RoleGroup<'a> {
    pub role: Role,
    pub entries: Vec<RosterEntry<'a>>,
}

/// Filtered roster in hero-table authoring order
pub fn roster<'a>(data: &'a Dataset, filter: &RosterFilter) -> Vec<RosterEntry<'a>> {
    data.heroes()
        .iter()
        .filter(|hero| filter.role.matches(hero.role))
        .filter(|hero| matches_search(hero, &filter.search))
        .map(|hero| RosterEntry {
            hero,
            tier: data.meta_for(&hero.id).map(|meta| meta.tier),
        })
        .collect()
}

/// Filtered roster partitioned into the three fixed role sections, in
/// Tank/Damage/Support order. Sections are kept even when empty so the
/// caller owns the skip-empty decision.
pub fn roster_grouped<'a>(data: &'a Dataset, filter: &RosterFilter) -> Vec<RoleGroup<'a>> {
    let entries = roster(data, filter);
    Role::ALL
        .iter()
        .map(|&role| RoleGroup {
            role,
            entries: entries
                .iter()
                .filter(|entry| entry.hero.role == role)
                .copied()
                .collect(),
        })
        .collect()
}

fn matches_search(hero: &Hero, query: &str) -> bool {
    contains_ignore_case(&hero.name, query) || contains_ignore_case(&hero.local_name, query)
}
