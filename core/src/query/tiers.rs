//! Tier-list grouping over the meta snapshot.

use tracing::warn;

use herodex_types::{Hero, HeroMeta, Tier, TierInfo};

use super::RoleFilter;
use crate::dataset::Dataset;

/// One meta entry with its hero resolved
#[derive(Debug, Clone, Copy)]
pub struct TierEntry<'a> {
    pub hero: &'a Hero,
    pub meta: &'a HeroMeta,
}

/// One row of the tier list
#[derive(Debug, Clone)]
pub struct TierBucket<'a> {
    pub tier: Tier,
    /// Authored descriptor for the bucket, when present in the snapshot
    pub info: Option<&'a TierInfo>,
    /// Entries in meta-table authoring order
    pub entries: Vec<TierEntry<'a>>,
}

/// Partition the meta entries into the five fixed tier buckets in
/// S/A/B/C/D display order. A role filter restricts entries by the
/// resolved hero's role; entries whose hero no longer exists are
/// dropped.
pub fn tier_list<'a>(data: &'a Dataset, role: RoleFilter) -> Vec<TierBucket<'a>> {
    let mut buckets: Vec<TierBucket<'a>> = Tier::ORDER
        .iter()
        .map(|&tier| TierBucket {
            tier,
            info: data.meta().tiers.get(&tier),
            entries: Vec::new(),
        })
        .collect();

    for meta in &data.meta().heroes {
        let Some(hero) = data.hero(&meta.hero_id) else {
            warn!(hero = %meta.hero_id, "dropping meta entry with unknown hero");
            continue;
        };
        if !role.matches(hero.role) {
            continue;
        }
        if let Some(bucket) = buckets.iter_mut().find(|b| b.tier == meta.tier) {
            bucket.entries.push(TierEntry { hero, meta });
        }
    }

    buckets
}
