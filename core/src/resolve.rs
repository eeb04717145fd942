//! Hero-detail join resolver.
//!
//! Assembles the complete detail view-model for one hero by joining
//! the hero record against its counters, synergies, and meta entry.
//! Only a missing subject hero is reportable; every other absence
//! degrades to an empty section. Child records pointing at heroes that
//! no longer exist are dropped — the tables are hand-authored and may
//! carry stale references.

use thiserror::Error;
use tracing::warn;

use herodex_types::{CounterInfo, Hero, HeroMeta, Synergy};

use crate::dataset::Dataset;

/// The requested hero does not exist; a detail page cannot be built
/// without its subject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("hero `{id}` not found")]
    HeroNotFound { id: String },
}

/// A counter entry with its countering hero resolved
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCounter<'a> {
    pub hero: &'a Hero,
    pub info: &'a CounterInfo,
}

/// A synergy entry with its partner hero resolved
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSynergy<'a> {
    pub hero: &'a Hero,
    pub synergy: &'a Synergy,
}

/// Fully joined view-model for one hero's detail page
#[derive(Debug, Clone)]
pub struct HeroDetail<'a> {
    pub hero: &'a Hero,
    /// Counters against this hero, in authoring order
    pub counters: Vec<ResolvedCounter<'a>>,
    /// Synergy partners, strongest first
    pub synergies: Vec<ResolvedSynergy<'a>>,
    /// `None` means unranked this season; meta sections are omitted
    pub meta: Option<&'a HeroMeta>,
    /// Whether the hero was introduced this season
    pub is_new: bool,
}

/// Resolve the detail view-model for `id`
pub fn hero_detail<'a>(data: &'a Dataset, id: &str) -> Result<HeroDetail<'a>, ResolveError> {
    let hero = data.hero(id).ok_or_else(|| ResolveError::HeroNotFound {
        id: id.to_string(),
    })?;

    let counters = data
        .counters_for(id)
        .unwrap_or(&[])
        .iter()
        .filter_map(|info| {
            let Some(counter_hero) = data.hero(&info.hero_id) else {
                warn!(hero = id, counter = %info.hero_id, "dropping counter with unknown hero");
                return None;
            };
            Some(ResolvedCounter { hero: counter_hero, info })
        })
        .collect();

    let mut synergies: Vec<ResolvedSynergy<'a>> = data
        .synergies_for(id)
        .iter()
        .filter_map(|synergy| {
            let Some(partner) = data.hero(&synergy.partner_id) else {
                warn!(hero = id, partner = %synergy.partner_id, "dropping synergy with unknown partner");
                return None;
            };
            Some(ResolvedSynergy { hero: partner, synergy })
        })
        .collect();
    // Strongest combos first; stable, so authoring order breaks ties
    synergies.sort_by(|a, b| b.synergy.effectiveness.cmp(&a.synergy.effectiveness));

    let is_new = data.meta().new_heroes.iter().any(|h| h == id);

    Ok(HeroDetail {
        hero,
        counters,
        synergies,
        meta: data.meta_for(id),
        is_new,
    })
}
