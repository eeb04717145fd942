//! Read-only dataset repository.
//!
//! All five reference tables are loaded once and owned by [`Dataset`];
//! every other component receives borrowed views. Lookups fail softly:
//! an unknown identifier yields `None` or an empty slice, never a
//! panic. There is no mutation API.

mod loader;

pub use loader::DatasetError;

use hashbrown::HashMap;
use tracing::warn;

use herodex_types::{
    CounterInfo, Hero, HeroCounters, HeroMeta, HeroSynergies, MetaSnapshot, Patch, Synergy,
};

/// The immutable reference tables plus identifier indexes built once at
/// construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    heroes: Vec<Hero>,
    counters: Vec<HeroCounters>,
    synergies: HeroSynergies,
    meta: MetaSnapshot,
    patches: Vec<Patch>,

    // Identifier -> position indexes. Duplicate ids keep the first
    // record; later duplicates are logged and unreachable by lookup.
    hero_index: HashMap<String, usize>,
    counter_index: HashMap<String, usize>,
    meta_index: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from already-parsed tables
    pub fn new(
        heroes: Vec<Hero>,
        counters: Vec<HeroCounters>,
        synergies: HeroSynergies,
        meta: MetaSnapshot,
        patches: Vec<Patch>,
    ) -> Self {
        let hero_index = build_index("hero", heroes.iter().map(|h| h.id.as_str()));
        let counter_index = build_index("counters", counters.iter().map(|c| c.hero_id.as_str()));
        let meta_index = build_index("meta", meta.heroes.iter().map(|m| m.hero_id.as_str()));

        Self {
            heroes,
            counters,
            synergies,
            meta,
            patches,
            hero_index,
            counter_index,
            meta_index,
        }
    }

    /// Look up a hero by identifier
    pub fn hero(&self, id: &str) -> Option<&Hero> {
        self.hero_index.get(id).map(|&i| &self.heroes[i])
    }

    /// The full hero table in authoring order
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// The full counters table in authoring order
    pub fn counter_groups(&self) -> &[HeroCounters] {
        &self.counters
    }

    /// The full synergies table
    pub fn synergies(&self) -> &HeroSynergies {
        &self.synergies
    }

    /// Counters against the given hero, if any group exists for it
    pub fn counters_for(&self, id: &str) -> Option<&[CounterInfo]> {
        self.counter_index
            .get(id)
            .map(|&i| self.counters[i].counters.as_slice())
    }

    /// Synergies owned by the given hero (empty when none are authored)
    pub fn synergies_for(&self, id: &str) -> &[Synergy] {
        self.synergies.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Meta entry for the given hero; `None` means unranked
    pub fn meta_for(&self, id: &str) -> Option<&HeroMeta> {
        self.meta_index.get(id).map(|&i| &self.meta.heroes[i])
    }

    /// The season/patch meta snapshot
    pub fn meta(&self) -> &MetaSnapshot {
        &self.meta
    }

    /// The full patch history, newest-first by authoring convention
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }
}

fn build_index<'a>(table: &str, ids: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (pos, id) in ids.enumerate() {
        if index.contains_key(id) {
            warn!(table, id, "duplicate identifier, keeping first record");
            continue;
        }
        index.insert(id.to_string(), pos);
    }
    index
}
