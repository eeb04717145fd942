//! Dataset loading from a directory of JSON tables.
//!
//! Expects the five authored files (`heroes.json`, `counters.json`,
//! `synergies.json`, `meta.json`, `patches.json`) side by side in one
//! directory. Parsing is strict; referential integrity is not checked
//! here — stale cross-references are handled softly at resolution time
//! and reported by `herodex-validate`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use herodex_types::{Hero, HeroCounters, HeroSynergies, MetaSnapshot, Patch};

use super::Dataset;

/// Failure to load the dataset from disk
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Dataset {
    /// Load all tables from a dataset directory
    pub fn load_dir(dir: &Path) -> Result<Dataset, DatasetError> {
        let heroes: Vec<Hero> = read_table(dir.join("heroes.json"))?;
        let counters: Vec<HeroCounters> = read_table(dir.join("counters.json"))?;
        let synergies: HeroSynergies = read_table(dir.join("synergies.json"))?;
        let meta: MetaSnapshot = read_table(dir.join("meta.json"))?;
        let patches: Vec<Patch> = read_table(dir.join("patches.json"))?;

        info!(
            heroes = heroes.len(),
            counter_groups = counters.len(),
            synergy_owners = synergies.len(),
            meta_entries = meta.heroes.len(),
            patches = patches.len(),
            "dataset loaded"
        );

        Ok(Dataset::new(heroes, counters, synergies, meta, patches))
    }
}

fn read_table<T: DeserializeOwned>(path: PathBuf) -> Result<T, DatasetError> {
    let content = fs::read_to_string(&path).map_err(|source| DatasetError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DatasetError::Parse { path, source })
}
