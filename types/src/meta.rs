//! Meta snapshot and patch history schema.
//!
//! The meta table is a single snapshot per season/patch: tier
//! descriptors plus at most one [`HeroMeta`] entry per hero. Patches
//! are an immutable history, authored newest-first; consumers never
//! re-sort them.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Tiers
// ═══════════════════════════════════════════════════════════════════════════

/// Overall meta tier bucket (S strongest .. D weakest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    /// Fixed display order for tier lists
    pub const ORDER: [Tier; 5] = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D];

    /// Numeric rank for comparisons (S=5 .. D=1)
    pub fn rank(&self) -> u8 {
        match self {
            Self::S => 5,
            Self::A => 4,
            Self::B => 3,
            Self::C => 2,
            Self::D => 1,
        }
    }
}

/// Authored descriptor for one tier bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierInfo {
    pub label: String,
    pub description: String,
    pub color: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Hero meta entries
// ═══════════════════════════════════════════════════════════════════════════

/// Current-meta assessment of a single hero. A hero with no entry is
/// simply unranked this season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroMeta {
    pub hero_id: String,
    pub tier: Tier,
    /// Pick rate percentage (0.0 - 100.0)
    pub pick_rate: f64,
    /// Win rate percentage (0.0 - 100.0)
    pub win_rate: f64,
    /// Free-text rationale for the placement
    pub why_meta: String,
}

/// The full `meta.json` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaSnapshot {
    pub season: u32,
    pub season_name: String,
    /// Version string of the patch the snapshot was assessed on
    pub patch: String,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub meta_description: String,
    /// Authored descriptor per tier bucket
    pub tiers: HashMap<Tier, TierInfo>,
    /// At most one entry per hero; authoring order is preserved by views
    pub heroes: Vec<HeroMeta>,
    /// Heroes introduced this season (rendered with a NEW badge)
    #[serde(default)]
    pub new_heroes: Vec<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Patches
// ═══════════════════════════════════════════════════════════════════════════

/// Kind of balance change applied to a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Buff,
    Nerf,
    Rework,
}

impl ChangeType {
    pub const ALL: [ChangeType; 3] = [ChangeType::Buff, ChangeType::Nerf, ChangeType::Rework];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Buff => "Buff",
            Self::Nerf => "Nerf",
            Self::Rework => "Rework",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Buff => "↑",
            Self::Nerf => "↓",
            Self::Rework => "⟳",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Buff => "#27AE60",
            Self::Nerf => "#E74C3C",
            Self::Rework => "#9B59B6",
        }
    }
}

/// One balance change inside a patch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchChange {
    pub hero_id: String,
    #[serde(rename = "type")]
    pub kind: ChangeType,
    pub description: String,
}

/// A dated, versioned bundle of balance changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    pub patch_id: String,
    pub date: NaiveDate,
    pub version: String,
    pub title: String,
    pub changes: Vec<PatchChange>,
}
