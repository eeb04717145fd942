//! Hero roster schema: roles, heroes, counter and synergy records.
//!
//! Field names on the wire are camelCase to match the authored JSON
//! tables. Effectiveness scores are clamped into [1, 5] during
//! deserialization so downstream code never branches on out-of-range
//! values.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Roles
// ═══════════════════════════════════════════════════════════════════════════

/// Primary role of a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Tank,
    Damage,
    Support,
}

impl Role {
    /// Fixed display order used by every grouped view
    pub const ALL: [Role; 3] = [Role::Tank, Role::Damage, Role::Support];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tank => "Tank",
            Self::Damage => "Damage",
            Self::Support => "Support",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Tank => "🛡️",
            Self::Damage => "⚔️",
            Self::Support => "💚",
        }
    }

    /// Accent color used for role badges and avatar frames
    pub fn color(&self) -> &'static str {
        match self {
            Self::Tank => "#F0B429",
            Self::Damage => "#E74C3C",
            Self::Support => "#27AE60",
        }
    }

    /// Subrole keys that are valid for this role. Subroles only exist
    /// for Tank and Damage heroes.
    pub fn valid_subroles(&self) -> &'static [&'static str] {
        match self {
            Self::Tank => &["main_tank", "off_tank"],
            Self::Damage => &["hitscan", "projectile", "flanker"],
            Self::Support => &[],
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Heroes
// ═══════════════════════════════════════════════════════════════════════════

/// A playable hero record from `heroes.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// Unique identifier, also used as the URL slug
    pub id: String,
    /// Canonical (English) name
    pub name: String,
    /// Localized display name
    pub local_name: String,
    pub role: Role,
    /// Stored as a raw key rather than an enum: subroles were added to
    /// the schema late and older records carry free-form values. Display
    /// mapping lives in [`crate::display::subrole_info`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subrole: Option<String>,
    /// Opaque portrait asset path
    pub portrait: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Counters
// ═══════════════════════════════════════════════════════════════════════════

/// Tier label for a single counter relationship (S strongest).
///
/// Authored independently of the numeric effectiveness score; the two
/// usually agree but are not derived from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterTier {
    S,
    A,
    B,
    C,
}

impl CounterTier {
    /// Numeric rank for sorting (S=4 .. C=1)
    pub fn rank(&self) -> u8 {
        match self {
            Self::S => 4,
            Self::A => 3,
            Self::B => 2,
            Self::C => 1,
        }
    }
}

/// One "hero B is effective against hero A" entry.
///
/// Lives inside a [`HeroCounters`] group; `hero_id` is the countering
/// hero. `tier` and `role` are late schema additions and absent on
/// older records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterInfo {
    /// The countering hero
    pub hero_id: String,
    /// Counter strength, 1 (marginal) to 5 (hard counter)
    #[serde(deserialize_with = "clamp_effectiveness")]
    pub effectiveness: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<CounterTier>,
    /// The countering hero's own role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Free-text justification shown alongside the entry
    pub reason: String,
}

/// All counters against one hero, keyed by the countered hero's id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCounters {
    /// The countered hero
    pub hero_id: String,
    pub counters: Vec<CounterInfo>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Synergies
// ═══════════════════════════════════════════════════════════════════════════

/// A directional "combos well with" record, stored only on the owner's
/// list (no automatic inverse entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synergy {
    pub partner_id: String,
    /// Display name of the combo
    pub name: String,
    #[serde(deserialize_with = "clamp_effectiveness")]
    pub effectiveness: u8,
    pub reason: String,
    /// Attribution for where the combo was sourced from
    pub source: String,
}

/// `synergies.json`: owner hero id -> synergy list
pub type HeroSynergies = HashMap<String, Vec<Synergy>>;

fn clamp_effectiveness<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = u8::deserialize(deserializer)?;
    Ok(raw.clamp(1, 5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_wire_format_is_camel_case() {
        let json = r#"{
            "id": "domina",
            "name": "Domina",
            "localName": "Домина",
            "role": "Tank",
            "subrole": "main_tank",
            "portrait": "/heroes/domina.webp"
        }"#;

        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.id, "domina");
        assert_eq!(hero.local_name, "Домина");
        assert_eq!(hero.role, Role::Tank);
        assert_eq!(hero.subrole.as_deref(), Some("main_tank"));
    }

    #[test]
    fn subrole_is_optional() {
        let json = r#"{
            "id": "ursa",
            "name": "Ursa",
            "localName": "Урса",
            "role": "Tank",
            "portrait": "/heroes/ursa.webp"
        }"#;

        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.subrole, None);
    }

    #[test]
    fn effectiveness_is_clamped() {
        let low: CounterInfo =
            serde_json::from_str(r#"{"heroId": "x", "effectiveness": 0, "reason": ""}"#).unwrap();
        let high: CounterInfo =
            serde_json::from_str(r#"{"heroId": "x", "effectiveness": 9, "reason": ""}"#).unwrap();

        assert_eq!(low.effectiveness, 1);
        assert_eq!(high.effectiveness, 5);
    }

    #[test]
    fn legacy_counter_without_tier_or_role() {
        let json = r#"{"heroId": "anran", "effectiveness": 4, "reason": "outranges"}"#;
        let counter: CounterInfo = serde_json::from_str(json).unwrap();

        assert_eq!(counter.tier, None);
        assert_eq!(counter.role, None);
        assert_eq!(counter.effectiveness, 4);
    }

    #[test]
    fn subroles_are_tank_and_damage_only() {
        assert!(Role::Tank.valid_subroles().contains(&"main_tank"));
        assert!(Role::Damage.valid_subroles().contains(&"flanker"));
        assert!(Role::Support.valid_subroles().is_empty());
    }

    #[test]
    fn counter_tier_ranks_descend_from_s() {
        assert!(CounterTier::S.rank() > CounterTier::A.rank());
        assert!(CounterTier::A.rank() > CounterTier::B.rank());
        assert!(CounterTier::B.rank() > CounterTier::C.rank());
    }
}
