//! Static display-descriptor mappings.
//!
//! Everything here is a total function over its input domain: known
//! keys get their authored descriptor, unknown subrole keys fall back
//! to the raw stored string so a stale record still renders.

use phf::phf_map;

// ═══════════════════════════════════════════════════════════════════════════
// Effectiveness scale
// ═══════════════════════════════════════════════════════════════════════════

/// Descriptor for one step of the 1-5 effectiveness scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectivenessLevel {
    pub value: u8,
    pub label: &'static str,
    pub color: &'static str,
}

/// Scale descriptors, strongest first
pub const EFFECTIVENESS_LEVELS: [EffectivenessLevel; 5] = [
    EffectivenessLevel { value: 5, label: "Hard counter", color: "#ff4444" },
    EffectivenessLevel { value: 4, label: "Strong counter", color: "#ff8844" },
    EffectivenessLevel { value: 3, label: "Moderate counter", color: "#ffcc44" },
    EffectivenessLevel { value: 2, label: "Weak counter", color: "#88cc44" },
    EffectivenessLevel { value: 1, label: "Marginal counter", color: "#44aa44" },
];

impl EffectivenessLevel {
    /// Descriptor for a score; out-of-range input is clamped into [1, 5]
    pub fn for_value(value: u8) -> &'static EffectivenessLevel {
        let value = value.clamp(1, 5);
        // Array is ordered 5..1, so index from the end
        &EFFECTIVENESS_LEVELS[(5 - value) as usize]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Subroles
// ═══════════════════════════════════════════════════════════════════════════

/// Display descriptor for a known subrole key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubroleInfo {
    pub label: &'static str,
    pub color: &'static str,
}

/// Known subrole keys. Subroles are a late, partial schema addition;
/// hero records may carry keys outside this map.
static SUBROLE_INFO: phf::Map<&'static str, SubroleInfo> = phf_map! {
    "main_tank" => SubroleInfo { label: "Main Tank", color: "#D9A520" },
    "off_tank" => SubroleInfo { label: "Off Tank", color: "#B8860B" },
    "hitscan" => SubroleInfo { label: "Hitscan", color: "#C0392B" },
    "projectile" => SubroleInfo { label: "Projectile", color: "#D35400" },
    "flanker" => SubroleInfo { label: "Flanker", color: "#8E44AD" },
};

/// Descriptor for a subrole key, if the key is known
pub fn subrole_info(key: &str) -> Option<&'static SubroleInfo> {
    SUBROLE_INFO.get(key)
}

/// Display label for a subrole key; unknown keys render verbatim
pub fn subrole_label(key: &str) -> &str {
    subrole_info(key).map(|info| info.label).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effectiveness_lookup_matches_value() {
        for level in &EFFECTIVENESS_LEVELS {
            assert_eq!(EffectivenessLevel::for_value(level.value).value, level.value);
        }
    }

    #[test]
    fn effectiveness_lookup_clamps() {
        assert_eq!(EffectivenessLevel::for_value(0).value, 1);
        assert_eq!(EffectivenessLevel::for_value(200).value, 5);
    }

    #[test]
    fn known_subrole_gets_label() {
        assert_eq!(subrole_label("main_tank"), "Main Tank");
        assert_eq!(subrole_label("flanker"), "Flanker");
    }

    #[test]
    fn unknown_subrole_falls_back_to_raw_key() {
        assert_eq!(subrole_label("sniper"), "sniper");
        assert!(subrole_info("sniper").is_none());
    }
}
