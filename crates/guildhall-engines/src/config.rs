//! Configuration constants and defaults for the guild engines.
//!
//! Every tunable the engines consult lives in [`EngineConfig`] so that
//! callers (the simulation driver, tests) can override defaults without
//! touching engine code. Probabilities are expressed as `Decimal` fractions
//! in [0, 1]; whole-number rates and thresholds are `u32`.

use rust_decimal::Decimal;

/// Configuration for the guild engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum active roster size (default: 10).
    pub max_roster_size: usize,

    /// Ticks between relationship engine passes (default: 1).
    pub relationship_interval_ticks: u64,

    /// Probability per pass that a new relationship event fires between a
    /// random available pair (default: 0.30).
    pub relationship_event_chance: Decimal,

    /// Probability per pass that one existing bond evolves (default: 0.15).
    pub relationship_evolution_chance: Decimal,

    /// Years of service after which retirement eligibility begins
    /// (default: 8).
    pub retirement_service_years: u32,

    /// Years of service after which `Age` becomes the retirement reason
    /// (default: 10).
    pub retirement_age_years: u32,

    /// Level threshold of the achievement-based eligibility path
    /// (default: 10).
    pub retirement_achievement_level: u32,

    /// Quest threshold of the achievement-based eligibility path
    /// (default: 50).
    pub retirement_achievement_quests: u32,

    /// Level threshold of the veteran eligibility path (default: 6).
    pub retirement_veteran_level: u32,

    /// Quest threshold of the veteran eligibility path (default: 25).
    pub retirement_veteran_quests: u32,

    /// Greed at or above which `Wealth` becomes the retirement reason
    /// (default: 80).
    pub retirement_greed_threshold: u32,

    /// Romance strength at or above which `Relationship` becomes the
    /// retirement reason (default: 90).
    pub retirement_romance_threshold: u32,

    /// Level threshold for legacy descendant generation (default: 8).
    pub legacy_descendant_level: u32,

    /// Quest threshold for legacy descendant generation (default: 25).
    pub legacy_descendant_quests: u32,

    /// Maximum descendants seeded into a new generation (default: 3).
    pub max_transition_descendants: usize,

    /// Maximum retired adventurers carried into a new generation as NPCs
    /// (default: 10).
    pub max_transition_npcs: usize,

    /// Maximum legacy-knowledge entries carried forward (default: 15).
    pub max_legacy_knowledge: usize,

    /// Maximum major events recorded per chronicle entry (default: 10).
    pub max_chronicle_events: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_roster_size: 10,
            relationship_interval_ticks: 1,
            relationship_event_chance: Decimal::new(30, 2),
            relationship_evolution_chance: Decimal::new(15, 2),
            retirement_service_years: 8,
            retirement_age_years: 10,
            retirement_achievement_level: 10,
            retirement_achievement_quests: 50,
            retirement_veteran_level: 6,
            retirement_veteran_quests: 25,
            retirement_greed_threshold: 80,
            retirement_romance_threshold: 90,
            legacy_descendant_level: 8,
            legacy_descendant_quests: 25,
            max_transition_descendants: 3,
            max_transition_npcs: 10,
            max_legacy_knowledge: 15,
            max_chronicle_events: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.max_roster_size, 10);
        assert_eq!(cfg.relationship_interval_ticks, 1);
        assert_eq!(cfg.relationship_event_chance, Decimal::new(30, 2));
        assert_eq!(cfg.relationship_evolution_chance, Decimal::new(15, 2));
        assert_eq!(cfg.retirement_service_years, 8);
        assert_eq!(cfg.retirement_age_years, 10);
        assert_eq!(cfg.retirement_greed_threshold, 80);
        assert_eq!(cfg.retirement_romance_threshold, 90);
        assert_eq!(cfg.max_transition_descendants, 3);
    }
}
