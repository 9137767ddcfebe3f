//! Legacy and generational transition engine.
//!
//! Tracks the cross-generation history of the guild (cumulative totals,
//! legendary adventurers, heirlooms, chronicles), unlocks permanent bonuses
//! from a fixed catalog, and plans/executes generation transitions.
//!
//! `plan_generation_transition` is pure with respect to guild state: it
//! reads the current generation and produces a [`GenerationTransition`]
//! describing what survives. `execute_generation_transition` turns that plan
//! into a fresh state, a new starting roster, and an updated legacy; the
//! driver commits all three.

use guildhall_types::{
    Adventurer, AdventurerId, AdventurerRank, AdventurerStatus, BonusCategory, ChronicleEntry,
    EquipmentItem, EquipmentSet, FinalStats, GenerationTransition, GuildLegacy, GuildState,
    ItemId, ItemRarity, LegacyBonus, LegacyMultipliers, LegendaryRecord, MAX_HEIRLOOMS,
    NewGenerationPackage, PersonalityTraits, RetiredAdventurer, SurvivingElements, Territory,
    TransitionReason, UnlockCondition,
};
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::info;

use crate::config::EngineConfig;
use crate::retirement::jitter;
use crate::roster::Registry;

// ---------------------------------------------------------------------------
// Bonus catalog
// ---------------------------------------------------------------------------

/// The eight permanent bonuses a guild can earn, in unlock-check order.
#[must_use]
pub fn bonus_catalog() -> Vec<LegacyBonus> {
    vec![
        LegacyBonus {
            id: String::from("founding_wisdom"),
            name: String::from("Founding Wisdom"),
            description: String::from(
                "The wisdom of your guild's founders guides new generations.",
            ),
            category: BonusCategory::Experience,
            value: Decimal::new(11, 1),
            unlock: UnlockCondition {
                generation: Some(2),
                ..UnlockCondition::default()
            },
            persistent: true,
        },
        LegacyBonus {
            id: String::from("golden_legacy"),
            name: String::from("Golden Legacy"),
            description: String::from(
                "Your guild's reputation for success attracts better paying clients.",
            ),
            category: BonusCategory::Gold,
            value: Decimal::new(115, 2),
            unlock: UnlockCondition {
                total_gold_earned: Some(50_000),
                ..UnlockCondition::default()
            },
            persistent: true,
        },
        LegacyBonus {
            id: String::from("heroic_reputation"),
            name: String::from("Heroic Reputation"),
            description: String::from(
                "Stories of your guild's heroic deeds spread far and wide.",
            ),
            category: BonusCategory::Reputation,
            value: Decimal::new(12, 1),
            unlock: UnlockCondition {
                total_quests_completed: Some(200),
                ..UnlockCondition::default()
            },
            persistent: true,
        },
        LegacyBonus {
            id: String::from("master_trainers"),
            name: String::from("Master Trainers"),
            description: String::from(
                "Retired masters provide exceptional training for new recruits.",
            ),
            category: BonusCategory::Skill,
            value: Decimal::new(125, 2),
            unlock: UnlockCondition {
                retired_adventurers: Some(10),
                ..UnlockCondition::default()
            },
            persistent: true,
        },
        LegacyBonus {
            id: String::from("legendary_connections"),
            name: String::from("Legendary Connections"),
            description: String::from(
                "Access to exclusive quests through legendary connections.",
            ),
            category: BonusCategory::QuestAccess,
            value: Decimal::ONE,
            unlock: UnlockCondition {
                total_reputation_gained: Some(5_000),
                ..UnlockCondition::default()
            },
            persistent: true,
        },
        LegacyBonus {
            id: String::from("renowned_guild"),
            name: String::from("Renowned Guild"),
            description: String::from(
                "Your guild's fame attracts higher quality recruits.",
            ),
            category: BonusCategory::Recruitment,
            value: Decimal::new(13, 1),
            unlock: UnlockCondition {
                generation: Some(3),
                total_quests_completed: Some(300),
                ..UnlockCondition::default()
            },
            persistent: true,
        },
        LegacyBonus {
            id: String::from("ancient_knowledge"),
            name: String::from("Ancient Knowledge"),
            description: String::from(
                "Accumulated knowledge from multiple generations provides wisdom.",
            ),
            category: BonusCategory::Experience,
            value: Decimal::new(15, 1),
            unlock: UnlockCondition {
                generation: Some(5),
                legendary_items: Some(10),
                ..UnlockCondition::default()
            },
            persistent: true,
        },
        LegacyBonus {
            id: String::from("dynasty_power"),
            name: String::from("Dynasty Power"),
            description: String::from(
                "The power of a true guild dynasty affects all operations.",
            ),
            category: BonusCategory::Gold,
            value: Decimal::new(2, 0),
            unlock: UnlockCondition {
                generation: Some(10),
                total_gold_earned: Some(500_000),
                ..UnlockCondition::default()
            },
            persistent: true,
        },
    ]
}

/// Given names used for the lineage-break naming branch.
const DESCENDANT_GIVEN_NAMES: [&str; 8] = [
    "Alex", "Morgan", "Casey", "Riley", "Jordan", "Sage", "Phoenix", "River",
];

/// Ordinal lineage titles, indexed from the second generation.
const GENERATION_SUFFIXES: [&str; 9] = [
    "the Second",
    "the Third",
    "the Fourth",
    "the Fifth",
    "the Sixth",
    "the Seventh",
    "the Eighth",
    "the Ninth",
    "the Tenth",
];

/// English ordinal suffix for a generation number.
const fn ordinal_suffix(n: u32) -> &'static str {
    let v = n % 100;
    if matches!(v, 11..=13) {
        return "th";
    }
    match v % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Everything `execute_generation_transition` produces; the driver commits
/// all three pieces atomically.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    /// The fresh per-generation state.
    pub state: GuildState,
    /// The descendants who seed the new roster.
    pub roster: Vec<Adventurer>,
    /// The legacy with chronicle, counters, and new bonuses applied.
    pub legacy: GuildLegacy,
}

/// The legacy engine. Stateless; all context comes in as arguments.
#[derive(Debug, Default)]
pub struct LegacyEngine;

impl LegacyEngine {
    /// Whether a single unlock condition holds against the legacy record.
    #[must_use]
    pub fn unlock_met(condition: &UnlockCondition, legacy: &GuildLegacy) -> bool {
        if condition
            .generation
            .is_some_and(|min| legacy.total_generations < min)
        {
            return false;
        }
        if condition
            .total_quests_completed
            .is_some_and(|min| legacy.total_quests_completed < min)
        {
            return false;
        }
        if condition
            .total_gold_earned
            .is_some_and(|min| legacy.total_gold_earned < min)
        {
            return false;
        }
        if condition
            .total_reputation_gained
            .is_some_and(|min| legacy.total_reputation_gained < min)
        {
            return false;
        }
        if condition
            .legendary_items
            .is_some_and(|min| legacy.heirloom_count_at(ItemRarity::Legendary) < min)
        {
            return false;
        }
        if condition
            .retired_adventurers
            .is_some_and(|min| legacy.total_retired < min)
        {
            return false;
        }
        true
    }

    /// Catalog bonuses that qualify now but are not yet active.
    ///
    /// Pure: repeated calls against the same legacy return the same list.
    #[must_use]
    pub fn check_for_legacy_bonuses(legacy: &GuildLegacy) -> Vec<LegacyBonus> {
        bonus_catalog()
            .into_iter()
            .filter(|bonus| {
                !legacy.active_bonuses.iter().any(|active| active.id == bonus.id)
                    && Self::unlock_met(&bonus.unlock, legacy)
            })
            .collect()
    }

    /// Append every newly qualifying bonus to the active set.
    ///
    /// Idempotent and monotonic: each id activates at most once and active
    /// bonuses are never removed. Returns the bonuses added this call.
    pub fn unlock_new_bonuses(legacy: &mut GuildLegacy) -> Vec<LegacyBonus> {
        let new_bonuses = Self::check_for_legacy_bonuses(legacy);
        for bonus in &new_bonuses {
            info!(id = %bonus.id, name = %bonus.name, "legacy bonus unlocked");
        }
        legacy.active_bonuses.extend(new_bonuses.iter().cloned());
        new_bonuses
    }

    /// Fold the active bonuses into the five multiplier accumulators.
    ///
    /// Multiplication commutes, so the fold is order-independent.
    /// `QuestAccess` bonuses gate content rather than scale a number and do
    /// not contribute here.
    #[must_use]
    pub fn calculate_legacy_multipliers(legacy: &GuildLegacy) -> LegacyMultipliers {
        let mut multipliers = LegacyMultipliers::identity();
        for bonus in &legacy.active_bonuses {
            let slot = match bonus.category {
                BonusCategory::Experience => &mut multipliers.experience,
                BonusCategory::Gold => &mut multipliers.gold,
                BonusCategory::Reputation => &mut multipliers.reputation,
                BonusCategory::Skill => &mut multipliers.skill,
                BonusCategory::Recruitment => &mut multipliers.recruitment,
                BonusCategory::QuestAccess => continue,
            };
            *slot = slot.saturating_mul(bonus.value);
        }
        multipliers
    }

    /// Record an adventurer in guild history if they are truly exceptional
    /// (level >= 8 and at least 30 quests). Returns whether a record was
    /// added.
    pub fn record_legendary_adventurer(
        legacy: &mut GuildLegacy,
        adventurer: &Adventurer,
        achievements: Vec<String>,
        generation: u32,
    ) -> bool {
        if adventurer.level < 8 || adventurer.quests_completed < 30 {
            return false;
        }
        legacy.legendary_adventurers.push(LegendaryRecord {
            name: adventurer.name.clone(),
            class: adventurer.class,
            achievements,
            generation,
        });
        true
    }

    /// Forge an heirloom copy of an item: enhanced stats (x1.2, floored),
    /// rarity promoted one tier, and one of four lineage names.
    pub fn create_heirloom(
        item: &EquipmentItem,
        owner_name: &str,
        generation: u32,
        rng: &mut impl Rng,
    ) -> EquipmentItem {
        let name = match rng.random_range(0..4u8) {
            0 => format!("{owner_name}'s {}", item.name),
            1 => format!("Legacy {}", item.name),
            2 => format!("Ancestral {}", item.name),
            _ => format!(
                "{} of the {generation}{} Generation",
                item.name,
                ordinal_suffix(generation)
            ),
        };

        let stats: BTreeMap<String, u32> = item
            .stats
            .iter()
            .map(|(stat, value)| (stat.clone(), value.saturating_mul(12) / 10))
            .collect();

        EquipmentItem {
            id: ItemId::new(),
            name,
            slot: item.slot,
            rarity: item.rarity.upgraded(),
            stats,
            heirloom: true,
        }
    }

    /// Build the full transition plan without mutating anything.
    pub fn plan_generation_transition(
        state: &GuildState,
        registry: &Registry,
        legacy: &GuildLegacy,
        reason: TransitionReason,
        config: &EngineConfig,
        rng: &mut impl Rng,
    ) -> GenerationTransition {
        // Epic and legendary weapons and armor become heirlooms.
        let mut forged: Vec<EquipmentItem> = Vec::new();
        for adventurer in registry.iter() {
            for item in [&adventurer.equipment.weapon, &adventurer.equipment.armor]
                .into_iter()
                .flatten()
            {
                if item.rarity >= ItemRarity::Epic {
                    forged.push(Self::create_heirloom(
                        item,
                        &adventurer.name,
                        legacy.total_generations,
                        rng,
                    ));
                }
            }
        }

        // Existing heirlooms are retained first; the combined list is
        // truncated deterministically at the cap.
        let mut heirloom_items: Vec<EquipmentItem> = legacy.heirloom_items.clone();
        heirloom_items.extend(forged);
        heirloom_items.truncate(MAX_HEIRLOOMS);

        let surviving = SurvivingElements {
            heirloom_items,
            retired_as_npcs: state
                .retired
                .iter()
                .take(config.max_transition_npcs)
                .cloned()
                .collect(),
            legacy_knowledge: Self::legacy_knowledge(state, legacy, config),
            territory_influence: Self::inherited_territory_influence(&state.territories),
        };

        let mut starting_bonuses: BTreeMap<BonusCategory, Decimal> = BTreeMap::new();
        for bonus in &legacy.active_bonuses {
            if bonus.persistent {
                starting_bonuses.insert(bonus.category, bonus.value);
            }
        }

        let descendants = Self::generate_descendants(
            registry,
            &state.retired,
            legacy.total_generations.saturating_add(1),
            config,
            rng,
        );

        GenerationTransition {
            reason,
            description: reason.description().to_owned(),
            surviving,
            new_generation: NewGenerationPackage {
                starting_bonuses,
                inherited_reputation: state.reputation.saturating_mul(3) / 10,
                inherited_gold: state.gold.saturating_mul(2) / 10,
                descendants,
            },
        }
    }

    /// Up to fifteen knowledge strings from campaigns, world events, and
    /// legendary records.
    fn legacy_knowledge(
        state: &GuildState,
        legacy: &GuildLegacy,
        config: &EngineConfig,
    ) -> Vec<String> {
        let mut knowledge = Vec::new();
        for campaign in &state.campaigns {
            if campaign.completed {
                knowledge.push(format!(
                    "Campaign Mastery: {} - Provides insight into similar future challenges.",
                    campaign.name
                ));
            }
        }
        for event in &state.world_events {
            if event.active {
                knowledge.push(format!(
                    "Event Experience: {} - Understanding of how to handle similar crises.",
                    event.name
                ));
            }
        }
        for hero in &legacy.legendary_adventurers {
            knowledge.push(format!(
                "{}'s Wisdom - Specialized knowledge in {} tactics and {}.",
                hero.name,
                hero.class,
                hero.achievements.join(", ")
            ));
        }
        knowledge.truncate(config.max_legacy_knowledge);
        knowledge
    }

    /// Controlled territories above influence 50 pass on 40% of their
    /// influence, floored.
    fn inherited_territory_influence(territories: &[Territory]) -> BTreeMap<String, u32> {
        territories
            .iter()
            .filter(|t| t.controlled && t.influence_level > 50)
            .map(|t| (t.id.clone(), t.influence_level.saturating_mul(4) / 10))
            .collect()
    }

    /// Descendants of legendary ancestors: roster members at level >= 8
    /// with at least 25 quests, then every retiree, capped at three.
    fn generate_descendants(
        registry: &Registry,
        retired: &[RetiredAdventurer],
        new_generation: u32,
        config: &EngineConfig,
        rng: &mut impl Rng,
    ) -> Vec<Adventurer> {
        let mut ancestors: Vec<&Adventurer> = registry
            .iter()
            .filter(|adv| {
                adv.level >= config.legacy_descendant_level
                    && adv.quests_completed >= config.legacy_descendant_quests
            })
            .collect();
        ancestors.extend(retired.iter().map(|record| &record.adventurer));

        ancestors
            .into_iter()
            .take(config.max_transition_descendants)
            .enumerate()
            .map(|(index, ancestor)| Self::descendant_of(ancestor, index, new_generation, rng))
            .collect()
    }

    /// Build one descendant: 60% of stats, 30% of skills, inherited class,
    /// jittered personality, and the `Heir` rank.
    fn descendant_of(
        ancestor: &Adventurer,
        index: usize,
        new_generation: u32,
        rng: &mut impl Rng,
    ) -> Adventurer {
        let level = (ancestor.level.saturating_mul(4) / 10)
            .saturating_add(u32::try_from(index).unwrap_or(0))
            .max(1);

        Adventurer {
            id: AdventurerId::new(),
            name: Self::descendant_name(&ancestor.name, new_generation, rng),
            class: ancestor.class,
            rank: AdventurerRank::Heir,
            level,
            experience: 0,
            status: AdventurerStatus::Available,
            stats: ancestor.stats.scaled(60),
            personality: Self::inherit_personality(&ancestor.personality, rng),
            skills: ancestor.skills.scaled(30),
            equipment: EquipmentSet::default(),
            relationships: Vec::new(),
            quests_completed: 0,
            years_in_guild: 0,
            retirement_eligible: false,
            ancestor: Some(ancestor.id),
        }
    }

    /// 60% direct lineage (ordinal title), 40% a fresh given name with the
    /// family surname (or a patronymic when the ancestor has none).
    fn descendant_name(ancestor_name: &str, generation: u32, rng: &mut impl Rng) -> String {
        let mut parts = ancestor_name.split(' ');
        let first = parts.next().unwrap_or(ancestor_name);
        let rest: Vec<&str> = parts.collect();

        if rng.random_bool(0.6) {
            let index = usize::try_from(generation.saturating_sub(2)).unwrap_or(0);
            let suffix = GENERATION_SUFFIXES
                .get(index.min(GENERATION_SUFFIXES.len().saturating_sub(1)))
                .copied()
                .unwrap_or("the Second");
            format!("{first} {suffix}")
        } else {
            let fresh = DESCENDANT_GIVEN_NAMES
                .get(rng.random_range(0..DESCENDANT_GIVEN_NAMES.len()))
                .copied()
                .unwrap_or("Morgan");
            if rest.is_empty() {
                format!("{fresh} {first}son")
            } else {
                format!("{fresh} {}", rest.join(" "))
            }
        }
    }

    /// Transition-descendant jitter: tighter spreads than recruit lineage.
    fn inherit_personality(
        ancestor: &PersonalityTraits,
        rng: &mut impl Rng,
    ) -> PersonalityTraits {
        PersonalityTraits {
            courage: jitter(ancestor.courage, 20, rng),
            loyalty: jitter(ancestor.loyalty, 15, rng),
            ambition: jitter(ancestor.ambition, 30, rng),
            teamwork: jitter(ancestor.teamwork, 20, rng),
            greed: jitter(ancestor.greed, 25, rng),
        }
    }

    /// Execute a planned transition: chronicle the closing generation,
    /// advance cumulative counters, unlock newly qualifying bonuses, and
    /// build the fresh state and starting roster.
    #[must_use]
    pub fn execute_generation_transition(
        state: &GuildState,
        registry: &Registry,
        legacy: &GuildLegacy,
        transition: &GenerationTransition,
        config: &EngineConfig,
    ) -> TransitionOutcome {
        let chronicle = ChronicleEntry {
            generation: legacy.total_generations,
            major_events: Self::major_events(state, registry, config),
            notable_achievements: Self::notable_achievements(state, registry),
            final_stats: FinalStats {
                level: state.level,
                reputation: state.reputation,
                gold: state.gold,
                adventurers: u32::try_from(registry.len()).unwrap_or(u32::MAX),
            },
        };

        let mut updated_legacy = legacy.clone();
        updated_legacy.total_generations = legacy.total_generations.saturating_add(1);
        updated_legacy.total_quests_completed = legacy
            .total_quests_completed
            .saturating_add(u64::try_from(state.completed_quests.len()).unwrap_or(u64::MAX));
        updated_legacy.total_gold_earned = legacy.total_gold_earned.saturating_add(state.gold);
        updated_legacy.total_reputation_gained =
            legacy.total_reputation_gained.saturating_add(state.reputation);
        updated_legacy.heirloom_items = transition.surviving.heirloom_items.clone();
        updated_legacy.chronicles.push(chronicle);

        // Totals first, then the unlock check, so transition milestones
        // count toward bonuses immediately.
        Self::unlock_new_bonuses(&mut updated_legacy);

        let mut new_state = GuildState::founding();
        new_state.gold = transition.new_generation.inherited_gold;
        new_state.reputation = transition.new_generation.inherited_reputation;
        new_state.generation = updated_legacy.total_generations;
        new_state.legacy_multipliers = Self::calculate_legacy_multipliers(&updated_legacy);

        info!(
            generation = new_state.generation,
            inherited_gold = new_state.gold,
            inherited_reputation = new_state.reputation,
            descendants = transition.new_generation.descendants.len(),
            "generation transition executed"
        );

        TransitionOutcome {
            state: new_state,
            roster: transition.new_generation.descendants.clone(),
            legacy: updated_legacy,
        }
    }

    /// Up to ten major events: completed campaigns, legendary roster
    /// members, and controlled territories.
    fn major_events(state: &GuildState, registry: &Registry, config: &EngineConfig) -> Vec<String> {
        let mut events = Vec::new();
        for campaign in &state.campaigns {
            if campaign.completed {
                events.push(format!("Completed the legendary {} campaign", campaign.name));
            }
        }
        for adventurer in registry.iter() {
            if adventurer.level >= 8 {
                events.push(format!(
                    "{} reached legendary status as a {}",
                    adventurer.name, adventurer.class
                ));
            }
        }
        for territory in &state.territories {
            if territory.controlled {
                events.push(format!("Established control over {}", territory.name));
            }
        }
        events.truncate(config.max_chronicle_events);
        events
    }

    /// Fixed achievement badges for the chronicle.
    fn notable_achievements(state: &GuildState, registry: &Registry) -> Vec<String> {
        let mut achievements = Vec::new();
        if state.gold > 10_000 {
            achievements.push(String::from("Accumulated vast wealth"));
        }
        if state.reputation > 500 {
            achievements.push(String::from("Achieved legendary reputation"));
        }
        if state.level > 8 {
            achievements.push(String::from("Reached master guild status"));
        }
        if state.completed_quests.len() > 100 {
            achievements.push(String::from("Completed over 100 quests"));
        }
        if registry.len() > 15 {
            achievements.push(String::from("Built a large adventuring force"));
        }
        achievements
    }
}
