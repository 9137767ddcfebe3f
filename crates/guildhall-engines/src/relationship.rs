//! Social bond engine.
//!
//! Runs one pass per configured interval (default daily): a chance of one
//! new event between a random available pair, then an independent evolution
//! roll for every existing bond of every available adventurer. The engine
//! never mutates the roster itself; it returns [`RelationshipEvent`] values
//! that the driver commits through [`RelationshipEngine::apply_event`].

use guildhall_types::{
    Adventurer, AdventurerId, EventId, GuildState, PersonalityTraits, Relationship,
    RelationshipChange, RelationshipEvent, RelationshipEventKind, RelationshipKind,
};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::config::EngineConfig;
use crate::roster::Registry;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Friendship strength gained by both sides of a bonding event.
const DELTA_BONDING: i32 = 15;
/// Romance strength gained by both sides of a new romance.
const DELTA_ROMANCE: i32 = 25;
/// Rivalry strength gained by both sides of a new rivalry.
const DELTA_RIVALRY_START: i32 = 20;
/// Rivalry strength change for both sides of a fresh conflict.
const DELTA_CONFLICT: i32 = -10;
/// Friendship strength gained when a bond deepens.
const DELTA_FRIENDSHIP_DEEPENS: i32 = 25;
/// Romance strength gained when a friendship evolves.
const DELTA_EVOLVE_ROMANCE: i32 = 20;
/// Rivalry strength gained when a rivalry boils over.
const DELTA_EVOLVE_CONFLICT: i32 = 10;
/// Rivalry strength gained during a guild crisis.
const DELTA_CRISIS: i32 = 15;

/// Morale lost to a fresh conflict.
const MORALE_CONFLICT: i32 = -5;
/// Morale lost when a rivalry boils over.
const MORALE_EVOLVE_CONFLICT: i32 = -10;
/// Morale lost to a guild-wide relationship crisis.
const MORALE_CRISIS: i32 = -20;

/// New pairs with an existing bond stronger than this are skipped.
const STRONG_BOND_SKIP: u32 = 70;
/// Rivalries stronger than this qualify for a crisis.
const CRISIS_RIVALRY_THRESHOLD: u32 = 70;

/// Per-pair synergy weight of a friendship at full strength (+20%).
fn synergy_friendship_weight() -> Decimal {
    Decimal::new(2, 1)
}

/// Per-pair synergy weight of a romance at full strength (+30%).
fn synergy_romance_weight() -> Decimal {
    Decimal::new(3, 1)
}

/// Per-pair synergy penalty of a rivalry at full strength (-10%).
fn synergy_rivalry_weight() -> Decimal {
    Decimal::new(1, 1)
}

/// Lower clamp of the squad synergy multiplier.
fn synergy_floor() -> Decimal {
    Decimal::new(5, 1)
}

/// Upper clamp of the squad synergy multiplier.
fn synergy_ceiling() -> Decimal {
    Decimal::new(15, 1)
}

/// Roll a probability expressed as a `Decimal` fraction in [0, 1].
fn roll(rng: &mut impl Rng, chance: Decimal) -> bool {
    rng.random_bool(chance.to_f64().unwrap_or(0.0).clamp(0.0, 1.0))
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The relationship engine. Holds only its own gating state.
#[derive(Debug, Default)]
pub struct RelationshipEngine {
    last_update_tick: Option<u64>,
}

impl RelationshipEngine {
    /// Create an engine that will run on its first `update` call.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_update_tick: None,
        }
    }

    /// Run one relationship pass if the configured interval has elapsed.
    ///
    /// Returns the events generated this pass (possibly empty). The roster
    /// is read, never written; commit events with [`Self::apply_event`].
    pub fn update(
        &mut self,
        tick: u64,
        registry: &Registry,
        config: &EngineConfig,
        rng: &mut impl Rng,
    ) -> Vec<RelationshipEvent> {
        if let Some(last) = self.last_update_tick {
            if tick.saturating_sub(last) < config.relationship_interval_ticks {
                return Vec::new();
            }
        }
        self.last_update_tick = Some(tick);

        let mut events = Vec::new();
        let available: Vec<&Adventurer> = registry
            .iter()
            .filter(|adv| adv.status == guildhall_types::AdventurerStatus::Available)
            .collect();

        if available.len() >= 2 && roll(rng, config.relationship_event_chance) {
            if let Some(event) = Self::generate_pair_event(&available, rng) {
                events.push(event);
            }
        }

        for adventurer in &available {
            for bond in &adventurer.relationships {
                if roll(rng, config.relationship_evolution_chance) {
                    if let Some(event) = Self::evolve(adventurer, bond, registry, rng) {
                        events.push(event);
                    }
                }
            }
        }

        if !events.is_empty() {
            debug!(tick, count = events.len(), "relationship events generated");
        }
        events
    }

    /// Pick a random distinct pair and generate an event for it.
    ///
    /// Pairs that already share a bond stronger than 70 are left alone.
    fn generate_pair_event(
        available: &[&Adventurer],
        rng: &mut impl Rng,
    ) -> Option<RelationshipEvent> {
        if available.len() < 2 {
            return None;
        }
        let first_idx = rng.random_range(0..available.len());
        let offset = rng.random_range(1..available.len());
        let second_idx = (first_idx.checked_add(offset)?) % available.len();
        let first = available.get(first_idx)?;
        let second = available.get(second_idx)?;

        if let Some(existing) = first.relationship_with(second.id) {
            if existing.strength > STRONG_BOND_SKIP {
                return None;
            }
        }

        let kind = Self::pick_event_kind(&first.personality, &second.personality, rng);
        Some(Self::build_pair_event(first, second, kind))
    }

    /// Personality-driven event selection; the first matching row wins.
    fn pick_event_kind(
        first: &PersonalityTraits,
        second: &PersonalityTraits,
        rng: &mut impl Rng,
    ) -> RelationshipEventKind {
        // High teamwork pairs tend to bond.
        if first.teamwork > 70 && second.teamwork > 70 {
            return if rng.random_bool(0.7) {
                RelationshipEventKind::Bonding
            } else {
                RelationshipEventKind::FriendshipDeepens
            };
        }
        // Ambitious pairs compete or clash.
        if first.ambition > 75 && second.ambition > 75 {
            return if rng.random_bool(0.6) {
                RelationshipEventKind::RivalryStart
            } else {
                RelationshipEventKind::Conflict
            };
        }
        // Loyal and courageous pairs can fall for each other.
        if first.loyalty > 60 && second.loyalty > 60 && first.courage > 50 && second.courage > 50 {
            return if rng.random_bool(0.3) {
                RelationshipEventKind::Romance
            } else {
                RelationshipEventKind::Bonding
            };
        }
        if rng.random_bool(0.7) {
            RelationshipEventKind::Bonding
        } else {
            RelationshipEventKind::Conflict
        }
    }

    /// Build the symmetric event payload for a fresh pair.
    fn build_pair_event(
        first: &Adventurer,
        second: &Adventurer,
        kind: RelationshipEventKind,
    ) -> RelationshipEvent {
        let (bond_kind, delta, morale, description) = match kind {
            RelationshipEventKind::Bonding => (
                RelationshipKind::Friendship,
                DELTA_BONDING,
                0,
                format!(
                    "{} and {} shared stories over a campfire, growing closer as friends.",
                    first.name, second.name
                ),
            ),
            RelationshipEventKind::FriendshipDeepens => (
                RelationshipKind::Friendship,
                DELTA_FRIENDSHIP_DEEPENS,
                0,
                format!(
                    "{} and {}'s camaraderie has deepened into true friendship.",
                    first.name, second.name
                ),
            ),
            RelationshipEventKind::Romance => (
                RelationshipKind::Romance,
                DELTA_ROMANCE,
                0,
                format!(
                    "{} and {} have developed romantic feelings for each other.",
                    first.name, second.name
                ),
            ),
            RelationshipEventKind::RivalryStart => (
                RelationshipKind::Rivalry,
                DELTA_RIVALRY_START,
                0,
                format!(
                    "{} and {} have developed a competitive rivalry, constantly trying to outdo each other.",
                    first.name, second.name
                ),
            ),
            RelationshipEventKind::Conflict => (
                RelationshipKind::Rivalry,
                DELTA_CONFLICT,
                MORALE_CONFLICT,
                format!(
                    "{} and {} had a heated argument about quest tactics, straining their relationship.",
                    first.name, second.name
                ),
            ),
        };

        RelationshipEvent {
            id: EventId::new(),
            participants: vec![first.id, second.id],
            kind,
            description,
            changes: vec![
                RelationshipChange {
                    adventurer: first.id,
                    target: second.id,
                    kind: bond_kind,
                    strength_delta: delta,
                },
                RelationshipChange {
                    adventurer: second.id,
                    target: first.id,
                    kind: bond_kind,
                    strength_delta: delta,
                },
            ],
            morale_change: morale,
        }
    }

    /// Roll the evolution table for one existing bond.
    fn evolve(
        owner: &Adventurer,
        bond: &Relationship,
        registry: &Registry,
        rng: &mut impl Rng,
    ) -> Option<RelationshipEvent> {
        let target = registry.get(bond.target).ok()?;

        if bond.kind == RelationshipKind::Friendship
            && bond.strength > 60
            && rng.random_bool(0.2)
        {
            return Some(RelationshipEvent {
                id: EventId::new(),
                participants: vec![owner.id, target.id],
                kind: RelationshipEventKind::Romance,
                description: format!(
                    "{} and {}'s friendship has blossomed into something deeper.",
                    owner.name, target.name
                ),
                changes: vec![RelationshipChange {
                    adventurer: owner.id,
                    target: target.id,
                    kind: RelationshipKind::Romance,
                    strength_delta: DELTA_EVOLVE_ROMANCE,
                }],
                morale_change: 0,
            });
        }

        if bond.kind == RelationshipKind::Rivalry {
            if bond.strength > 80 && rng.random_bool(0.3) {
                return Some(RelationshipEvent {
                    id: EventId::new(),
                    participants: vec![owner.id, target.id],
                    kind: RelationshipEventKind::Conflict,
                    description: format!(
                        "The rivalry between {} and {} has reached a breaking point, causing tension in the guild.",
                        owner.name, target.name
                    ),
                    changes: vec![RelationshipChange {
                        adventurer: owner.id,
                        target: target.id,
                        kind: RelationshipKind::Rivalry,
                        strength_delta: DELTA_EVOLVE_CONFLICT,
                    }],
                    morale_change: MORALE_EVOLVE_CONFLICT,
                });
            }
            if bond.strength < 30 && rng.random_bool(0.4) {
                return Some(RelationshipEvent {
                    id: EventId::new(),
                    participants: vec![owner.id, target.id],
                    kind: RelationshipEventKind::FriendshipDeepens,
                    description: format!(
                        "{} and {} have resolved their differences and are becoming friends.",
                        owner.name, target.name
                    ),
                    changes: vec![RelationshipChange {
                        adventurer: owner.id,
                        target: target.id,
                        kind: RelationshipKind::Friendship,
                        strength_delta: DELTA_FRIENDSHIP_DEEPENS,
                    }],
                    morale_change: 0,
                });
            }
        }

        None
    }

    /// Commit an event: create or update every referenced bond and apply
    /// the morale delta to guild state.
    ///
    /// Missing adventurers are skipped; an event is never an error.
    pub fn apply_event(registry: &mut Registry, state: &mut GuildState, event: &RelationshipEvent) {
        for change in &event.changes {
            let Ok(adventurer) = registry.get_mut(change.adventurer) else {
                continue;
            };
            let bond = match adventurer.relationship_with_mut(change.target) {
                Some(existing) => existing,
                None => {
                    adventurer
                        .relationships
                        .push(Relationship::new(change.target, change.kind));
                    match adventurer.relationships.last_mut() {
                        Some(created) => created,
                        None => continue,
                    }
                }
            };
            bond.kind = change.kind;
            bond.apply_delta(change.strength_delta);
            bond.record(event.description.clone());
        }
        state.apply_morale(event.morale_change);
    }

    /// Squad synergy multiplier over all unordered pairs of a squad.
    ///
    /// Solo squads (or squads whose members are all missing) sit at 1.0.
    /// Per pair: friendship contributes `+0.2 * strength/100`, romance
    /// `+0.3`, rivalry `-0.1`; pairs without a bond contribute zero but
    /// still count toward the average. Clamped to [0.5, 1.5].
    // Weights are <= 0.3 and strengths <= 100, so no product can overflow.
    #[allow(clippy::arithmetic_side_effects)]
    #[must_use]
    pub fn team_synergy(squad: &[AdventurerId], registry: &Registry) -> Decimal {
        if squad.len() < 2 {
            return Decimal::ONE;
        }

        let mut total = Decimal::ZERO;
        let mut pair_count: u32 = 0;

        for (i, first_id) in squad.iter().enumerate() {
            for second_id in squad.iter().skip(i.saturating_add(1)) {
                let (Ok(first), Ok(_)) = (registry.get(*first_id), registry.get(*second_id))
                else {
                    continue;
                };
                if let Some(bond) = first.relationship_with(*second_id) {
                    let fraction = Decimal::from(bond.strength) / Decimal::ONE_HUNDRED;
                    match bond.kind {
                        RelationshipKind::Friendship => {
                            total += fraction * synergy_friendship_weight();
                        }
                        RelationshipKind::Romance => {
                            total += fraction * synergy_romance_weight();
                        }
                        RelationshipKind::Rivalry => {
                            total -= fraction * synergy_rivalry_weight();
                        }
                    }
                }
                pair_count = pair_count.saturating_add(1);
            }
        }

        if pair_count == 0 {
            return Decimal::ONE;
        }
        let average = total / Decimal::from(pair_count);
        (Decimal::ONE + average).clamp(synergy_floor(), synergy_ceiling())
    }

    /// Human-readable one-liners for every bond an adventurer holds.
    #[must_use]
    pub fn relationship_summary(adventurer: &Adventurer, registry: &Registry) -> Vec<String> {
        let mut summaries = Vec::new();
        for bond in &adventurer.relationships {
            let Ok(target) = registry.get(bond.target) else {
                continue;
            };
            let closeness = match bond.strength {
                80.. => "very close",
                60..=79 => "close",
                40..=59 => "good",
                20..=39 => "casual",
                _ => "budding",
            };
            let descriptor = match bond.kind {
                RelationshipKind::Friendship => "friendship",
                RelationshipKind::Romance => "romantic partnership",
                RelationshipKind::Rivalry => "rivalry",
            };
            summaries.push(format!(
                "{} has a {closeness} {descriptor} with {}.",
                adventurer.name, target.name
            ));
        }
        summaries
    }

    /// Escalate one random rivalry above strength 70 into a guild crisis.
    ///
    /// Returns `None` when no rivalry qualifies.
    pub fn trigger_crisis(registry: &Registry, rng: &mut impl Rng) -> Option<RelationshipEvent> {
        let mut pairs: Vec<(AdventurerId, AdventurerId, String, String)> = Vec::new();
        for adventurer in registry.iter() {
            for bond in &adventurer.relationships {
                if bond.kind == RelationshipKind::Rivalry
                    && bond.strength > CRISIS_RIVALRY_THRESHOLD
                {
                    if let Ok(target) = registry.get(bond.target) {
                        pairs.push((
                            adventurer.id,
                            target.id,
                            adventurer.name.clone(),
                            target.name.clone(),
                        ));
                    }
                }
            }
        }

        let (first, second, first_name, second_name) =
            pairs.get(rng.random_range(0..pairs.len().max(1))).cloned()?;

        Some(RelationshipEvent {
            id: EventId::new(),
            participants: vec![first, second],
            kind: RelationshipEventKind::Conflict,
            description: format!(
                "The intense rivalry between {first_name} and {second_name} is causing major disruption in the guild. Some adventurers are taking sides!"
            ),
            changes: vec![RelationshipChange {
                adventurer: first,
                target: second,
                kind: RelationshipKind::Rivalry,
                strength_delta: DELTA_CRISIS,
            }],
            morale_change: MORALE_CRISIS,
        })
    }
}

#[cfg(test)]
mod tests {
    use guildhall_types::{
        AdventurerRank, AdventurerStatus, BaseStats, ClassArchetype, EquipmentSet, SkillTree,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn adventurer(name: &str, personality: PersonalityTraits) -> Adventurer {
        Adventurer {
            id: AdventurerId::new(),
            name: name.to_owned(),
            class: ClassArchetype::Warrior,
            rank: AdventurerRank::Novice,
            level: 1,
            experience: 0,
            status: AdventurerStatus::Available,
            stats: BaseStats::default(),
            personality,
            skills: SkillTree::default(),
            equipment: EquipmentSet::default(),
            relationships: Vec::new(),
            quests_completed: 0,
            years_in_guild: 0,
            retirement_eligible: false,
            ancestor: None,
        }
    }

    fn seed_registry(adventurers: Vec<Adventurer>) -> Registry {
        let mut registry = Registry::new();
        let config = EngineConfig::default();
        for adv in adventurers {
            registry.insert(adv, &config).ok();
        }
        registry
    }

    #[test]
    fn update_gates_on_interval() {
        let mut engine = RelationshipEngine::new();
        let config = EngineConfig::default();
        let registry = seed_registry(vec![
            adventurer("A", PersonalityTraits::balanced()),
            adventurer("B", PersonalityTraits::balanced()),
        ]);
        let mut rng = SmallRng::seed_from_u64(42);

        engine.update(5, &registry, &config, &mut rng);
        // Same tick again: interval not elapsed, guaranteed empty.
        let events = engine.update(5, &registry, &config, &mut rng);
        assert!(events.is_empty());
        // Next tick: the gate opens again (event list may still be empty).
        let _ = engine.update(6, &registry, &config, &mut rng);
        assert_eq!(engine.last_update_tick, Some(6));
    }

    #[test]
    fn ambitious_pair_yields_rivalry_or_conflict() {
        let ambitious = PersonalityTraits {
            ambition: 90,
            teamwork: 10,
            ..PersonalityTraits::balanced()
        };
        let first = adventurer("A", ambitious);
        let second = adventurer("B", ambitious);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let kind = RelationshipEngine::pick_event_kind(
                &first.personality,
                &second.personality,
                &mut rng,
            );
            assert!(matches!(
                kind,
                RelationshipEventKind::RivalryStart | RelationshipEventKind::Conflict
            ));
        }
    }

    #[test]
    fn teamwork_pair_yields_bonding_or_deepening() {
        let cooperative = PersonalityTraits {
            teamwork: 85,
            ..PersonalityTraits::balanced()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let kind = RelationshipEngine::pick_event_kind(&cooperative, &cooperative, &mut rng);
            assert!(matches!(
                kind,
                RelationshipEventKind::Bonding | RelationshipEventKind::FriendshipDeepens
            ));
        }
    }

    #[test]
    fn bonding_event_is_symmetric() {
        let first = adventurer("A", PersonalityTraits::balanced());
        let second = adventurer("B", PersonalityTraits::balanced());
        let event =
            RelationshipEngine::build_pair_event(&first, &second, RelationshipEventKind::Bonding);
        assert_eq!(event.changes.len(), 2);
        for change in &event.changes {
            assert_eq!(change.kind, RelationshipKind::Friendship);
            assert_eq!(change.strength_delta, 15);
        }
        assert_eq!(event.morale_change, 0);
    }

    #[test]
    fn conflict_event_costs_morale() {
        let first = adventurer("A", PersonalityTraits::balanced());
        let second = adventurer("B", PersonalityTraits::balanced());
        let event =
            RelationshipEngine::build_pair_event(&first, &second, RelationshipEventKind::Conflict);
        assert_eq!(event.morale_change, -5);
        for change in &event.changes {
            assert_eq!(change.kind, RelationshipKind::Rivalry);
            assert_eq!(change.strength_delta, -10);
        }
    }

    #[test]
    fn apply_event_creates_and_clamps_bonds() {
        let first = adventurer("A", PersonalityTraits::balanced());
        let second = adventurer("B", PersonalityTraits::balanced());
        let (first_id, second_id) = (first.id, second.id);
        let event =
            RelationshipEngine::build_pair_event(&first, &second, RelationshipEventKind::Bonding);
        let mut registry = seed_registry(vec![first, second]);
        let mut state = GuildState::founding();

        RelationshipEngine::apply_event(&mut registry, &mut state, &event);
        let bond = registry
            .get(first_id)
            .ok()
            .and_then(|a| a.relationship_with(second_id).cloned());
        assert_eq!(bond.as_ref().map(|b| b.strength), Some(15));
        assert_eq!(bond.as_ref().map(|b| b.history.len()), Some(1));

        // Repeated application keeps clamping at 100.
        for _ in 0..10 {
            RelationshipEngine::apply_event(&mut registry, &mut state, &event);
        }
        let bond = registry
            .get(second_id)
            .ok()
            .and_then(|a| a.relationship_with(first_id).cloned());
        assert_eq!(bond.as_ref().map(|b| b.strength), Some(100));
        assert_eq!(bond.map(|b| b.history.len()), Some(5));
    }

    #[test]
    fn apply_event_skips_missing_adventurers() {
        let ghost = adventurer("Ghost", PersonalityTraits::balanced());
        let other = adventurer("Other", PersonalityTraits::balanced());
        let event =
            RelationshipEngine::build_pair_event(&ghost, &other, RelationshipEventKind::Bonding);
        let mut registry = seed_registry(vec![other]);
        let mut state = GuildState::founding();
        // Must not error or panic.
        RelationshipEngine::apply_event(&mut registry, &mut state, &event);
    }

    #[test]
    fn synergy_neutral_for_solo_and_strangers() {
        let first = adventurer("A", PersonalityTraits::balanced());
        let second = adventurer("B", PersonalityTraits::balanced());
        let (first_id, second_id) = (first.id, second.id);
        let registry = seed_registry(vec![first, second]);

        assert_eq!(
            RelationshipEngine::team_synergy(&[first_id], &registry),
            Decimal::ONE
        );
        assert_eq!(
            RelationshipEngine::team_synergy(&[first_id, second_id], &registry),
            Decimal::ONE
        );
    }

    #[test]
    fn synergy_rewards_friendship_exactly() {
        let mut first = adventurer("A", PersonalityTraits::balanced());
        let second = adventurer("B", PersonalityTraits::balanced());
        let (first_id, second_id) = (first.id, second.id);
        first.relationships.push(Relationship {
            target: second_id,
            kind: RelationshipKind::Friendship,
            strength: 50,
            history: Vec::new(),
        });
        let registry = seed_registry(vec![first, second]);

        // 0.5 * 0.2 = 0.1 over one pair: 1.1 multiplier.
        assert_eq!(
            RelationshipEngine::team_synergy(&[first_id, second_id], &registry),
            Decimal::new(11, 1)
        );
    }

    #[test]
    fn synergy_penalizes_rivalry_and_clamps() {
        let mut first = adventurer("A", PersonalityTraits::balanced());
        let second = adventurer("B", PersonalityTraits::balanced());
        let (first_id, second_id) = (first.id, second.id);
        first.relationships.push(Relationship {
            target: second_id,
            kind: RelationshipKind::Rivalry,
            strength: 100,
            history: Vec::new(),
        });
        let registry = seed_registry(vec![first, second]);

        // 1.0 - 0.1 = 0.9, well inside the [0.5, 1.5] clamp.
        assert_eq!(
            RelationshipEngine::team_synergy(&[first_id, second_id], &registry),
            Decimal::new(9, 1)
        );
    }

    #[test]
    fn crisis_requires_a_hot_rivalry() {
        let first = adventurer("A", PersonalityTraits::balanced());
        let second = adventurer("B", PersonalityTraits::balanced());
        let registry = seed_registry(vec![first, second]);
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(RelationshipEngine::trigger_crisis(&registry, &mut rng).is_none());
    }

    #[test]
    fn crisis_escalates_rivalry_and_drains_morale() {
        let mut first = adventurer("A", PersonalityTraits::balanced());
        let second = adventurer("B", PersonalityTraits::balanced());
        let second_id = second.id;
        first.relationships.push(Relationship {
            target: second_id,
            kind: RelationshipKind::Rivalry,
            strength: 85,
            history: Vec::new(),
        });
        let registry = seed_registry(vec![first, second]);
        let mut rng = SmallRng::seed_from_u64(42);

        let event = RelationshipEngine::trigger_crisis(&registry, &mut rng);
        let event = event.as_ref();
        assert_eq!(event.map(|e| e.morale_change), Some(-20));
        assert_eq!(
            event.and_then(|e| e.changes.first()).map(|c| c.strength_delta),
            Some(15)
        );
    }

    #[test]
    fn summary_names_closeness_levels() {
        let mut first = adventurer("Aria", PersonalityTraits::balanced());
        let second = adventurer("Felix", PersonalityTraits::balanced());
        first.relationships.push(Relationship {
            target: second.id,
            kind: RelationshipKind::Romance,
            strength: 85,
            history: Vec::new(),
        });
        let summary_owner = first.clone();
        let registry = seed_registry(vec![first, second]);

        let summaries = RelationshipEngine::relationship_summary(&summary_owner, &registry);
        assert_eq!(summaries.len(), 1);
        assert_eq!(
            summaries.first().map(String::as_str),
            Some("Aria has a very close romantic partnership with Felix.")
        );
    }
}
