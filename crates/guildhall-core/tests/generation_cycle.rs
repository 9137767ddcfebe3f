//! Full-cycle integration test: a guild is founded, runs quests, retires
//! its veterans, and hands over to a second generation.
//!
//! Exercises the registry, the relationship/retirement/legacy engines, the
//! quest coordinator, and the driver together through the public `GuildSim`
//! surface.

// Panicking on failure is the correct behavior in test code.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::arithmetic_side_effects,
    clippy::too_many_lines
)]

use guildhall_core::{GuildSim, SimError};
use guildhall_engines::EngineError;
use guildhall_types::{
    Adventurer, AdventurerId, AdventurerRank, AdventurerStatus, BaseStats, ClassArchetype,
    EquipmentItem, EquipmentSet, EquipmentSlot, ItemId, ItemRarity, PersonalityTraits,
    QuestDifficulty, QuestSpec, SkillTree, TransitionReason,
};
use std::collections::BTreeMap;

fn founder(name: &str, class: ClassArchetype, level: u32) -> Adventurer {
    Adventurer {
        id: AdventurerId::new(),
        name: name.to_owned(),
        class,
        rank: AdventurerRank::for_level(level),
        level,
        experience: 0,
        status: AdventurerStatus::Available,
        stats: BaseStats {
            strength: 50,
            intelligence: 40,
            dexterity: 45,
            vitality: 55,
        },
        personality: PersonalityTraits::balanced(),
        skills: SkillTree::default(),
        equipment: EquipmentSet::default(),
        relationships: Vec::new(),
        quests_completed: 0,
        years_in_guild: 0,
        retirement_eligible: false,
        ancestor: None,
    }
}

fn patrol_quest(min_level: u32) -> QuestSpec {
    QuestSpec {
        slug: String::from("border-patrol"),
        name: String::from("Border Patrol"),
        min_level,
        preferred_classes: vec![ClassArchetype::Warrior, ClassArchetype::Archer],
        difficulty: QuestDifficulty::Easy,
        duration_ticks: 2,
    }
}

#[test]
fn full_generation_cycle() {
    let mut sim = GuildSim::new(1234).unwrap();

    // Found the guild with two adventurers, one already a legend.
    let mut champion = founder("Aria Dawnblade", ClassArchetype::Warrior, 10);
    champion.quests_completed = 50;
    champion.years_in_guild = 9;
    champion.equipment.weapon = Some(EquipmentItem {
        id: ItemId::new(),
        name: String::from("Stormfang"),
        slot: EquipmentSlot::Weapon,
        rarity: ItemRarity::Epic,
        stats: BTreeMap::from([(String::from("strength"), 20u32)]),
        heirloom: false,
    });
    let champion_id = champion.id;
    let partner = founder("Felix Thorn", ClassArchetype::Archer, 4);
    let partner_id = partner.id;
    sim.add_adventurer(champion).unwrap();
    sim.add_adventurer(partner).unwrap();

    // A season of daily ticks: relationships may form, nobody leaves.
    for _ in 0..90 {
        sim.step().unwrap();
    }
    assert_eq!(sim.roster().len(), 2);

    // The champion is flagged eligible (10 years of service never happened,
    // but level 10 with 50 quests qualifies on achievement).
    assert!(sim
        .roster()
        .get(champion_id)
        .unwrap()
        .retirement_eligible);
    assert!(!sim.roster().get(partner_id).unwrap().retirement_eligible);

    // Run a quest with both members and bank the reward.
    let quest_id = sim.start_quest(patrol_quest(4), &[champion_id, partner_id]).unwrap();
    let outcome = sim.complete_quest(quest_id).unwrap();
    assert!(outcome.gold_earned >= 50); // 100 base, synergy floor is 0.5
    assert_eq!(
        sim.state().completed_quests,
        vec![String::from("Border Patrol")]
    );

    // Retiring the partner fails: too junior.
    assert!(matches!(
        sim.retire_adventurer(partner_id),
        Err(SimError::Engine(EngineError::NotEligible(_)))
    ));

    // Retire the champion.
    let retirement = sim.retire_adventurer(champion_id).unwrap();
    assert_eq!(retirement.adventurer, champion_id);
    assert_eq!(sim.roster().len(), 1);
    assert_eq!(sim.state().retired.len(), 1);
    assert_eq!(sim.legacy().total_retired, 1);
    // Level 10 with 50+ quests also earns a hall-of-legends record.
    assert_eq!(sim.legacy().legendary_adventurers.len(), 1);
    // Their child shows up in the hiring hall.
    let descendant_recruit = sim
        .state()
        .recruits
        .iter()
        .find(|r| r.descendant_of == Some(champion_id))
        .expect("descendant recruit should be offered");
    assert!(descendant_recruit.level >= 1);

    // Hand the guild to the next generation.
    let before_gold = sim.state().gold;
    let before_reputation = sim.state().reputation;
    let plan = sim.plan_transition(TransitionReason::VoluntarySuccession);

    // The champion retired with an epic weapon still equipped on retirement
    // day; the heirloom forge only reaches the active roster, so the plan
    // carries no heirlooms from the remaining low-rarity gear.
    assert!(plan.surviving.heirloom_items.is_empty());
    assert_eq!(plan.new_generation.inherited_gold, before_gold * 2 / 10);
    assert_eq!(
        plan.new_generation.inherited_reputation,
        before_reputation * 3 / 10
    );
    // The retired champion seeds a descendant even though the survivor is
    // too junior to qualify.
    assert_eq!(plan.new_generation.descendants.len(), 1);
    let heir = plan.new_generation.descendants.first().unwrap();
    assert_eq!(heir.rank, AdventurerRank::Heir);
    assert_eq!(heir.stats.strength, 30); // 50 scaled to 60%
    assert_eq!(heir.ancestor, Some(champion_id));

    sim.execute_transition(&plan).unwrap();

    assert_eq!(sim.state().generation, 2);
    assert_eq!(sim.legacy().total_generations, 2);
    assert_eq!(sim.legacy().chronicles.len(), 1);
    assert_eq!(sim.state().gold, plan.new_generation.inherited_gold);
    assert_eq!(
        sim.state().reputation,
        plan.new_generation.inherited_reputation
    );
    assert!(sim.state().completed_quests.is_empty());
    assert!(sim.state().retired.is_empty());
    assert_eq!(sim.roster().len(), 1);

    // Reaching generation 2 unlocks the first experience bonus, which the
    // new state's multipliers already reflect.
    assert!(sim
        .legacy()
        .active_bonuses
        .iter()
        .any(|bonus| bonus.id == "founding_wisdom"));
    assert_eq!(
        sim.state().legacy_multipliers.experience,
        rust_decimal::Decimal::new(11, 1)
    );

    // The second generation is immediately playable.
    let heir_id = sim.roster().iter().next().map(|a| a.id).unwrap();
    let quest_id = sim.start_quest(patrol_quest(2), &[heir_id]).unwrap();
    let outcome = sim.complete_quest(quest_id).unwrap();
    assert!(outcome.gold_earned >= 50);
    for _ in 0..30 {
        sim.step().unwrap();
    }
}

#[test]
fn determinism_across_identical_runs() {
    let run = |seed: u64| {
        let mut sim = GuildSim::new(seed).unwrap();
        sim.add_adventurer(founder("Aria", ClassArchetype::Warrior, 5))
            .unwrap();
        sim.add_adventurer(founder("Felix", ClassArchetype::Mage, 5))
            .unwrap();
        sim.add_adventurer(founder("Mira", ClassArchetype::Rogue, 5))
            .unwrap();
        let mut morale_trace = Vec::new();
        for _ in 0..120 {
            sim.step().unwrap();
            morale_trace.push(sim.state().morale);
        }
        (morale_trace, sim.state().gold)
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn roster_capacity_is_enforced_end_to_end() {
    let mut sim = GuildSim::new(5).unwrap();
    for i in 0..10 {
        sim.add_adventurer(founder(&format!("Member {i}"), ClassArchetype::Rogue, 2))
            .unwrap();
    }
    assert!(matches!(
        sim.add_adventurer(founder("One Too Many", ClassArchetype::Mage, 2)),
        Err(SimError::Engine(EngineError::RosterFull { .. }))
    ));
}
