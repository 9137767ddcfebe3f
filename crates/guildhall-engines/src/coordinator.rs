//! Quest assignment coordinator.
//!
//! Bridges the roster status machine and the reward pipeline: starting a
//! quest flips every squad member from `Available` to `OnQuest`, completing
//! one pays out gold, reputation, and experience scaled by squad synergy and
//! the legacy multipliers, then returns the squad to `Available`.
//!
//! Validation is two-phase: the whole squad is checked before any status
//! flips, so a failed start leaves the roster untouched.

use guildhall_types::{
    AdventurerId, AdventurerStatus, GuildState, QuestAssignment, QuestDifficulty, QuestId,
    QuestSpec,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::error::EngineError;
use crate::relationship::RelationshipEngine;
use crate::roster::Registry;

/// Per-level gold reward baseline.
const GOLD_PER_LEVEL: u64 = 25;
/// Per-level experience baseline.
const XP_PER_LEVEL: u32 = 50;
/// Gold-to-reputation conversion divisor.
const REPUTATION_DIVISOR: u64 = 10;

/// Reward multiplier for a difficulty tier.
fn difficulty_multiplier(difficulty: QuestDifficulty) -> Decimal {
    match difficulty {
        QuestDifficulty::Easy => Decimal::ONE,
        QuestDifficulty::Medium => Decimal::new(15, 1),
        QuestDifficulty::Hard => Decimal::new(2, 0),
    }
}

/// What a completed quest paid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestOutcome {
    /// The completed quest.
    pub quest: QuestSpec,
    /// Gold added to the treasury.
    pub gold_earned: u64,
    /// Reputation gained.
    pub reputation_gained: u64,
    /// Experience granted to each squad member.
    pub experience_each: u32,
    /// The squad synergy multiplier that applied.
    pub synergy: Decimal,
}

/// Tracks active quest assignments and drives the reward pipeline.
#[derive(Debug, Default)]
pub struct QuestCoordinator {
    active: BTreeMap<QuestId, QuestAssignment>,
}

impl QuestCoordinator {
    /// An empty coordinator with no active assignments.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: BTreeMap::new(),
        }
    }

    /// Number of quests currently underway.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Look up an active assignment.
    #[must_use]
    pub fn assignment(&self, id: QuestId) -> Option<&QuestAssignment> {
        self.active.get(&id)
    }

    /// Iterate over active assignments.
    pub fn assignments(&self) -> impl Iterator<Item = &QuestAssignment> {
        self.active.values()
    }

    /// Dispatch a squad on a quest.
    ///
    /// Every member must exist and be `Available`; on success all members
    /// flip to `OnQuest` and the assignment is recorded.
    pub fn start_quest(
        &mut self,
        quest: QuestSpec,
        squad: &[AdventurerId],
        registry: &mut Registry,
        tick: u64,
    ) -> Result<QuestId, EngineError> {
        if squad.is_empty() {
            return Err(EngineError::EmptyParty);
        }
        for &member in squad {
            let adventurer = registry.get(member)?;
            if adventurer.status != AdventurerStatus::Available {
                return Err(EngineError::WrongStatus {
                    id: member,
                    actual: adventurer.status,
                    required: AdventurerStatus::Available,
                });
            }
        }
        for &member in squad {
            registry.set_status(member, AdventurerStatus::OnQuest)?;
        }

        let id = QuestId::new();
        debug!(quest = %quest.slug, %id, squad = squad.len(), "quest started");
        self.active.insert(
            id,
            QuestAssignment {
                id,
                quest,
                adventurers: squad.to_vec(),
                started_at_tick: tick,
            },
        );
        Ok(id)
    }

    /// Complete an active quest and pay out its rewards.
    ///
    /// Gold is `min_level * 25 * difficulty`, scaled by squad synergy and
    /// the legacy gold multiplier; reputation is a tenth of the gold scaled
    /// by the reputation multiplier; each member earns `min_level * 50`
    /// experience scaled by the experience multiplier. All products are
    /// floored. Members return to `Available`.
    pub fn complete_quest(
        &mut self,
        id: QuestId,
        registry: &mut Registry,
        state: &mut GuildState,
    ) -> Result<QuestOutcome, EngineError> {
        let assignment = self
            .active
            .remove(&id)
            .ok_or(EngineError::QuestNotFound(id))?;

        let synergy = RelationshipEngine::team_synergy(&assignment.adventurers, registry);
        let quest = assignment.quest;

        let base_gold = u64::from(quest.min_level)
            .checked_mul(GOLD_PER_LEVEL)
            .ok_or_else(|| EngineError::ArithmeticOverflow {
                context: format!("base reward for quest {}", quest.slug),
            })?;
        let gold_factor = difficulty_multiplier(quest.difficulty)
            .saturating_mul(synergy)
            .saturating_mul(state.legacy_multipliers.gold);
        let gold_earned = scale_u64(base_gold, gold_factor, &quest.slug)?;

        let reputation_gained = scale_u64(
            gold_earned / REPUTATION_DIVISOR,
            state.legacy_multipliers.reputation,
            &quest.slug,
        )?;

        let base_xp = quest.min_level.saturating_mul(XP_PER_LEVEL);
        let experience_each = scale_u32(
            base_xp,
            state.legacy_multipliers.experience,
            &quest.slug,
        )?;

        for &member in &assignment.adventurers {
            registry.set_status(member, AdventurerStatus::Available)?;
            registry.grant_experience(member, experience_each)?;
            let adventurer = registry.get_mut(member)?;
            adventurer.quests_completed = adventurer.quests_completed.saturating_add(1);
        }

        state.gold = state.gold.saturating_add(gold_earned);
        state.reputation = state.reputation.saturating_add(reputation_gained);
        state.completed_quests.push(quest.name.clone());

        info!(
            quest = %quest.slug,
            gold = gold_earned,
            reputation = reputation_gained,
            xp = experience_each,
            %synergy,
            "quest completed"
        );

        Ok(QuestOutcome {
            quest,
            gold_earned,
            reputation_gained,
            experience_each,
            synergy,
        })
    }

    /// Call off an active quest. Members return to `Available` with no
    /// rewards; missing members are skipped.
    pub fn abandon_quest(
        &mut self,
        id: QuestId,
        registry: &mut Registry,
    ) -> Result<QuestAssignment, EngineError> {
        let assignment = self
            .active
            .remove(&id)
            .ok_or(EngineError::QuestNotFound(id))?;
        for &member in &assignment.adventurers {
            if registry.get(member).is_ok() {
                registry.set_status(member, AdventurerStatus::Available)?;
            }
        }
        debug!(quest = %assignment.quest.slug, %id, "quest abandoned");
        Ok(assignment)
    }
}

/// Multiply a u64 base by a decimal factor, flooring the product.
fn scale_u64(base: u64, factor: Decimal, context: &str) -> Result<u64, EngineError> {
    Decimal::from(base)
        .checked_mul(factor)
        .map(|product| product.floor())
        .and_then(|floored| floored.to_u64())
        .ok_or_else(|| EngineError::ArithmeticOverflow {
            context: format!("reward scaling for quest {context}"),
        })
}

/// Multiply a u32 base by a decimal factor, flooring the product.
fn scale_u32(base: u32, factor: Decimal, context: &str) -> Result<u32, EngineError> {
    Decimal::from(base)
        .checked_mul(factor)
        .map(|product| product.floor())
        .and_then(|floored| floored.to_u32())
        .ok_or_else(|| EngineError::ArithmeticOverflow {
            context: format!("experience scaling for quest {context}"),
        })
}
