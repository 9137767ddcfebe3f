//! Adventurer registry and status machine.
//!
//! The [`Registry`] owns the active roster and is the only mutation point
//! for adventurer status, experience, and level. Legal status transitions:
//!
//! ```text
//! Available -> OnQuest -> Available
//! Available <-> Injured
//! Available | Injured -> Retired   (terminal)
//! ```
//!
//! Anything else returns [`EngineError::WrongStatus`]. Hiring and recruit
//! pool refresh also live here because both end in roster mutation.

use std::collections::BTreeMap;

use guildhall_types::{
    Adventurer, AdventurerId, AdventurerRank, AdventurerStatus, BaseStats, ClassArchetype,
    EquipmentSet, GuildState, PersonalityTraits, Recruit, RecruitId, RetirementBenefits, SkillTree,
};
use rand::Rng;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::EngineError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Gold cost to refresh the hiring hall pool.
pub const RECRUIT_REFRESH_COST: u64 = 50;

/// Base hiring cost for a level-1 recruit.
pub const RECRUIT_BASE_COST: u64 = 100;

/// Recruits produced per pool refresh.
pub const RECRUITS_PER_REFRESH: usize = 3;

/// Given names drawn when generating recruits and descendants.
pub const GIVEN_NAMES: [&str; 24] = [
    "Alex", "Jordan", "Casey", "Morgan", "Riley", "Avery", "Quinn", "Sage", "Rowan", "River",
    "Phoenix", "Skylar", "Ember", "Aspen", "Wren", "Kai", "Nova", "Orion", "Luna", "Aria", "Zara",
    "Felix", "Iris", "Leo",
];

/// Hiring cost for a recruit of the given level: `floor(100 * 1.2^(level-1))`.
///
/// Computed as an exact integer ratio so no floating point is involved.
/// Returns an error if the exponentiation overflows (levels far beyond any
/// reachable progression).
pub fn recruit_cost(level: u32) -> Result<u64, EngineError> {
    let exp = level.saturating_sub(1);
    let overflow = || EngineError::ArithmeticOverflow {
        context: format!("recruit cost for level {level}"),
    };
    let numerator = 12u64.checked_pow(exp).ok_or_else(overflow)?;
    let denominator = 10u64.checked_pow(exp).ok_or_else(overflow)?;
    RECRUIT_BASE_COST
        .checked_mul(numerator)
        .ok_or_else(overflow)
        .map(|n| n / denominator)
}

/// Whether a status transition is legal under the roster status machine.
const fn transition_allowed(from: AdventurerStatus, to: AdventurerStatus) -> bool {
    use AdventurerStatus::{Available, Injured, OnQuest, Retired};
    matches!(
        (from, to),
        (Available, OnQuest)
            | (OnQuest, Available)
            | (Available, Injured)
            | (Injured, Available)
            | (Available, Retired)
            | (Injured, Retired)
    )
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Owner of the active roster.
#[derive(Debug, Default)]
pub struct Registry {
    adventurers: BTreeMap<AdventurerId, Adventurer>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            adventurers: BTreeMap::new(),
        }
    }

    /// Number of adventurers on the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adventurers.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adventurers.is_empty()
    }

    /// Look up an adventurer by id.
    pub fn get(&self, id: AdventurerId) -> Result<&Adventurer, EngineError> {
        self.adventurers
            .get(&id)
            .ok_or(EngineError::AdventurerNotFound(id))
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: AdventurerId) -> Result<&mut Adventurer, EngineError> {
        self.adventurers
            .get_mut(&id)
            .ok_or(EngineError::AdventurerNotFound(id))
    }

    /// Iterate the whole roster in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Adventurer> {
        self.adventurers.values()
    }

    /// Ids of adventurers currently in the `Available` status.
    #[must_use]
    pub fn available(&self) -> Vec<AdventurerId> {
        self.adventurers
            .values()
            .filter(|adv| adv.status == AdventurerStatus::Available)
            .map(|adv| adv.id)
            .collect()
    }

    /// Insert an adventurer directly (roster seeding, descendants).
    ///
    /// Fails when the roster is already at `config.max_roster_size`.
    pub fn insert(
        &mut self,
        adventurer: Adventurer,
        config: &EngineConfig,
    ) -> Result<(), EngineError> {
        if self.adventurers.len() >= config.max_roster_size {
            return Err(EngineError::RosterFull {
                size: self.adventurers.len(),
                capacity: config.max_roster_size,
            });
        }
        debug!(id = %adventurer.id, name = %adventurer.name, "adventurer joined roster");
        self.adventurers.insert(adventurer.id, adventurer);
        Ok(())
    }

    /// Remove an adventurer from the roster, returning the record.
    pub fn remove(&mut self, id: AdventurerId) -> Result<Adventurer, EngineError> {
        self.adventurers
            .remove(&id)
            .ok_or(EngineError::AdventurerNotFound(id))
    }

    /// Drain the entire roster (generation transition).
    pub fn drain(&mut self) -> Vec<Adventurer> {
        std::mem::take(&mut self.adventurers).into_values().collect()
    }

    /// Transition an adventurer's status, enforcing the status machine.
    pub fn set_status(
        &mut self,
        id: AdventurerId,
        to: AdventurerStatus,
    ) -> Result<(), EngineError> {
        let adventurer = self.get_mut(id)?;
        let from = adventurer.status;
        if !transition_allowed(from, to) {
            // Report the status the machine would have required as the
            // origin of the requested transition.
            return Err(EngineError::WrongStatus {
                id,
                actual: from,
                required: AdventurerStatus::Available,
            });
        }
        adventurer.status = to;
        debug!(%id, %from, %to, "status transition");
        Ok(())
    }

    /// Grant experience and apply at most one level-up.
    ///
    /// Experience is cumulative (never reset); a level-up fires when the
    /// running total reaches `level * 100`. Rank is re-derived from level,
    /// except that the hereditary `Heir` title is kept until the derived
    /// rank would reach `Journeyman`.
    pub fn grant_experience(&mut self, id: AdventurerId, amount: u32) -> Result<(), EngineError> {
        let adventurer = self.get_mut(id)?;
        adventurer.experience = adventurer.experience.saturating_add(amount);
        let threshold = adventurer.level.saturating_mul(100);
        if adventurer.experience >= threshold {
            adventurer.level = adventurer.level.saturating_add(1);
            let derived = AdventurerRank::for_level(adventurer.level);
            if adventurer.rank != AdventurerRank::Heir || derived >= AdventurerRank::Journeyman {
                adventurer.rank = derived;
            }
            info!(%id, level = adventurer.level, "level up");
        }
        Ok(())
    }

    /// Advance every adventurer's years of service by one.
    pub fn advance_year(&mut self) {
        for adventurer in self.adventurers.values_mut() {
            adventurer.years_in_guild = adventurer.years_in_guild.saturating_add(1);
        }
    }

    /// Replace the hiring hall pool with freshly generated recruits.
    ///
    /// Costs [`RECRUIT_REFRESH_COST`] gold. Each recruit rolls a random
    /// class and a level in 1..=5; the hiring cost follows
    /// [`recruit_cost`].
    pub fn refresh_recruits(
        &self,
        state: &mut GuildState,
        rng: &mut impl Rng,
    ) -> Result<(), EngineError> {
        if state.gold < RECRUIT_REFRESH_COST {
            return Err(EngineError::InsufficientGold {
                required: RECRUIT_REFRESH_COST,
                available: state.gold,
            });
        }
        state.gold = state.gold.saturating_sub(RECRUIT_REFRESH_COST);

        let mut pool = Vec::with_capacity(RECRUITS_PER_REFRESH);
        for _ in 0..RECRUITS_PER_REFRESH {
            let level = rng.random_range(1..=5u32);
            let class = random_class(rng);
            let given = GIVEN_NAMES
                .get(rng.random_range(0..GIVEN_NAMES.len()))
                .copied()
                .unwrap_or("Rowan");
            pool.push(Recruit {
                id: RecruitId::new(),
                name: format!("{given} the {class}"),
                class,
                level,
                cost: recruit_cost(level)?,
                personality: random_personality(rng),
                potential_skills: BTreeMap::new(),
                descendant_of: None,
            });
        }
        debug!(count = pool.len(), "hiring hall refreshed");
        state.recruits = pool;
        Ok(())
    }

    /// Hire a recruit from the hiring hall onto the roster.
    ///
    /// The cost is reduced by the aggregated retiree recruit-cost-reduction
    /// percentage before the treasury check. Descendant recruits keep their
    /// skill seeds and join at the `Heir` rank.
    pub fn hire(
        &mut self,
        state: &mut GuildState,
        recruit_id: RecruitId,
        benefits: &RetirementBenefits,
        config: &EngineConfig,
    ) -> Result<AdventurerId, EngineError> {
        if self.adventurers.len() >= config.max_roster_size {
            return Err(EngineError::RosterFull {
                size: self.adventurers.len(),
                capacity: config.max_roster_size,
            });
        }

        let position = state
            .recruits
            .iter()
            .position(|r| r.id == recruit_id)
            .ok_or(EngineError::RecruitNotFound)?;

        let reduction = u64::from(benefits.recruit_cost_reduction_pct.min(100));
        let recruit_cost_listed = state
            .recruits
            .get(position)
            .map(|r| r.cost)
            .ok_or(EngineError::RecruitNotFound)?;
        let cost = recruit_cost_listed.saturating_mul(100u64.saturating_sub(reduction)) / 100;
        if state.gold < cost {
            return Err(EngineError::InsufficientGold {
                required: cost,
                available: state.gold,
            });
        }
        state.gold = state.gold.saturating_sub(cost);
        let recruit = state.recruits.remove(position);

        let mut skills = SkillTree::default();
        for (path, value) in &recruit.potential_skills {
            skills.set_value(path, *value);
        }
        let stat = recruit.level.saturating_mul(10);
        let rank = if recruit.descendant_of.is_some() {
            AdventurerRank::Heir
        } else {
            AdventurerRank::for_level(recruit.level)
        };

        let adventurer = Adventurer {
            id: AdventurerId::new(),
            name: recruit.name,
            class: recruit.class,
            rank,
            level: recruit.level,
            experience: 0,
            status: AdventurerStatus::Available,
            stats: BaseStats {
                strength: stat,
                intelligence: stat,
                dexterity: stat,
                vitality: stat,
            },
            personality: recruit.personality,
            skills,
            equipment: EquipmentSet::default(),
            relationships: Vec::new(),
            quests_completed: 0,
            years_in_guild: 0,
            retirement_eligible: false,
            ancestor: recruit.descendant_of,
        };
        let id = adventurer.id;
        info!(%id, name = %adventurer.name, cost, "recruit hired");
        self.adventurers.insert(id, adventurer);
        Ok(id)
    }
}

/// Roll a uniformly random class archetype.
pub fn random_class(rng: &mut impl Rng) -> ClassArchetype {
    ClassArchetype::ALL
        .get(rng.random_range(0..ClassArchetype::ALL.len()))
        .copied()
        .unwrap_or(ClassArchetype::Warrior)
}

/// Roll a random personality with every trait in 20..=80.
pub fn random_personality(rng: &mut impl Rng) -> PersonalityTraits {
    PersonalityTraits {
        courage: rng.random_range(20..=80),
        loyalty: rng.random_range(20..=80),
        ambition: rng.random_range(20..=80),
        teamwork: rng.random_range(20..=80),
        greed: rng.random_range(20..=80),
    }
}
