//! The simulation driver context.
//!
//! [`GuildSim`] owns the registry, the per-generation state, the legacy
//! record, the engines, the clock, and a seedable RNG. Every operation goes
//! through a `&mut self` entry point, so engine calls are serialized by
//! ownership rather than locks.

use guildhall_engines::{
    EngineConfig, EngineError, QuestCoordinator, QuestOutcome, Registry,
    legacy::LegacyEngine,
    relationship::RelationshipEngine,
    retirement::RetirementEngine,
};
use guildhall_types::{
    Adventurer, AdventurerId, GenerationTransition, GuildLegacy, GuildState, LegacyBonus,
    QuestId, QuestSpec, RecruitId, RelationshipEvent, RetirementEvent, TransitionReason,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rust_decimal::Decimal;
use tracing::info;

use crate::clock::{ClockError, DEFAULT_TICKS_PER_YEAR, GuildClock};

/// Errors surfaced by the simulation driver.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// An engine operation failed.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A clock operation failed.
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Everything that happened during one simulation tick.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// The tick that just ran.
    pub tick: u64,
    /// Relationship events generated and applied this tick.
    pub relationship_events: Vec<RelationshipEvent>,
    /// Adventurers who became retirement-eligible this tick.
    pub newly_eligible: Vec<AdventurerId>,
    /// Legacy bonuses that unlocked this tick.
    pub new_bonuses: Vec<LegacyBonus>,
    /// Whether this tick closed out a guild year.
    pub year_closed: bool,
}

/// The simulation context.
///
/// Owns all mutable simulation state; constructed once per run (or per
/// generation restore) with an explicit RNG seed so runs are reproducible.
#[derive(Debug)]
pub struct GuildSim {
    config: EngineConfig,
    clock: GuildClock,
    registry: Registry,
    state: GuildState,
    legacy: GuildLegacy,
    relationships: RelationshipEngine,
    coordinator: QuestCoordinator,
    rng: SmallRng,
}

impl GuildSim {
    /// A founding-generation simulation with default tunables.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Clock`] if the default year length is invalid
    /// (it is not; the error path exists for configured constructors).
    pub fn new(seed: u64) -> Result<Self, SimError> {
        Self::with_config(EngineConfig::default(), DEFAULT_TICKS_PER_YEAR, seed)
    }

    /// A founding-generation simulation with explicit tunables.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Clock`] if `ticks_per_year` is 0.
    pub fn with_config(
        config: EngineConfig,
        ticks_per_year: u64,
        seed: u64,
    ) -> Result<Self, SimError> {
        Ok(Self {
            config,
            clock: GuildClock::new(ticks_per_year)?,
            registry: Registry::new(),
            state: GuildState::founding(),
            legacy: GuildLegacy::new(),
            relationships: RelationshipEngine::default(),
            coordinator: QuestCoordinator::new(),
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The current tick number.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.clock.tick()
    }

    /// The per-generation guild state.
    #[must_use]
    pub const fn state(&self) -> &GuildState {
        &self.state
    }

    /// The cross-generation legacy record.
    #[must_use]
    pub const fn legacy(&self) -> &GuildLegacy {
        &self.legacy
    }

    /// The active roster registry.
    #[must_use]
    pub const fn roster(&self) -> &Registry {
        &self.registry
    }

    /// The engine tunables.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Tick cycle
    // -----------------------------------------------------------------------

    /// Run one simulation tick.
    ///
    /// Advances the clock, runs the relationship update and applies its
    /// events, ages the roster on year boundaries, refreshes retirement
    /// eligibility flags, and checks for newly unlocked legacy bonuses.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Clock`] if the tick counter would overflow.
    pub fn step(&mut self) -> Result<TickReport, SimError> {
        let tick = self.clock.advance()?;

        let relationship_events =
            self.relationships
                .update(tick, &self.registry, &self.config, &mut self.rng);
        for event in &relationship_events {
            RelationshipEngine::apply_event(&mut self.registry, &mut self.state, event);
        }

        let year_closed = self.clock.is_year_boundary();
        if year_closed {
            self.registry.advance_year();
            info!(year = self.clock.year(), "guild year closed");
        }

        let newly_eligible = RetirementEngine::mark_eligibility(&mut self.registry, &self.config);

        let new_bonuses = LegacyEngine::unlock_new_bonuses(&mut self.legacy);
        if !new_bonuses.is_empty() {
            self.state.legacy_multipliers = LegacyEngine::calculate_legacy_multipliers(&self.legacy);
        }

        Ok(TickReport {
            tick,
            relationship_events,
            newly_eligible,
            new_bonuses,
            year_closed,
        })
    }

    // -----------------------------------------------------------------------
    // Roster operations
    // -----------------------------------------------------------------------

    /// Add an adventurer to the roster directly (founding members, rescues).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Engine`] if the roster is full.
    pub fn add_adventurer(&mut self, adventurer: Adventurer) -> Result<(), SimError> {
        self.registry.insert(adventurer, &self.config)?;
        Ok(())
    }

    /// Replace the hiring hall pool with fresh candidates (costs gold).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Engine`] if the treasury cannot cover the fee.
    pub fn refresh_recruits(&mut self) -> Result<(), SimError> {
        self.registry
            .refresh_recruits(&mut self.state, &mut self.rng)?;
        Ok(())
    }

    /// Hire a candidate from the hiring hall, applying any recruiter
    /// discount earned by retirees.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Engine`] if the recruit is unknown, the roster
    /// is full, or the treasury cannot cover the cost.
    pub fn hire_recruit(&mut self, recruit: RecruitId) -> Result<AdventurerId, SimError> {
        let benefits = RetirementEngine::aggregate_benefits(&self.state.retired);
        let id = self
            .registry
            .hire(&mut self.state, recruit, &benefits, &self.config)?;
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Quest operations
    // -----------------------------------------------------------------------

    /// Dispatch a squad on a quest.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Engine`] if the squad is empty or any member is
    /// unavailable.
    pub fn start_quest(
        &mut self,
        quest: QuestSpec,
        squad: &[AdventurerId],
    ) -> Result<QuestId, SimError> {
        let id = self
            .coordinator
            .start_quest(quest, squad, &mut self.registry, self.clock.tick())?;
        Ok(id)
    }

    /// Complete an active quest and pay out its rewards.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Engine`] if the quest is unknown.
    pub fn complete_quest(&mut self, id: QuestId) -> Result<QuestOutcome, SimError> {
        let outcome = self
            .coordinator
            .complete_quest(id, &mut self.registry, &mut self.state)?;
        Ok(outcome)
    }

    /// Call off an active quest without rewards.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Engine`] if the quest is unknown.
    pub fn abandon_quest(&mut self, id: QuestId) -> Result<(), SimError> {
        self.coordinator.abandon_quest(id, &mut self.registry)?;
        Ok(())
    }

    /// The synergy multiplier a squad would carry right now.
    #[must_use]
    pub fn team_synergy(&self, squad: &[AdventurerId]) -> Decimal {
        RelationshipEngine::team_synergy(squad, &self.registry)
    }

    // -----------------------------------------------------------------------
    // Relationship operations
    // -----------------------------------------------------------------------

    /// Force a rivalry crisis if any rivalry is hot enough; applies the
    /// event when one fires.
    pub fn trigger_crisis(&mut self) -> Option<RelationshipEvent> {
        let event = RelationshipEngine::trigger_crisis(&self.registry, &mut self.rng)?;
        RelationshipEngine::apply_event(&mut self.registry, &mut self.state, &event);
        Some(event)
    }

    /// Human-readable summaries of one adventurer's bonds.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Engine`] if the adventurer is unknown.
    pub fn relationship_summary(&self, id: AdventurerId) -> Result<Vec<String>, SimError> {
        let adventurer = self.registry.get(id)?;
        Ok(RelationshipEngine::relationship_summary(
            adventurer,
            &self.registry,
        ))
    }

    // -----------------------------------------------------------------------
    // Retirement operations
    // -----------------------------------------------------------------------

    /// Retire an eligible adventurer.
    ///
    /// Moves them off the roster into the retired pool, counts them toward
    /// the legacy record, considers them for the hall of legends, and adds a
    /// descendant candidate to the hiring hall.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Engine`] if the adventurer is unknown, not
    /// eligible, or away on a quest.
    pub fn retire_adventurer(&mut self, id: AdventurerId) -> Result<RetirementEvent, SimError> {
        let event = RetirementEngine::process_retirement(
            &mut self.registry,
            &mut self.state,
            id,
            &self.config,
            &mut self.rng,
        )?;
        self.legacy.total_retired = self.legacy.total_retired.saturating_add(1);

        if let Some(record) = self.state.retired.last() {
            let adventurer = record.adventurer.clone();
            let achievements = vec![format!(
                "Completed {} quests over {} years of service",
                adventurer.quests_completed, adventurer.years_in_guild
            )];
            LegacyEngine::record_legendary_adventurer(
                &mut self.legacy,
                &adventurer,
                achievements,
                self.state.generation,
            );

            let descendant = RetirementEngine::generate_descendant_recruit(record, &mut self.rng);
            self.state.recruits.push(descendant);
        }
        Ok(event)
    }

    // -----------------------------------------------------------------------
    // Generation transitions
    // -----------------------------------------------------------------------

    /// Build a transition plan without committing anything.
    pub fn plan_transition(&mut self, reason: TransitionReason) -> GenerationTransition {
        LegacyEngine::plan_generation_transition(
            &self.state,
            &self.registry,
            &self.legacy,
            reason,
            &self.config,
            &mut self.rng,
        )
    }

    /// Commit a transition plan: chronicle the closing generation, advance
    /// the legacy, replace the state, and seed the roster with descendants.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Engine`] if a descendant cannot join the new
    /// roster (more descendants than roster capacity).
    pub fn execute_transition(
        &mut self,
        transition: &GenerationTransition,
    ) -> Result<(), SimError> {
        let outcome = LegacyEngine::execute_generation_transition(
            &self.state,
            &self.registry,
            &self.legacy,
            transition,
            &self.config,
        );

        self.state = outcome.state;
        self.legacy = outcome.legacy;
        self.registry = Registry::new();
        self.coordinator = QuestCoordinator::new();
        self.relationships = RelationshipEngine::default();
        for descendant in outcome.roster {
            self.registry.insert(descendant, &self.config)?;
        }
        info!(
            generation = self.state.generation,
            roster = self.registry.len(),
            "new generation begins"
        );
        Ok(())
    }
}
