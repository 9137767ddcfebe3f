//! Core entity structs for the Guildhall simulation.
//!
//! The adventurer aggregate (stats, personality, skills, equipment,
//! relationships), the retirement and recruit records, the guild state, and
//! the legacy layer (bonuses, heirlooms, chronicles, transitions).
//!
//! Invariants that belong to the data itself are enforced here:
//! relationship strength is clamped to [0, 100] on every update, and the
//! relationship history log never exceeds [`MAX_RELATIONSHIP_HISTORY`]
//! entries (oldest dropped first). Everything else is engine logic and lives
//! in `guildhall-engines`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AdventurerRank, AdventurerStatus, BonusCategory, ClassArchetype, EquipmentSlot, ItemRarity,
    QuestDifficulty, RelationshipEventKind, RelationshipKind, RetirementReason, RetirementRole,
    TransitionReason,
};
use crate::ids::{AdventurerId, EventId, ItemId, QuestId, RecruitId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum entries kept in a relationship's history log (FIFO eviction).
pub const MAX_RELATIONSHIP_HISTORY: usize = 5;

/// Maximum heirloom items a guild legacy can carry across generations.
pub const MAX_HEIRLOOMS: usize = 20;

/// Upper bound for personality traits and relationship strength.
pub const TRAIT_MAX: u32 = 100;

/// Clamp a signed trait or strength computation into the [0, 100] range.
pub fn clamp_trait(value: i64) -> u32 {
    if value <= 0 {
        0
    } else if value >= i64::from(TRAIT_MAX) {
        TRAIT_MAX
    } else {
        u32::try_from(value).unwrap_or(TRAIT_MAX)
    }
}

// ---------------------------------------------------------------------------
// Personality & stats
// ---------------------------------------------------------------------------

/// Personality vector assigned at creation and inherited (with jitter) by
/// descendants.
///
/// Each trait is an integer in the range 0 to 100. Personality drives
/// relationship event selection, retirement reasons, and role eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PersonalityTraits {
    /// Willingness to face danger.
    pub courage: u32,
    /// Commitment to the guild and to companions.
    pub loyalty: u32,
    /// Drive for rank, renown, and rivalry.
    pub ambition: u32,
    /// Preference for working in a squad over solo glory.
    pub teamwork: u32,
    /// Appetite for gold.
    pub greed: u32,
}

impl PersonalityTraits {
    /// A flat mid-range personality, useful as a neutral default.
    pub const fn balanced() -> Self {
        Self {
            courage: 50,
            loyalty: 50,
            ambition: 50,
            teamwork: 50,
            greed: 50,
        }
    }
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self::balanced()
    }
}

/// The four base combat stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BaseStats {
    /// Physical power.
    pub strength: u32,
    /// Arcane and tactical aptitude.
    pub intelligence: u32,
    /// Speed and precision.
    pub dexterity: u32,
    /// Endurance and health.
    pub vitality: u32,
}

impl BaseStats {
    /// Return a copy with every stat scaled to `pct` percent, floored.
    ///
    /// Used for descendant inheritance (e.g. 60% of an ancestor's stats).
    pub const fn scaled(&self, pct: u32) -> Self {
        Self {
            strength: self.strength.saturating_mul(pct) / 100,
            intelligence: self.intelligence.saturating_mul(pct) / 100,
            dexterity: self.dexterity.saturating_mul(pct) / 100,
            vitality: self.vitality.saturating_mul(pct) / 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Combat skill branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CombatSkills {
    /// Proficiency with weapons of the adventurer's class.
    pub weapon_mastery: u32,
    /// Ability to read a battlefield.
    pub tactical_knowledge: u32,
    /// Controlled fury in melee.
    pub battle_rage: u32,
}

/// Magic skill branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MagicSkills {
    /// Raw spell output.
    pub spell_power: u32,
    /// Mana economy under pressure.
    pub mana_efficiency: u32,
    /// Command of elemental forces.
    pub elemental_mastery: u32,
}

/// Stealth skill branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StealthSkills {
    /// Opening locks without keys.
    pub lockpicking: u32,
    /// Moving unseen and unheard.
    pub sneaking: u32,
    /// Striking from the shadows.
    pub assassination: u32,
}

/// Survival skill branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SurvivalSkills {
    /// Following trails and signs.
    pub tracking: u32,
    /// Identifying and preparing herbs.
    pub herbalism: u32,
    /// Calming and commanding beasts.
    pub animal_handling: u32,
}

/// The full skill tree: four branches of three skills each.
///
/// Skills are unbounded non-negative integers. Individual skills are
/// addressed by dotted path (e.g. `"combat.weapon_mastery"`) so the
/// retirement role catalog and inheritance maps can reference them by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkillTree {
    /// Combat branch.
    pub combat: CombatSkills,
    /// Magic branch.
    pub magic: MagicSkills,
    /// Stealth branch.
    pub stealth: StealthSkills,
    /// Survival branch.
    pub survival: SurvivalSkills,
}

impl SkillTree {
    /// Look up a skill value by dotted path.
    ///
    /// Returns 0 for unknown paths -- unknown skills are treated as
    /// untrained rather than as errors.
    pub fn value(&self, path: &str) -> u32 {
        match path {
            "combat.weapon_mastery" => self.combat.weapon_mastery,
            "combat.tactical_knowledge" => self.combat.tactical_knowledge,
            "combat.battle_rage" => self.combat.battle_rage,
            "magic.spell_power" => self.magic.spell_power,
            "magic.mana_efficiency" => self.magic.mana_efficiency,
            "magic.elemental_mastery" => self.magic.elemental_mastery,
            "stealth.lockpicking" => self.stealth.lockpicking,
            "stealth.sneaking" => self.stealth.sneaking,
            "stealth.assassination" => self.stealth.assassination,
            "survival.tracking" => self.survival.tracking,
            "survival.herbalism" => self.survival.herbalism,
            "survival.animal_handling" => self.survival.animal_handling,
            _ => 0,
        }
    }

    /// Set a skill value by dotted path. Unknown paths are ignored and
    /// return `false`.
    pub fn set_value(&mut self, path: &str, value: u32) -> bool {
        let slot = match path {
            "combat.weapon_mastery" => &mut self.combat.weapon_mastery,
            "combat.tactical_knowledge" => &mut self.combat.tactical_knowledge,
            "combat.battle_rage" => &mut self.combat.battle_rage,
            "magic.spell_power" => &mut self.magic.spell_power,
            "magic.mana_efficiency" => &mut self.magic.mana_efficiency,
            "magic.elemental_mastery" => &mut self.magic.elemental_mastery,
            "stealth.lockpicking" => &mut self.stealth.lockpicking,
            "stealth.sneaking" => &mut self.stealth.sneaking,
            "stealth.assassination" => &mut self.stealth.assassination,
            "survival.tracking" => &mut self.survival.tracking,
            "survival.herbalism" => &mut self.survival.herbalism,
            "survival.animal_handling" => &mut self.survival.animal_handling,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// All twelve skills as `(dotted_path, value)` pairs, in branch order.
    pub fn entries(&self) -> Vec<(&'static str, u32)> {
        vec![
            ("combat.weapon_mastery", self.combat.weapon_mastery),
            ("combat.tactical_knowledge", self.combat.tactical_knowledge),
            ("combat.battle_rage", self.combat.battle_rage),
            ("magic.spell_power", self.magic.spell_power),
            ("magic.mana_efficiency", self.magic.mana_efficiency),
            ("magic.elemental_mastery", self.magic.elemental_mastery),
            ("stealth.lockpicking", self.stealth.lockpicking),
            ("stealth.sneaking", self.stealth.sneaking),
            ("stealth.assassination", self.stealth.assassination),
            ("survival.tracking", self.survival.tracking),
            ("survival.herbalism", self.survival.herbalism),
            ("survival.animal_handling", self.survival.animal_handling),
        ]
    }

    /// Return a copy with every skill scaled to `pct` percent, floored.
    ///
    /// Used for descendant inheritance (e.g. 30% of an ancestor's skills).
    pub const fn scaled(&self, pct: u32) -> Self {
        Self {
            combat: CombatSkills {
                weapon_mastery: self.combat.weapon_mastery.saturating_mul(pct) / 100,
                tactical_knowledge: self.combat.tactical_knowledge.saturating_mul(pct) / 100,
                battle_rage: self.combat.battle_rage.saturating_mul(pct) / 100,
            },
            magic: MagicSkills {
                spell_power: self.magic.spell_power.saturating_mul(pct) / 100,
                mana_efficiency: self.magic.mana_efficiency.saturating_mul(pct) / 100,
                elemental_mastery: self.magic.elemental_mastery.saturating_mul(pct) / 100,
            },
            stealth: StealthSkills {
                lockpicking: self.stealth.lockpicking.saturating_mul(pct) / 100,
                sneaking: self.stealth.sneaking.saturating_mul(pct) / 100,
                assassination: self.stealth.assassination.saturating_mul(pct) / 100,
            },
            survival: SurvivalSkills {
                tracking: self.survival.tracking.saturating_mul(pct) / 100,
                herbalism: self.survival.herbalism.saturating_mul(pct) / 100,
                animal_handling: self.survival.animal_handling.saturating_mul(pct) / 100,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// A single piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EquipmentItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// The slot this item occupies.
    pub slot: EquipmentSlot,
    /// Rarity tier.
    pub rarity: ItemRarity,
    /// Numeric stat bonuses keyed by stat name.
    pub stats: BTreeMap<String, u32>,
    /// Whether this item was produced as an heirloom copy.
    pub heirloom: bool,
}

/// The three optional equipment slots of an adventurer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EquipmentSet {
    /// Main-hand weapon, if equipped.
    pub weapon: Option<EquipmentItem>,
    /// Body armor, if equipped.
    pub armor: Option<EquipmentItem>,
    /// Accessory, if equipped.
    pub accessory: Option<EquipmentItem>,
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

/// A directed social bond owned by the source adventurer.
///
/// Strength is always within [0, 100] and the history log holds at most
/// [`MAX_RELATIONSHIP_HISTORY`] free-text entries, oldest evicted first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Relationship {
    /// The adventurer this bond points at.
    pub target: AdventurerId,
    /// The current kind of the bond.
    pub kind: RelationshipKind,
    /// Bond strength in [0, 100].
    pub strength: u32,
    /// Recent event descriptions, capped at five (FIFO).
    pub history: Vec<String>,
}

impl Relationship {
    /// Create a fresh bond at strength 0 with an empty history.
    pub const fn new(target: AdventurerId, kind: RelationshipKind) -> Self {
        Self {
            target,
            kind,
            strength: 0,
            history: Vec::new(),
        }
    }

    /// Apply a signed strength delta, re-clamping to [0, 100].
    pub fn apply_delta(&mut self, delta: i32) {
        let raw = i64::from(self.strength).saturating_add(i64::from(delta));
        self.strength = clamp_trait(raw);
    }

    /// Append a history entry, evicting the oldest once the cap is reached.
    pub fn record(&mut self, description: String) {
        self.history.push(description);
        while self.history.len() > MAX_RELATIONSHIP_HISTORY {
            self.history.remove(0);
        }
    }
}

// ---------------------------------------------------------------------------
// Adventurer
// ---------------------------------------------------------------------------

/// An agent on the guild roster.
///
/// Owned exclusively by the roster registry. The quest coordinator mutates
/// status, experience, and level; the relationship engine mutates the
/// `relationships` list only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Adventurer {
    /// Unique identifier.
    pub id: AdventurerId,
    /// Display name.
    pub name: String,
    /// Class archetype.
    pub class: ClassArchetype,
    /// Guild rank (derived from level, or `Heir` for descendants).
    pub rank: AdventurerRank,
    /// Current level.
    pub level: u32,
    /// Experience toward the next level.
    pub experience: u32,
    /// Duty status.
    pub status: AdventurerStatus,
    /// Base combat stats.
    pub stats: BaseStats,
    /// Personality vector.
    pub personality: PersonalityTraits,
    /// Skill tree.
    pub skills: SkillTree,
    /// Equipped items.
    pub equipment: EquipmentSet,
    /// Outgoing social bonds.
    pub relationships: Vec<Relationship>,
    /// Lifetime quests completed.
    pub quests_completed: u32,
    /// Years of guild service.
    pub years_in_guild: u32,
    /// Whether the retirement engine has flagged this adventurer as
    /// eligible to retire.
    pub retirement_eligible: bool,
    /// The ancestor this adventurer descends from, if any.
    pub ancestor: Option<AdventurerId>,
}

impl Adventurer {
    /// Find this adventurer's bond toward `target`, if one exists.
    pub fn relationship_with(&self, target: AdventurerId) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.target == target)
    }

    /// Mutable variant of [`Self::relationship_with`].
    pub fn relationship_with_mut(&mut self, target: AdventurerId) -> Option<&mut Relationship> {
        self.relationships.iter_mut().find(|r| r.target == target)
    }
}

// ---------------------------------------------------------------------------
// Retirement
// ---------------------------------------------------------------------------

/// The passive benefits a retired adventurer contributes to the guild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RetirementBenefits {
    /// Percentage speed-up applied to new-adventurer skill growth.
    pub training_bonus_pct: u32,
    /// Percentage reduction applied to recruit hiring costs.
    pub recruit_cost_reduction_pct: u32,
    /// Whether tactical advice improves quest outcomes.
    pub quest_advice: bool,
}

/// An immutable record of an adventurer at the moment of retirement.
///
/// Created once by the retirement engine and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RetiredAdventurer {
    /// Snapshot of the adventurer as they were at retirement.
    pub adventurer: Adventurer,
    /// The support role assigned, if any catalog role's requirements held.
    pub role: Option<RetirementRole>,
    /// The benefits bundle contributed by the assigned role.
    pub benefits: RetirementBenefits,
    /// Why the adventurer retired.
    pub reason: RetirementReason,
    /// Narrative description of the retirement.
    pub description: String,
    /// The adventurer's parting words.
    pub farewell: String,
    /// When the retirement was processed.
    pub retired_at: DateTime<Utc>,
}

/// An event emitted when the retirement engine processes a retirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RetirementEvent {
    /// Unique event identifier.
    pub id: EventId,
    /// The retiring adventurer.
    pub adventurer: AdventurerId,
    /// Why they retired.
    pub reason: RetirementReason,
    /// Narrative description.
    pub description: String,
    /// Parting words.
    pub farewell: String,
    /// Benefits the retiree will contribute.
    pub benefits: RetirementBenefits,
}

// ---------------------------------------------------------------------------
// Recruits
// ---------------------------------------------------------------------------

/// A hiring-hall candidate.
///
/// Never mutated: a recruit is either hired (converted to an [`Adventurer`])
/// or discarded. Descendant recruits carry inherited personality and a
/// sparse map of skill seed values keyed by dotted skill path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Recruit {
    /// Unique identifier.
    pub id: RecruitId,
    /// Display name.
    pub name: String,
    /// Class archetype.
    pub class: ClassArchetype,
    /// Starting level if hired.
    pub level: u32,
    /// Hiring cost in gold.
    pub cost: u64,
    /// Personality (inherited with jitter for descendants).
    pub personality: PersonalityTraits,
    /// Inherited skill seed values keyed by dotted path, e.g.
    /// `"combat.weapon_mastery"`. Empty for ordinary recruits.
    pub potential_skills: BTreeMap<String, u32>,
    /// The retired ancestor this recruit descends from, if any.
    pub descendant_of: Option<AdventurerId>,
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

/// A read-only quest catalog record supplied by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct QuestSpec {
    /// Catalog slug (stable across runs).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Minimum adventurer level expected.
    pub min_level: u32,
    /// Classes best suited to this quest.
    pub preferred_classes: Vec<ClassArchetype>,
    /// Difficulty tier (drives the reward multiplier).
    pub difficulty: QuestDifficulty,
    /// How many ticks the quest takes.
    pub duration_ticks: u64,
}

// ---------------------------------------------------------------------------
// Relationship events
// ---------------------------------------------------------------------------

/// One directed strength change carried by a relationship event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RelationshipChange {
    /// The adventurer whose bond is updated.
    pub adventurer: AdventurerId,
    /// The bond's target.
    pub target: AdventurerId,
    /// The kind the bond becomes (created if absent).
    pub kind: RelationshipKind,
    /// Signed strength delta; the result is re-clamped to [0, 100].
    pub strength_delta: i32,
}

/// An event produced by the relationship engine.
///
/// Events are pure data: the engine that generated one does not mutate the
/// roster. The driver commits an event via `apply_relationship_event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RelationshipEvent {
    /// Unique event identifier.
    pub id: EventId,
    /// The adventurers involved.
    pub participants: Vec<AdventurerId>,
    /// What kind of event occurred.
    pub kind: RelationshipEventKind,
    /// Narrative description (appended to bond histories on apply).
    pub description: String,
    /// The directed strength changes to commit.
    pub changes: Vec<RelationshipChange>,
    /// Guild morale delta carried by this event (zero for most events).
    pub morale_change: i32,
}

// ---------------------------------------------------------------------------
// Collaborator records
// ---------------------------------------------------------------------------

/// A long-running story arc supplied by the campaign catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Campaign {
    /// Display name.
    pub name: String,
    /// Whether the guild finished it this generation.
    pub completed: bool,
}

/// A world event supplied by the events catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WorldEvent {
    /// Display name.
    pub name: String,
    /// Whether the event is currently active.
    pub active: bool,
}

/// A territory record supplied by the territory catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Territory {
    /// Stable catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the guild controls it.
    pub controlled: bool,
    /// Influence level in [0, 100].
    pub influence_level: u32,
}

// ---------------------------------------------------------------------------
// Legacy
// ---------------------------------------------------------------------------

/// Thresholds that must all hold for a legacy bonus to unlock.
///
/// Absent fields impose no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UnlockCondition {
    /// Minimum generation number.
    pub generation: Option<u32>,
    /// Minimum cumulative quests completed.
    pub total_quests_completed: Option<u64>,
    /// Minimum cumulative gold earned.
    pub total_gold_earned: Option<u64>,
    /// Minimum cumulative reputation gained.
    pub total_reputation_gained: Option<u64>,
    /// Minimum count of legendary heirloom items held.
    pub legendary_items: Option<u32>,
    /// Minimum cumulative retired adventurers.
    pub retired_adventurers: Option<u64>,
}

/// A permanent bonus unlocked by cumulative cross-generation achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LegacyBonus {
    /// Stable catalog identifier; each id activates at most once.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Which multiplier this bonus feeds.
    pub category: BonusCategory,
    /// Multiplier value (e.g. 1.15 for +15%).
    #[ts(as = "String")]
    pub value: Decimal,
    /// Thresholds required to unlock.
    pub unlock: UnlockCondition,
    /// Whether the bonus carries over into new generations.
    pub persistent: bool,
}

/// A famous adventurer recorded in guild history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LegendaryRecord {
    /// The adventurer's name.
    pub name: String,
    /// Their class.
    pub class: ClassArchetype,
    /// Achievements worth remembering.
    pub achievements: Vec<String>,
    /// The generation they served in.
    pub generation: u32,
}

/// Final statistics captured in a chronicle entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FinalStats {
    /// Guild level at transition time.
    pub level: u32,
    /// Reputation at transition time.
    pub reputation: u64,
    /// Gold at transition time.
    pub gold: u64,
    /// Active roster size at transition time.
    pub adventurers: u32,
}

/// One immutable chronicle entry, appended per generation transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChronicleEntry {
    /// The generation this entry closes out.
    pub generation: u32,
    /// Up to ten major events of the generation.
    pub major_events: Vec<String>,
    /// Notable-achievement badges earned.
    pub notable_achievements: Vec<String>,
    /// Snapshot of the guild's final numbers.
    pub final_stats: FinalStats,
}

/// Process-spanning guild history that survives generation transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GuildLegacy {
    /// How many generations the guild has seen (starts at 1).
    pub total_generations: u32,
    /// Cumulative quests completed across all generations.
    pub total_quests_completed: u64,
    /// Cumulative gold earned across all generations.
    pub total_gold_earned: u64,
    /// Cumulative reputation gained across all generations.
    pub total_reputation_gained: u64,
    /// Cumulative adventurers retired across all generations.
    pub total_retired: u64,
    /// Famous adventurers recorded for posterity.
    pub legendary_adventurers: Vec<LegendaryRecord>,
    /// Heirloom equipment carried forward, capped at [`MAX_HEIRLOOMS`].
    pub heirloom_items: Vec<EquipmentItem>,
    /// Active bonuses; append-only, each id present at most once.
    pub active_bonuses: Vec<LegacyBonus>,
    /// One chronicle entry per completed generation.
    pub chronicles: Vec<ChronicleEntry>,
}

impl GuildLegacy {
    /// A brand-new legacy for a first-generation guild.
    pub const fn new() -> Self {
        Self {
            total_generations: 1,
            total_quests_completed: 0,
            total_gold_earned: 0,
            total_reputation_gained: 0,
            total_retired: 0,
            legendary_adventurers: Vec::new(),
            heirloom_items: Vec::new(),
            active_bonuses: Vec::new(),
            chronicles: Vec::new(),
        }
    }

    /// Count heirloom items at the given rarity.
    pub fn heirloom_count_at(&self, rarity: ItemRarity) -> u32 {
        let count = self
            .heirloom_items
            .iter()
            .filter(|item| item.rarity == rarity)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

impl Default for GuildLegacy {
    fn default() -> Self {
        Self::new()
    }
}

/// The five multiplicative accumulators derived from active bonuses.
///
/// Each field starts at 1 and is multiplied by every matching bonus value;
/// the fold is order-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LegacyMultipliers {
    /// Experience multiplier.
    #[ts(as = "String")]
    pub experience: Decimal,
    /// Gold multiplier.
    #[ts(as = "String")]
    pub gold: Decimal,
    /// Reputation multiplier.
    #[ts(as = "String")]
    pub reputation: Decimal,
    /// Skill-growth multiplier.
    #[ts(as = "String")]
    pub skill: Decimal,
    /// Recruitment-quality multiplier.
    #[ts(as = "String")]
    pub recruitment: Decimal,
}

impl LegacyMultipliers {
    /// Neutral multipliers (all 1).
    pub const fn identity() -> Self {
        Self {
            experience: Decimal::ONE,
            gold: Decimal::ONE,
            reputation: Decimal::ONE,
            skill: Decimal::ONE,
            recruitment: Decimal::ONE,
        }
    }
}

impl Default for LegacyMultipliers {
    fn default() -> Self {
        Self::identity()
    }
}

// ---------------------------------------------------------------------------
// Generation transition
// ---------------------------------------------------------------------------

/// State fragments that survive a generation transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SurvivingElements {
    /// Combined heirloom list, capped at [`MAX_HEIRLOOMS`].
    pub heirloom_items: Vec<EquipmentItem>,
    /// Up to ten retired adventurers carried forward as NPCs.
    pub retired_as_npcs: Vec<RetiredAdventurer>,
    /// Up to fifteen legacy-knowledge strings.
    pub legacy_knowledge: Vec<String>,
    /// Inherited territory influence keyed by territory id.
    pub territory_influence: BTreeMap<String, u32>,
}

/// The package the new generation starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewGenerationPackage {
    /// Persistent bonus values keyed by effect category.
    #[ts(as = "BTreeMap<BonusCategory, String>")]
    pub starting_bonuses: BTreeMap<BonusCategory, Decimal>,
    /// Reputation inherited by the new generation.
    pub inherited_reputation: u64,
    /// Gold inherited by the new generation.
    pub inherited_gold: u64,
    /// Descendant adventurers who seed the new roster.
    pub descendants: Vec<Adventurer>,
}

/// A pure plan for a generation transition.
///
/// Produced by `plan_generation_transition` without mutating guild state;
/// committed by `execute_generation_transition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GenerationTransition {
    /// What triggered the transition.
    pub reason: TransitionReason,
    /// Narrative description for the chronicle.
    pub description: String,
    /// What survives into the next generation.
    pub surviving: SurvivingElements,
    /// What the next generation starts with.
    pub new_generation: NewGenerationPackage,
}

// ---------------------------------------------------------------------------
// Guild state
// ---------------------------------------------------------------------------

/// The mutable per-generation guild state.
///
/// The active roster lives in the engine-side registry, not here; every
/// other collection a transition resets to empty is modeled so the reset is
/// observable. Persistence of this struct is an external responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GuildState {
    /// Treasury gold.
    pub gold: u64,
    /// Guild reputation.
    pub reputation: u64,
    /// Guild morale in [0, 100].
    pub morale: u32,
    /// Guild level.
    pub level: u32,
    /// Current generation number.
    pub generation: u32,
    /// Names of quests completed this generation.
    pub completed_quests: Vec<String>,
    /// Hiring-hall candidates.
    pub recruits: Vec<Recruit>,
    /// Retired adventurers of this generation.
    pub retired: Vec<RetiredAdventurer>,
    /// Crafting materials keyed by name.
    pub materials: BTreeMap<String, u32>,
    /// Built facility names.
    pub facilities: Vec<String>,
    /// Campaign records from the campaign catalog.
    pub campaigns: Vec<Campaign>,
    /// World events from the events catalog.
    pub world_events: Vec<WorldEvent>,
    /// Rival guild names.
    pub rival_guilds: Vec<String>,
    /// Territory records from the territory catalog.
    pub territories: Vec<Territory>,
    /// Open council vote topics.
    pub active_votes: Vec<String>,
    /// Multipliers carried from the legacy layer.
    pub legacy_multipliers: LegacyMultipliers,
}

impl GuildState {
    /// A first-generation guild with the standard starting treasury.
    pub fn founding() -> Self {
        Self {
            gold: 1000,
            reputation: 0,
            morale: 50,
            level: 1,
            generation: 1,
            completed_quests: Vec::new(),
            recruits: Vec::new(),
            retired: Vec::new(),
            materials: BTreeMap::new(),
            facilities: Vec::new(),
            campaigns: Vec::new(),
            world_events: Vec::new(),
            rival_guilds: Vec::new(),
            territories: Vec::new(),
            active_votes: Vec::new(),
            legacy_multipliers: LegacyMultipliers::identity(),
        }
    }

    /// Apply a signed morale delta, clamping to [0, 100].
    pub fn apply_morale(&mut self, delta: i32) {
        let raw = i64::from(self.morale).saturating_add(i64::from(delta));
        self.morale = clamp_trait(raw);
    }
}

impl Default for GuildState {
    fn default() -> Self {
        Self::founding()
    }
}

/// An active quest assignment tracked by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct QuestAssignment {
    /// Unique assignment identifier.
    pub id: QuestId,
    /// The catalog record this assignment runs.
    pub quest: QuestSpec,
    /// The adventurers sent out.
    pub adventurers: Vec<AdventurerId>,
    /// Tick the assignment started.
    pub started_at_tick: u64,
}
