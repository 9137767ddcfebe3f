//! Enumeration types for the Guildhall simulation.
//!
//! Covers the adventurer lifecycle (class, rank, status), the social graph
//! (relationship kinds and event kinds), equipment (slot, rarity), retirement
//! (role, reason), and the legacy layer (bonus category, transition reason).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Adventurer
// ---------------------------------------------------------------------------

/// One of the four adventurer class archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ClassArchetype {
    /// Front-line melee combatant.
    Warrior,
    /// Arcane caster.
    Mage,
    /// Stealth and infiltration specialist.
    Rogue,
    /// Ranged combatant and scout.
    Archer,
}

impl ClassArchetype {
    /// All four archetypes, in catalog order.
    pub const ALL: [Self; 4] = [Self::Warrior, Self::Mage, Self::Rogue, Self::Archer];
}

impl core::fmt::Display for ClassArchetype {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Warrior => write!(f, "Warrior"),
            Self::Mage => write!(f, "Mage"),
            Self::Rogue => write!(f, "Rogue"),
            Self::Archer => write!(f, "Archer"),
        }
    }
}

/// Current duty status of an adventurer.
///
/// The normal quest cycle is `Available -> OnQuest -> Available`. `Retired`
/// is terminal and only the retirement engine drives it. `Injured` exists in
/// the model but no engine currently transitions into it -- it is reserved
/// for the injury mechanics the quest resolver may grow later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum AdventurerStatus {
    /// On the roster and free to be assigned to a quest.
    Available,
    /// Currently assigned to an active quest.
    OnQuest,
    /// Permanently removed from active duty.
    Retired,
    /// Unable to take quests due to injury (reserved).
    Injured,
}

impl core::fmt::Display for AdventurerStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::OnQuest => write!(f, "on_quest"),
            Self::Retired => write!(f, "retired"),
            Self::Injured => write!(f, "injured"),
        }
    }
}

/// Guild rank held by an adventurer.
///
/// Ranks from `Novice` through `Master` are derived from level; `Heir` is
/// assigned only to descendants created by a generation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum AdventurerRank {
    /// Level 1-2.
    Novice,
    /// Level 3-4.
    Apprentice,
    /// Level 5-6.
    Journeyman,
    /// Level 7-9.
    Expert,
    /// Level 10 and above.
    Master,
    /// Descendant of a legendary ancestor, created at a generation
    /// transition.
    Heir,
}

impl AdventurerRank {
    /// Derive the rank that corresponds to a level.
    ///
    /// `Heir` is never derived from level; it is assigned explicitly.
    pub const fn for_level(level: u32) -> Self {
        match level {
            0..=2 => Self::Novice,
            3..=4 => Self::Apprentice,
            5..=6 => Self::Journeyman,
            7..=9 => Self::Expert,
            _ => Self::Master,
        }
    }
}

impl core::fmt::Display for AdventurerRank {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Novice => write!(f, "Novice"),
            Self::Apprentice => write!(f, "Apprentice"),
            Self::Journeyman => write!(f, "Journeyman"),
            Self::Expert => write!(f, "Expert"),
            Self::Master => write!(f, "Master"),
            Self::Heir => write!(f, "Heir"),
        }
    }
}

// ---------------------------------------------------------------------------
// Social graph
// ---------------------------------------------------------------------------

/// The kind of a directed social bond between two adventurers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RelationshipKind {
    /// A positive bond that boosts squad synergy.
    Friendship,
    /// A competitive bond that drags squad synergy down.
    Rivalry,
    /// The strongest positive bond.
    Romance,
}

/// The kind of event the relationship engine generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RelationshipEventKind {
    /// Two adventurers grew closer as friends.
    Bonding,
    /// An existing friendship strengthened further.
    FriendshipDeepens,
    /// A new competitive rivalry formed.
    RivalryStart,
    /// Romantic feelings developed.
    Romance,
    /// An argument or escalation that costs guild morale.
    Conflict,
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// The slot an equipment item occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EquipmentSlot {
    /// Main-hand weapon.
    Weapon,
    /// Body armor.
    Armor,
    /// Ring, amulet, or trinket.
    Accessory,
}

/// Rarity tier of an equipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ItemRarity {
    /// Baseline gear.
    Common,
    /// Slightly above baseline.
    Uncommon,
    /// Notable gear.
    Rare,
    /// Exceptional gear; eligible for heirloom conversion.
    Epic,
    /// The highest tier; eligible for heirloom conversion.
    Legendary,
}

impl ItemRarity {
    /// The next rarity tier up. `Legendary` stays `Legendary`.
    pub const fn upgraded(self) -> Self {
        match self {
            Self::Common => Self::Uncommon,
            Self::Uncommon => Self::Rare,
            Self::Rare => Self::Epic,
            Self::Epic | Self::Legendary => Self::Legendary,
        }
    }
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

/// Difficulty tier of a quest catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum QuestDifficulty {
    /// Reward multiplier 1.0.
    Easy,
    /// Reward multiplier 1.5.
    Medium,
    /// Reward multiplier 2.0.
    Hard,
}

// ---------------------------------------------------------------------------
// Retirement
// ---------------------------------------------------------------------------

/// The support role a retired adventurer takes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RetirementRole {
    /// Trains new recruits, speeding skill growth.
    Trainer,
    /// Provides tactical counsel for quests.
    Advisor,
    /// Scouts for talent, reducing recruit costs.
    Recruiter,
    /// Manages guild resources and equipment.
    Quartermaster,
}

/// Why an adventurer left active duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RetirementReason {
    /// Ten or more years in the guild.
    Age,
    /// Reached legendary level and quest counts.
    Achievement,
    /// Injured status forced the retirement.
    Injury,
    /// Accumulated enough wealth to stop adventuring.
    Wealth,
    /// A strong romance pulled them toward settled life.
    Relationship,
    /// Chose to step back without any specific trigger.
    Voluntary,
}

// ---------------------------------------------------------------------------
// Legacy
// ---------------------------------------------------------------------------

/// The effect category of a legacy bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum BonusCategory {
    /// Scales experience gained from quests.
    Experience,
    /// Scales gold rewards.
    Gold,
    /// Scales reputation gains.
    Reputation,
    /// Scales skill growth.
    Skill,
    /// Unlocks exclusive quest lines.
    QuestAccess,
    /// Improves recruit quality and cost.
    Recruitment,
}

/// What triggered a generation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum TransitionReason {
    /// Enough years have passed that a new generation takes over.
    TimePassed,
    /// A catastrophe forced the guild to rebuild.
    CatastrophicEvent,
    /// Leadership voluntarily passed the torch.
    VoluntarySuccession,
    /// The guild disbanded and reformed under former members.
    GuildDissolution,
}

impl TransitionReason {
    /// The chronicle description recorded for this transition reason.
    pub const fn description(self) -> &'static str {
        match self {
            Self::TimePassed => {
                "Many years have passed, and a new generation has taken over the guild's operations."
            }
            Self::CatastrophicEvent => {
                "A great catastrophe has befallen the land, forcing the guild to rebuild with new leadership."
            }
            Self::VoluntarySuccession => {
                "The guild leadership has voluntarily passed the torch to the next generation of adventurers."
            }
            Self::GuildDissolution => {
                "The old guild has disbanded, but its legacy lives on in a new organization founded by former members."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_for_level_boundaries() {
        assert_eq!(AdventurerRank::for_level(1), AdventurerRank::Novice);
        assert_eq!(AdventurerRank::for_level(3), AdventurerRank::Apprentice);
        assert_eq!(AdventurerRank::for_level(5), AdventurerRank::Journeyman);
        assert_eq!(AdventurerRank::for_level(7), AdventurerRank::Expert);
        assert_eq!(AdventurerRank::for_level(10), AdventurerRank::Master);
        assert_eq!(AdventurerRank::for_level(99), AdventurerRank::Master);
    }

    #[test]
    fn rarity_upgrade_chain() {
        assert_eq!(ItemRarity::Common.upgraded(), ItemRarity::Uncommon);
        assert_eq!(ItemRarity::Uncommon.upgraded(), ItemRarity::Rare);
        assert_eq!(ItemRarity::Rare.upgraded(), ItemRarity::Epic);
        assert_eq!(ItemRarity::Epic.upgraded(), ItemRarity::Legendary);
        // Legendary is the ceiling.
        assert_eq!(ItemRarity::Legendary.upgraded(), ItemRarity::Legendary);
    }

    #[test]
    fn status_display_is_snake_case() {
        assert_eq!(AdventurerStatus::OnQuest.to_string(), "on_quest");
        assert_eq!(AdventurerStatus::Available.to_string(), "available");
    }

    #[test]
    fn enum_roundtrip_serde() {
        let json = serde_json::to_string(&RelationshipKind::Romance).ok();
        assert!(json.is_some());
        let restored: Result<RelationshipKind, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert!(matches!(restored, Ok(RelationshipKind::Romance)));
    }
}
