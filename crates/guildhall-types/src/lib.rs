//! Shared type definitions for the Guildhall simulation.
//!
//! This crate is the single source of truth for all types used across the
//! Guildhall workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the management UI.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`enums`] -- Enumeration types (classes, statuses, ranks, bond kinds)
//! - [`structs`] -- Core entity structs (adventurers, recruits, legacy, guild state)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    AdventurerRank, AdventurerStatus, BonusCategory, ClassArchetype, EquipmentSlot, ItemRarity,
    QuestDifficulty, RelationshipEventKind, RelationshipKind, RetirementReason, RetirementRole,
    TransitionReason,
};
pub use ids::{AdventurerId, EventId, ItemId, QuestId, RecruitId};
pub use structs::{
    Adventurer, BaseStats, Campaign, ChronicleEntry, CombatSkills, EquipmentItem, EquipmentSet,
    FinalStats, GenerationTransition, GuildLegacy, GuildState, LegacyBonus, LegacyMultipliers,
    LegendaryRecord, MAX_HEIRLOOMS, MAX_RELATIONSHIP_HISTORY, MagicSkills, NewGenerationPackage,
    PersonalityTraits, QuestAssignment, QuestSpec, Recruit, Relationship, RelationshipChange,
    RelationshipEvent, RetiredAdventurer, RetirementBenefits, RetirementEvent, SkillTree,
    StealthSkills, SurvivalSkills, SurvivingElements, Territory, TRAIT_MAX, UnlockCondition,
    WorldEvent, clamp_trait,
};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::AdventurerId::export_all();
        let _ = crate::ids::QuestId::export_all();
        let _ = crate::ids::ItemId::export_all();
        let _ = crate::ids::RecruitId::export_all();
        let _ = crate::ids::EventId::export_all();

        // Enums
        let _ = crate::enums::ClassArchetype::export_all();
        let _ = crate::enums::AdventurerStatus::export_all();
        let _ = crate::enums::AdventurerRank::export_all();
        let _ = crate::enums::RelationshipKind::export_all();
        let _ = crate::enums::RelationshipEventKind::export_all();
        let _ = crate::enums::EquipmentSlot::export_all();
        let _ = crate::enums::ItemRarity::export_all();
        let _ = crate::enums::QuestDifficulty::export_all();
        let _ = crate::enums::RetirementRole::export_all();
        let _ = crate::enums::RetirementReason::export_all();
        let _ = crate::enums::BonusCategory::export_all();
        let _ = crate::enums::TransitionReason::export_all();

        // Structs
        let _ = crate::structs::PersonalityTraits::export_all();
        let _ = crate::structs::BaseStats::export_all();
        let _ = crate::structs::SkillTree::export_all();
        let _ = crate::structs::EquipmentItem::export_all();
        let _ = crate::structs::EquipmentSet::export_all();
        let _ = crate::structs::Relationship::export_all();
        let _ = crate::structs::Adventurer::export_all();
        let _ = crate::structs::RetirementBenefits::export_all();
        let _ = crate::structs::RetiredAdventurer::export_all();
        let _ = crate::structs::RetirementEvent::export_all();
        let _ = crate::structs::Recruit::export_all();
        let _ = crate::structs::QuestSpec::export_all();
        let _ = crate::structs::QuestAssignment::export_all();
        let _ = crate::structs::RelationshipChange::export_all();
        let _ = crate::structs::RelationshipEvent::export_all();
        let _ = crate::structs::Campaign::export_all();
        let _ = crate::structs::WorldEvent::export_all();
        let _ = crate::structs::Territory::export_all();
        let _ = crate::structs::UnlockCondition::export_all();
        let _ = crate::structs::LegacyBonus::export_all();
        let _ = crate::structs::LegendaryRecord::export_all();
        let _ = crate::structs::FinalStats::export_all();
        let _ = crate::structs::ChronicleEntry::export_all();
        let _ = crate::structs::GuildLegacy::export_all();
        let _ = crate::structs::LegacyMultipliers::export_all();
        let _ = crate::structs::SurvivingElements::export_all();
        let _ = crate::structs::NewGenerationPackage::export_all();
        let _ = crate::structs::GenerationTransition::export_all();
        let _ = crate::structs::GuildState::export_all();
    }
}
