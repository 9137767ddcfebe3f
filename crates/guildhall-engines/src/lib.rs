//! Guild engines: roster, relationships, retirement, legacy, and quests.
//!
//! This crate contains the logic layer for the guild simulation -- everything
//! that operates on guild state without touching I/O. It sits between
//! `guildhall-types` (which defines the data structures) and the core crate
//! (which owns the clock, the RNG, and orchestration).
//!
//! # Modules
//!
//! - [`config`] -- Configurable parameters for all engines ([`EngineConfig`])
//! - [`coordinator`] -- Quest assignment and the reward pipeline ([`QuestCoordinator`])
//! - [`error`] -- Error types for all engine operations ([`EngineError`])
//! - [`legacy`] -- Legacy bonuses, heirlooms, and generation transitions ([`LegacyEngine`])
//! - [`relationship`] -- Relationship events, evolution, and squad synergy ([`RelationshipEngine`])
//! - [`retirement`] -- Retirement eligibility, roles, and descendants ([`RetirementEngine`])
//! - [`roster`] -- The adventurer registry and status machine ([`Registry`])

pub mod config;
pub mod coordinator;
pub mod error;
pub mod legacy;
pub mod relationship;
pub mod retirement;
pub mod roster;

// Re-export primary types at crate root for convenience.
pub use config::EngineConfig;
pub use coordinator::{QuestCoordinator, QuestOutcome};
pub use error::EngineError;
pub use legacy::{LegacyEngine, TransitionOutcome, bonus_catalog};
pub use relationship::RelationshipEngine;
pub use retirement::{RetirementEngine, RetirementParty, RoleSpec};
pub use roster::{RECRUIT_REFRESH_COST, RECRUITS_PER_REFRESH, Registry, recruit_cost};
