//! Error types for the guildhall-engines crate.
//!
//! All operations that can fail return typed errors rather than panicking.
//! This module defines the error hierarchy used across the roster registry,
//! the relationship and retirement engines, the legacy layer, and the quest
//! coordinator.

use guildhall_types::{AdventurerId, AdventurerStatus, QuestId};

/// Errors that can occur during guild engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Adventurer with the given ID was not found on the roster.
    #[error("adventurer not found: {0}")]
    AdventurerNotFound(AdventurerId),

    /// Recruit with the given ID was not found in the hiring hall.
    #[error("recruit not found in hiring hall")]
    RecruitNotFound,

    /// Quest assignment with the given ID is not currently active.
    #[error("quest assignment not found: {0}")]
    QuestNotFound(QuestId),

    /// An adventurer was in the wrong status for the requested operation.
    #[error("adventurer {id} is {actual} but the operation requires {required}")]
    WrongStatus {
        /// The adventurer in question.
        id: AdventurerId,
        /// The status they are actually in.
        actual: AdventurerStatus,
        /// The status the operation requires.
        required: AdventurerStatus,
    },

    /// The roster is already at its configured capacity.
    #[error("roster is full: {size} of {capacity} slots occupied")]
    RosterFull {
        /// Current roster size.
        size: usize,
        /// Configured capacity.
        capacity: usize,
    },

    /// The treasury cannot cover a cost.
    #[error("insufficient gold: wanted {required} but treasury holds {available}")]
    InsufficientGold {
        /// The gold the operation requires.
        required: u64,
        /// The gold actually available.
        available: u64,
    },

    /// A quest assignment was started with no adventurers.
    #[error("quest party is empty")]
    EmptyParty,

    /// A retirement was requested for an adventurer who does not qualify.
    #[error("adventurer {0} is not eligible for retirement")]
    NotEligible(AdventurerId),

    /// An arithmetic overflow occurred during a reward or multiplier
    /// computation.
    #[error("arithmetic overflow in guild computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
