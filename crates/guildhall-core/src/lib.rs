//! Simulation clock and driver context for the guildhall simulation.
//!
//! This crate owns orchestration: the tick clock and the [`GuildSim`]
//! context that holds the registry, the engines, the per-generation state,
//! the legacy record, and the RNG behind a single `&mut self` surface.
//!
//! # Modules
//!
//! - [`clock`] -- Tick clock with year derivation and overflow-checked
//!   advancement.
//! - [`sim`] -- The [`GuildSim`] driver and its per-tick [`TickReport`].
//!
//! [`GuildSim`]: sim::GuildSim
//! [`TickReport`]: sim::TickReport

pub mod clock;
pub mod sim;

pub use clock::{ClockError, DEFAULT_TICKS_PER_YEAR, GuildClock};
pub use sim::{GuildSim, SimError, TickReport};
