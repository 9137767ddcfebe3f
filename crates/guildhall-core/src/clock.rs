//! Simulation clock and time tracking.
//!
//! The clock is the single source of truth for all temporal state in the
//! simulation. One tick represents one simulated day; years are derived
//! from the tick counter and never stored independently.
//!
//! All temporal derivations use checked arithmetic (no silent overflow).

/// Default number of ticks (days) in one guild year.
pub const DEFAULT_TICKS_PER_YEAR: u64 = 365;

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,

    /// Invalid time configuration.
    #[error("invalid time configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Guild clock tracking the simulation's temporal state.
///
/// The clock advances once per tick. The year number is derived from the
/// tick counter; the driver uses [`GuildClock::is_year_boundary`] to age
/// the roster annually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildClock {
    /// Current tick number (0-indexed, incremented at the start of each tick).
    tick: u64,

    /// Number of ticks per guild year (from configuration).
    ticks_per_year: u64,
}

impl GuildClock {
    /// Create a clock starting at tick 0.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `ticks_per_year` is 0.
    pub fn new(ticks_per_year: u64) -> Result<Self, ClockError> {
        if ticks_per_year == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "ticks_per_year must be at least 1".to_owned(),
            });
        }
        Ok(Self {
            tick: 0,
            ticks_per_year,
        })
    }

    /// Create a clock from explicit parameters (useful for testing and
    /// state restoration).
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `ticks_per_year` is 0.
    pub fn from_parts(tick: u64, ticks_per_year: u64) -> Result<Self, ClockError> {
        if ticks_per_year == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "ticks_per_year must be at least 1".to_owned(),
            });
        }
        Ok(Self {
            tick,
            ticks_per_year,
        })
    }

    /// Advance the clock by one tick. Returns the new tick number.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::TickOverflow`] if the tick counter would exceed
    /// `u64::MAX`.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        self.tick = self.tick.checked_add(1).ok_or(ClockError::TickOverflow)?;
        Ok(self.tick)
    }

    /// Return the current tick number.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Return the configured number of ticks per year.
    pub const fn ticks_per_year(&self) -> u64 {
        self.ticks_per_year
    }

    /// Compute the current year from the tick counter (year 0 is the
    /// founding year).
    pub const fn year(&self) -> u64 {
        // Safe: ticks_per_year >= 1 is guaranteed by the constructors.
        match self.tick.checked_div(self.ticks_per_year) {
            Some(year) => year,
            None => 0,
        }
    }

    /// Compute the tick offset within the current year (0-based).
    pub const fn tick_within_year(&self) -> u64 {
        match self.tick.checked_rem(self.ticks_per_year) {
            Some(offset) => offset,
            None => 0,
        }
    }

    /// Whether the current tick closes out a guild year.
    pub const fn is_year_boundary(&self) -> bool {
        self.tick > 0 && self.tick_within_year() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_tick_zero() {
        let clock = GuildClock::new(DEFAULT_TICKS_PER_YEAR).unwrap();
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.year(), 0);
        assert!(!clock.is_year_boundary());
    }

    #[test]
    fn rejects_zero_ticks_per_year() {
        assert!(matches!(
            GuildClock::new(0),
            Err(ClockError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn advance_increments_tick() {
        let mut clock = GuildClock::new(10).unwrap();
        assert_eq!(clock.advance().unwrap(), 1);
        assert_eq!(clock.advance().unwrap(), 2);
        assert_eq!(clock.tick(), 2);
    }

    #[test]
    fn year_derives_from_tick() {
        let clock = GuildClock::from_parts(731, 365).unwrap();
        assert_eq!(clock.year(), 2);
        assert_eq!(clock.tick_within_year(), 1);
    }

    #[test]
    fn year_boundary_detection() {
        let mut clock = GuildClock::new(3).unwrap();
        let mut boundaries = Vec::new();
        for _ in 0..7 {
            clock.advance().unwrap();
            if clock.is_year_boundary() {
                boundaries.push(clock.tick());
            }
        }
        assert_eq!(boundaries, vec![3, 6]);
    }

    #[test]
    fn overflow_is_an_error() {
        let mut clock = GuildClock::from_parts(u64::MAX, 365).unwrap();
        assert!(matches!(clock.advance(), Err(ClockError::TickOverflow)));
    }
}
