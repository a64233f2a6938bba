//! Per-switch debounce counter state.
//!
//! The counters filter mechanical contact bounce: the periodic-timer
//! interrupt increments a switch's counter while the contact reads closed
//! and clears it otherwise, treating the press as real once the counter
//! crosses its threshold. That interrupt logic lives outside this
//! workspace; the bring-up sequence only guarantees the counters start at
//! a well-defined zero before the timer can run.
//!
//! The state is explicit and passed by `&mut` — the counters used to be
//! ambient globals in earlier firmware generations, which made their
//! ownership by the input subsystem invisible.

use crate::board::Switch;

/// Debounce counters for the two board switches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceCounters {
    s1: u16,
    s2: u16,
}

impl DebounceCounters {
    /// Counters starting at zero.
    pub const fn new() -> Self {
        Self { s1: 0, s2: 0 }
    }

    /// Reset both counters to zero.
    pub fn reset(&mut self) {
        self.s1 = 0;
        self.s2 = 0;
    }

    /// Current count for `sw`.
    pub const fn get(&self, sw: Switch) -> u16 {
        match sw {
            Switch::S1 => self.s1,
            Switch::S2 => self.s2,
        }
    }

    /// Bump the counter for `sw`, saturating at `u16::MAX`.
    ///
    /// Called from the timer tick while the contact reads closed.
    pub fn increment(&mut self, sw: Switch) {
        let counter = match sw {
            Switch::S1 => &mut self.s1,
            Switch::S2 => &mut self.s2,
        };
        *counter = counter.saturating_add(1);
    }

    /// Clear the counter for `sw` (contact read open this tick).
    pub fn clear(&mut self, sw: Switch) {
        match sw {
            Switch::S1 => self.s1 = 0,
            Switch::S2 => self.s2 = 0,
        }
    }
}
