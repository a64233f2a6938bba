//! Mock bring-up hardware for host testing.
//!
//! [`MockHal`] implements every capability trait the bring-up controller
//! consumes. Readiness flags assert after a scripted number of polls, so
//! the controller's no-timeout polling loops terminate on the host without
//! changing production semantics; every mutating operation is recorded in
//! an ordered event log for sequence assertions.

use core::cell::Cell;

use crate::board::{BoardIo, BoardPin, SpinDelay};
use crate::clock::{ClockSequencer, ClockSource, PllConfig};
use crate::gpio::{Direction, PinState};

/// One mutating operation performed against the mock hardware.
///
/// Readiness polls are counted but not logged — a stalled-flag scenario
/// would otherwise flood the log before the flag asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalEvent {
    /// PLL divisors were programmed.
    PllProgrammed(PllConfig),
    /// The arm+confirm clock-switch pair was issued.
    PllSwitchEngaged,
    /// A pin became an output driving `initial`.
    OutputConfigured {
        /// The configured pin.
        pin: BoardPin,
        /// The level driven from the moment the direction switched.
        initial: PinState,
    },
    /// A pin became an input.
    InputConfigured {
        /// The configured pin.
        pin: BoardPin,
    },
    /// An output level was changed after configuration.
    LevelSet {
        /// The driven pin.
        pin: BoardPin,
        /// The new level.
        state: PinState,
    },
    /// A busy-wait of `iterations` inert cycles ran.
    Spun {
        /// Requested iteration count.
        iterations: u32,
    },
}

/// Scriptable mock of the bring-up hardware.
pub struct MockHal {
    events: heapless::Vec<HalEvent, 32>,
    pll: Option<PllConfig>,
    switch_engaged: bool,
    /// Polls of `selected_source` before it reports `Pll1`.
    source_ready_after: u32,
    /// Polls of `pll_locked` before it reports `true`.
    lock_ready_after: u32,
    source_polls: Cell<u32>,
    lock_polls: Cell<u32>,
    directions: [Option<Direction>; 8],
    levels: [Option<PinState>; 8],
    pin_config_before_clock: bool,
    drove_undirected_pin: bool,
    engaged_unprogrammed: bool,
    spin_total: u64,
}

impl MockHal {
    /// Hardware whose readiness flags are pre-asserted: the first poll of
    /// each flag already reads ready.
    pub fn ready() -> Self {
        Self::with_poll_delays(0, 0)
    }

    /// Hardware whose flags assert only after the given numbers of polls.
    ///
    /// Models the out-of-order completion of the two hardware events: the
    /// source readback and the PLL lock settle independently.
    pub fn with_poll_delays(source_ready_after: u32, lock_ready_after: u32) -> Self {
        Self {
            events: heapless::Vec::new(),
            pll: None,
            switch_engaged: false,
            source_ready_after,
            lock_ready_after,
            source_polls: Cell::new(0),
            lock_polls: Cell::new(0),
            directions: [None; 8],
            levels: [None; 8],
            pin_config_before_clock: false,
            drove_undirected_pin: false,
            engaged_unprogrammed: false,
            spin_total: 0,
        }
    }

    /// Ordered log of every mutating operation.
    pub fn events(&self) -> &[HalEvent] {
        &self.events
    }

    /// The divisors programmed into the PLL, if any.
    pub fn pll_config(&self) -> Option<PllConfig> {
        self.pll
    }

    /// Configured direction of `pin`, if it was configured at all.
    pub fn pin_direction(&self, pin: BoardPin) -> Option<Direction> {
        self.directions[pin.index()]
    }

    /// Driven (or injected) level of `pin`, if any.
    pub fn pin_level(&self, pin: BoardPin) -> Option<PinState> {
        self.levels[pin.index()]
    }

    /// How many times the source readback was polled.
    pub fn source_polls(&self) -> u32 {
        self.source_polls.get()
    }

    /// How many times the lock flag was polled.
    pub fn lock_polls(&self) -> u32 {
        self.lock_polls.get()
    }

    /// Sum of all busy-wait iteration counts.
    pub fn total_spin_iterations(&self) -> u64 {
        self.spin_total
    }

    /// True if any pin was configured before both readiness flags had been
    /// observed asserted — a violation of the clock-before-peripherals
    /// invariant.
    pub fn pin_config_before_clock(&self) -> bool {
        self.pin_config_before_clock
    }

    /// True if `set_level` was called on a pin not configured as an output.
    pub fn drove_undirected_pin(&self) -> bool {
        self.drove_undirected_pin
    }

    /// True if the switch was engaged with no divisors programmed.
    pub fn engaged_unprogrammed(&self) -> bool {
        self.engaged_unprogrammed
    }

    /// Inject an externally driven level on an input pin (a pressed or
    /// released switch).
    pub fn set_input_level(&mut self, pin: BoardPin, state: PinState) {
        self.levels[pin.index()] = Some(state);
    }

    /// Both flags have been observed asserted by the polling caller.
    fn clock_settled(&self) -> bool {
        self.switch_engaged
            && self.source_polls.get() > self.source_ready_after
            && self.lock_polls.get() > self.lock_ready_after
    }

    fn note_pin_touch(&mut self) {
        if !self.clock_settled() {
            self.pin_config_before_clock = true;
        }
    }
}

impl ClockSequencer for MockHal {
    fn program_pll(&mut self, cfg: &PllConfig) {
        self.pll = Some(*cfg);
        let _ = self.events.push(HalEvent::PllProgrammed(*cfg));
    }

    fn engage_pll_switch(&mut self) {
        if self.pll.is_none() {
            self.engaged_unprogrammed = true;
        }
        self.switch_engaged = true;
        let _ = self.events.push(HalEvent::PllSwitchEngaged);
    }

    fn selected_source(&self) -> ClockSource {
        let polls = self.source_polls.get() + 1;
        self.source_polls.set(polls);
        if self.switch_engaged && polls > self.source_ready_after {
            ClockSource::Pll1
        } else {
            ClockSource::Hsi
        }
    }

    fn pll_locked(&self) -> bool {
        let polls = self.lock_polls.get() + 1;
        self.lock_polls.set(polls);
        self.switch_engaged && polls > self.lock_ready_after
    }
}

impl BoardIo for MockHal {
    fn configure_output(&mut self, pin: BoardPin, initial: PinState) {
        self.note_pin_touch();
        self.directions[pin.index()] = Some(Direction::Output);
        self.levels[pin.index()] = Some(initial);
        let _ = self.events.push(HalEvent::OutputConfigured { pin, initial });
    }

    fn configure_input(&mut self, pin: BoardPin) {
        self.note_pin_touch();
        self.directions[pin.index()] = Some(Direction::Input);
        self.levels[pin.index()] = None;
        let _ = self.events.push(HalEvent::InputConfigured { pin });
    }

    fn set_level(&mut self, pin: BoardPin, state: PinState) {
        if self.directions[pin.index()] != Some(Direction::Output) {
            self.drove_undirected_pin = true;
        }
        self.levels[pin.index()] = Some(state);
        let _ = self.events.push(HalEvent::LevelSet { pin, state });
    }

    fn level(&self, pin: BoardPin) -> PinState {
        self.levels[pin.index()].unwrap_or(PinState::Low)
    }
}

impl SpinDelay for MockHal {
    fn spin(&mut self, iterations: u32) {
        self.spin_total += u64::from(iterations);
        let _ = self.events.push(HalEvent::Spun { iterations });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SYS_PLL;

    #[test]
    fn source_stays_on_hsi_until_engaged() {
        let hal = MockHal::ready();
        assert_eq!(hal.selected_source(), ClockSource::Hsi);
        assert!(!hal.pll_locked());
    }

    #[test]
    fn flags_assert_after_scripted_polls() {
        let mut hal = MockHal::with_poll_delays(2, 0);
        hal.program_pll(&SYS_PLL);
        hal.engage_pll_switch();
        assert_eq!(hal.selected_source(), ClockSource::Hsi);
        assert_eq!(hal.selected_source(), ClockSource::Hsi);
        assert_eq!(hal.selected_source(), ClockSource::Pll1);
        assert!(hal.pll_locked());
    }

    #[test]
    fn premature_pin_config_is_flagged() {
        let mut hal = MockHal::ready();
        hal.configure_output(BoardPin::LedRed, PinState::Low);
        assert!(hal.pin_config_before_clock());
    }

    #[test]
    fn driving_an_input_is_flagged() {
        let mut hal = MockHal::ready();
        hal.configure_input(BoardPin::SwitchS1);
        hal.set_level(BoardPin::SwitchS1, PinState::High);
        assert!(hal.drove_undirected_pin());
    }

    #[test]
    fn injected_input_levels_are_readable() {
        let mut hal = MockHal::ready();
        hal.configure_input(BoardPin::SwitchS1);
        hal.set_input_level(BoardPin::SwitchS1, PinState::High);
        assert_eq!(hal.level(BoardPin::SwitchS1), PinState::High);
    }
}
