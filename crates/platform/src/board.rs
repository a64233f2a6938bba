//! Role-named board pins and the I/O capability of the bring-up hardware.
//!
//! Pins are addressed by board role rather than by port/pin coordinate so
//! the bring-up sequence reads as the board schematic does and the mock
//! backend can record exactly what was configured.

use crate::clock::ClockSequencer;
use crate::gpio::PinState;

/// Board LEDs. All three are driven off (low) at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// Yellow status LED.
    Yellow,
    /// Red status LED.
    Red,
    /// Green status LED.
    Green,
}

/// Board push-button switches. Inputs only, never driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Switch {
    /// Switch S1.
    S1,
    /// Switch S2.
    S2,
}

/// Every pin the bring-up sequence touches, by board role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardPin {
    /// Yellow status LED (output, off at startup).
    LedYellow,
    /// Red status LED (output, off at startup).
    LedRed,
    /// Green status LED (output, off at startup).
    LedGreen,
    /// Switch S1 (input).
    SwitchS1,
    /// Switch S2 (input).
    SwitchS2,
    /// Volume control up/down select line (output, low at startup).
    VolumeUpDown,
    /// Volume control clock line (output, low at startup).
    VolumeClock,
    /// Serial-flash VDD regulator enable (output, driven high at startup).
    RegulatorEnable,
}

impl BoardPin {
    /// All board pins, in bring-up configuration order.
    pub const ALL: [BoardPin; 8] = [
        BoardPin::LedYellow,
        BoardPin::LedRed,
        BoardPin::LedGreen,
        BoardPin::SwitchS1,
        BoardPin::SwitchS2,
        BoardPin::VolumeUpDown,
        BoardPin::VolumeClock,
        BoardPin::RegulatorEnable,
    ];

    /// Dense index for table-backed backends (mock state arrays).
    pub const fn index(self) -> usize {
        match self {
            BoardPin::LedYellow => 0,
            BoardPin::LedRed => 1,
            BoardPin::LedGreen => 2,
            BoardPin::SwitchS1 => 3,
            BoardPin::SwitchS2 => 4,
            BoardPin::VolumeUpDown => 5,
            BoardPin::VolumeClock => 6,
            BoardPin::RegulatorEnable => 7,
        }
    }
}

impl From<Led> for BoardPin {
    fn from(led: Led) -> Self {
        match led {
            Led::Yellow => BoardPin::LedYellow,
            Led::Red => BoardPin::LedRed,
            Led::Green => BoardPin::LedGreen,
        }
    }
}

impl From<Switch> for BoardPin {
    fn from(sw: Switch) -> Self {
        match sw {
            Switch::S1 => BoardPin::SwitchS1,
            Switch::S2 => BoardPin::SwitchS2,
        }
    }
}

/// Pin direction and level control.
///
/// Directions are configured together with the initial level so external
/// circuitry never observes a driven pin at an unintended level.
pub trait BoardIo {
    /// Make `pin` a digital output driving `initial`.
    ///
    /// Clears any analog-function override on the pin before switching the
    /// direction — some pins power up muxed to an analog block and would
    /// otherwise ignore the digital level.
    fn configure_output(&mut self, pin: BoardPin, initial: PinState);

    /// Make `pin` an input. The pin is never driven afterwards.
    fn configure_input(&mut self, pin: BoardPin);

    /// Drive an already-configured output to `state`.
    fn set_level(&mut self, pin: BoardPin, state: PinState);

    /// Read the current level of `pin`.
    fn level(&self, pin: BoardPin) -> PinState;
}

/// Busy-wait with a fixed iteration count, one inert cycle per iteration.
///
/// Used for the regulator settling time, which is a pure timing contract
/// with no observable completion flag.
pub trait SpinDelay {
    /// Spin for `iterations` inert cycles.
    fn spin(&mut self, iterations: u32);
}

/// Everything the bring-up controller needs from the hardware.
pub trait BringUpHal: ClockSequencer + BoardIo + SpinDelay {}

impl<T: ClockSequencer + BoardIo + SpinDelay> BringUpHal for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_indices_are_dense_and_ordered() {
        for (i, pin) in BoardPin::ALL.iter().enumerate() {
            assert_eq!(pin.index(), i);
        }
    }

    #[test]
    fn role_conversions_map_to_distinct_pins() {
        assert_eq!(BoardPin::from(Led::Green), BoardPin::LedGreen);
        assert_eq!(BoardPin::from(Switch::S2), BoardPin::SwitchS2);
        assert_ne!(BoardPin::from(Switch::S1), BoardPin::from(Switch::S2));
    }
}
