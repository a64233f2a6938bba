//! Pin-level vocabulary shared by the board I/O capability and its backends.

/// Logic level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// Configured direction of a pin.
///
/// External circuitry only reads a meaningful level once the direction is
/// set, which is why [`crate::BoardIo::configure_output`] takes the initial
/// level rather than leaving a window between the direction write and the
/// first level write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Driven by the MCU.
    Output,
    /// Read by the MCU, never driven.
    Input,
}
