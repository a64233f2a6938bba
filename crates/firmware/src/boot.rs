//! Power-on bring-up sequence for the Aria board.
//!
//! Bring-up order (MUST be respected — order matters for correctness):
//!   1. Program PLL divisors for the 384 MHz target
//!   2. Engage the clock-source switch (arm + confirm, atomic)
//!   3. Spin until the source readback reports PLL1
//!   4. Spin until the PLL reports lock
//!   5. Configure LEDs (outputs, off), switches (inputs), volume pins
//!      (outputs, low)
//!   6. Configure the regulator enable as a digital output, driven high
//!   7. Spin for the regulator settling time
//!   8. Zero the switch debounce counters
//!
//! Steps 3-4 are a two-phase handshake: source selection and PLL lock are
//! independent hardware events that can complete out of order, so both are
//! polled, in that order, with no timeout. On working silicon the sequence
//! completes in bounded time; a flag that never asserts is a fatal
//! hardware fault, and an unbootable device that visibly hangs is the
//! correct outcome — there is no software fallback for absent clock
//! hardware.
//!
//! The routine is single-shot: it runs once after reset and must not be
//! invoked again without a full hardware reset. Nothing that depends on
//! the system clock or the configured pins may execute until it returns.

use aria_platform::clock::{ClockSource, SYS_PLL, TARGET_CORE_HZ};
use aria_platform::{BoardPin, BringUpHal, DebounceCounters, PinState};

/// Ordered list of bring-up steps for documentation and testing.
///
/// The ordering of these strings encodes the required hardware sequence.
/// Tests assert that every clock step precedes every pin step and that
/// the regulator settle wait comes after the regulator is enabled.
pub const BRING_UP_STEPS: &[&str] = &[
    "1. PLL: program divisors (64 MHz HSI -> 384 MHz core) before any switch",
    "2. Clock switch: arm + confirm back-to-back, no intervening operation",
    "3. Poll: source readback == PLL1 (no timeout, hang on hardware fault)",
    "4. Poll: PLL lock flag (no timeout, hang on hardware fault)",
    "5. Pins: LEDs output+off, switches input, volume pins output+low",
    "6. Regulator: enable pin digital output, driven high",
    "7. Settle: fixed busy-wait for regulator stabilization",
    "8. Debounce: both switch counters zeroed",
];

/// Regulator settling busy-wait, in spin iterations.
///
/// The serial-flash VDD regulator needs 5 ms to stabilize after its enable
/// line rises. One spin iteration retires no faster than one core cycle,
/// so at the 384 MHz core clock 5 ms is 1 920 000 iterations — a floor,
/// not an exact duration, which is all the datasheet asks for.
pub const REGULATOR_SETTLE_ITERATIONS: u32 = TARGET_CORE_HZ / 1000 * 5;

/// Evidence that [`bring_up`] has returned.
///
/// The only value of this type is constructed by `bring_up` itself, and it
/// is neither `Clone` nor `Copy`: a driver whose init takes
/// `&DeviceReady` cannot be initialized before bring-up completes, by
/// construction rather than by convention. See
/// [`crate::peripherals::ClockDependent`].
#[derive(Debug)]
pub struct DeviceReady {
    _private: (),
}

/// Take the board from power-on reset to its operating state.
///
/// Runs the eight steps of [`BRING_UP_STEPS`] in order against `hal` and
/// returns only when the device is fully operational. On a hardware fault
/// (a readiness flag that never asserts) it never returns.
///
/// `debounce` is the switch debounce state the input subsystem will own
/// afterwards; bring-up establishes its well-defined zero initial value
/// before the periodic-timer interrupt can touch it.
pub fn bring_up<H: BringUpHal>(hal: &mut H, debounce: &mut DebounceCounters) -> DeviceReady {
    // 1-2. Divisors first; the switch protocol is one atomic call.
    hal.program_pll(&SYS_PLL);
    hal.engage_pll_switch();

    // 3-4. Two-phase handshake, no timeout (see module docs).
    while hal.selected_source() != ClockSource::Pll1 {}
    while !hal.pll_locked() {}

    // 5. Board I/O. Directions carry their initial level so external
    // circuitry never sees a driven pin at an unintended state.
    hal.configure_output(BoardPin::LedYellow, PinState::Low);
    hal.configure_output(BoardPin::LedRed, PinState::Low);
    hal.configure_output(BoardPin::LedGreen, PinState::Low);
    hal.configure_input(BoardPin::SwitchS1);
    hal.configure_input(BoardPin::SwitchS2);
    hal.configure_output(BoardPin::VolumeUpDown, PinState::Low);
    hal.configure_output(BoardPin::VolumeClock, PinState::Low);

    // 6-7. Regulator up, then hold for its settling time.
    hal.configure_output(BoardPin::RegulatorEnable, PinState::High);
    hal.spin(REGULATOR_SETTLE_ITERATIONS);

    // 8. The input subsystem inherits counters at a defined zero.
    debounce.reset();

    DeviceReady { _private: () }
}
