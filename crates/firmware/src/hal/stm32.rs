//! STM32H743 backend for the bring-up capability traits.
//!
//! Clock sequencing goes through the RCC registers directly rather than a
//! HAL clock-config layer: the bring-up contract is about the *order* of
//! the individual register operations, and that order must be visible
//! here, not buried in an init function.
//!
//! # Board pin map (Aria rev B)
//!
//! | Role             | Pin  | Notes                                   |
//! |------------------|------|-----------------------------------------|
//! | LED yellow       | PE1  | active high                             |
//! | LED red          | PB14 | active high                             |
//! | LED green        | PB0  | active high                             |
//! | Switch S1        | PC13 | pull-up, pressed = low                  |
//! | Switch S2        | PC14 | pull-up, pressed = low                  |
//! | Volume up/down   | PD12 | to volume-control chip U/D input        |
//! | Volume clock     | PD13 | to volume-control chip CLK input        |
//! | Regulator enable | PD10 | serial-flash VDD regulator, active high |

use aria_platform::clock::{ClockSequencer, ClockSource, PllConfig};
use aria_platform::{BoardIo, BoardPin, PinState, SpinDelay};
use embassy_stm32::gpio::{AnyPin, Flex, Pull, Speed};
use embassy_stm32::pac;

/// The eight board pins, in `BoardPin::index()` order.
pub struct Stm32Hal<'d> {
    pins: [Flex<'d, AnyPin>; 8],
}

impl<'d> Stm32Hal<'d> {
    /// Wrap the board pins. Pins stay in their reset state (analog, high-Z)
    /// until the bring-up sequence configures them.
    #[allow(clippy::too_many_arguments)] // one argument per schematic net
    pub fn new(
        led_yellow: AnyPin,
        led_red: AnyPin,
        led_green: AnyPin,
        switch_s1: AnyPin,
        switch_s2: AnyPin,
        volume_updown: AnyPin,
        volume_clock: AnyPin,
        regulator_enable: AnyPin,
    ) -> Self {
        Self {
            pins: [
                Flex::new(led_yellow),
                Flex::new(led_red),
                Flex::new(led_green),
                Flex::new(switch_s1),
                Flex::new(switch_s2),
                Flex::new(volume_updown),
                Flex::new(volume_clock),
                Flex::new(regulator_enable),
            ],
        }
    }
}

impl ClockSequencer for Stm32Hal<'_> {
    // Any divisor set accepted by PllConfig::validate fits the register
    // fields, so the register-width casts cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    fn program_pll(&mut self, cfg: &PllConfig) {
        // 384 MHz at VOS1 needs two flash wait states (RM0433 Table 17).
        // Raised before the switch so the fetch path is legal the moment
        // the new clock takes effect.
        pac::FLASH.acr().modify(|w| w.set_latency(2));

        // Divisors must be final before the switch is engaged; they are
        // never touched again.
        pac::RCC.pllckselr().modify(|w| {
            w.set_pllsrc(pac::rcc::vals::Pllsrc::HSI);
            w.set_divm(0, cfg.prediv as u8);
        });
        pac::RCC.plldivr(0).modify(|w| {
            w.set_divn((cfg.mul - 1) as u16);
            w.set_divp((cfg.divp - 1) as u8);
        });
        // Only the P output feeds the system clock mux.
        pac::RCC.pllcfgr().modify(|w| w.set_divpen(0, true));
    }

    fn engage_pll_switch(&mut self) {
        // Arm then confirm, back-to-back: power the PLL, then select it as
        // the system clock source. The pair is a protocol — issuing
        // anything between the writes leaves the switch unhonored.
        pac::RCC.cr().modify(|w| w.set_pllon(0, true));
        pac::RCC.cfgr().modify(|w| w.set_sw(pac::rcc::vals::Sw::PLL1_P));
    }

    fn selected_source(&self) -> ClockSource {
        match pac::RCC.cfgr().read().sws() {
            pac::rcc::vals::Sw::PLL1_P => ClockSource::Pll1,
            _ => ClockSource::Hsi,
        }
    }

    fn pll_locked(&self) -> bool {
        pac::RCC.cr().read().pllrdy(0)
    }
}

impl BoardIo for Stm32Hal<'_> {
    fn configure_output(&mut self, pin: BoardPin, initial: PinState) {
        let flex = &mut self.pins[pin.index()];
        // Level before direction: the pin drives `initial` from the first
        // cycle it leaves high-Z. set_as_output also clears the reset-state
        // analog muxing on this family.
        match initial {
            PinState::High => flex.set_high(),
            PinState::Low => flex.set_low(),
        }
        flex.set_as_output(Speed::Low);
    }

    fn configure_input(&mut self, pin: BoardPin) {
        // Board switches idle high through the external pull-up; the
        // internal pull-up only backs it up.
        self.pins[pin.index()].set_as_input(Pull::Up);
    }

    fn set_level(&mut self, pin: BoardPin, state: PinState) {
        let flex = &mut self.pins[pin.index()];
        match state {
            PinState::High => flex.set_high(),
            PinState::Low => flex.set_low(),
        }
    }

    fn level(&self, pin: BoardPin) -> PinState {
        PinState::from(self.pins[pin.index()].is_high())
    }
}

impl SpinDelay for Stm32Hal<'_> {
    fn spin(&mut self, iterations: u32) {
        // One architectural nop per iteration; the loop can only run
        // slower than the one-cycle-per-iteration floor the settle
        // constant assumes.
        for _ in 0..iterations {
            cortex_m::asm::nop();
        }
    }
}
