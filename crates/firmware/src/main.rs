//! Aria audio starter board - hardware entry point.
//!
//! Mirrors the board's reference demo: bring the device up, show the
//! fractional-vs-integer multiply contrast over the debug link, then hold
//! in the foreground loop watching switch S1. Codec, periodic timer, and
//! DMA drivers slot in after bring-up, gated on the `DeviceReady` token.

#![no_std]
#![no_main]

use aria_firmware::boot;
use aria_firmware::hal::Stm32Hal;
use aria_fractional::{widening_mul, Q15};
use aria_platform::clock::TARGET_CORE_HZ;
use aria_platform::{BoardPin, DebounceCounters, PinState};
use cortex_m_rt::entry;
use embassy_stm32::gpio::Pin;

use defmt_rtt as _;
use panic_probe as _;

#[entry]
fn main() -> ! {
    // Take the peripherals with the HAL's clock config left at its HSI
    // default — the bring-up sequence owns the PLL switch itself, that
    // being the point of this firmware.
    let p = embassy_stm32::init(embassy_stm32::Config::default());

    let mut hal = Stm32Hal::new(
        p.PE1.degrade(),  // LED yellow
        p.PB14.degrade(), // LED red
        p.PB0.degrade(),  // LED green
        p.PC13.degrade(), // switch S1
        p.PC14.degrade(), // switch S2
        p.PD12.degrade(), // volume up/down
        p.PD13.degrade(), // volume clock
        p.PD10.degrade(), // regulator enable
    );

    let mut debounce = DebounceCounters::new();
    let ready = boot::bring_up(&mut hal, &mut debounce);
    defmt::info!("bring-up complete: core at {=u32} Hz", TARGET_CORE_HZ);

    // The scaling contract the signal path relies on, demonstrated once at
    // boot: Q15 renormalizes, native 16-bit multiply wraps.
    let quarter = Q15::from_bits(0x1FFF);
    let half = Q15::from_bits(0x3FFF);
    defmt::info!(
        "q15 0.25 x 0.50 -> {=i16:#x} (expect 0xfff)",
        (quarter * half).to_bits()
    );
    defmt::info!(
        "int 7000 x -9000: wrapped {=i16}, widened {=i32}",
        7000i16.wrapping_mul(-9000),
        widening_mul(7000, -9000)
    );

    // Codec, periodic timer, and DMA init belong here, in that order,
    // each taking `&ready` (see aria_firmware::peripherals).
    let _ = &ready;

    // Foreground loop: green LED acknowledges S1 (pressed = low).
    loop {
        let pressed = hal.level(BoardPin::SwitchS1) == PinState::Low;
        hal.set_level(
            BoardPin::LedGreen,
            if pressed { PinState::High } else { PinState::Low },
        );
    }
}
